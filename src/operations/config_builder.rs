use crate::app_config::ApplicationConfig;
use crate::camera_config::{CameraType, ConfigurationBatch, ConfigurationRecord, SerialMap};
use log::debug;

/// Builds one record per camera, all sharing `camera_type` and the configured gain.
pub fn build_configuration(
    camera_type: CameraType,
    serials: &SerialMap,
    settings: &ApplicationConfig,
) -> ConfigurationBatch {
    let batch: ConfigurationBatch = serials
        .iter()
        .map(|(camera_id, serial)| ConfigurationRecord {
            id: camera_id.clone(),
            serial: serial.clone(),
            camera_type,
            gain: settings.gain,
        })
        .collect();
    debug!("Built {} {} record(s) with gain {}", batch.len(), camera_type, settings.gain);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn serials(pairs: &[(&str, &str)]) -> SerialMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn one_record_per_camera() {
        let serials = serials(&[("A", "X1"), ("B", "Y2"), ("C", "Z3")]);
        let settings = ApplicationConfig::default();
        let batch = build_configuration(CameraType::TypeB, &serials, &settings);

        assert_eq!(batch.len(), serials.len());
        let ids: BTreeSet<&str> = batch.iter().map(|r| r.id.as_str()).collect();
        let keys: BTreeSet<&str> = serials.keys().map(String::as_str).collect();
        assert_eq!(ids, keys);
        for record in &batch {
            assert_eq!(record.serial, serials[&record.id]);
            assert_eq!(record.camera_type, CameraType::TypeB);
            assert_eq!(record.gain, 20.0);
        }
    }

    #[test]
    fn uses_configured_gain() {
        let settings = ApplicationConfig { gain: 7.5, ..ApplicationConfig::default() };
        let batch = build_configuration(CameraType::TypeA, &serials(&[("CAM1", "SN-1001")]), &settings);
        assert_eq!(batch[0].gain, 7.5);
    }

    #[test]
    fn empty_map_gives_empty_batch() {
        let batch = build_configuration(CameraType::TypeA, &SerialMap::new(), &ApplicationConfig::default());
        assert!(batch.is_empty());
    }
}
