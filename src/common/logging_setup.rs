use env_logger::Builder;
use log::LevelFilter;
use crate::config_loader::MasterConfig;
use std::io::Write;

/// Resolves the log level: CLI `--debug`, then config, then "info".
pub fn resolve_level(config: Option<&MasterConfig>, debug_flag: bool) -> LevelFilter {
    let log_level_str = if debug_flag {
        "debug".to_string()
    } else {
        config
            .and_then(|c| c.app_settings.log_level.clone())
            .unwrap_or_else(|| "info".to_string())
    };

    match log_level_str.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let mut builder = Builder::new();
    builder.filter_level(resolve_level(config, cli_matches.get_flag("debug")));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] - {}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::ApplicationConfig;

    fn with_level(level: Option<&str>) -> MasterConfig {
        MasterConfig {
            app_settings: ApplicationConfig {
                log_level: level.map(str::to_string),
                ..ApplicationConfig::default()
            },
        }
    }

    #[test]
    fn debug_flag_wins() {
        assert_eq!(resolve_level(Some(&with_level(Some("error"))), true), LevelFilter::Debug);
    }

    #[test]
    fn config_then_default() {
        assert_eq!(resolve_level(Some(&with_level(Some("WARN"))), false), LevelFilter::Warn);
        assert_eq!(resolve_level(Some(&with_level(None)), false), LevelFilter::Info);
        assert_eq!(resolve_level(None, false), LevelFilter::Info);
        assert_eq!(resolve_level(Some(&with_level(Some("loud"))), false), LevelFilter::Info);
    }
}
