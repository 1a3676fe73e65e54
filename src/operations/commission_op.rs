use crate::app_config::ApplicationConfig;
use crate::camera_config::CameraType;
use crate::config_loader::{validate_master_config, MasterConfig};
use crate::operations::config_builder::build_configuration;
use crate::operations::config_submit_op::{ConfigSubmitter, SubmissionOutcome};
use crate::operations::input_collector;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Values supplied on the command line that replace the matching prompt.
#[derive(Debug, Clone, Default)]
pub struct CommissionInputs {
    pub camera_type: Option<CameraType>,
    pub serials_path: Option<String>,
}

impl CommissionInputs {
    pub fn from_args(args: &ArgMatches) -> Result<Self> {
        let camera_type = args
            .get_one::<String>("camera-type")
            .map(|s| s.parse::<CameraType>())
            .transpose()
            .context("Invalid --camera-type")?;
        let serials_path = args.get_one::<String>("serials").map(|s| s.trim().to_string());
        Ok(CommissionInputs { camera_type, serials_path })
    }
}

/// Collects inputs, builds the batch and submits it once.
pub async fn run_commission<R: BufRead, W: Write>(
    settings: &ApplicationConfig,
    inputs: &CommissionInputs,
    input: &mut R,
    output: &mut W,
) -> Result<SubmissionOutcome> {
    let op_start_time = Instant::now();

    let camera_type = match inputs.camera_type {
        Some(camera_type) => camera_type,
        None => input_collector::select_camera_type(input, output)
            .context("Failed to read camera type")?,
    };
    let serials_path = match &inputs.serials_path {
        Some(path) => path.clone(),
        None => input_collector::prompt_serials_path(input, output)
            .context("Failed to read serial number file path")?,
    };

    let serials = input_collector::load_serial_map(&serials_path)?;
    info!("📄 Loaded {} camera serial(s) from '{}'", serials.len(), serials_path);

    let batch = build_configuration(camera_type, &serials, settings);
    if batch.is_empty() {
        warn!("⚠️ Submitting an empty camera configuration.");
    }

    let submitter = ConfigSubmitter::new(settings);
    debug!("Submitting to {}", submitter.api_url());
    let outcome = submitter.submit(&batch).await?;

    writeln!(output, "{}", outcome)?;
    info!("🏁 Commissioning finished in {:?} (success: {})", op_start_time.elapsed(), outcome.is_success());
    Ok(outcome)
}

pub async fn handle_commission_cli(master_config: &MasterConfig, args: &ArgMatches) -> Result<SubmissionOutcome> {
    let inputs = CommissionInputs::from_args(args)?;
    let mut effective = master_config.clone();
    if let Some(api_url) = args.get_one::<String>("api-url") {
        debug!("Endpoint overridden from CLI: {}", api_url);
        effective.app_settings.api_url = api_url.clone();
        validate_master_config(&effective).context("Invalid --api-url")?;
    }
    let settings = effective.app_settings;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_commission(&settings, &inputs, &mut input, &mut output).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::build_cli;

    #[test]
    fn flags_replace_prompts() {
        let args = build_cli()
            .try_get_matches_from(["camcommission", "-t", "TYPE_B", "-s", "  serial_numbers.json "])
            .unwrap();
        let inputs = CommissionInputs::from_args(&args).unwrap();
        assert_eq!(inputs.camera_type, Some(CameraType::TypeB));
        assert_eq!(inputs.serials_path.as_deref(), Some("serial_numbers.json"));
    }

    #[test]
    fn no_flags_leaves_everything_to_prompts() {
        let args = build_cli().try_get_matches_from(["camcommission"]).unwrap();
        let inputs = CommissionInputs::from_args(&args).unwrap();
        assert!(inputs.camera_type.is_none());
        assert!(inputs.serials_path.is_none());
    }

    #[tokio::test]
    async fn bad_api_url_override_fails_before_prompting() {
        for bad_url in ["ftp://x", "not a url"] {
            let args = build_cli()
                .try_get_matches_from(["camcommission", "--api-url", bad_url])
                .unwrap();
            let err = handle_commission_cli(&MasterConfig::default(), &args).await.unwrap_err();
            assert!(format!("{:#}", err).contains("Invalid --api-url"), "{}: {:#}", bad_url, err);
        }
    }
}
