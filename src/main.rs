use camcommission::cli;
use camcommission::common::logging_setup;
use camcommission::config_loader;
use camcommission::operations::commission_op;
use log::{info, error, debug};
use std::time::Instant;

#[tokio::main]
async fn main() {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());

    let master_config = match config_loader::resolve_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), &matches);
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, &matches);
            error!("❌ Failed to load configuration: {:#}", e);
            println!("Error: {:#}", e);
            return;
        }
    };
    debug!("🚀 Commissioning against {} with gain {}", master_config.app_settings.api_url, master_config.app_settings.gain);

    // Failures end the run with a message, never a non-zero exit status.
    match commission_op::handle_commission_cli(&master_config, &matches).await {
        Ok(outcome) => {
            info!("🏁 Finished in {:?} (success: {})", main_start_time.elapsed(), outcome.is_success());
        }
        Err(e) => {
            error!("❌ Commissioning failed after {:?}: {:#}", main_start_time.elapsed(), e);
            println!("Error: {:#}", e);
        }
    }
}
