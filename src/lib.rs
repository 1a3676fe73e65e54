pub mod app_config;
pub mod camera_config;
pub mod cli;
pub mod common;
pub mod config_loader;
pub mod errors;
pub mod operations;

pub use camera_config::{CameraType, ConfigurationBatch, ConfigurationRecord, SerialMap};
pub use errors::AppError;
pub use operations::config_builder::build_configuration;
pub use operations::config_submit_op::{ConfigSubmitter, SubmissionOutcome};
pub use operations::input_collector::{load_serial_map, parse_camera_choice, select_camera_type};
