pub mod input_collector;
pub mod config_builder;
pub mod config_submit_op;
pub mod commission_op;
