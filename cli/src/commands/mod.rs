//! CLI command implementations

pub mod fee_config;
pub mod list_plans;
pub mod quote;

use clap::ValueEnum;

/// Output format for command results
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

pub use fee_config::execute as execute_fee_config;
pub use list_plans::execute as execute_list_plans;
pub use quote::execute as execute_quote;
