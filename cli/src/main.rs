//! SmartFlo CLI - pricing and fee quoting for the SmartFlo platform
//!
//! Quotes milestone transaction fees, echoes the static fee configuration,
//! and lists subscription pricing plans. JSON output uses the platform's
//! standard success/error envelope.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use smartflo_cli::commands::{self, OutputFormat};
use smartflo_cli::config::SmartFloCliConfig;

#[derive(Parser, Debug)]
#[command(
    name = "smartflo-cli",
    version,
    about = "Pricing and fee quoting for the SmartFlo platform",
    author = "SmartFlo Team"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Quote the transaction fee and total charge for a contract amount
    Quote {
        /// Contract amount in minor currency units (cents)
        #[arg(long)]
        amount: i64,

        /// Payment method tag (usdc, stripe_ach, stripe_card)
        #[arg(long)]
        method: String,
    },

    /// Print the static transaction fee configuration table
    FeeConfig,

    /// List subscription pricing plans
    ListPlans,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = SmartFloCliConfig::new();

    // Use configuration with CLI overrides
    let default_output_format = parse_output_format(&config.default_output_format)?;
    let output_format = cli.output.as_ref().unwrap_or(&default_output_format);

    let result = execute_command(&cli, output_format);

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            match output_format {
                OutputFormat::Human => eprintln!("Error: {e}"),
                OutputFormat::Json => {
                    let json_output = serde_json::json!({
                        "success": false,
                        "error": e.to_string()
                    });
                    println!("{}", serde_json::to_string_pretty(&json_output)?);
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Parse output format from string
fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow::anyhow!("Invalid output format: {}", format_str)),
    }
}

fn execute_command(cli: &Cli, output_format: &OutputFormat) -> Result<String> {
    match &cli.command {
        Commands::Quote { amount, method } => {
            commands::execute_quote(*amount, method, output_format)
        }
        Commands::FeeConfig => commands::execute_fee_config(output_format),
        Commands::ListPlans => commands::execute_list_plans(output_format),
    }
}
