use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "suprema-resolve")]
#[command(about = "Resolve Suprema device serial numbers and MAC addresses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Resolve one serial number or MAC address.
    Resolve(ResolveArgs),
    /// Cross-check a MAC address against a serial number.
    Check(CheckArgs),
    /// Show the per-model MAC and Device-ID reference tables.
    Ranges(RangesArgs),
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// A 9-digit serial number or a MAC address.
    pub input: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional catalog TOML file overriding the builtin table.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// MAC address as printed on the device label.
    pub mac: String,
    /// Serial number as printed on the device label.
    pub serial: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional catalog TOML file overriding the builtin table.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RangesArgs {
    /// Restrict the tables to one hardware generation.
    #[arg(long)]
    pub generation: Option<u8>,
    /// Resolve this input and mark the matching rows.
    #[arg(long)]
    pub highlight: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional catalog TOML file overriding the builtin table.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
