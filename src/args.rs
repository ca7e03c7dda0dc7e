use clap::Parser;

/// Arguments given to remid on startup
#[derive(Parser, Debug, Default)]
pub struct Args {
    /// Decode a Remote-ID hex string to stdout and exit
    #[arg(long, value_name = "hex")]
    pub decode: Option<String>,
    /// Show version information and exit
    #[arg(long)]
    pub version: bool,
    /// Start with debug logging enabled
    #[arg(long)]
    pub debug: bool,
}
