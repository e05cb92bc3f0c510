use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Probe a web server for hidden directories", long_about = None)]
pub struct Cli {
    /// Base URL to scan; http:// is assumed when no scheme is given
    pub url: String,

    /// Path to a custom wordlist file (one entry per line)
    #[arg(short = 'w', long)]
    pub wordlist: Option<String>,

    /// Number of concurrent workers (default: 10)
    #[arg(short = 't', long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    pub threads: u16,

    /// Delay between requests in seconds, applied per worker (default: 1.0)
    #[arg(short = 'd', long, default_value_t = 1.0)]
    pub delay: f64,

    /// Output file for discovered directories
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Request timeout in seconds (default: 10)
    #[arg(long, default_value_t = 10_u64)]
    pub timeout: u64,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
