use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(author, version, about = "Phishing risk scorer for text messages", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "phishguard.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Timeout for URL reachability probes in milliseconds
    #[arg(long)]
    pub probe_timeout_ms: Option<u64>,

    /// Never probe URLs over the network (every URL counts as unreachable)
    #[arg(long)]
    pub offline: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
