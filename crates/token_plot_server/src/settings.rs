use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use token_plot_core::TokenizerKind;

use crate::logging::LogDestination;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub tokenizer: TokenizerKind,
    /// When set, every request draws its random values from a fresh RNG
    /// seeded with this value.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            tokenizer: TokenizerKind::Word,
            seed: None,
            log_level: LevelFilter::Info,
            log_destination: LogDestination::Terminal,
            log_file: PathBuf::from("./token_plot.log"),
        }
    }
}

/// Serve a sentence tokenizer with a 3D token plot and a mean-length prediction.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Tokenizer rule set: `word` or `whitespace`
    #[arg(short, long, default_value_t = TokenizerKind::Word)]
    pub tokenizer: TokenizerKind,

    /// Seed for reproducible plot spread
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    /// Where log output goes: terminal, file or both
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log_destination: LogDestination,

    /// Log file used by the `file` and `both` destinations
    #[arg(long, default_value = "./token_plot.log")]
    pub log_file: PathBuf,
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    plot_logging::parse_level(value).ok_or_else(|| format!("unknown log level {value:?}"))
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            tokenizer: args.tokenizer,
            seed: args.seed,
            log_level: args.log_level,
            log_destination: args.log_destination,
            log_file: args.log_file,
        }
    }
}
