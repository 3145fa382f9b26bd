use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_TEMPLATE: &str = "codeocean.template.yaml";

#[derive(Parser, Debug)]
#[command(name = "cfn-docgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate system requirements document from CloudFormation template")]
#[command(
    long_about = "Parses a CloudFormation template and writes a Markdown System Requirements \
                  document with a grouped parameter table and a resource table, each entry \
                  linked to its line in the template."
)]
pub struct Cli {
    /// Path to the CloudFormation template file
    #[arg(value_name = "TEMPLATE_PATH", default_value = DEFAULT_TEMPLATE)]
    pub template_path: PathBuf,

    /// Output file path (default: System Requirements.md in template directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
