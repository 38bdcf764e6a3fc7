//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::logging::{LogConfig, LogTarget};

#[derive(Parser, Debug)]
#[command(
    name = "mbview",
    version,
    about = "Render MusicBrainz edit, report and search pages",
    long_about = "Render a resolved MusicBrainz page document (JSON) through its view.\n\n\
                  Opens a scrollable terminal preview by default, or prints HTML with --html."
)]
pub struct Cli {
    /// Page document to render
    #[arg(value_name = "PAGE_JSON")]
    pub page: PathBuf,

    /// Print the rendered HTML to stdout instead of previewing
    #[arg(long)]
    pub html: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append logs to a file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup implied by the arguments
    pub fn log_config(&self) -> LogConfig {
        let target = match (&self.log_file, self.html) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        };
        LogConfig::from_verbosity(self.verbose).with_target(target)
    }
}
