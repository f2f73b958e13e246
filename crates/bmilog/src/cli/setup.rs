use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "bmilog",
    bin_name = "bmilog",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Record your BMI from the terminal and watch the trend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the records and bmilog.toml
    #[arg(long, global = true, env = "BMILOG_DATA", value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Compute BMI from weight (kg) and height (cm) and record it
    #[command(alias = "a")]
    Add {
        /// Weight in kilograms
        #[arg(allow_hyphen_values = true)]
        weight: String,

        /// Height in centimetres
        #[arg(allow_hyphen_values = true)]
        height: String,
    },

    /// Show recorded measurements, newest first
    #[command(alias = "ls")]
    History {
        /// Also draw the trend chart
        #[arg(short, long)]
        chart: bool,
    },

    /// Draw BMI over time, oldest first
    Chart,

    /// Delete records by id
    #[command(alias = "rm")]
    Delete {
        /// Record ids as shown by `bmilog history`
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete every record
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (language, decimals, min-weight, max-weight, min-height, max-height)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["bmilog"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn add_takes_raw_strings() {
        let cli = Cli::try_parse_from(["bmilog", "add", "70", "175"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                weight: "70".into(),
                height: "175".into()
            })
        );

        // Empty and negative values reach validation instead of being rejected by clap
        let cli = Cli::try_parse_from(["bmilog", "a", "", "-175"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                weight: "".into(),
                height: "-175".into()
            })
        );
    }

    #[test]
    fn delete_requires_ids() {
        assert!(Cli::try_parse_from(["bmilog", "delete"]).is_err());
        let cli = Cli::try_parse_from(["bmilog", "rm", "1", "2"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Delete {
                ids: vec!["1".into(), "2".into()]
            })
        );
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["bmilog", "ls", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["bmilog", "-v", "-q"]).is_err());
    }
}
