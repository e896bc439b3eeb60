use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What the run prints to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Grouped, truncated text report
    #[default]
    Text,
    /// Every decoded record as one JSON document
    Json,
}

/// Top-level CLI parser for the `docprobe` binary.
#[derive(Debug, Parser)]
#[command(
    name = "docprobe",
    version,
    about = "Read the study-app Firestore collections and print a grouped summary"
)]
pub struct Cli {
    /// KEY=VALUE file holding the service-account credential [default: .env.local]
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Firestore project to read [default: exam-affiliate-ads]
    #[arg(long, value_name = "ID")]
    pub project_id: Option<String>,

    /// Output format: text, json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_plain_text_run() {
        let cli = Cli::try_parse_from(["docprobe"]).expect("cli should parse");

        assert_eq!(cli.env_file, None);
        assert_eq!(cli.project_id, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from([
            "docprobe",
            "--env-file",
            "secrets/.env.prod",
            "--project-id",
            "staging-project",
            "--format",
            "json",
            "-v",
        ])
        .expect("cli should parse");

        assert_eq!(cli.env_file, Some(PathBuf::from("secrets/.env.prod")));
        assert_eq!(cli.project_id.as_deref(), Some("staging-project"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["docprobe", "-q", "-v"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["docprobe", "--format", "table"]).is_err());
    }
}
