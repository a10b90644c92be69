use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cardia` binary.
#[derive(Debug, Parser)]
#[command(name = "cardia", version, about = "Cardia - heart-disease risk prediction client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["cardia", "--format", "json", "--verbose", "status"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cardia", "baseline", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Baseline));
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["cardia", "features"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["cardia", "--format", "xml", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn predict_accepts_partial_fields() {
        let cli = Cli::try_parse_from(["cardia", "predict", "--age", "54", "--oldpeak", "1.5"])
            .expect("cli should parse");

        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.age.as_deref(), Some("54"));
        assert_eq!(args.oldpeak.as_deref(), Some("1.5"));
        assert!(args.sex.is_none());
        assert!(args.st_slope.is_none());
    }

    #[test]
    fn predict_fields_stay_free_text() {
        let cli = Cli::try_parse_from(["cardia", "predict", "--age", "forty-five"])
            .expect("non-numeric values are accepted as-is");

        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.age.as_deref(), Some("forty-five"));
    }
}
