//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use calc_core::GstMode;

#[derive(Parser, Debug)]
#[command(name = "calc", version, about = "GST and percentage calculators")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a calc.toml config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Currency symbol for amounts (overrides config)")]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add GST to an amount, or extract it from an amount that includes it
    Gst {
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "preset",
            required_unless_present = "preset"
        )]
        rate: Option<String>,

        #[arg(long, help = "Use one of the configured GST slabs")]
        preset: Option<f64>,

        #[arg(long, help = "exclusive (add GST) or inclusive (extract GST)")]
        mode: Option<GstMode>,
    },

    /// Work out a percentage of a value
    Percent {
        #[arg(long, allow_hyphen_values = true)]
        base: String,

        #[arg(long, allow_hyphen_values = true)]
        percentage: String,
    },

    /// List the configured GST presets
    Presets,

    /// Read field edits from stdin and print the updated result after each
    Session {
        #[arg(value_enum)]
        calculator: SessionKind,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SessionKind {
    Gst,
    Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gst_with_negative_amount() {
        let cli = Cli::try_parse_from(["calc", "gst", "--amount", "-5", "--rate", "18"]).unwrap();
        match cli.command {
            Commands::Gst { amount, rate, .. } => {
                assert_eq!(amount, "-5");
                assert_eq!(rate.as_deref(), Some("18"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_mode_and_globals() {
        let cli = Cli::try_parse_from([
            "calc", "--json", "gst", "--amount", "118", "--preset", "18", "--mode", "inclusive",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Gst {
                mode: Some(GstMode::Inclusive),
                preset: Some(p),
                ..
            } if p == 18.0
        ));
    }

    #[test]
    fn test_rate_or_preset_required() {
        assert!(Cli::try_parse_from(["calc", "gst", "--amount", "1"]).is_err());
        assert!(Cli::try_parse_from([
            "calc", "gst", "--amount", "1", "--rate", "5", "--preset", "5"
        ])
        .is_err());
    }
}
