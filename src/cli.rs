use clap::Parser;
use std::path::PathBuf;

/// Numeric keypad demo form in the terminal.
#[derive(Parser, Debug)]
#[command(name = "numpad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Render one 80x24 frame with the first field open and print it as JSON
    #[arg(long)]
    pub snapshot: bool,

    /// YAML or JSON form config (`.json` selects JSON)
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_default_form() {
        let cli = Cli::parse_from(["numpad"]);
        assert!(!cli.snapshot);
        assert!(cli.config.is_none());
    }

    #[test]
    fn snapshot_with_config() {
        let cli = Cli::parse_from(["numpad", "--snapshot", "demos/form.yaml"]);
        assert!(cli.snapshot);
        assert_eq!(cli.config, Some(PathBuf::from("demos/form.yaml")));
    }

    #[test]
    fn double_dash_allows_dash_prefixed_paths() {
        let cli = Cli::parse_from(["numpad", "--snapshot", "--", "-form.yaml"]);
        assert!(cli.snapshot);
        assert_eq!(cli.config, Some(PathBuf::from("-form.yaml")));
    }

    #[test]
    fn repeated_snapshot_flag_is_rejected() {
        let result = Cli::try_parse_from(["numpad", "--snapshot", "--snapshot"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_options_and_extra_paths_are_rejected() {
        assert!(Cli::try_parse_from(["numpad", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["numpad", "a.yaml", "b.yaml"]).is_err());
    }
}
