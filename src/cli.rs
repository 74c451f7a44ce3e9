use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "passgen")]
#[command(about = "Generate random passwords and save them to a text file")]
pub struct Cli {
    /// Length of each password (at least 12). Prompted for when omitted
    #[arg(short, long)]
    pub length: Option<String>,

    /// Number of passwords to generate. Prompted for when omitted
    #[arg(short, long)]
    pub count: Option<String>,

    /// File to save to. Defaults to PASS_<timestamp>.txt in your documents folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More logging on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from(["passgen", "-l", "16", "-c", "3", "-o", "out.txt", "-vv"]);
        assert_eq!(cli.length.as_deref(), Some("16"));
        assert_eq!(cli.count.as_deref(), Some("3"));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["passgen"]);
        assert!(cli.length.is_none());
        assert!(cli.count.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn raw_values_are_kept_for_validation() {
        let cli = Cli::parse_from(["passgen", "--length", "abc"]);
        assert_eq!(cli.length.as_deref(), Some("abc"));
    }
}
