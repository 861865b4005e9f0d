//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::ClassId;
use crate::pass::LENGTH_LIMIT;
use crate::settings::{DataSource, DEFAULT_DATA_FILE, DEFAULT_LENGTH, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "classpass",
    version,
    about = "Generate passwords from selectable character classes",
    long_about = "Generate passwords from selectable character classes.\n\n\
        Run without arguments to open the interactive menu."
)]
pub struct Args {
    /// Characters per password
    #[arg(short, long, value_name = "N", value_parser = password_length)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1, value_parser = positive)]
    pub number: usize,

    /// Character classes to draw from (default: all)
    #[arg(short = 'C', long, value_enum, value_delimiter = ',', value_name = "CLASS")]
    pub classes: Vec<ClassId>,

    /// Leave out special characters
    #[arg(long)]
    pub no_symbols: bool,

    /// Character table (JSON)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Use the built-in character table instead of a data file
    #[arg(long)]
    pub builtin: bool,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive menu with these options
    #[arg(short, long)]
    pub interactive: bool,
}

fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn password_length(s: &str) -> Result<usize, String> {
    match positive(s)? {
        n if n > LENGTH_LIMIT => Err(format!("must be at most {LENGTH_LIMIT}")),
        n => Ok(n),
    }
}

impl Args {
    pub fn into_settings(self) -> Settings {
        let mut selection: crate::pass::Selection = if self.classes.is_empty() {
            ClassId::ALL.into_iter().collect()
        } else {
            self.classes.into_iter().collect()
        };
        if self.no_symbols {
            selection.remove(&ClassId::Symbol);
        }

        let data = if self.builtin {
            DataSource::Builtin
        } else {
            DataSource::File(self.data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)))
        };

        Settings {
            data,
            selection,
            pass_length: self.length.unwrap_or(DEFAULT_LENGTH),
            number_of_passwords: self.number,
            to_clipboard: self.board,
            quiet: self.quiet,
            interactive: self.interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn settings(args: &[&str]) -> Settings {
        let mut argv = vec!["classpass"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap().into_settings()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let s = settings(&["--builtin"]);
        assert_eq!(s.pass_length, 16);
        assert_eq!(s.number_of_passwords, 1);
        assert_eq!(s.selection.len(), 4);
        assert_eq!(s.data, DataSource::Builtin);
        assert!(!s.to_clipboard && !s.quiet && !s.interactive);
    }

    #[test]
    fn class_list() {
        let s = settings(&["-C", "lower,digit", "-l", "20", "-n", "3"]);
        let classes: Vec<_> = s.selection.into_iter().collect();
        assert_eq!(classes, vec![ClassId::Lower, ClassId::Digit]);
        assert_eq!(s.pass_length, 20);
        assert_eq!(s.number_of_passwords, 3);
    }

    #[test]
    fn no_symbols_can_empty_selection() {
        let s = settings(&["--classes", "symbol", "--no-symbols"]);
        assert!(s.selection.is_empty());
    }

    #[test]
    fn data_path() {
        let s = settings(&["-d", "/tmp/chars.json"]);
        assert_eq!(s.data, DataSource::File(PathBuf::from("/tmp/chars.json")));
    }

    #[test]
    fn rejects_zero_and_unknown() {
        assert!(Args::try_parse_from(["classpass", "-l", "0"]).is_err());
        assert!(Args::try_parse_from(["classpass", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["classpass", "-C", "emoji"]).is_err());
        assert!(Args::try_parse_from(["classpass", "--bogus"]).is_err());
    }

    #[test]
    fn length_is_bounded() {
        let huge = (usize::MAX / 2).to_string();
        let err = Args::try_parse_from(["classpass", "-l", huge.as_str()]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("at most 65536"));

        assert!(Args::try_parse_from(["classpass", "-l", "65537"]).is_err());
        assert_eq!(settings(&["-l", "65536"]).pass_length, 65536);
    }
}
