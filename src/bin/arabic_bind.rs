//! `arabic_bind` - command-line front end for the shaping pipeline.
//!
//! Joins its positional arguments with spaces, shapes them into
//! presentation forms and prints the display-ordered result.
//!
//! # Usage
//!
//! ```bash
//! arabic_bind "سلام عليكم"
//! arabic_bind --hindi "صفحة 12"
//! arabic_bind --file poem.txt
//! echo "سلام" | arabic_bind
//! ```

use arabic_binder::{Error, Result, ShapeFlags, bind, set_log_callback, shape_text};
use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;

const HELP_TEXT: &str = "arabic_bind - shape Arabic text into presentation forms

USAGE:
    arabic_bind [OPTIONS] [TEXT]...

Positional TEXT arguments are joined with spaces. With no TEXT and no
--file, input is read from stdin.

OPTIONS:
    -h, --help          Print this help message and exit
    --hindi             Convert ASCII digits to Arabic-Indic digits
    --file <PATH>       Read input text from a file
    --logical           Print shaped text in logical order (skip the
                        bidirectional reorder step)
    --verbose           Log pipeline activity to stderr

EXAMPLES:
    arabic_bind \"سلام عليكم\"       # shape and print in display order
    arabic_bind --hindi \"صفحة 12\"  # localize the digits as well
";

/// Parsed command-line configuration.
#[derive(Debug, Default, PartialEq, Eq)]
struct Config {
    text: Vec<String>,
    file: Option<PathBuf>,
    hindi: bool,
    logical: bool,
    verbose: bool,
}

/// Result of CLI parsing.
enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--hindi" => config.hindi = true,
                "--logical" => config.logical = true,
                "--verbose" => config.verbose = true,

                "--file" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--file requires a path".to_string());
                    };
                    config.file = Some(PathBuf::from(value));
                }

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    config.text.push(other.to_string());
                }
            }
        }

        ParseResult::Config(config)
    }

    fn flags(&self) -> ShapeFlags {
        if self.hindi {
            ShapeFlags::LOCALIZE_DIGITS
        } else {
            ShapeFlags::empty()
        }
    }
}

/// Gather the input text from positional arguments, a file or stdin.
fn read_input(config: &Config) -> Result<String> {
    if let Some(path) = &config.file {
        return Ok(std::fs::read_to_string(path)?);
    }
    if !config.text.is_empty() {
        return Ok(config.text.join(" "));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    // A trailing newline from the terminal is not part of the text.
    if buffer.ends_with('\n') {
        buffer.pop();
    }
    Ok(buffer)
}

fn run(config: &Config) -> Result<()> {
    if config.verbose {
        set_log_callback(|level, msg| eprintln!("[{level}] {msg}"));
    }

    let input = read_input(config)?;
    let output = if config.logical {
        shape_text(&input, config.flags())
    } else {
        bind(&input, config.flags())
    };
    println!("{output}");
    Ok(())
}

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return;
        }
        ParseResult::Error(message) => {
            eprintln!("arabic_bind: {}", Error::Usage(message));
            eprintln!("Try 'arabic_bind --help'.");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("arabic_bind: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    #[test]
    fn parses_positionals_and_flags() {
        let ParseResult::Config(config) =
            Config::from_args(args(&["arabic_bind", "--hindi", "سلام", "عليكم"]))
        else {
            panic!("expected config");
        };
        assert!(config.hindi);
        assert_eq!(config.text, vec!["سلام", "عليكم"]);
        assert_eq!(config.flags(), ShapeFlags::LOCALIZE_DIGITS);
    }

    #[test]
    fn file_flag_takes_a_value() {
        let ParseResult::Config(config) =
            Config::from_args(args(&["arabic_bind", "--file", "poem.txt"]))
        else {
            panic!("expected config");
        };
        assert_eq!(config.file, Some(PathBuf::from("poem.txt")));

        assert!(matches!(
            Config::from_args(args(&["arabic_bind", "--file"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn unknown_options_are_rejected() {
        assert!(matches!(
            Config::from_args(args(&["arabic_bind", "--frob"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(
            Config::from_args(args(&["arabic_bind", "-h", "text"])),
            ParseResult::Help
        ));
    }
}
