//! Command-line argument parsing.
//!
//! Usage:
//!   minipas [-v|-vv] [--gas <n>] run <tree.json>
//!   minipas [-v|-vv] word <word> [<input>...]
//!   minipas [-v|-vv] comment [<input>...]

use std::path::PathBuf;

pub const USAGE: &str = "\
usage: minipas [-v|-vv] [--gas <n>] run <tree.json>
       minipas [-v|-vv] word <word> [<input>...]
       minipas [-v|-vv] comment [<input>...]

  run      execute a program tree (JSON) with stdin/stdout as its streams
  word     report whether each input is exactly <word>
  comment  report whether each input is a complete comment

With no <input>, the recognizers read all of stdin as a single input.

  -v, -vv      log debug / trace messages to stderr
  --gas <n>    stop a program after <n> evaluation steps
  -h, --help   show this message

environment: MINIPAS_LOG=<error|warn|info|debug|trace>, MINIPAS_GAS_LIMIT=<n>";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    /// Number of `-v` flags.
    pub verbosity: u8,
    /// `--gas <n>`.
    pub gas_limit: Option<u64>,
}

/// What to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run { tree: PathBuf },
    Word { word: String, inputs: Vec<String> },
    Comment { inputs: Vec<String> },
    Help,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<CliArgs, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, String> {
    let mut verbosity = 0u8;
    let mut gas_limit = None;
    let mut positional: Vec<String> = Vec::new();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();
        match arg {
            "--" => {
                positional.extend(argv[i + 1..].iter().cloned());
                break;
            }
            "-h" | "--help" => {
                return Ok(CliArgs {
                    command: Command::Help,
                    verbosity,
                    gas_limit,
                });
            }
            "--gas" => {
                i += 1;
                let value = argv.get(i).ok_or("--gas needs a value")?;
                gas_limit = Some(parse_gas(value)?);
            }
            _ if arg.starts_with("--gas=") => {
                gas_limit = Some(parse_gas(&arg["--gas=".len()..])?);
            }
            // `-v`, `-vv`, `-vvv`...
            _ if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add(u8::try_from(arg.len() - 1).unwrap_or(u8::MAX));
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option '{arg}'"));
            }
            _ => positional.push(argv[i].clone()),
        }
        i += 1;
    }

    let mut rest = positional.into_iter();
    let command = match rest.next().as_deref() {
        Some("run") => {
            let tree = rest.next().ok_or("run needs a tree file")?;
            if let Some(extra) = rest.next() {
                return Err(format!("unexpected argument '{extra}'"));
            }
            Command::Run {
                tree: PathBuf::from(tree),
            }
        }
        Some("word") => {
            let word = rest.next().ok_or("word needs the word to recognize")?;
            Command::Word {
                word,
                inputs: rest.collect(),
            }
        }
        Some("comment") => Command::Comment {
            inputs: rest.collect(),
        },
        Some("help") => Command::Help,
        Some(other) => return Err(format!("unknown command '{other}'")),
        None => return Err("missing command".into()),
    };

    Ok(CliArgs {
        command,
        verbosity,
        gas_limit,
    })
}

fn parse_gas(value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("invalid gas limit '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run() {
        let args = parse_argv(&argv(&["run", "prog.json"])).unwrap();
        assert_eq!(
            args.command,
            Command::Run {
                tree: PathBuf::from("prog.json")
            }
        );
        assert_eq!(args.verbosity, 0);
        assert_eq!(args.gas_limit, None);
    }

    #[test]
    fn test_flags_anywhere() {
        let args = parse_argv(&argv(&["-v", "run", "--gas", "100", "p.json", "-v"])).unwrap();
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.gas_limit, Some(100));

        let args = parse_argv(&argv(&["-vv", "--gas=7", "run", "p.json"])).unwrap();
        assert_eq!(args.verbosity, 2);
        assert_eq!(args.gas_limit, Some(7));
    }

    #[test]
    fn test_verbosity_saturates() {
        let many = format!("-{}", "v".repeat(256));
        let args = parse_argv(&argv(&[many.as_str(), "comment"])).unwrap();
        assert_eq!(args.verbosity, u8::MAX);

        let args = parse_argv(&argv(&["-vv", many.as_str(), "comment"])).unwrap();
        assert_eq!(args.verbosity, u8::MAX);
    }

    #[test]
    fn test_word_inputs() {
        let args = parse_argv(&argv(&["word", "begin", "begin", "end"])).unwrap();
        assert_eq!(
            args.command,
            Command::Word {
                word: "begin".into(),
                inputs: argv(&["begin", "end"]),
            }
        );
    }

    #[test]
    fn test_comment_without_inputs() {
        let args = parse_argv(&argv(&["comment"])).unwrap();
        assert_eq!(args.command, Command::Comment { inputs: vec![] });
    }

    #[test]
    fn test_double_dash_keeps_dashes() {
        let args = parse_argv(&argv(&["word", "--", "-x", "-x"])).unwrap();
        // `--` comes after `word`, so the word itself is `-x`
        assert_eq!(
            args.command,
            Command::Word {
                word: "-x".into(),
                inputs: argv(&["-x"]),
            }
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_argv(&argv(&["--help"])).unwrap().command, Command::Help);
        assert_eq!(parse_argv(&argv(&["help"])).unwrap().command, Command::Help);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_argv(&argv(&[])).unwrap_err(), "missing command");
        assert_eq!(parse_argv(&argv(&["run"])).unwrap_err(), "run needs a tree file");
        assert_eq!(
            parse_argv(&argv(&["run", "a", "b"])).unwrap_err(),
            "unexpected argument 'b'"
        );
        assert_eq!(
            parse_argv(&argv(&["--gas", "lots", "run", "a"])).unwrap_err(),
            "invalid gas limit 'lots'"
        );
        assert_eq!(parse_argv(&argv(&["--gas"])).unwrap_err(), "--gas needs a value");
        assert_eq!(parse_argv(&argv(&["-q", "run", "a"])).unwrap_err(), "unknown option '-q'");
        assert_eq!(parse_argv(&argv(&["jump"])).unwrap_err(), "unknown command 'jump'");
    }
}
