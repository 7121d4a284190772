//! `minipas`: run program trees and the word/comment recognizers.
//!
//! ```text
//! tree.json → Program → TreeWalker (stdin/stdout) → exit code
//! ```

mod cli;
mod config;
mod logger;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use minipas_automata::{comment_dfa, word_dfa, Dfa};
use minipas_eval::{RunConfig, TreeWalker};
use minipas_types::ast::Program;
use minipas_types::TreeError;

use cli::{Command, USAGE};
use config::Settings;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("minipas: {msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    let settings = match Settings::resolve(&args, |key| std::env::var(key).ok()) {
        Ok(settings) => settings,
        Err(msg) => {
            eprintln!("minipas: {msg}");
            return ExitCode::from(2);
        }
    };
    logger::init(settings.log_level);

    match args.command {
        Command::Help => match writeln!(io::stdout().lock(), "{USAGE}") {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Command::Run { tree } => run_tree(&tree, settings.run),
        Command::Word { word, inputs } => recognize(word_dfa(&word), inputs),
        Command::Comment { inputs } => recognize(comment_dfa(), inputs),
    }
}

fn run_tree(path: &Path, config: RunConfig) -> ExitCode {
    let program = match File::open(path)
        .map_err(TreeError::from)
        .and_then(|file| Program::from_reader(BufReader::new(file)))
    {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error: {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut walker = TreeWalker::with_config(stdin.lock(), stdout.lock(), config);
    match walker.run(&program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Print `accept`/`reject` per input; succeed only if all were accepted.
fn recognize(mut dfa: Dfa, inputs: Vec<String>) -> ExitCode {
    let inputs = if inputs.is_empty() {
        let mut all = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut all) {
            eprintln!("Error: cannot read stdin: {e}");
            return ExitCode::FAILURE;
        }
        vec![all]
    } else {
        inputs
    };

    match report(&mut dfa, &inputs, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Write one verdict line per input; `Ok(true)` when every input was accepted.
fn report(dfa: &mut Dfa, inputs: &[String], out: &mut impl Write) -> io::Result<bool> {
    let mut all_accepted = true;
    for input in inputs {
        let accepted = dfa.run(input);
        log::debug!("{input:?} stopped in {}", dfa.current());
        writeln!(out, "{}\t{input:?}", if accepted { "accept" } else { "reject" })?;
        all_accepted &= accepted;
    }
    out.flush()?;
    Ok(all_accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn inputs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_report_verdicts() {
        let mut out = Vec::new();
        let all = report(&mut word_dfa("end"), &inputs(&["end", "ends"]), &mut out).unwrap();
        assert!(!all);
        assert_eq!(String::from_utf8(out).unwrap(), "accept\t\"end\"\nreject\t\"ends\"\n");
    }

    #[test]
    fn test_report_closed_output_is_an_error() {
        let err = report(&mut comment_dfa(), &inputs(&["{ x }"]), &mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
