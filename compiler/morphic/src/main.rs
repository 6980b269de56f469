//! Morphi command-line tokenizer.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use morphic::{init_tracing, run, Input};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(help = "Lexer configuration file (.yml)")]
    config: PathBuf,

    #[arg(help = "Input file; omit or pass `-` to read stdin")]
    input: Option<PathBuf>,

    #[arg(short = 'l', long = "log", help = "Trace every scanning step on stderr")]
    log: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log);

    let input = Input::from_arg(cli.input.as_deref());
    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(err) = run(&cli.config, &input, &mut out) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_argument_has_one_help_line() {
        let command = Cli::command();
        let help: Vec<(String, String)> = command
            .get_arguments()
            .filter(|arg| !matches!(arg.get_id().as_str(), "help" | "version"))
            .map(|arg| {
                let text = arg.get_help().map(ToString::to_string).unwrap_or_default();
                (arg.get_id().to_string(), text)
            })
            .collect();
        assert_eq!(
            help,
            vec![
                ("config".to_owned(), "Lexer configuration file (.yml)".to_owned()),
                ("input".to_owned(), "Input file; omit or pass `-` to read stdin".to_owned()),
                ("log".to_owned(), "Trace every scanning step on stderr".to_owned()),
            ]
        );
    }
}
