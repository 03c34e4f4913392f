use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use clap::Parser;
use gamer::{
    config::KeywordTable,
    interpreter::session::{Interpreter, LineReport},
};
use tracing_subscriber::{EnvFilter, fmt};

/// gamer runs programs written in the Gamer instruction language, one
/// instruction per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells gamer to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Keyword table to use instead of the built-in vocabulary. One
    /// `keyword = action` entry per line.
    #[arg(short, long, value_name = "PATH")]
    keywords: Option<PathBuf>,

    /// Prints the tokens of every line instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Logs every pipeline stage to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// The script, or its path with `--file`. Without it, instructions are read
    /// from standard input.
    contents: Option<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "gamer=debug" } else { "gamer=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter)
         .with_target(false)
         .with_writer(io::stderr)
         .init();
}

fn load_keywords(path: &Path) -> Result<KeywordTable, String> {
    let source = fs::read_to_string(path).map_err(|e| {
                                             format!("Failed to read the keyword table '{}': {e}",
                                                     path.display())
                                         })?;

    source.parse()
          .map_err(|e| format!("Invalid keyword table '{}': {e}", path.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let keywords = match args.keywords.as_deref().map(load_keywords).transpose() {
        Ok(keywords) => keywords.unwrap_or_default(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    let mut interpreter = Interpreter::with_keywords(Arc::new(keywords));

    let Some(contents) = args.contents else {
        return repl(&mut interpreter, args.tokens);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if args.tokens {
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            print_tokens(&interpreter, line);
        }
        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for report in interpreter.run_script(&script) {
        failed |= report.result.is_err();
        print_report(&report);
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Reads instructions from standard input until end of input.
///
/// `:reset` clears the variables.
fn repl(interpreter: &mut Interpreter, tokens: bool) -> ExitCode {
    let interactive = io::stdin().is_terminal();
    let mut input = io::stdin().lock();
    let mut line = String::new();
    let mut number = 0;

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().ok();
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => number += 1,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text == ":reset" {
            interpreter.reset();
            println!("Variables cleared.");
        } else if tokens {
            print_tokens(interpreter, text);
        } else {
            print_report(&LineReport { line:   number,
                                       source: text.to_string(),
                                       result: interpreter.evaluate(text), });
        }
    }
}

fn print_report(report: &LineReport) {
    match &report.result {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Error on line {}: {e}", report.line),
    }
}

fn print_tokens(interpreter: &Interpreter, line: &str) {
    let tokens = interpreter.tokenize(line)
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>();
    println!("[{}]", tokens.join(", "));
}
