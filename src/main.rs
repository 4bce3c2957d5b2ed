use std::{borrow::Cow, fs, io, process::ExitCode};

use clap::Parser;
use imp::{
    check, error::CheckError, evaluate, interpreter::evaluator::print::Stdout, parse, tokenize,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// imp is an interpreter for a tiny imperative language of integers,
/// booleans, loops, and conditionals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells imp to read the program from a file instead of the command line.
    #[arg(short, long)]
    file: bool,

    /// Logs more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prints the token stream and exits.
    #[arg(long, conflicts_with_all = ["pretty", "check"])]
    tokens: bool,

    /// Prints the parsed program back as source and exits.
    #[arg(long, conflicts_with = "check")]
    pretty: bool,

    /// Type checks the program without running it.
    #[arg(long, conflicts_with = "no_check")]
    check: bool,

    /// Runs the program without type checking it first.
    #[arg(long)]
    no_check: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Ok(script) = load_script(&args) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.contents);
        return ExitCode::FAILURE;
    };

    if let Err(e) = execute(&args, &script) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// The program text: the file named by `contents` with `--file`, otherwise
/// `contents` itself.
fn load_script(args: &Args) -> io::Result<Cow<'_, str>> {
    if args.file {
        fs::read_to_string(&args.contents).map(Cow::Owned)
    } else {
        Ok(Cow::Borrowed(&args.contents))
    }
}

/// Installs a stderr logger. `-v` steps the level from `warn` up to `trace`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn execute(args: &Args, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    if args.tokens {
        for token in tokenize(script)? {
            println!("{token}");
        }
        return Ok(());
    }

    let program = parse(script)?;

    if args.pretty {
        println!("{}", program.pretty());
        return Ok(());
    }

    if !args.no_check && !check(&program) {
        return Err(Box::new(CheckError));
    }

    if args.check {
        println!("Program is well-typed.");
        return Ok(());
    }

    let context = evaluate(&program, &mut Stdout);
    info!(diagnostics = context.diagnostics.len(), "finished");
    Ok(())
}
