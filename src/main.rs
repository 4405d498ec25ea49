use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use monoglyph::{
    check,
    error::{EXIT_RUNTIME, EXIT_SOURCE, EXIT_USAGE},
    execute,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// monoglyph runs programs written in a language where every token is a
/// single character.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed tree, one symbol per line, before running.
    #[arg(short, long)]
    tree: bool,

    /// Only parses and validates the program.
    #[arg(short, long)]
    check: bool,

    /// Raises log verbosity. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The program file.
    program: PathBuf,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "monoglyph=warn",
        1 => "monoglyph=debug",
        _ => "monoglyph=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::from(EXIT_USAGE) } else { ExitCode::SUCCESS };
        },
    };

    init_tracing(args.verbose);

    let bytes = match fs::read(&args.program) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Failed to read the program file '{}': {e}", args.program.display());
            return ExitCode::from(EXIT_SOURCE);
        },
    };
    let source = String::from_utf8_lossy(&bytes);
    debug!(path = %args.program.display(), bytes = bytes.len(), "read program");

    let tree = match check(&source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        },
    };

    if args.tree {
        print!("{}", tree.render_tree());
    }
    if args.check {
        return ExitCode::SUCCESS;
    }

    match execute(&tree, io::stdin().lock()) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            match stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!(%e, "failed to write output");
                    ExitCode::from(EXIT_RUNTIME)
                },
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
