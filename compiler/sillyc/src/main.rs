//! SILLY interpreter CLI.

use sillyc::commands::{lex_file, parse_file, run_file};
use sillyc::{init_tracing, RunOptions, SillyError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => {
            let mut options = RunOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    if !options.apply_flag(arg) {
                        eprintln!("error: unknown option `{arg}`");
                        eprintln!("Usage: silly run <file> [--max-depth=<n>]");
                        std::process::exit(1);
                    }
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: silly run <file> [--max-depth=<n>]");
                std::process::exit(1);
            };

            run_file(path, &options)
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: silly parse <file>");
                std::process::exit(1);
            };
            parse_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: silly lex <file>");
                std::process::exit(1);
            };
            lex_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        path if path.ends_with(".sil") => run_file(path, &RunOptions::default()),
        _ => {
            eprintln!("error: unknown command `{command}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(1);
    }
}

fn report(err: &SillyError) {
    eprintln!("error: {err}");
}

fn print_usage() {
    println!("SILLY interpreter");
    println!();
    println!("Usage: silly <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a SILLY program");
    println!("  parse <file>         Parse and print the program in canonical form");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  <file.sil>           Shorthand for `run <file.sil>`");
    println!("  help                 Show this help message");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>      Limit nested subroutine calls (default: 1000)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=silly_eval=debug) to enable logging.");
}
