//! Lispy command-line driver.

use lispyc::commands::{eval_source, lex_file, run_file};
use lispyc::{init_tracing, LOG_ENV};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut keywords = Vec::new();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if let Some(word) = arg.strip_prefix("--keyword=") {
                    keywords.push(word.to_string());
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lispy run <file> [--keyword=<word>]...");
                std::process::exit(1);
            };

            if let Err(e) = run_file(path, &keywords) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lispy lex <file>");
                std::process::exit(1);
            }
            if let Err(e) = lex_file(&args[2]) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: lispy eval <source>");
                std::process::exit(1);
            }
            if let Err(e) = eval_source(&args[2]) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Lispy {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lispy interpreter");
    println!();
    println!("Usage: lispy <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>          Load and run a source file");
    println!("  lex <file>          Tokenize and display tokens");
    println!("  eval <source>       Run inline source and print the result");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  --keyword=<word>    Register an extra keyword (repeatable)");
    println!();
    println!("Logging:");
    println!("  {LOG_ENV}=<filter>   e.g. {LOG_ENV}=debug or {LOG_ENV}=lispy_parse=trace");
    println!();
    println!("Examples:");
    println!("  lispy run main.lsp");
    println!("  lispy eval '(+ 1 2)'");
    println!("  lispy lex main.lsp");
}
