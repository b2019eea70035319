use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{Parser, Subcommand};
use nanolex::{
    compile_patterns, errors::errors::Error, format_error, scan_with_recipe, Grammar, Lexer,
};
use tracing::debug;

/// Tokenize files with a hand written grammar or with rules compiled to a DFA.
#[derive(Parser)]
#[command(name = "nanolex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every token read with one of the built in grammars
    Tokens {
        /// Grammar to tokenize with: c, forth or lisp
        #[arg(short, long, default_value = "c")]
        grammar: Grammar,
        /// Input file, stdin when omitted or `-`
        path: Option<PathBuf>,
    },
    /// Compile bracket-expression rules and print every lexeme they produce
    Scan {
        /// A rule such as `[A-Za-z_][A-Za-z0-9_]*`; repeat for more rules
        #[arg(short, long = "rule", required = true)]
        rules: Vec<String>,
        /// Print the compiled transition table before scanning
        #[arg(long)]
        table: bool,
        /// Input file, stdin when omitted or `-`
        path: Option<PathBuf>,
    },
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_input(path: &Option<PathBuf>) -> io::Result<(Vec<u8>, String)> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let name = path.as_os_str().to_string_lossy().into_owned();
            Ok((fs::read(path)?, name))
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok((buffer, String::from("stdin")))
        }
    }
}

/// Prints the error report to stderr and exits with status 1.
fn display_error(error: &Error, source: Option<&[u8]>) -> ! {
    eprint!("{}", format_error(error, source));
    process::exit(1);
}

fn run_tokens(grammar: Grammar, path: &Option<PathBuf>) -> io::Result<()> {
    let (source, name) = read_input(path)?;
    let start = Instant::now();
    let mut lexer = Lexer::new(&source, grammar, Some(name));
    let mut count = 0;

    loop {
        let token = match lexer.read_token() {
            Ok(token) => token,
            Err(error) => display_error(&error, Some(&source)),
        };

        if token.is_none() {
            break;
        }

        println!("{:>6} {:<8} {}", token.start, token.kind.to_string(), lexer.token_str());
        count += 1;
    }

    debug!(tokens = count, elapsed = ?start.elapsed(), "tokenized");
    Ok(())
}

fn run_scan(rules: &[String], table: bool, path: &Option<PathBuf>) -> io::Result<()> {
    let recipe = match compile_patterns(rules) {
        Ok(recipe) => recipe,
        Err(error) => display_error(&error, None),
    };

    if table {
        print!("{}", recipe);
    }

    let (source, _) = read_input(path)?;
    let start = Instant::now();
    let mut count = 0;

    for lexeme in scan_with_recipe(&recipe, &source) {
        let marker = if lexeme.is_accepted(&recipe) { ' ' } else { '?' };
        println!(
            "{:>6} {:>3}{} {}",
            lexeme.start,
            lexeme.state,
            marker,
            String::from_utf8_lossy(lexeme.text(&source))
        );
        count += 1;
    }

    debug!(lexemes = count, elapsed = ?start.elapsed(), "scanned");
    Ok(())
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Tokens { grammar, path } => run_tokens(*grammar, path),
        Command::Scan { rules, table, path } => run_scan(rules, *table, path),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
