//! tyq CLI
//!
//! Main entry point for the `tyq` command.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tyq::report::Classification;
use tyq::{Session, Universe};

#[derive(Parser)]
#[command(name = "tyq")]
#[command(author = "Demetrios Chiuratto Agourakis, Dionisio Chiuratto Agourakis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify and transform C++-style types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Universe manifest declaring classes, unions, enums and aliases
    #[arg(short, long, global = true, value_name = "FILE")]
    universe: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one or more queries, e.g. `is_object<int[3]>`
    Eval {
        #[arg(value_name = "QUERY", required = true)]
        queries: Vec<String>,
    },

    /// Run every predicate and transformation on a type
    Classify {
        #[arg(value_name = "TYPE")]
        ty: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the predicate catalog by layer
    Predicates,

    /// Start the interactive query loop
    Repl,

    /// Show information about tyq
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let universe = load_universe(cli.universe.as_deref())?;
    let session = Session::new(&universe)?;

    match cli.command {
        Commands::Eval { queries } => eval(&session, &queries),
        Commands::Classify { ty, json } => classify(&session, &ty, json),
        Commands::Predicates => predicates(&session),
        Commands::Repl => repl(&session),
        Commands::Info => info(&session),
    }
}

fn load_universe(path: Option<&Path>) -> Result<Universe> {
    match path {
        Some(path) => {
            tracing::info!("Loading universe from {:?}", path);
            Universe::load(path).into_diagnostic()
        }
        None => Ok(Universe::empty()),
    }
}

fn eval(session: &Session<'_>, queries: &[String]) -> Result<()> {
    for query in queries {
        let value = session.evaluate(query)?;
        if queries.len() > 1 {
            println!("{query} = {value}");
        } else {
            println!("{value}");
        }
    }
    Ok(())
}

fn classify(session: &Session<'_>, text: &str, json: bool) -> Result<()> {
    let ty = session.parse_type(text)?;
    let report = Classification::of(&ty, session.catalog());

    if json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| miette::miette!("Failed to serialize report: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn predicates(session: &Session<'_>) -> Result<()> {
    for (layer, predicates) in session.catalog().layers().iter().enumerate() {
        println!("layer {layer}:");
        for predicate in predicates {
            if predicate.deps.is_empty() {
                println!("  {}", predicate.name);
            } else {
                println!("  {} <- {}", predicate.name, predicate.deps.join(", "));
            }
        }
    }
    Ok(())
}

fn repl(session: &Session<'_>) -> Result<()> {
    println!("tyq REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut editor = rustyline::DefaultEditor::new().into_diagnostic()?;

    loop {
        let line = match editor.readline("tyq> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).into_diagnostic(),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(trimmed);

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :help, :h         Show this help");
                println!("  :quit, :q         Exit the REPL");
                println!("  :classify <type>  Show every predicate for a type");
                println!("  :universe         List declared types");
                println!("  <query>           Evaluate, e.g. decay<int[3]>");
                println!();
            }
            ":universe" => {
                for (name, ty) in session.universe().iter() {
                    println!("  {name} = {ty}");
                }
            }
            _ if trimmed.starts_with(":classify ") => {
                let text = &trimmed[":classify ".len()..];
                match session.parse_type(text) {
                    Ok(ty) => {
                        print!("{}", Classification::of(&ty, session.catalog()).render_text())
                    }
                    Err(e) => eprintln!("{:?}", miette::Report::new(e)),
                }
            }
            _ => match session.evaluate(trimmed) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("{:?}", miette::Report::new(e)),
            },
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn info(session: &Session<'_>) -> Result<()> {
    println!("tyq - type classification and transformation");
    println!("Version: {}", tyq::VERSION);
    println!();
    println!("Predicates: {}", session.catalog().len());
    println!("Layers: {}", session.catalog().layers().len());
    println!("Transformations: {}", tyq::transform::TRANSFORMS.len());
    println!("Declared types: {}", session.universe().len());
    Ok(())
}
