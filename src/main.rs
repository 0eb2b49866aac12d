use abacus::display::{self, DisplayConfig, OutputFormat};
use abacus::query;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "abacus")]
#[command(about = "Evaluate calculator and unit-conversion queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Display configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single query (e.g. "1kg to lbs", "sqrt(16)")
    Eval {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Evaluate every line of a file, or stdin when no file is given
    Batch {
        /// Input file (default: stdin)
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_deref(), cli.json) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    match cli.command {
        Commands::Eval { query } => {
            if !eval_query(&query.join(" "), &config) {
                std::process::exit(1);
            }
        }
        Commands::Batch { file } => match eval_batch(file.as_deref(), &config) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn load_config(path: Option<&str>, json: bool) -> Result<DisplayConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => {
            log::debug!("Loading display config from {}", path);
            DisplayConfig::load_from_file(path)
                .map_err(|e| format!("Failed to load config {}: {}", path, e))?
        }
        None => DisplayConfig::default(),
    };

    if json {
        config.format = OutputFormat::Json;
    }

    Ok(config)
}

/// Print the result of one query; returns whether it matched
fn eval_query(query: &str, config: &DisplayConfig) -> bool {
    let result = query::evaluate(query);
    let matched = result.is_some();
    if matched || config.format == OutputFormat::Json {
        println!("{}", display::render(result.as_ref(), config));
    }
    if !matched {
        log::info!("No calculator result for {:?}", query);
    }
    matched
}

fn eval_batch(file: Option<&str>, config: &DisplayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).map_err(|e| format!("Failed to open {}: {}", path, e))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut matched = 0usize;
    let mut total = 0usize;

    for line in reader.lines() {
        let line = line?;
        let result = query::evaluate(&line);
        total += 1;
        if result.is_some() {
            matched += 1;
        }
        writeln!(out, "{}", display::render(result.as_ref(), config))?;
    }

    log::debug!("Evaluated {} lines, {} matched", total, matched);
    Ok(())
}
