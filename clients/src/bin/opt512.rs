//! `opt512` - Describe, encode and compare OPT512 types from the command line.
//!
//! A type argument is either an integer encoding (`0..=511`) or coin text.
//! Coin text is cleaned before parsing, so `"fm ti/ne cp/s(b)"` is accepted.
//!
//! **Usage:**
//! ```text
//! opt512 [--json] [--log-level <filter>] <command>
//! opt512 describe "fm-Ti/Ne-CP/S(B)"
//! opt512 nearest 300 --limit 5
//! opt512 random --seed 7
//! ```
//!
//! `RUST_LOG` overrides `--log-level`. Logs go to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use opt512::{Opt512, TypeReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Describe, encode and compare OPT512 types.
#[derive(Parser)]
#[command(name = "opt512", about = "Derive OPT512 types from coins or coin text")]
struct Args {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Subcommands.
#[derive(Subcommand)]
enum Command {
    /// Print every derived property of one or more types.
    Describe {
        /// Integer encodings or coin text.
        #[arg(value_name = "TYPE", required = true)]
        codes: Vec<String>,
    },
    /// Describe the type with an integer encoding.
    Number {
        /// Encoding in 0..=511.
        number: u32,
    },
    /// Describe a random resolved type.
    Random {
        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the type with every coin flipped.
    Complement {
        /// Integer encoding or coin text.
        #[arg(value_name = "TYPE")]
        code: String,
    },
    /// Squared position distance between two types.
    Distance {
        /// First type.
        #[arg(value_name = "TYPE")]
        a: String,
        /// Second type.
        #[arg(value_name = "OTHER")]
        b: String,
    },
    /// List the closest resolved types.
    Nearest {
        /// Integer encoding or coin text.
        #[arg(value_name = "TYPE")]
        code: String,
        /// Number of neighbours to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List every resolved type with its encoding.
    All,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Describe { codes } => {
            let reports = codes
                .iter()
                .map(|code| parse_type(code).map(Opt512::report))
                .collect::<Result<Vec<_>>>()?;
            describe(&reports, args.json)?;
        }
        Command::Number { number } => {
            let opt = Opt512::try_from_number(number)
                .with_context(|| format!("bad type number {number}"))?;
            describe(&[opt.report()], args.json)?;
        }
        Command::Random { seed } => {
            let opt = match seed {
                Some(seed) => Opt512::random_with(&mut StdRng::seed_from_u64(seed)),
                None => Opt512::random(),
            };
            debug!(?seed, number = ?opt.number(), "drew random type");
            describe(&[opt.report()], args.json)?;
        }
        Command::Complement { code } => {
            print_type(parse_type(&code)?.complement(), args.json);
        }
        Command::Distance { a, b } => {
            let (a, b) = (parse_type(&a)?, parse_type(&b)?);
            let d = opt512::distance(a, b);
            if args.json {
                println!("{}", json!({ "a": a.to_string(), "b": b.to_string(), "distance": d }));
            } else {
                println!("{d}");
            }
        }
        Command::Nearest { code, limit } => {
            let opt = parse_type(&code)?;
            let neighbours: Vec<(Opt512, u32)> = opt.nearest().into_iter().take(limit).collect();
            info!(from = %opt, count = neighbours.len(), "nearest types");
            if args.json {
                let rows: Vec<_> = neighbours
                    .iter()
                    .map(|(other, d)| {
                        json!({
                            "code": other.to_string(),
                            "number": other.number(),
                            "distance": d,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (other, d) in &neighbours {
                    println!("{:>4}  {:>3}  {}", d, number_label(*other), other);
                }
            }
        }
        Command::All => {
            if args.json {
                let rows: Vec<_> = Opt512::all()
                    .map(|opt| json!({ "code": opt.to_string(), "number": opt.number() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for opt in Opt512::all() {
                    println!("{:>3}  {}", number_label(opt), opt);
                }
            }
        }
    }
    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `default`.
fn init_logging(default: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("invalid log filter {default:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Reads an integer encoding or coin text.
fn parse_type(input: &str) -> Result<Opt512> {
    let input = input.trim();
    if let Ok(number) = input.parse::<u32>() {
        return Opt512::try_from_number(number).with_context(|| format!("bad type {input:?}"));
    }
    Opt512::from_dirty_coin_text(input).with_context(|| format!("bad type {input:?}"))
}

fn number_label(opt: Opt512) -> String {
    opt.number().map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn print_type(opt: Opt512, as_json: bool) {
    if as_json {
        println!("{}", json!({ "code": opt.to_string(), "number": opt.number() }));
    } else {
        println!("{}  {}", number_label(opt), opt);
    }
}

fn describe(reports: &[TypeReport], as_json: bool) -> Result<()> {
    if as_json {
        match reports {
            [report] => println!("{}", serde_json::to_string_pretty(report)?),
            _ => println!("{}", serde_json::to_string_pretty(reports)?),
        }
        return Ok(());
    }
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_report(report);
    }
    Ok(())
}

fn print_report(report: &TypeReport) {
    let number = report
        .number
        .map_or_else(|| "unresolved".to_string(), |n| n.to_string());
    println!("{}  ({})", report.code, number);
    println!("{:?}", report.coins);
    let jumper = match report.jumper {
        Some(true) => "yes",
        Some(false) => "no",
        None => "?",
    };
    println!("jumper: {jumper}");
    println!();

    println!("Stack");
    for entry in &report.stack {
        let savior = if entry.savior { "savior" } else { "demon" };
        println!(
            "  {}. {}{}  {}  {}",
            entry.position + 1,
            entry.sex,
            entry.code,
            entry.od_letter,
            savior
        );
    }
    println!();

    println!("Activation");
    for a in &report.activations {
        let position = a
            .stack_position
            .map_or_else(|| "-".to_string(), |p| (p + 1).to_string());
        let tier = a.tier.map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "  {:<10} {:<4} pos {}  score {}  tier {}  {}",
            a.function, a.full_code, position, a.activation, tier, a.savior_code
        );
    }
    println!();

    let animals: String = report.animals.iter().collect();
    println!("animals: {animals}");
    println!("position: {:?}", report.position);
    println!("sort value: {}", report.sort_value);
}
