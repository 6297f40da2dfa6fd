//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads comma-separated minterms, don't-cares and variable names, runs the
//! minimizer and prints a report (or JSON with `--json`).

use clap::Parser;
use quine_logic::{minimize_with_config, Minimization, MinimizerConfig, MintermId};
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Prime implicants printed per line of the report
const PRIMES_PER_LINE: usize = 10;
/// Prime implicants printed before the listing is cut short
const PRIMES_SHOWN: usize = 20;

const RULE: &str = "--------------------------------------------------";
const BANNER: &str = "=======================================================";

#[derive(Parser, Debug)]
#[command(name = "quine")]
#[command(about = "Quine-McCluskey logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Minterms, comma separated (e.g. "0, 1, 2")
    #[arg(short = 'm', long = "minterms", value_name = "LIST", default_value = "")]
    minterms: String,

    /// Don't-care terms, comma separated
    #[arg(short = 'd', long = "dont-cares", value_name = "LIST", default_value = "")]
    dont_cares: String,

    /// Variable names, comma separated, most significant first (e.g. "A, B, C")
    #[arg(short = 'v', long = "variables", value_name = "LIST")]
    variables: String,

    /// Candidate count above which Petrick's method is truncated
    #[arg(long = "petrick-cap", default_value_t = MinimizerConfig::default().petrick_cap)]
    petrick_cap: usize,

    /// Candidates kept when Petrick's method is truncated
    #[arg(long = "petrick-retain", default_value_t = MinimizerConfig::default().petrick_retain)]
    petrick_retain: usize,

    /// Print the full result as JSON instead of a report
    #[arg(long = "json")]
    json: bool,

    /// Log pipeline progress to stderr
    #[arg(long = "debug")]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!(" [!] Warning: could not install logger: {}", e);
    }

    let (minterms, dont_cares) = match (
        parse_ids(&args.minterms, "minterms"),
        parse_ids(&args.dont_cares, "don't cares"),
    ) {
        (Ok(m), Ok(d)) => (m, d),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!(" [!] Error: {}", e);
            process::exit(1);
        }
    };
    let variables = parse_names(&args.variables);

    let config = MinimizerConfig {
        petrick_cap: args.petrick_cap,
        petrick_retain: args.petrick_retain,
    };

    let result = match minimize_with_config(&minterms, &dont_cares, &variables, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!(" [!] Error: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!(" [!] Error serializing result: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    print_report(&result, variables.len(), minterms.len(), dont_cares.len());
}

/// Parse a comma-separated list of non-negative integers; blanks are skipped
fn parse_ids(raw: &str, what: &str) -> Result<Vec<MintermId>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<MintermId>().map_err(|_| {
                if token.len() > 1
                    && token.starts_with('-')
                    && token[1..].chars().all(|c| c.is_ascii_digit())
                {
                    format!("Negative value '{}' in {}: minterms are non-negative", token, what)
                } else {
                    format!("Invalid value '{}' in {}: expected an integer", token, what)
                }
            })
        })
        .collect()
}

fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Lines of the prime implicant listing, cut short after [`PRIMES_SHOWN`]
fn prime_listing(primes: &[String]) -> Vec<String> {
    let shown = &primes[..primes.len().min(PRIMES_SHOWN)];
    let chunks: Vec<&[String]> = shown.chunks(PRIMES_PER_LINE).collect();
    let mut lines: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = chunk.join(", ");
            if i + 1 < chunks.len() || primes.len() > PRIMES_SHOWN {
                line.push(',');
            }
            line
        })
        .collect();
    if primes.len() > PRIMES_SHOWN {
        lines.push(format!("And {} more.", primes.len() - PRIMES_SHOWN));
    }
    lines
}

/// Title block printed above the report, framed like the closing banner
fn header() -> [String; 4] {
    [
        BANNER.to_string(),
        "        Logic minimizer using Quine McClusky".to_string(),
        format!("        v{}", env!("CARGO_PKG_VERSION")),
        BANNER.to_string(),
    ]
}

fn print_report(result: &Minimization, num_vars: usize, num_minterms: usize, num_dc: usize) {
    for line in header() {
        println!("{}", line);
    }
    println!();
    println!("{}", RULE);
    println!(" [+] Configuration: {} Variables", num_vars);
    println!(
        " [+] Processing {} Minterms and {} Don't Cares...",
        num_minterms, num_dc
    );
    println!("{}", RULE);

    let primes: Vec<String> = result
        .prime_implicants
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(" [i] Prime Implicants generated: {}", primes.len());
    for line in prime_listing(&primes) {
        println!("     {}", line);
    }

    println!();
    println!(
        " [i] Essential PIs identified: {}",
        result.essential_prime_implicants.len()
    );
    if !result.essential_prime_implicants.is_empty() {
        let essentials: Vec<String> = result
            .essential_prime_implicants
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("     {}", essentials.join(", "));
    }
    println!("{}", RULE);
    println!();

    println!("Minimized Equations:");
    if result.simplified_forms.is_empty() {
        println!("  [!] No solution found (Check constraints or inputs).");
    }
    for (idx, form) in result.simplified_forms.iter().enumerate() {
        if result.simplified_forms.len() > 1 {
            println!("  > Option {}:  F = {}", idx + 1, form);
        } else {
            println!("  > Result:  F = {}", form);
        }
    }
    if result.truncated {
        println!();
        println!("  [!] Petrick expansion was truncated; solutions may not be minimal.");
    }

    println!();
    println!("{}", BANNER);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("p{}", i)).collect()
    }

    #[test]
    fn test_parse_ids_skips_blanks() {
        assert_eq!(parse_ids(" 0, 1,,2 ,", "minterms").unwrap(), vec![0, 1, 2]);
        assert!(parse_ids("", "minterms").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ids_rejects_negative_and_garbage() {
        let err = parse_ids("1, -3", "minterms").unwrap_err();
        assert!(err.contains("Negative value '-3'"));
        let err = parse_ids("1, x", "don't cares").unwrap_err();
        assert!(err.contains("Invalid value 'x' in don't cares"));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_names("A, B ,C,"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_header_is_framed_by_banner() {
        let lines = header();
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[3], BANNER);
        assert!(lines[1].contains("Quine McClusky"));
        assert!(lines[2].ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_prime_listing_short() {
        assert_eq!(prime_listing(&names(3)), vec!["p0, p1, p2"]);
        assert!(prime_listing(&[]).is_empty());
    }

    #[test]
    fn test_prime_listing_two_lines() {
        let lines = prime_listing(&names(12));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("p9,"));
        assert_eq!(lines[1], "p10, p11");
    }

    #[test]
    fn test_prime_listing_truncated() {
        let lines = prime_listing(&names(25));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("p19,"));
        assert_eq!(lines[2], "And 5 more.");
    }
}
