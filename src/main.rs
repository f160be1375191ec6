use clap::Parser;
use serde_json::Value;

use cart_eligibility::value::Datum;
use cart_eligibility::Evaluator;

/// Simple runner: pass record and criteria JSON via CLI.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Record JSON (the cart under test). Quote it for your shell.
    record: String,
    /// Criteria JSON (the rule tree)
    criteria: String,
    /// Promote RFC 3339 timestamp strings to date values before matching
    #[arg(long)]
    dates: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let record: Value = match serde_json::from_str(&args.record) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid record JSON: {e}");
            std::process::exit(1);
        }
    };
    let criteria: Value = match serde_json::from_str(&args.criteria) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid criteria JSON: {e}");
            std::process::exit(1);
        }
    };

    let (record, criteria) = if args.dates {
        (
            Datum::from_json_with_dates(&record),
            Datum::from_json_with_dates(&criteria),
        )
    } else {
        (Datum::from(&record), Datum::from(&criteria))
    };

    match Evaluator::new().is_eligible(&record, &criteria) {
        Ok(verdict) => println!("{verdict}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
