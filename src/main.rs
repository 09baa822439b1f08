//! Ohmdraw - Resistor Network Solver
//!
//! Solves series/parallel resistor networks and draws their schematics.
//!
//! # Usage
//!
//! ```bash
//! ohmdraw "Circuit 1:V.12:300.150" "Circuit 2:V.12:100,100"
//! cat circuits.txt | ohmdraw --precision 4
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use ohmdraw_core::{
    error::Result,
    report::{Report, ReportConfig, DEFAULT_PRECISION},
    Circuit,
};

/// Series/parallel resistor network solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuits in `Name:Source:Topology` notation; read one per line from stdin if omitted
    #[arg(value_name = "CIRCUIT")]
    circuits: Vec<String>,

    /// Maximum number of decimals in the data table
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Print only the schematic
    #[arg(long, conflicts_with = "no_schematic")]
    schematic_only: bool,

    /// Print only the data table and totals
    #[arg(long)]
    no_schematic: bool,
}

fn read_stdin() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let circuits = if args.circuits.is_empty() {
        match read_stdin() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.circuits.clone()
    };

    let config = ReportConfig::new()
        .with_precision(args.precision)
        .with_schematic(!args.no_schematic)
        .with_table(!args.schematic_only);

    let mut status = ExitCode::SUCCESS;
    for notation in &circuits {
        match Circuit::parse(notation) {
            Ok(circuit) => println!("{}", Report::new(&circuit, config.clone())),
            Err(e) => {
                eprintln!("Error in '{}': {}", notation, e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
