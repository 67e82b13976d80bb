//! Proof-checker CLI.
//!
//! A thin wrapper over the library: reads a proof in a simple line format,
//! evaluates it, and reports per-line diagnostics.  Each input line has
//! the shape
//!
//! ```text
//! formula ; rule ; cited,lines
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.  The final line's
//! formula doubles as the intended conclusion.
#![forbid(unsafe_code)]
use natded::{Proof, ProofEvaluation};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [proof-file]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Show this help message");
    eprintln!("  -v, --version    Show version information");
    eprintln!();
    eprintln!("If no proof file is provided, reads from stdin.");
    eprintln!();
    eprintln!("Proof format, one step per line:");
    eprintln!("  p -> q ; Premise ;");
    eprintln!("  p      ; Premise ;");
    eprintln!("  q      ; Modus Ponens ; 1,2");
}

/// Parse one `formula ; rule ; cited` input line.
fn parse_step(line: &str) -> Result<(String, String, Vec<usize>), String> {
    let mut parts = line.splitn(3, ';').map(str::trim);
    let formula = parts.next().unwrap_or_default();
    let rule = parts.next().unwrap_or_default();
    let cited = parts.next().unwrap_or_default();
    if formula.is_empty() || rule.is_empty() {
        return Err(format!("malformed proof step: `{}`", line));
    }
    let mut cited_lines = Vec::new();
    for piece in cited.split(',').map(str::trim).filter(|piece| !piece.is_empty()) {
        let number = piece
            .parse::<usize>()
            .map_err(|_| format!("invalid cited line `{}` in `{}`", piece, line))?;
        cited_lines.push(number);
    }
    Ok((formula.to_string(), rule.to_string(), cited_lines))
}

fn build_proof(input: &str) -> Result<Proof, String> {
    let mut proof = Proof::new();
    let mut last_formula = None;
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (formula, rule, cited_lines) = parse_step(line)?;
        proof
            .add_line_str(&formula, &rule, cited_lines)
            .map_err(|err| format!("line {}: {}", index + 1, err))?;
        last_formula = Some(formula);
    }
    let Some(conclusion) = last_formula else {
        return Err("proof is empty".to_string());
    };
    proof
        .set_conclusion_str(&conclusion)
        .map_err(|err| err.to_string())?;
    Ok(proof)
}

fn report(proof: &Proof, evaluation: &ProofEvaluation) {
    for (line, valid) in proof.lines().iter().zip(&evaluation.line_validity) {
        let marker = if *valid { "ok " } else { "BAD" };
        let cited = line
            .cited_lines()
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{} {:>3}. {:<30} {:<26} [{}]",
            marker,
            line.line_number(),
            line.proposition().pretty(),
            line.rule().to_string(),
            cited
        );
    }
    println!();
    if evaluation.is_valid() {
        println!("VALID (score 1)");
    } else {
        println!("INVALID (score 0)");
        if !evaluation.invalid_lines().is_empty() {
            println!("  bad lines: {:?}", evaluation.invalid_lines());
        }
        if !evaluation.last_line_is_conclusion {
            println!("  final line does not match the conclusion");
        }
        if !evaluation.open_assumptions.is_empty() {
            println!(
                "  undischarged assumptions at lines {:?}",
                evaluation.open_assumptions
            );
        }
    }
}

fn run(input_path: Option<&str>) -> io::Result<()> {
    let input = if let Some(path) = input_path {
        fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    match build_proof(&input) {
        Ok(proof) => {
            let evaluation = proof.evaluate();
            report(&proof, &evaluation);
            if !evaluation.is_valid() {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].as_str();

    if args.len() > 1 {
        match args[1].as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return Ok(());
            }
            "-v" | "--version" => {
                println!("natded {}", VERSION);
                return Ok(());
            }
            path if !path.starts_with('-') => return run(Some(path)),
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage(program);
                process::exit(2);
            }
        }
    }
    run(None)
}
