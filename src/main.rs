use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use u_procsched::config::SimulationConfig;
use u_procsched::io::{load_input, render_json, render_report};
use u_procsched::scheduler::{simulate, Algorithm};
use u_procsched::validation::{check_batch, join_errors, ValidationError};

/// Simulate CPU scheduling of a process batch.
#[derive(Debug, Parser)]
#[command(name = "u-procsched", version, about)]
struct Cli {
    /// Process file of `pid arrival burst` triples ("-" for stdin)
    input: PathBuf,

    /// Overhead charged after a process leaves the CPU
    #[arg(short = 'c', long, default_value_t = SimulationConfig::DEFAULT_CONTEXT_SWITCH)]
    context_switch: i64,

    /// Round-Robin time slice
    #[arg(short, long, default_value_t = SimulationConfig::DEFAULT_QUANTUM)]
    quantum: i64,

    /// Algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Also print the dispatch timeline
    #[arg(long)]
    timeline: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Fcfs,
    Srt,
    Rr,
    All,
}

impl AlgorithmArg {
    fn selected(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Fcfs => vec![Algorithm::Fcfs],
            AlgorithmArg::Srt => vec![Algorithm::Srt],
            AlgorithmArg::Rr => vec![Algorithm::RoundRobin],
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SimulationConfig::new()
        .with_context_switch(cli.context_switch)
        .with_quantum(cli.quantum);
    config.validate().map_err(invalid_input)?;

    let batch = load_input(&cli.input, io::stdin().lock()).with_context(|| {
        format!("Failed to read processes from {}", cli.input.display())
    })?;
    for w in check_batch(&batch).map_err(invalid_input)? {
        warn!("{w}; running it as a zero-duration process");
    }
    info!(
        "Loaded {} processes (context switch {}, quantum {})",
        batch.len(),
        config.context_switch_time,
        config.quantum
    );

    let algorithms = cli.algorithm.selected();
    let mut schedules = Vec::with_capacity(algorithms.len());
    for &algorithm in &algorithms {
        schedules.push(simulate(&batch, algorithm, &config).map_err(invalid_input)?);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", render_json(&schedules)?)?;
    } else {
        for (i, (algorithm, schedule)) in algorithms.iter().zip(&schedules).enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write!(
                out,
                "{}",
                render_report(&algorithm.to_string(), schedule, cli.timeline)
            )?;
        }
    }

    Ok(())
}

fn invalid_input(errors: Vec<ValidationError>) -> anyhow::Error {
    anyhow!("Invalid input: {}", join_errors(&errors))
}
