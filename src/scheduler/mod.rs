//! CPU scheduling algorithms and performance metrics.
//!
//! Every algorithm implements [`CpuScheduler`]: turn an arrival-ordered batch
//! into a fully populated one, given a context-switch cost and its own
//! parameters. Callers (the reporter, the CLI) depend only on that trait and
//! on the [`ScheduledBatch`] it returns.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Parameters |
//! |-----------|-----------|------------|
//! | [`Fcfs`] | no | none |
//! | [`Srt`] | yes, every time unit | none |
//! | [`RoundRobin`] | yes, at quantum expiry | quantum |
//!
//! # Ownership
//!
//! [`CpuScheduler::schedule`] clones the input batch, so repeated runs over the
//! same loaded batch never observe each other's side effects.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod fcfs;
mod kpi;
mod round_robin;
mod srt;

pub use fcfs::Fcfs;
pub use kpi::BatchMetrics;
pub use round_robin::RoundRobin;
pub use srt::Srt;

use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::config::{check_context_switch, SimulationConfig};
use crate::models::{sort_by_arrival, ExecutionSlice, ProcessRecord, ScheduledBatch};
use crate::validation::{ValidationError, ValidationResult};

/// A single-CPU scheduling algorithm.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the batch in place.
    ///
    /// `processes` is non-empty, sorted by arrival time, with outputs reset.
    /// Each CPU slice is appended to `timeline` in dispatch order.
    fn run(
        &self,
        processes: &mut [ProcessRecord],
        context_switch_time: i64,
        timeline: &mut Vec<ExecutionSlice>,
    );

    /// Schedules a private copy of `batch`.
    ///
    /// The copy is reset and stable-sorted by arrival time before the run.
    /// An empty batch yields an empty result. A negative context-switch
    /// time is rejected before anything runs.
    fn schedule(
        &self,
        batch: &[ProcessRecord],
        context_switch_time: i64,
    ) -> Result<ScheduledBatch, ValidationError> {
        check_context_switch(context_switch_time)?;

        let mut processes = batch.to_vec();
        processes.iter_mut().for_each(ProcessRecord::reset);
        sort_by_arrival(&mut processes);

        let mut timeline = Vec::new();
        if !processes.is_empty() {
            self.run(&mut processes, context_switch_time, &mut timeline);
        }

        let mut scheduled = ScheduledBatch::new(self.name(), context_switch_time, processes);
        scheduled.timeline = timeline;
        Ok(scheduled)
    }
}

/// Selector for the built-in algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Remaining-Time.
    Srt,
    /// Round-Robin with the configured quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Srt, Algorithm::RoundRobin];

    /// Builds the scheduler, taking algorithm-specific parameters from `config`.
    pub fn scheduler(
        &self,
        config: &SimulationConfig,
    ) -> Result<Box<dyn CpuScheduler>, ValidationError> {
        Ok(match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Srt => Box::new(Srt),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(config.quantum)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Srt => "SRT",
            Algorithm::RoundRobin => "Round Robin",
        };
        f.write_str(name)
    }
}

/// Runs one algorithm over a private copy of `batch`.
///
/// The whole config is validated first, so a bad quantum is rejected even
/// when the selected algorithm does not use it.
///
/// # Example
///
/// ```
/// use u_procsched::config::SimulationConfig;
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{simulate, Algorithm, BatchMetrics};
///
/// let batch = vec![
///     ProcessRecord::new(1, 0, 5),
///     ProcessRecord::new(2, 1, 3),
///     ProcessRecord::new(3, 2, 8),
/// ];
/// let config = SimulationConfig::new().with_context_switch(0);
///
/// let fcfs = simulate(&batch, Algorithm::Fcfs, &config).unwrap();
/// let metrics = BatchMetrics::of(&fcfs);
/// assert_eq!(metrics.total_waiting_time, 10);
/// ```
pub fn simulate(
    batch: &[ProcessRecord],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<ScheduledBatch, Vec<ValidationError>> {
    config.validate()?;
    run_validated(batch, algorithm, config).map_err(|e| vec![e])
}

/// Runs every algorithm in [`Algorithm::ALL`] order.
///
/// The config is validated once, up front.
pub fn simulate_all(
    batch: &[ProcessRecord],
    config: &SimulationConfig,
) -> Result<Vec<ScheduledBatch>, Vec<ValidationError>> {
    config.validate()?;
    Algorithm::ALL
        .iter()
        .map(|&algorithm| run_validated(batch, algorithm, config))
        .collect::<Result<_, _>>()
        .map_err(|e| vec![e])
}

/// Builds and runs one scheduler; `config` has already passed validation.
fn run_validated(
    batch: &[ProcessRecord],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<ScheduledBatch, ValidationError> {
    algorithm
        .scheduler(config)?
        .schedule(batch, config.context_switch_time)
}

/// Checks the conservation identities on every completed record.
///
/// `turnaround = completion - arrival` and `turnaround = waiting + service`.
pub fn check_conservation(batch: &ScheduledBatch) -> ValidationResult {
    use crate::validation::ValidationErrorKind;

    let errors: Vec<_> = batch
        .processes
        .iter()
        .filter_map(|p| {
            let completion = p.completion_time?;
            let ok = p.turnaround_time == completion - p.arrival_time
                && p.turnaround_time == p.waiting_time + p.service_time();
            (!ok).then(|| {
                ValidationError::new(
                    ValidationErrorKind::Inconsistent,
                    format!("Process {} violates turnaround conservation", p.id),
                )
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
