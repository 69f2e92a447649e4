//! Scheduling performance metrics.
//!
//! Aggregates the per-process outputs of a scheduled batch.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | CPU Utilization | (Σturnaround - Σwaiting) / completion of last listed process × 100 |
//! | Makespan Utilization | (Σturnaround - Σwaiting) / max(completion) × 100 |
//!
//! # Caveat
//! `cpu_utilization_pct` divides by the completion time of the *last listed*
//! process, not the last to finish. Under preemptive algorithms the two can
//! differ and the figure may exceed 100%. `makespan_utilization_pct` uses the
//! latest completion instead.
//!
//! Undefined values (empty batch, zero denominator) are reported as `NaN`.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, ScheduledBatch};

/// Aggregate performance indicators of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetrics {
    /// Number of processes aggregated.
    pub process_count: usize,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Sum of response times.
    pub total_response_time: i64,
    /// Mean waiting time. `NaN` for an empty batch.
    pub avg_waiting_time: f64,
    /// Mean turnaround time. `NaN` for an empty batch.
    pub avg_turnaround_time: f64,
    /// Mean response time. `NaN` for an empty batch.
    pub avg_response_time: f64,
    /// Latest completion time, `None` for an empty batch.
    pub makespan: Option<i64>,
    /// Utilization relative to the last listed process's completion (%).
    pub cpu_utilization_pct: f64,
    /// Utilization relative to the makespan (%).
    pub makespan_utilization_pct: f64,
}

impl BatchMetrics {
    /// Computes metrics from fully scheduled process records.
    ///
    /// Records without a completion time contribute their zeroed outputs.
    pub fn calculate(processes: &[ProcessRecord]) -> Self {
        let process_count = processes.len();
        let total_waiting_time: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround_time: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_response_time: i64 = processes.iter().map(|p| p.response_time).sum();

        let mean = |total: i64| {
            if process_count == 0 {
                f64::NAN
            } else {
                total as f64 / process_count as f64
            }
        };

        let busy = (total_turnaround_time - total_waiting_time) as f64;
        let last_listed = processes.last().and_then(|p| p.completion_time);
        let makespan = processes.iter().filter_map(|p| p.completion_time).max();

        Self {
            process_count,
            total_waiting_time,
            total_turnaround_time,
            total_response_time,
            avg_waiting_time: mean(total_waiting_time),
            avg_turnaround_time: mean(total_turnaround_time),
            avg_response_time: mean(total_response_time),
            makespan,
            cpu_utilization_pct: percentage(busy, last_listed),
            makespan_utilization_pct: percentage(busy, makespan),
        }
    }

    /// Computes metrics for a scheduled batch.
    pub fn of(batch: &ScheduledBatch) -> Self {
        Self::calculate(&batch.processes)
    }

    /// Whether the utilization figures are defined.
    pub fn has_utilization(&self) -> bool {
        !self.cpu_utilization_pct.is_nan()
    }
}

fn percentage(busy: f64, horizon: Option<i64>) -> f64 {
    match horizon {
        Some(h) if h > 0 => busy / h as f64 * 100.0,
        _ => f64::NAN,
    }
}
