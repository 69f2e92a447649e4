//! Shortest-Remaining-Time scheduler (preemptive SJF).
//!
//! # Algorithm
//!
//! Discrete time-step simulation. At every time unit the arrived process
//! with the least remaining work runs for one unit. Ties go to the process
//! listed first in the batch, not to the lowest ID or earliest arrival.
//!
//! The context-switch cost is charged only when a process completes, not on
//! preemption. This is a modelling simplification kept on purpose.
//!
//! # Complexity
//! O(T * n), T = simulated time units, n = batch size (linear scan per unit).
//!
//! # Reference
//! Schrage (1968), optimality of SRPT for mean flow time on a single machine.

use log::{debug, trace};

use super::CpuScheduler;
use crate::models::{ExecutionSlice, ProcessRecord};

/// Shortest-Remaining-Time first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl Srt {
    /// Index of the arrived, unfinished process with the least remaining work.
    fn select(processes: &[ProcessRecord], now: i64) -> Option<usize> {
        // min_by_key keeps the first of equal minima
        processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(now) && p.remaining_time > 0)
            .min_by_key(|(_, p)| p.remaining_time)
            .map(|(i, _)| i)
    }

    /// Completes arrived processes that have no work at their own arrival
    /// time. Returns how many.
    fn settle_zero_work(processes: &mut [ProcessRecord], now: i64) -> usize {
        let mut settled = 0;
        for p in processes
            .iter_mut()
            .filter(|p| p.has_arrived(now) && !p.is_complete() && p.remaining_time == 0)
        {
            p.complete_at(p.arrival_time);
            debug!("SRT: P{} has no work, completed at t={}", p.id, p.arrival_time);
            settled += 1;
        }
        settled
    }
}

impl CpuScheduler for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn run(
        &self,
        processes: &mut [ProcessRecord],
        context_switch_time: i64,
        timeline: &mut Vec<ExecutionSlice>,
    ) {
        let total = processes.len();
        let mut current_time = 0;
        let mut completed = 0;

        while completed < total {
            completed += Self::settle_zero_work(processes, current_time);
            if completed == total {
                break;
            }

            let Some(idx) = Self::select(processes, current_time) else {
                current_time += 1;
                continue;
            };

            let process = &mut processes[idx];
            process.mark_dispatched(current_time);
            process.execute(1);

            match timeline.last_mut() {
                Some(last) if last.process_id == process.id && last.end == current_time => {
                    last.end += 1;
                }
                _ => {
                    trace!("SRT: dispatch P{} at t={}", process.id, current_time);
                    timeline.push(ExecutionSlice::new(process.id, current_time, current_time + 1));
                }
            }
            current_time += 1;

            if process.remaining_time == 0 {
                process.complete_at(current_time);
                debug!("SRT: P{} completed at t={}", process.id, current_time);
                completed += 1;
                current_time += context_switch_time;
            }
        }
    }
}
