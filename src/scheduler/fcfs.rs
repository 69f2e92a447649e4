//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! Non-preemptive. Processes run to completion in arrival order; the CPU
//! idles until the next arrival when the queue drains. The context-switch
//! cost is charged after every completion.
//!
//! # Complexity
//! O(n) over an arrival-ordered batch.

use log::{debug, trace};

use super::CpuScheduler;
use crate::models::{ExecutionSlice, ProcessRecord};

/// First-Come-First-Served.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{CpuScheduler, Fcfs};
///
/// let batch = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 1, 3)];
/// let result = Fcfs.schedule(&batch, 0).unwrap();
/// assert_eq!(result.process(2).unwrap().completion_time, Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(
        &self,
        processes: &mut [ProcessRecord],
        context_switch_time: i64,
        timeline: &mut Vec<ExecutionSlice>,
    ) {
        let mut current_time: i64 = 0;

        for process in processes.iter_mut() {
            // Zero-duration: completes on arrival, never dispatched, no switch charged
            if process.remaining_time == 0 {
                process.complete_at(process.arrival_time);
                debug!(
                    "FCFS: P{} has no work, completed at t={}",
                    process.id, process.arrival_time
                );
                continue;
            }

            let start = current_time.max(process.arrival_time);
            let work = process.remaining_time;
            process.mark_dispatched(start);
            current_time = start + process.execute(work);
            timeline.push(ExecutionSlice::new(process.id, start, current_time));
            trace!("FCFS: P{} ran [{}, {})", process.id, start, current_time);

            process.complete_at(current_time);
            debug!("FCFS: P{} completed at t={}", process.id, current_time);

            current_time += context_switch_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(triples: &[(i64, i64, i64)]) -> Vec<ProcessRecord> {
        triples
            .iter()
            .map(|&(id, at, bt)| ProcessRecord::new(id, at, bt))
            .collect()
    }

    #[test]
    fn test_fcfs_reference_scenario() {
        let result = Fcfs
            .schedule(&batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 8)]), 0)
            .unwrap();

        let spans: Vec<_> = result.timeline.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 5), (5, 8), (8, 16)]);

        let waits: Vec<_> = result.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        let turnarounds: Vec<_> = result.processes.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(turnarounds, vec![5, 7, 14]);
    }

    #[test]
    fn test_fcfs_context_switch() {
        let result = Fcfs
            .schedule(&batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 8)]), 1)
            .unwrap();
        let completions: Vec<_> = result
            .processes
            .iter()
            .map(|p| p.completion_time.unwrap())
            .collect();
        assert_eq!(completions, vec![5, 9, 18]);
        let responses: Vec<_> = result.processes.iter().map(|p| p.response_time).collect();
        assert_eq!(responses, vec![0, 5, 8]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        // CPU idles from 2 until P2 arrives at 10
        let result = Fcfs.schedule(&batch(&[(1, 0, 2), (2, 10, 3)]), 1).unwrap();
        let p2 = result.process(2).unwrap();
        assert_eq!(p2.start_time, Some(10));
        assert_eq!(p2.completion_time, Some(13));
        assert_eq!(p2.waiting_time, 0);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_stably() {
        let result = Fcfs
            .schedule(&batch(&[(3, 4, 1), (1, 0, 2), (2, 0, 2)]), 0)
            .unwrap();
        assert_eq!(result.dispatch_order(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fcfs_matches_prefix_sum_reference() {
        let input = batch(&[(1, 0, 4), (2, 1, 2), (3, 9, 3), (4, 9, 1), (5, 20, 5)]);
        let cs = 2;
        let result = Fcfs.schedule(&input, cs).unwrap();

        let mut clock: i64 = 0;
        for p in &result.processes {
            let start = clock.max(p.arrival_time);
            let end = start + p.burst_time;
            assert_eq!(p.start_time, Some(start));
            assert_eq!(p.completion_time, Some(end));
            clock = end + cs;
        }
    }

    #[test]
    fn test_fcfs_zero_burst() {
        let result = Fcfs.schedule(&batch(&[(1, 0, 3), (2, 1, 0), (3, 1, 2)]), 1).unwrap();
        let p2 = result.process(2).unwrap();
        // Arrives while P1 runs, still completes at its arrival
        assert_eq!(p2.start_time, Some(1));
        assert_eq!(p2.completion_time, Some(1));
        assert_eq!(p2.turnaround_time, 0);
        assert_eq!(p2.waiting_time, 0);
        assert!(result.slices_for(2).is_empty());
        // No extra switch charged for P2
        assert_eq!(result.process(3).unwrap().start_time, Some(4));
    }

    #[test]
    fn test_fcfs_zero_burst_during_busy_cpu() {
        let result = Fcfs.schedule(&batch(&[(1, 0, 3), (2, 1, 0)]), 1).unwrap();
        assert_eq!(result.process(2).unwrap().completion_time, Some(1));
        assert_eq!(result.process(1).unwrap().completion_time, Some(3));
        assert_eq!(result.timeline.len(), 1);
    }
}
