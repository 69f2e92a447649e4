//! Round-Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every arrived process into a FIFO ready queue, in arrival order.
//! 2. If the queue is empty, idle for one time unit.
//! 3. Pop the head and run it for `min(quantum, remaining)` units.
//! 4. If it still has work, admit processes that arrived during the slice
//!    first, then re-enqueue it at the tail.
//! 5. Charge the context-switch cost after every slice.
//!
//! Newly arrived processes are queued ahead of the returning process.
//!
//! # Complexity
//! O(S + I + n), S = number of slices, I = idle time units.

use std::collections::VecDeque;

use log::{debug, trace};

use super::CpuScheduler;
use crate::config::check_quantum;
use crate::models::{ExecutionSlice, ProcessRecord};
use crate::validation::ValidationError;

/// Round-Robin with a fixed quantum.
///
/// # Example
///
/// ```
/// use u_procsched::models::ProcessRecord;
/// use u_procsched::scheduler::{CpuScheduler, RoundRobin};
///
/// let rr = RoundRobin::new(2).unwrap();
/// let batch = vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(2, 0, 2)];
/// let result = rr.schedule(&batch, 0).unwrap();
/// assert_eq!(result.dispatch_order(), vec![1, 2, 1]);
///
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler. Rejects a non-positive quantum.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        check_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// The time slice.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Ready queue plus the admission cursor into the arrival-ordered batch.
struct ReadyQueue {
    queue: VecDeque<usize>,
    next_arrival: usize,
}

impl ReadyQueue {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            next_arrival: 0,
        }
    }

    /// Admits arrived processes in order. Zero-work processes never enter
    /// the queue; they complete at their arrival time. Returns how many
    /// completed.
    fn admit(&mut self, processes: &mut [ProcessRecord], now: i64) -> usize {
        let mut settled = 0;
        while let Some(p) = processes.get_mut(self.next_arrival) {
            if !p.has_arrived(now) {
                break;
            }
            if p.remaining_time == 0 {
                p.complete_at(p.arrival_time);
                debug!("RR: P{} has no work, completed at t={}", p.id, p.arrival_time);
                settled += 1;
            } else {
                self.queue.push_back(self.next_arrival);
            }
            self.next_arrival += 1;
        }
        settled
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(
        &self,
        processes: &mut [ProcessRecord],
        context_switch_time: i64,
        timeline: &mut Vec<ExecutionSlice>,
    ) {
        let mut ready = ReadyQueue::new(processes.len());
        let mut remaining = processes.len();
        let mut current_time = 0;

        while remaining > 0 {
            remaining -= ready.admit(processes, current_time);
            if remaining == 0 {
                break;
            }

            let Some(idx) = ready.queue.pop_front() else {
                current_time += 1;
                continue;
            };

            let process = &mut processes[idx];
            process.mark_dispatched(current_time);
            let start = current_time;
            current_time += process.execute(self.quantum);
            timeline.push(ExecutionSlice::new(process.id, start, current_time));
            trace!("RR: P{} ran [{}, {})", process.id, start, current_time);

            if process.remaining_time == 0 {
                process.complete_at(current_time);
                debug!("RR: P{} completed at t={}", process.id, current_time);
                remaining -= 1;
            } else {
                remaining -= ready.admit(processes, current_time);
                ready.queue.push_back(idx);
            }

            current_time += context_switch_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduledBatch;
    use crate::validation::ValidationErrorKind;

    fn batch(triples: &[(i64, i64, i64)]) -> Vec<ProcessRecord> {
        triples
            .iter()
            .map(|&(id, at, bt)| ProcessRecord::new(id, at, bt))
            .collect()
    }

    fn completion(result: &ScheduledBatch, id: i64) -> i64 {
        result.process(id).and_then(|p| p.completion_time).unwrap()
    }

    #[test]
    fn test_rr_rejects_degenerate_quantum() {
        let err = RoundRobin::new(0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvalidQuantum);
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::new(3).unwrap().quantum(), 3);
    }

    #[test]
    fn test_rr_reference_scenario() {
        let rr = RoundRobin::new(2).unwrap();
        let result = rr
            .schedule(&batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 8)]), 0)
            .unwrap();

        assert_eq!(result.dispatch_order(), vec![1, 2, 3, 1, 2, 3, 1, 3, 3]);
        assert_eq!(completion(&result, 1), 12);
        assert_eq!(completion(&result, 2), 9);
        assert_eq!(completion(&result, 3), 16);

        let waits: Vec<_> = result.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![7, 5, 6]);
        let responses: Vec<_> = result.processes.iter().map(|p| p.response_time).collect();
        assert_eq!(responses, vec![0, 1, 2]);
    }

    #[test]
    fn test_rr_arrivals_queue_ahead_of_returning_process() {
        // P2 arrives exactly when P1's slice ends: it runs before P1 resumes
        let rr = RoundRobin::new(2).unwrap();
        let result = rr.schedule(&batch(&[(1, 0, 4), (2, 2, 1)]), 0).unwrap();
        assert_eq!(result.dispatch_order(), vec![1, 2, 1]);
    }

    #[test]
    fn test_rr_context_switch_after_every_slice() {
        let rr = RoundRobin::new(2).unwrap();
        let result = rr.schedule(&batch(&[(1, 0, 3), (2, 0, 2)]), 1).unwrap();
        let spans: Vec<_> = result.timeline.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 2), (3, 5), (6, 7)]);
        assert_eq!(completion(&result, 2), 5);
        assert_eq!(completion(&result, 1), 7);
    }

    #[test]
    fn test_rr_start_time_is_first_dispatch() {
        let rr = RoundRobin::new(1).unwrap();
        let result = rr.schedule(&batch(&[(1, 0, 3), (2, 0, 3)]), 0).unwrap();
        assert_eq!(result.process(1).unwrap().start_time, Some(0));
        assert_eq!(result.process(2).unwrap().start_time, Some(1));
        assert_eq!(result.slices_for(1).len(), 3);
    }

    #[test]
    fn test_rr_idle_gap() {
        let rr = RoundRobin::new(4).unwrap();
        let result = rr.schedule(&batch(&[(1, 0, 1), (2, 5, 2)]), 0).unwrap();
        let p2 = result.process(2).unwrap();
        assert_eq!(p2.start_time, Some(5));
        assert_eq!(p2.completion_time, Some(7));
    }

    #[test]
    fn test_rr_large_quantum_equals_fcfs() {
        use crate::scheduler::Fcfs;

        let input = batch(&[(1, 0, 5), (2, 1, 3), (3, 2, 8), (4, 20, 2)]);
        let rr = RoundRobin::new(100).unwrap().schedule(&input, 1).unwrap();
        let fcfs = Fcfs.schedule(&input, 1).unwrap();
        assert_eq!(rr.processes, fcfs.processes);
        assert_eq!(rr.timeline, fcfs.timeline);
    }

    #[test]
    fn test_rr_zero_burst_completes_at_arrival() {
        let rr = RoundRobin::new(2).unwrap();
        let result = rr
            .schedule(&batch(&[(1, 0, 3), (2, 1, 0), (3, 9, 0)]), 1)
            .unwrap();
        assert!(result.is_complete());
        // Noticed at t=2 when P1's first slice ends, completed at arrival
        assert_eq!(completion(&result, 2), 1);
        assert_eq!(result.process(2).unwrap().turnaround_time, 0);
        assert_eq!(completion(&result, 3), 9);
        assert!(result.slices_for(2).is_empty());
    }

    #[test]
    fn test_rr_zero_burst_does_not_delay_others() {
        let rr = RoundRobin::new(2).unwrap();
        let result = rr.schedule(&batch(&[(1, 0, 3), (2, 1, 0)]), 1).unwrap();
        assert_eq!(completion(&result, 2), 1);
        // P1: [0,2), switch, [3,4)
        assert_eq!(completion(&result, 1), 4);
        assert_eq!(result.dispatch_order(), vec![1, 1]);
    }
}
