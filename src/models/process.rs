//! Process (job) model.
//!
//! A process record carries the static inputs of one job (arrival and burst
//! time) together with the scheduling outputs a run writes into it.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2 (Scheduling Criteria)

use serde::{Deserialize, Serialize};

/// Opaque process identifier, unique within a batch.
pub type ProcessId = i64;

/// A single process to be scheduled.
///
/// Inputs (`id`, `arrival_time`, `burst_time`) never change during a run.
/// Outputs are zeroed at construction and populated by a scheduler; they
/// are only meaningful once [`is_complete`](Self::is_complete) holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Starts at the service time, reaches 0 on completion.
    pub remaining_time: i64,
    /// Time of first dispatch. `None` until the process first runs.
    pub start_time: Option<i64>,
    /// Time the process finished. `None` while unfinished.
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

impl ProcessRecord {
    /// Creates a record with zeroed outputs.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time.max(0),
            start_time: None,
            completion_time: None,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: 0,
        }
    }

    /// CPU time actually consumed by this process.
    ///
    /// Non-positive bursts are treated as zero-duration processes.
    #[inline]
    pub fn service_time(&self) -> i64 {
        self.burst_time.max(0)
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Clears all scheduling outputs, restoring the freshly loaded state.
    pub fn reset(&mut self) {
        self.remaining_time = self.service_time();
        self.start_time = None;
        self.completion_time = None;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.response_time = 0;
    }

    /// Records a dispatch at `now`. Only the first dispatch is kept.
    pub fn mark_dispatched(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Consumes up to `units` of CPU time and returns the amount actually run.
    pub fn execute(&mut self, units: i64) -> i64 {
        let ran = units.clamp(0, self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    /// Marks the process finished at `now` and derives the metrics.
    ///
    /// A process that was never dispatched (zero-duration) starts and
    /// completes at `now`.
    pub fn complete_at(&mut self, now: i64) {
        let start = *self.start_time.get_or_insert(now);
        self.remaining_time = 0;
        self.completion_time = Some(now);
        self.turnaround_time = now - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.service_time();
        self.response_time = start - self.arrival_time;
    }
}

/// Stable-sorts records by arrival time, keeping input order among ties.
pub fn sort_by_arrival(processes: &mut [ProcessRecord]) {
    processes.sort_by_key(|p| p.arrival_time);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroes_outputs() {
        let p = ProcessRecord::new(7, 3, 5);
        assert_eq!(p.remaining_time, 5);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
        assert_eq!(p.turnaround_time, 0);
        assert!(!p.is_complete());
    }

    #[test]
    fn test_non_positive_burst_has_no_work() {
        assert_eq!(ProcessRecord::new(1, 0, 0).remaining_time, 0);
        assert_eq!(ProcessRecord::new(1, 0, -4).remaining_time, 0);
        assert_eq!(ProcessRecord::new(1, 0, -4).service_time(), 0);
    }

    #[test]
    fn test_first_dispatch_only() {
        let mut p = ProcessRecord::new(1, 0, 5);
        p.mark_dispatched(2);
        p.mark_dispatched(6);
        assert_eq!(p.start_time, Some(2));
    }

    #[test]
    fn test_execute_never_goes_negative() {
        let mut p = ProcessRecord::new(1, 0, 3);
        assert_eq!(p.execute(2), 2);
        assert_eq!(p.execute(2), 1);
        assert_eq!(p.remaining_time, 0);
        assert_eq!(p.execute(1), 0);
    }

    #[test]
    fn test_complete_derives_metrics() {
        let mut p = ProcessRecord::new(1, 2, 4);
        p.mark_dispatched(5);
        p.execute(4);
        p.complete_at(11);
        assert_eq!(p.completion_time, Some(11));
        assert_eq!(p.turnaround_time, 9);
        assert_eq!(p.waiting_time, 5);
        assert_eq!(p.response_time, 3);
        assert_eq!(p.turnaround_time, p.waiting_time + p.burst_time);
    }

    #[test]
    fn test_reset() {
        let mut p = ProcessRecord::new(1, 0, 4);
        p.mark_dispatched(0);
        p.execute(4);
        p.complete_at(4);
        p.reset();
        assert_eq!(p, ProcessRecord::new(1, 0, 4));
    }

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let mut batch = vec![
            ProcessRecord::new(1, 4, 1),
            ProcessRecord::new(2, 0, 1),
            ProcessRecord::new(3, 4, 1),
            ProcessRecord::new(4, 0, 1),
        ];
        sort_by_arrival(&mut batch);
        let ids: Vec<_> = batch.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }
}
