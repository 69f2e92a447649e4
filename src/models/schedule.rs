//! Scheduled batch (solution) model.
//!
//! A scheduled batch is the result of one scheduling run: the run's private
//! copy of the process records with all outputs populated, plus the CPU
//! timeline that produced them.

use serde::{Deserialize, Serialize};

use super::{ProcessId, ProcessRecord};

/// One contiguous interval during which a process holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: ProcessId, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The outcome of running one algorithm over one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledBatch {
    /// Name of the algorithm that produced this batch (e.g. "FCFS").
    pub algorithm: String,
    /// Context-switch overhead the run was charged with.
    pub context_switch_time: i64,
    /// Process records in the run's ordering (arrival order).
    pub processes: Vec<ProcessRecord>,
    /// CPU slices in dispatch order.
    pub timeline: Vec<ExecutionSlice>,
}

impl ScheduledBatch {
    /// Creates a batch with an empty timeline.
    pub fn new(
        algorithm: impl Into<String>,
        context_switch_time: i64,
        processes: Vec<ProcessRecord>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            context_switch_time,
            processes,
            timeline: Vec::new(),
        }
    }

    /// Number of processes in the batch.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the batch has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether every process has a completion time.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(ProcessRecord::is_complete)
    }

    /// Finds the record for a process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process IDs in the order they were dispatched (one entry per slice).
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.timeline.iter().map(|s| s.process_id).collect()
    }

    /// Returns all slices of a given process.
    pub fn slices_for(&self, id: ProcessId) -> Vec<&ExecutionSlice> {
        self.timeline.iter().filter(|s| s.process_id == id).collect()
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(ExecutionSlice::duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(id: ProcessId, arrival: i64, burst: i64, start: i64, end: i64) -> ProcessRecord {
        let mut p = ProcessRecord::new(id, arrival, burst);
        p.mark_dispatched(start);
        p.execute(burst);
        p.complete_at(end);
        p
    }

    #[test]
    fn test_queries() {
        let mut batch = ScheduledBatch::new(
            "FCFS",
            0,
            vec![finished(1, 0, 3, 0, 3), finished(2, 1, 2, 3, 5)],
        );
        batch.timeline.push(ExecutionSlice::new(1, 0, 3));
        batch.timeline.push(ExecutionSlice::new(2, 3, 5));

        assert_eq!(batch.len(), 2);
        assert!(batch.is_complete());
        assert_eq!(batch.busy_time(), 5);
        assert_eq!(batch.dispatch_order(), vec![1, 2]);
        assert_eq!(batch.process(2).map(|p| p.waiting_time), Some(2));
        assert_eq!(batch.slices_for(1).len(), 1);
        assert!(batch.process(9).is_none());
    }

    #[test]
    fn test_empty_batch() {
        let batch = ScheduledBatch::new("RR", 1, Vec::new());
        assert!(batch.is_empty());
        assert!(batch.is_complete());
        assert_eq!(batch.busy_time(), 0);
    }

    #[test]
    fn test_incomplete_batch() {
        let batch = ScheduledBatch::new("SRT", 0, vec![ProcessRecord::new(1, 0, 2)]);
        assert!(!batch.is_complete());
        assert!(batch.timeline.is_empty());
    }

    #[test]
    fn test_serde_json() {
        let batch = ScheduledBatch::new("FCFS", 1, vec![finished(1, 0, 2, 0, 2)]);
        let json = serde_json::to_string(&batch).unwrap();
        let back: ScheduledBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
    }
}
