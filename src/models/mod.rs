//! CPU scheduling domain models.
//!
//! Provides the data types a scheduling run reads and writes: the process
//! records of a batch, the CPU timeline, and the scheduled batch that
//! bundles them.
//!
//! # Lifecycle
//!
//! Records are created at load time with outputs zeroed. Each scheduling
//! run clones the batch and mutates only its own copy, so runs never share
//! mutable state.

mod process;
mod schedule;
pub mod workload;

pub use process::{sort_by_arrival, ProcessId, ProcessRecord};
pub use schedule::{ExecutionSlice, ScheduledBatch};
