//! Single-CPU process scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a fixed batch of processes under classical CPU scheduling
//! algorithms and reports per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ExecutionSlice`,
//!   `ScheduledBatch`, synthetic workloads
//! - **`scheduler`**: `CpuScheduler` trait, FCFS / SRT / Round-Robin,
//!   `BatchMetrics`
//! - **`config`**: Simulation parameters (context-switch time, quantum)
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times)
//! - **`io`**: Whitespace-triple loader and text reports
//!
//! # Example
//!
//! ```
//! use u_procsched::config::SimulationConfig;
//! use u_procsched::io::parse_processes;
//! use u_procsched::scheduler::{simulate_all, BatchMetrics};
//!
//! let batch = parse_processes("1 0 5\n2 1 3\n3 2 8\n");
//! let config = SimulationConfig::new().with_context_switch(0).with_quantum(2);
//!
//! for result in simulate_all(&batch, &config).unwrap() {
//!     let metrics = BatchMetrics::of(&result);
//!     assert_eq!(metrics.process_count, 3);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;
