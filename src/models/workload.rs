//! Synthetic workload generation.
//!
//! Produces reproducible random batches for experiments and randomized
//! checks. All generators take the RNG by reference so callers control
//! seeding.

use rand::Rng;

use super::ProcessRecord;

/// Shape of a generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Shortest burst (inclusive, at least 1).
    pub min_burst: i64,
    /// Longest burst (inclusive).
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a spec with arrivals in `[0, 10]` and bursts in `[1, 10]`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }
}

/// Generates a batch with uniform arrivals and bursts.
///
/// Process IDs are `1..=count` in generation order. Degenerate ranges are
/// clamped so every process has `arrival >= 0` and `burst >= 1`.
pub fn random_batch<R: Rng>(rng: &mut R, spec: &WorkloadSpec) -> Vec<ProcessRecord> {
    let max_arrival = spec.max_arrival.max(0);
    let min_burst = spec.min_burst.max(1);
    let max_burst = spec.max_burst.max(min_burst);

    (0..spec.count)
        .map(|i| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            ProcessRecord::new(i as i64 + 1, arrival, burst)
        })
        .collect()
}

/// Generates a batch where each time unit in `[0, ticks)` spawns a process
/// with probability `p_arrival`. Bursts are `short` with probability
/// `p_short`, otherwise `long`.
pub fn bernoulli_batch<R: Rng>(
    rng: &mut R,
    ticks: i64,
    p_arrival: f64,
    p_short: f64,
    short: i64,
    long: i64,
) -> Vec<ProcessRecord> {
    let mut batch = Vec::new();
    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short
            } else {
                long
            };
            batch.push(ProcessRecord::new(batch.len() as i64 + 1, t, burst));
        }
    }
    batch
}
