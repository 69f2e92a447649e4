//! Text rendering of scheduled batches.
//!
//! Produces the per-process table, the aggregate summary and an optional
//! dispatch timeline. Column widths are presentation only.

use std::fmt::Write;

use serde::Serialize;

use crate::models::ScheduledBatch;
use crate::scheduler::BatchMetrics;

const HEADERS: [&str; 7] = [
    "PID",
    "Arrival Time",
    "Burst Time",
    "Completion Time",
    "Turnaround Time",
    "Waiting Time",
    "Response Time",
];

/// Renders the per-process table.
pub fn render_table(batch: &ScheduledBatch) -> String {
    let widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    let header = HEADERS.join(" | ");
    let rule = "-".repeat(header.len());

    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{rule}");

    for p in &batch.processes {
        let completion = p
            .completion_time
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let cells = [
            p.id.to_string(),
            p.arrival_time.to_string(),
            p.burst_time.to_string(),
            completion,
            p.turnaround_time.to_string(),
            p.waiting_time.to_string(),
            p.response_time.to_string(),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", row.join(" | "));
    }

    let _ = writeln!(out, "{rule}");
    out
}

/// Renders the averages and CPU utilization.
pub fn render_summary(metrics: &BatchMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Average Turnaround Time: {}",
        number(metrics.avg_turnaround_time)
    );
    let _ = writeln!(out, "Average Waiting Time: {}", number(metrics.avg_waiting_time));
    let _ = writeln!(
        out,
        "Average Response Time: {}",
        number(metrics.avg_response_time)
    );
    let _ = writeln!(out, "CPU Utilization: {}", percent(metrics.cpu_utilization_pct));
    out
}

/// Renders the CPU timeline, one slice per line, with idle and
/// context-switch gaps shown explicitly.
pub fn render_timeline(batch: &ScheduledBatch) -> String {
    let mut out = String::new();
    let mut clock = 0;
    for slice in &batch.timeline {
        if slice.start > clock {
            let _ = writeln!(out, "[{:>5}, {:>5})  --", clock, slice.start);
        }
        let _ = writeln!(
            out,
            "[{:>5}, {:>5})  P{}",
            slice.start, slice.end, slice.process_id
        );
        clock = slice.end;
    }
    out
}

/// Renders a full report: title, table and summary.
pub fn render_report(title: &str, batch: &ScheduledBatch, with_timeline: bool) -> String {
    let metrics = BatchMetrics::of(batch);
    let mut out = format!("{title} Schedule:\n");
    out.push_str(&render_table(batch));
    out.push_str(&render_summary(&metrics));
    if with_timeline {
        out.push_str("Timeline:\n");
        out.push_str(&render_timeline(batch));
    }
    out
}

/// One run in the JSON report: the scheduled batch and its metrics.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    schedule: &'a ScheduledBatch,
    metrics: BatchMetrics,
}

/// Renders scheduled batches as a pretty-printed JSON array.
///
/// Undefined metrics (`NaN`) appear as `null`.
pub fn render_json(batches: &[ScheduledBatch]) -> serde_json::Result<String> {
    let runs: Vec<RunReport<'_>> = batches
        .iter()
        .map(|schedule| RunReport {
            schedule,
            metrics: BatchMetrics::of(schedule),
        })
        .collect();
    serde_json::to_string_pretty(&runs)
}

fn number(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn percent(value: f64) -> String {
    if value.is_nan() {
        "undefined".to_string()
    } else {
        format!("{value:.2}%")
    }
}
