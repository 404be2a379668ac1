/*!
 * Metrics Aggregation
 * Summary statistics over completed processes and simulation counters
 */

use crate::core::types::SimTime;
use crate::process::types::CompletedProcess;
use serde::{Deserialize, Serialize};

/// Summary statistics for one simulation run
///
/// Recomputed on demand from host-supplied counters; holds no identity of
/// its own and is never persisted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct MetricsSummary {
    pub avg_wait_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Percentage in [0, 100] under correct inputs
    pub cpu_utilization: f64,
    pub context_switches: u64,
    /// Completed processes per unit of simulated time
    pub throughput: f64,
}

/// Summarize a completed-process set and the run's scalar counters
///
/// Turnaround is approximated by burst time: true turnaround needs
/// completion timestamps this aggregator does not receive. Wait and
/// response averages cover only the processes that carry a measurement;
/// with no measurements present they are 0. An empty completed set yields
/// an all-zero summary, context switches included.
///
/// `cpu_utilization` is not clamped; a value outside [0, 100] means the
/// caller passed `cpu_busy_time > total_time`, which is a caller bug.
pub fn summarize(
    completed: &[CompletedProcess],
    total_time: SimTime,
    cpu_busy_time: SimTime,
    context_switches: u64,
) -> MetricsSummary {
    if completed.is_empty() {
        return MetricsSummary::default();
    }

    let avg_turnaround_time =
        completed.iter().map(|p| p.burst_time as f64).sum::<f64>() / completed.len() as f64;

    let avg_wait_time = mean_of_present(completed.iter().map(|p| p.wait_time));
    let avg_response_time = mean_of_present(completed.iter().map(|p| p.response_time));

    let (cpu_utilization, throughput) = if total_time > 0 {
        (
            cpu_busy_time as f64 / total_time as f64 * 100.0,
            completed.len() as f64 / total_time as f64,
        )
    } else {
        (0.0, 0.0)
    };

    MetricsSummary {
        avg_wait_time,
        avg_turnaround_time,
        avg_response_time,
        cpu_utilization,
        context_switches,
        throughput,
    }
}

/// Mean over the measurements that are present, 0 when none are
fn mean_of_present(values: impl Iterator<Item = Option<SimTime>>) -> f64 {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0u32), |(sum, count), v| (sum + v as f64, count + 1));

    if count > 0 {
        sum / f64::from(count)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_set_is_all_zero() {
        let summary = summarize(&[], 100, 0, 7);
        assert_eq!(summary, MetricsSummary::default());
        // Context switches are zeroed too, not passed through
        assert_eq!(summary.context_switches, 0);
    }

    #[test]
    fn test_turnaround_is_mean_burst() {
        let completed = [
            CompletedProcess::new(1, 4),
            CompletedProcess::new(2, 6),
            CompletedProcess::new(3, 8),
        ];
        let summary = summarize(&completed, 20, 18, 2);
        assert_eq!(summary.avg_turnaround_time, 6.0);
        assert_eq!(summary.context_switches, 2);
    }

    #[test]
    fn test_wait_and_response_default_to_zero() {
        let completed = [CompletedProcess::new(1, 4), CompletedProcess::new(2, 6)];
        let summary = summarize(&completed, 10, 10, 0);
        assert_eq!(summary.avg_wait_time, 0.0);
        assert_eq!(summary.avg_response_time, 0.0);
    }

    #[test]
    fn test_wait_and_response_average_present_measurements() {
        let completed = [
            CompletedProcess::new(1, 4).with_wait_time(2).with_response_time(1),
            CompletedProcess::new(2, 6).with_wait_time(6),
            CompletedProcess::new(3, 2),
        ];
        let summary = summarize(&completed, 12, 12, 2);
        // Only processes carrying a measurement enter the average
        assert_eq!(summary.avg_wait_time, 4.0);
        assert_eq!(summary.avg_response_time, 1.0);
    }

    #[test]
    fn test_utilization_and_throughput() {
        let completed = [CompletedProcess::new(1, 5), CompletedProcess::new(2, 5)];
        let summary = summarize(&completed, 20, 10, 1);
        assert_eq!(summary.cpu_utilization, 50.0);
        assert_eq!(summary.throughput, 0.1);
    }

    #[test]
    fn test_zero_total_time_divides_safely() {
        let completed = [CompletedProcess::new(1, 5)];
        let summary = summarize(&completed, 0, 0, 0);
        assert_eq!(summary.cpu_utilization, 0.0);
        assert_eq!(summary.throughput, 0.0);
        // Per-process averages are still computed
        assert_eq!(summary.avg_turnaround_time, 5.0);
    }

    #[test]
    fn test_full_utilization_run() {
        let completed = [CompletedProcess::new(1, 10)];
        let summary = summarize(&completed, 10, 10, 0);
        assert_eq!(summary.cpu_utilization, 100.0);
    }

    #[test]
    fn test_summary_serializes_snake_case() {
        let summary = summarize(&[CompletedProcess::new(1, 4)], 8, 4, 1);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["avg_turnaround_time"], 4.0);
        assert_eq!(json["cpu_utilization"], 50.0);
        assert_eq!(json["context_switches"], 1);
    }
}
