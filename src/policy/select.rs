/*!
 * Policy Selectors
 * Pure per-policy selection rules over process snapshots
 */

use crate::core::types::{Pid, Priority, SimTime};
use crate::process::types::ProcessSnapshot;

/// FCFS: earliest arrival among eligible processes
///
/// Ties break to the first process encountered in table order; the strict
/// comparison below is what makes that deterministic.
pub fn fcfs(processes: &[ProcessSnapshot], now: SimTime) -> Option<Pid> {
    let mut best: Option<(Pid, SimTime)> = None;

    for p in processes.iter().filter(|p| p.is_eligible(now)) {
        if best.map_or(true, |(_, arrival)| p.arrival_time < arrival) {
            best = Some((p.pid, p.arrival_time));
        }
    }

    best.map(|(pid, _)| pid)
}

/// SJF: smallest remaining time among eligible processes
///
/// Remaining time equals burst time for processes that have not started,
/// so this is the classic shortest-job rule at dispatch. First encountered
/// wins ties.
pub fn sjf(processes: &[ProcessSnapshot], now: SimTime) -> Option<Pid> {
    let mut best: Option<(Pid, SimTime)> = None;

    for p in processes.iter().filter(|p| p.is_eligible(now)) {
        if best.map_or(true, |(_, remaining)| p.remaining_time < remaining) {
            best = Some((p.pid, p.remaining_time));
        }
    }

    best.map(|(pid, _)| pid)
}

/// SRTF: same selection rule as SJF, invoked every tick
///
/// Preemption is what distinguishes SRTF; see `preempt::srtf`.
pub fn srtf(processes: &[ProcessSnapshot], now: SimTime) -> Option<Pid> {
    sjf(processes, now)
}

/// Priority: extreme priority in the configured direction
///
/// `high_priority_wins` selects whether a larger or smaller number is
/// better. Any eligible candidate beats "no candidate yet"; ties break to
/// the first encountered in table order.
pub fn priority(
    processes: &[ProcessSnapshot],
    now: SimTime,
    high_priority_wins: bool,
) -> Option<Pid> {
    let mut best: Option<(Pid, Priority)> = None;

    for p in processes.iter().filter(|p| p.is_eligible(now)) {
        let better = best.map_or(true, |(_, prio)| {
            if high_priority_wins {
                p.priority > prio
            } else {
                p.priority < prio
            }
        });
        if better {
            best = Some((p.pid, p.priority));
        }
    }

    best.map(|(pid, _)| pid)
}
