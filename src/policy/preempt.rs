/*!
 * Preemption Evaluators
 * Pure per-policy rules deciding whether the runner must yield
 */

use crate::core::types::SimTime;
use crate::process::types::{ProcessSnapshot, RunningSnapshot};

/// SRTF: preempt iff some other eligible process has strictly less
/// remaining time than the runner
pub fn srtf(running: &RunningSnapshot, processes: &[ProcessSnapshot], now: SimTime) -> bool {
    processes
        .iter()
        .filter(|p| p.is_eligible(now) && p.pid != running.pid)
        .any(|p| p.remaining_time < running.remaining_time)
}

/// Priority: preempt iff some other eligible process has strictly better
/// priority in the configured direction
///
/// Equal priority never preempts.
pub fn priority(
    running: &RunningSnapshot,
    processes: &[ProcessSnapshot],
    now: SimTime,
    high_priority_wins: bool,
) -> bool {
    processes
        .iter()
        .filter(|p| p.is_eligible(now) && p.pid != running.pid)
        .any(|p| {
            if high_priority_wins {
                p.priority > running.priority
            } else {
                p.priority < running.priority
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pid;
    use crate::process::types::ProcessState;

    fn ready(pid: Pid, burst: SimTime) -> ProcessSnapshot {
        ProcessSnapshot::new(pid, 0, burst).with_state(ProcessState::Ready)
    }

    #[test]
    fn test_srtf_preempts_on_strictly_shorter_candidate() {
        let running = RunningSnapshot::new(1, 5, 0);
        assert!(srtf(&running, &[ready(2, 3)], 0));
    }

    #[test]
    fn test_srtf_does_not_preempt_on_equal_remaining() {
        let running = RunningSnapshot::new(1, 5, 0);
        assert!(!srtf(&running, &[ready(2, 5)], 0));
    }

    #[test]
    fn test_srtf_ignores_the_runner_itself() {
        // The table may still carry the runner's row; it must not compare
        // against itself
        let running = RunningSnapshot::new(1, 5, 0);
        let mut own_row = ready(1, 5);
        own_row.remaining_time = 2;
        assert!(!srtf(&running, &[own_row], 0));
    }

    #[test]
    fn test_srtf_ignores_ineligible_candidates() {
        let running = RunningSnapshot::new(1, 5, 0);
        let not_arrived = ProcessSnapshot::new(2, 9, 1).with_state(ProcessState::Ready);
        let completed = ready(3, 1).with_state(ProcessState::Completed);
        assert!(!srtf(&running, &[not_arrived, completed], 0));
    }

    #[test]
    fn test_priority_preempts_in_configured_direction() {
        let running = RunningSnapshot::new(1, 5, 4);
        let higher = [ready(2, 5).with_priority(7)];
        let lower = [ready(2, 5).with_priority(2)];

        assert!(priority(&running, &higher, 0, true));
        assert!(!priority(&running, &lower, 0, true));
        assert!(priority(&running, &lower, 0, false));
        assert!(!priority(&running, &higher, 0, false));
    }

    #[test]
    fn test_priority_equal_does_not_preempt() {
        let running = RunningSnapshot::new(1, 5, 4);
        let equal = [ready(2, 5).with_priority(4)];
        assert!(!priority(&running, &equal, 0, true));
        assert!(!priority(&running, &equal, 0, false));
    }
}
