/*!
 * Process Types
 * Snapshot views of host-owned processes
 */

use crate::core::types::{Pid, Priority, SimTime};
use serde::{Deserialize, Serialize};

/// Process state
///
/// Lifecycle transitions belong to the host; the engine only reads states
/// to decide eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process has not yet arrived
    Waiting,
    /// Process is ready to run
    Ready,
    /// Process is currently running
    Running,
    /// Process has finished its burst
    Completed,
}

/// Read view of one process at the current tick
///
/// The engine never mutates process data; the host owns the table and all
/// state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSnapshot {
    pub pid: Pid,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub remaining_time: SimTime,
    pub priority: Priority,
    pub state: ProcessState,
}

impl ProcessSnapshot {
    pub fn new(pid: Pid, arrival_time: SimTime, burst_time: SimTime) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority: 0,
            state: ProcessState::Waiting,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_state(mut self, state: ProcessState) -> Self {
        self.state = state;
        self
    }

    /// A process may be selected only once it has arrived and is ready
    pub fn is_eligible(&self, now: SimTime) -> bool {
        self.arrival_time <= now && self.state == ProcessState::Ready
    }
}

/// The currently running process, as the preemption evaluators see it
///
/// Carries only the fields preemption rules inspect: remaining time for
/// SRTF, priority for Priority scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunningSnapshot {
    pub pid: Pid,
    pub remaining_time: SimTime,
    pub priority: Priority,
}

impl RunningSnapshot {
    pub fn new(pid: Pid, remaining_time: SimTime, priority: Priority) -> Self {
        Self {
            pid,
            remaining_time,
            priority,
        }
    }
}

impl From<&ProcessSnapshot> for RunningSnapshot {
    fn from(p: &ProcessSnapshot) -> Self {
        Self::new(p.pid, p.remaining_time, p.priority)
    }
}

/// Record the metrics aggregator consumes for one finished process
///
/// Wait and response times are optional measured inputs: the host supplies
/// them when it tracks completion timestamps, and the aggregator averages
/// whatever is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompletedProcess {
    pub pid: Pid,
    pub burst_time: SimTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<SimTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<SimTime>,
}

impl CompletedProcess {
    pub fn new(pid: Pid, burst_time: SimTime) -> Self {
        Self {
            pid,
            burst_time,
            wait_time: None,
            response_time: None,
        }
    }

    pub fn with_wait_time(mut self, wait: SimTime) -> Self {
        self.wait_time = Some(wait);
        self
    }

    pub fn with_response_time(mut self, response: SimTime) -> Self {
        self.response_time = Some(response);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_requires_arrival_and_ready() {
        let p = ProcessSnapshot::new(1, 5, 10).with_state(ProcessState::Ready);

        assert!(!p.is_eligible(4)); // Not yet arrived
        assert!(p.is_eligible(5));
        assert!(p.is_eligible(100));
    }

    #[test]
    fn test_eligibility_excludes_non_ready_states() {
        for state in [
            ProcessState::Waiting,
            ProcessState::Running,
            ProcessState::Completed,
        ] {
            let p = ProcessSnapshot::new(1, 0, 10).with_state(state);
            assert!(!p.is_eligible(10), "state {:?} must not be eligible", state);
        }
    }

    #[test]
    fn test_snapshot_serializes_snake_case() {
        let p = ProcessSnapshot::new(3, 1, 4).with_state(ProcessState::Ready);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["arrival_time"], 1);
        assert_eq!(json["state"], "ready");
    }
}
