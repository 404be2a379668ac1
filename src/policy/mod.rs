/*!
 * Scheduling Policies
 * Policy identifiers, per-policy parameters, and dispatch over the
 * selector and preemption-evaluator sets
 */

use crate::core::errors::ConfigError;
use crate::core::types::{EngineResult, Pid, SimTime};
use crate::process::types::{ProcessSnapshot, RunningSnapshot};
use serde::{Deserialize, Serialize};

pub mod preempt;
pub mod round_robin;
pub mod select;

pub use round_robin::RoundRobinTracker;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First come, first served (non-preemptive)
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Shortest remaining time first (preemptive SJF)
    Srtf,
    /// Priority scheduling (preemptive, configurable direction)
    Priority,
    /// Round-robin with fixed time quantum
    RoundRobin,
}

impl Policy {
    pub fn is_preemptive(self) -> bool {
        matches!(self, Policy::Srtf | Policy::Priority | Policy::RoundRobin)
    }
}

/// Per-policy configuration supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "params", rename_all = "snake_case")]
pub enum PolicyParams {
    /// FCFS, SJF, and SRTF take no parameters
    None,
    /// Priority direction: true means a higher number wins
    Priority { high_priority_wins: bool },
    /// Round Robin time slice, in ticks; must be positive
    RoundRobin { quantum: u32 },
}

impl PolicyParams {
    /// Check that these parameters belong to `policy` and are in range
    pub fn validate(&self, policy: Policy) -> EngineResult<()> {
        match (policy, self) {
            (Policy::Fcfs | Policy::Sjf | Policy::Srtf, PolicyParams::None) => Ok(()),
            (Policy::Priority, PolicyParams::Priority { .. }) => Ok(()),
            (Policy::RoundRobin, PolicyParams::RoundRobin { quantum: 0 }) => {
                Err(ConfigError::InvalidQuantum(0))
            }
            (Policy::RoundRobin, PolicyParams::RoundRobin { .. }) => Ok(()),
            (Policy::Fcfs | Policy::Sjf | Policy::Srtf, _) => Err(ConfigError::ParamsMismatch {
                policy,
                expected: "PolicyParams::None".into(),
            }),
            (Policy::Priority, _) => Err(ConfigError::ParamsMismatch {
                policy,
                expected: "PolicyParams::Priority".into(),
            }),
            (Policy::RoundRobin, _) => Err(ConfigError::ParamsMismatch {
                policy,
                expected: "PolicyParams::RoundRobin".into(),
            }),
        }
    }
}

/// Select the next process to run under `policy`
///
/// Takes the full process table; eligibility filtering happens here, not in
/// the host. Returns `Ok(None)` when nothing is eligible. Round Robin
/// consults `tracker`; every other policy ignores it.
pub fn select_next(
    policy: Policy,
    tracker: &RoundRobinTracker,
    processes: &[ProcessSnapshot],
    now: SimTime,
    params: &PolicyParams,
) -> EngineResult<Option<Pid>> {
    params.validate(policy)?;

    Ok(match (policy, params) {
        (Policy::Fcfs, _) => select::fcfs(processes, now),
        (Policy::Sjf, _) => select::sjf(processes, now),
        (Policy::Srtf, _) => select::srtf(processes, now),
        (Policy::Priority, PolicyParams::Priority { high_priority_wins }) => {
            select::priority(processes, now, *high_priority_wins)
        }
        (Policy::RoundRobin, PolicyParams::RoundRobin { quantum }) => {
            tracker.select_next(processes, now, *quantum)
        }
        // validate() rejected every other combination
        _ => unreachable!("policy/params combination rejected by validate"),
    })
}

/// Decide whether the running process must yield this tick
///
/// `running = None` means the CPU is idle; nothing to preempt. Round Robin
/// consults `tracker`; every other policy ignores it.
pub fn should_preempt(
    policy: Policy,
    tracker: &RoundRobinTracker,
    running: Option<&RunningSnapshot>,
    processes: &[ProcessSnapshot],
    now: SimTime,
    params: &PolicyParams,
) -> EngineResult<bool> {
    params.validate(policy)?;

    let Some(running) = running else {
        return Ok(false);
    };

    Ok(match (policy, params) {
        (Policy::Fcfs | Policy::Sjf, _) => false,
        (Policy::Srtf, _) => preempt::srtf(running, processes, now),
        (Policy::Priority, PolicyParams::Priority { high_priority_wins }) => {
            preempt::priority(running, processes, now, *high_priority_wins)
        }
        (Policy::RoundRobin, PolicyParams::RoundRobin { quantum }) => {
            tracker.should_preempt(running.pid, *quantum)
        }
        _ => unreachable!("policy/params combination rejected by validate"),
    })
}
