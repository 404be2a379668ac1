/*!
 * Round Robin Tracker
 * Per-process quantum accounting, the engine's only stateful component
 */

use crate::core::types::{Pid, SimTime};
use crate::process::types::ProcessSnapshot;
use ahash::RandomState;
use log::{info, trace};
use std::collections::HashMap;

/// Quantum-usage tracker for Round Robin scheduling
///
/// One instance per simulation run; concurrent simulations must each own
/// their own tracker. Counters are keyed by process id in an unbounded
/// map, so any id is valid — there is no fixed capacity and ids are never
/// wrapped or truncated.
///
/// The host drives the tracker with explicit notifications: `on_tick` for
/// every time unit a process actually executes, `on_context_switch` for
/// every dispatch of a different process. Notifications must reflect real
/// execution order; out-of-order calls corrupt quantum accounting.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinTracker {
    quantum_used: HashMap<Pid, u32, RandomState>,
    last_running: Option<Pid>,
}

impl RoundRobinTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all counters and forget the last-running process
    pub fn reset(&mut self) {
        self.quantum_used.clear();
        self.last_running = None;
        info!("Round Robin tracker reset");
    }

    /// Record one executed time unit for `pid`
    pub fn on_tick(&mut self, pid: Pid) {
        let used = self.quantum_used.entry(pid).or_insert(0);
        *used += 1;
        trace!("Process {} consumed tick ({} used)", pid, *used);
        self.last_running = Some(pid);
    }

    /// Record dispatch of `pid`, starting a fresh time slice
    pub fn on_context_switch(&mut self, pid: Pid) {
        self.quantum_used.insert(pid, 0);
        self.last_running = Some(pid);
        trace!("Context switch to process {}", pid);
    }

    /// Ticks `pid` has consumed since its slice last began or resumed
    pub fn quantum_used(&self, pid: Pid) -> u32 {
        self.quantum_used.get(&pid).copied().unwrap_or(0)
    }

    /// The process that ran on the previous tick, if any
    pub fn last_running(&self) -> Option<Pid> {
        self.last_running
    }

    /// Choose the next process to run
    ///
    /// Continues with the last-running process while its quantum lasts;
    /// otherwise rotates cyclically through the processes eligible right
    /// now, in table order. Rotation is defined over the live eligible set
    /// at the moment of the call, not a separately maintained queue, so
    /// the rotation point can shift as arrivals change the set between
    /// ticks. That is intentional and matches the simulated model this
    /// engine was built against.
    pub fn select_next(
        &self,
        processes: &[ProcessSnapshot],
        now: SimTime,
        quantum: u32,
    ) -> Option<Pid> {
        let eligible: Vec<&ProcessSnapshot> =
            processes.iter().filter(|p| p.is_eligible(now)).collect();

        if eligible.is_empty() {
            return None;
        }

        if let Some(last) = self.last_running {
            // Quantum not yet exhausted: stay with the current process
            if let Some(p) = eligible.iter().find(|p| p.pid == last) {
                if self.quantum_used(last) < quantum && p.remaining_time > 0 {
                    return Some(last);
                }
            }

            // Rotate: next eligible candidate cyclically after the last
            // runner's position
            if eligible.len() > 1 {
                if let Some(idx) = eligible.iter().position(|p| p.pid == last) {
                    let next = (idx + 1) % eligible.len();
                    return Some(eligible[next].pid);
                }
            }
        }

        // No last runner, or it is no longer among the eligible
        Some(eligible[0].pid)
    }

    /// Whether `pid` has used up its time slice
    ///
    /// Tests only the runner's own budget; other candidates are not
    /// consulted.
    pub fn should_preempt(&self, pid: Pid, quantum: u32) -> bool {
        self.quantum_used(pid) >= quantum
    }
}
