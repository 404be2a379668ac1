/*!
 * Decision Engine
 * Validated facade binding a policy to its tracker state, one per run
 */

use crate::core::types::{EngineResult, Pid, SimTime};
use crate::policy::{self, Policy, PolicyParams, RoundRobinTracker};
use crate::process::types::{ProcessSnapshot, RunningSnapshot};
use log::info;

/// Scheduling-policy decision engine
///
/// Owns the Round Robin tracker for exactly one simulation run, so
/// concurrent simulations each construct their own engine. Configuration
/// is validated at construction; the per-tick calls are then infallible.
///
/// The host drives the engine each tick: `select_next` for a candidate,
/// `should_preempt` to decide whether the runner yields, and (under Round
/// Robin) `on_tick`/`on_context_switch` notifications as execution
/// actually happens.
#[derive(Debug, Clone)]
pub struct Engine {
    policy: Policy,
    params: PolicyParams,
    tracker: RoundRobinTracker,
}

impl Engine {
    /// Create an engine for one simulation run
    ///
    /// Fails fast on invalid configuration (zero quantum, parameters that
    /// do not belong to the policy).
    pub fn new(policy: Policy, params: PolicyParams) -> EngineResult<Self> {
        params.validate(policy)?;
        info!("Engine initialized: policy={:?}, params={:?}", policy, params);

        Ok(Self {
            policy,
            params,
            tracker: RoundRobinTracker::new(),
        })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn params(&self) -> PolicyParams {
        self.params
    }

    /// Switch policy mid-run, discarding tracker state
    pub fn set_policy(&mut self, policy: Policy, params: PolicyParams) -> EngineResult<()> {
        params.validate(policy)?;
        info!(
            "Engine policy change: {:?} -> {:?} (tracker state discarded)",
            self.policy, policy
        );

        self.policy = policy;
        self.params = params;
        self.tracker.reset();
        Ok(())
    }

    /// Choose the next process to run, or `None` if nothing is eligible
    pub fn select_next(&self, processes: &[ProcessSnapshot], now: SimTime) -> Option<Pid> {
        policy::select_next(self.policy, &self.tracker, processes, now, &self.params)
            .unwrap_or_else(|_| unreachable!("params validated at construction"))
    }

    /// Decide whether the running process must yield this tick
    pub fn should_preempt(
        &self,
        running: Option<&RunningSnapshot>,
        processes: &[ProcessSnapshot],
        now: SimTime,
    ) -> bool {
        policy::should_preempt(
            self.policy,
            &self.tracker,
            running,
            processes,
            now,
            &self.params,
        )
        .unwrap_or_else(|_| unreachable!("params validated at construction"))
    }

    /// Notify one executed time unit for `pid` (Round Robin accounting)
    pub fn on_tick(&mut self, pid: Pid) {
        self.tracker.on_tick(pid);
    }

    /// Notify dispatch of `pid` (Round Robin accounting)
    pub fn on_context_switch(&mut self, pid: Pid) {
        self.tracker.on_context_switch(pid);
    }

    /// Reset tracker state at simulation start
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Direct access to the Round Robin tracker
    pub fn tracker(&self) -> &RoundRobinTracker {
        &self.tracker
    }
}
