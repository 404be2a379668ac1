/*!
 * Scheduling-Policy Decision Engine
 *
 * Tick-driven decision core for CPU-scheduling simulations: per-policy
 * selection and preemption rules for FCFS, SJF, SRTF, Priority, and Round
 * Robin, plus summary-statistics aggregation. The host owns the clock, the
 * process table, and all state transitions; this crate only reads process
 * snapshots and answers "who runs next" and "must the runner yield".
 */

pub mod core;
pub mod engine;
pub mod metrics;
pub mod policy;
pub mod process;

// Re-exports
pub use crate::core::{ConfigError, EngineResult, Pid, Priority, SimTime};
pub use engine::Engine;
pub use metrics::{summarize, MetricsSummary};
pub use policy::{select_next, should_preempt, Policy, PolicyParams, RoundRobinTracker};
pub use process::{CompletedProcess, ProcessSnapshot, ProcessState, RunningSnapshot};
