/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::policy::Policy;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
///
/// The engine is pure computation over host-validated snapshots, so the
/// only failure mode is a caller contract violation in the configuration:
/// a zero quantum, or parameters that do not belong to the requested
/// policy. These fail fast rather than degrade into meaningless decisions.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Round Robin quantum must be positive, got {0}")]
    #[diagnostic(
        code(sched::invalid_quantum),
        help("Configure PolicyParams::RoundRobin with quantum >= 1.")
    )]
    InvalidQuantum(u32),

    #[error("Parameters do not match policy {policy:?}: expected {expected}")]
    #[diagnostic(
        code(sched::params_mismatch),
        help("FCFS/SJF/SRTF take PolicyParams::None, Priority takes PolicyParams::Priority, Round Robin takes PolicyParams::RoundRobin.")
    )]
    ParamsMismatch { policy: Policy, expected: String },
}
