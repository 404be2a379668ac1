/*!
 * Core Types
 * Common types used across the engine
 */

/// Process ID type
///
/// Ids are non-negative by construction; the host-boundary sentinel for
/// "no process" (`-1` in the original interop surface) maps to `None` in
/// `Option<Pid>` returns.
pub type Pid = u32;

/// Discrete simulated time, in ticks since simulation start
pub type SimTime = u64;

/// Priority level; ordering direction is policy configuration, not data
pub type Priority = i32;

/// Common result type for engine operations
pub type EngineResult<T> = Result<T, super::errors::ConfigError>;
