/*!
 * Core Module
 * Shared types and error definitions
 */

pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use types::{EngineResult, Pid, Priority, SimTime};
