/*!
 * Process Module
 * Read-only process snapshot types supplied by the host
 */

pub mod types;

pub use types::{CompletedProcess, ProcessSnapshot, ProcessState, RunningSnapshot};
