//! Tasks Module
//!
//! Background maintenance tasks for bundled store implementations.

mod cleanup;

pub use cleanup::spawn_sweeper_task;
