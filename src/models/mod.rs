//! Simulation domain models.
//!
//! Provides the core data types shared by every scheduling discipline.
//!
//! # Mapping
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Caller-supplied process descriptor (immutable input) |
//! | `Process` | Per-run record with mutable execution state |
//! | `Block` | One contiguous interval during which a process holds the CPU |
//! | `Timeline` | Ordered block sequence for one completed run |
//! | `QueueLevel` | MLFQ priority tier (High = 1, Low = 3) |

mod process;
mod timeline;

pub use process::{Process, ProcessSpec, QueueLevel, Tick};
pub use timeline::{Block, Timeline};
