//! CPU scheduling simulator.
//!
//! Simulates classic scheduling disciplines over a finite set of synthetic
//! processes on a discrete integer clock, producing the execution timeline
//! and the performance metrics that result from each discipline.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `Block`,
//!   `Timeline`, `QueueLevel`
//! - **`sched`**: The scheduling engine — FCFS, SJF, SRT, round robin,
//!   and multi-level feedback queue
//! - **`metrics`**: Per-process and aggregate performance numbers derived
//!   from a completed run
//! - **`validation`**: Input integrity checks (duplicate IDs, zero bursts)
//!
//! # Architecture
//!
//! Every run is a self-contained, synchronous computation: `sched::run`
//! builds its own `Process` records from the caller's `ProcessSpec`s, so
//! repeated or concurrent runs never observe each other's mutations. The
//! engine assumes well-formed input — gate untrusted descriptors through
//! [`validation::validate_specs`] first.
//!
//! ```
//! use sched_sim::models::ProcessSpec;
//! use sched_sim::metrics::RunMetrics;
//! use sched_sim::sched::{self, Algorithm, SimConfig};
//!
//! let specs = vec![
//!     ProcessSpec::new("P1", 0, 4),
//!     ProcessSpec::new("P2", 1, 3),
//!     ProcessSpec::new("P3", 2, 1),
//! ];
//!
//! let outcome = sched::run(Algorithm::Fcfs, &specs, &SimConfig::default());
//! let merged = outcome.timeline.merged();
//! let metrics = RunMetrics::calculate(&outcome.processes, &merged);
//! assert_eq!(metrics.total_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7-8 (Scheduling, MLFQ)

pub mod metrics;
pub mod models;
pub mod sched;
pub mod validation;
