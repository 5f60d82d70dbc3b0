//! Run quality metrics.
//!
//! Computes per-process and aggregate performance numbers from a
//! completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish − arrival |
//! | Waiting | turnaround − burst |
//! | Avg Turnaround | Mean turnaround over finished processes |
//! | Avg Waiting | Mean waiting over finished processes |
//! | Total Time | End of the last timeline block |
//!
//! The process list and timeline must come from the *same* run; mixing
//! runs is a caller error.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Tick, Timeline};

/// Derived numbers for one finished process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process label.
    pub process_id: String,
    /// Completion instant.
    pub finish: Tick,
    /// finish − arrival.
    pub turnaround: Tick,
    /// turnaround − burst. Never negative.
    pub waiting: Tick,
}

/// Aggregate metrics for one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Per-process numbers, in input order.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean turnaround over finished processes.
    pub avg_turnaround: f64,
    /// Mean waiting over finished processes.
    pub avg_waiting: f64,
    /// End of the last block.
    pub total_time: Tick,
}

impl RunMetrics {
    /// Computes metrics from a completed run.
    ///
    /// Accepts the merged or the raw timeline — merging does not change
    /// `total_time`. An empty process set yields empty `per_process` and
    /// zero averages; a process without a finish time is skipped and does
    /// not enter the averages.
    pub fn calculate(processes: &[Process], timeline: &Timeline) -> Self {
        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_turnaround: Tick = 0;
        let mut total_waiting: Tick = 0;

        for process in processes {
            if let Some(finish) = process.finish {
                let turnaround = finish - process.arrival;
                let waiting = turnaround - process.burst;
                total_turnaround += turnaround;
                total_waiting += waiting;
                per_process.push(ProcessMetrics {
                    process_id: process.id.clone(),
                    finish,
                    turnaround,
                    waiting,
                });
            }
        }

        let counted = per_process.len();
        let (avg_turnaround, avg_waiting) = if counted == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / counted as f64,
                total_waiting as f64 / counted as f64,
            )
        };

        Self {
            per_process,
            avg_turnaround,
            avg_waiting,
            total_time: timeline.total_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, ProcessSpec};

    fn finished(id: &str, arrival: Tick, burst: Tick, finish: Tick) -> Process {
        let mut p = Process::from_spec(&ProcessSpec::new(id, arrival, burst));
        p.remaining = 0;
        p.finish = Some(finish);
        p
    }

    #[test]
    fn test_fcfs_scenario_numbers() {
        // P1(at=0,bt=4), P2(at=1,bt=3), P3(at=2,bt=1) under FCFS.
        let processes = vec![
            finished("P1", 0, 4, 4),
            finished("P2", 1, 3, 7),
            finished("P3", 2, 1, 8),
        ];
        let mut timeline = Timeline::new();
        timeline.push(Block::new("P1", 0, 4));
        timeline.push(Block::new("P2", 4, 7));
        timeline.push(Block::new("P3", 7, 8));

        let metrics = RunMetrics::calculate(&processes, &timeline);
        let waits: Vec<Tick> = metrics.per_process.iter().map(|m| m.waiting).collect();
        assert_eq!(waits, vec![0, 3, 5]);
        let turnarounds: Vec<Tick> = metrics.per_process.iter().map(|m| m.turnaround).collect();
        assert_eq!(turnarounds, vec![4, 6, 6]);
        assert!((metrics.avg_turnaround - 16.0 / 3.0).abs() < 1e-10);
        assert!((metrics.avg_waiting - 8.0 / 3.0).abs() < 1e-10);
        assert_eq!(metrics.total_time, 8);
    }

    #[test]
    fn test_empty_run() {
        let metrics = RunMetrics::calculate(&[], &Timeline::new());
        assert!(metrics.per_process.is_empty());
        assert_eq!(metrics.avg_turnaround, 0.0);
        assert_eq!(metrics.avg_waiting, 0.0);
        assert_eq!(metrics.total_time, 0);
    }

    #[test]
    fn test_unfinished_process_skipped() {
        let unfinished = Process::from_spec(&ProcessSpec::new("P2", 0, 5));
        let processes = vec![finished("P1", 0, 2, 2), unfinished];
        let mut timeline = Timeline::new();
        timeline.push(Block::new("P1", 0, 2));

        let metrics = RunMetrics::calculate(&processes, &timeline);
        assert_eq!(metrics.per_process.len(), 1);
        assert_eq!(metrics.per_process[0].process_id, "P1");
        assert_eq!(metrics.avg_waiting, 0.0);
    }

    #[test]
    fn test_same_numbers_for_raw_and_merged() {
        let processes = vec![finished("P1", 0, 4, 4)];
        let mut raw = Timeline::new();
        raw.push(Block::new("P1", 0, 2));
        raw.push(Block::new("P1", 2, 4));

        let from_raw = RunMetrics::calculate(&processes, &raw);
        let from_merged = RunMetrics::calculate(&processes, &raw.merged());
        assert_eq!(from_raw, from_merged);
    }
}
