//! Shortest-job-first, non-preemptive.
//!
//! At each decision point the arrived, unfinished process with the
//! smallest burst runs to completion. Ties go to the earliest position in
//! the input list (`min_by_key` keeps the first minimum).

use crate::models::{Block, Process, Timeline};

pub(crate) fn run(processes: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let picked = (0..processes.len())
            .filter(|&i| processes[i].finish.is_none() && processes[i].arrival <= clock)
            .min_by_key(|&i| processes[i].burst);

        let Some(i) = picked else {
            // Nothing ready: jump to the next pending arrival.
            if let Some(next) = processes
                .iter()
                .filter(|p| p.finish.is_none())
                .map(|p| p.arrival)
                .min()
            {
                clock = next;
            }
            continue;
        };

        let process = &mut processes[i];
        let end = clock + process.burst;
        timeline.push(Block::new(process.id.clone(), clock, end));
        process.execute(process.burst);
        process.complete(end);
        clock = end;
        completed += 1;
    }

    timeline
}
