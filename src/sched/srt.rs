//! Shortest-remaining-time, preemptive.
//!
//! The workload is re-examined at every unit of simulated time: the
//! arrived process with the least remaining work executes for exactly one
//! unit and a one-unit block is emitted. That stepping is what allows
//! preemption at any whole-unit point; resolution is intentionally coarse.
//! Ties go to the earliest position in the input list.

use crate::models::{Block, Process, Timeline};

pub(crate) fn run(processes: &mut [Process]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let picked = (0..processes.len())
            .filter(|&i| processes[i].remaining > 0 && processes[i].arrival <= clock)
            .min_by_key(|&i| processes[i].remaining);

        let Some(i) = picked else {
            if let Some(next) = processes
                .iter()
                .filter(|p| p.remaining > 0)
                .map(|p| p.arrival)
                .min()
            {
                clock = next;
            }
            continue;
        };

        let process = &mut processes[i];
        timeline.push(Block::new(process.id.clone(), clock, clock + 1));
        process.execute(1);
        clock += 1;

        if process.is_finished() {
            process.complete(clock);
            completed += 1;
        }
    }

    timeline
}
