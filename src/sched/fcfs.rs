//! First-come-first-served.
//!
//! Processes run to completion in arrival order, ties broken by input
//! order. The clock waits out any gap before a late arrival.

use crate::models::{Block, Process, Tick, Timeline};

pub(crate) fn run(processes: &mut [Process]) -> Timeline {
    // Sort an index view, not the records: the output list keeps input order.
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut timeline = Timeline::new();
    let mut clock: Tick = 0;

    for &i in &order {
        let process = &mut processes[i];
        clock = clock.max(process.arrival);
        let end = clock + process.burst;
        timeline.push(Block::new(process.id.clone(), clock, end));
        process.execute(process.burst);
        process.complete(end);
        clock = end;
    }

    timeline
}
