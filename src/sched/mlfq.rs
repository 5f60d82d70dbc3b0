//! Multi-level feedback queue.
//!
//! Three FIFO queues with fixed per-level quantums. Each process enters
//! the queue named by its `initial_queue` when it arrives — arrivals are
//! not forced to the top level. Dispatch always serves the
//! highest-priority non-empty queue; a process that consumes its entire
//! quantum without finishing is demoted one level, capped at the lowest.
//! Arrivals that land during a slice are admitted before the incumbent is
//! requeued, so they sit ahead of it at the same level.
//!
//! # Reference
//! Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8:
//! Multi-Level Feedback

use std::collections::VecDeque;

use crate::models::{Block, Process, QueueLevel, Tick, Timeline};

pub(crate) fn run(processes: &mut [Process], quantums: [Tick; 3]) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: Tick = 0;

    let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
    arrival_order.sort_by_key(|&i| processes[i].arrival);

    let mut admitted = vec![false; processes.len()];
    let mut queues: [VecDeque<usize>; 3] = Default::default();

    while processes.iter().any(|p| p.remaining > 0) {
        admit(processes, &arrival_order, &mut admitted, &mut queues, clock);

        let Some((level, i)) = take_next(&mut queues) else {
            match next_pending_arrival(processes, &admitted) {
                Some(next) => clock = next,
                None => break,
            }
            continue;
        };

        let quantum = quantums[level.index()];
        let slice = quantum.min(processes[i].remaining);
        timeline.push(
            Block::new(processes[i].id.clone(), clock, clock + slice).with_queue(level, slice),
        );
        clock += slice;
        processes[i].execute(slice);

        // Mid-slice arrivals go to their own queues ahead of the incumbent.
        admit(processes, &arrival_order, &mut admitted, &mut queues, clock);

        if processes[i].is_finished() {
            processes[i].complete(clock);
            processes[i].final_queue = Some(level);
        } else if slice == quantum {
            // Quantum exhausted with work left: one level down.
            queues[level.demoted().index()].push_back(i);
        } else {
            // A slice currently ends only at quantum expiry or completion,
            // so this arm is idle; it pins the requeue level should a
            // mid-slice interrupt path ever cut a slice short.
            queues[level.index()].push_back(i);
        }
    }

    timeline
}

/// Admits every not-yet-admitted process that has arrived by `clock` into
/// the queue named by its `initial_queue`, in arrival order.
fn admit(
    processes: &[Process],
    arrival_order: &[usize],
    admitted: &mut [bool],
    queues: &mut [VecDeque<usize>; 3],
    clock: Tick,
) {
    for &i in arrival_order {
        if !admitted[i] && processes[i].arrival <= clock && processes[i].remaining > 0 {
            admitted[i] = true;
            queues[processes[i].initial_queue.index()].push_back(i);
        }
    }
}

const LEVELS: [QueueLevel; 3] = [QueueLevel::High, QueueLevel::Medium, QueueLevel::Low];

/// Pops the head of the highest-priority non-empty queue.
fn take_next(queues: &mut [VecDeque<usize>; 3]) -> Option<(QueueLevel, usize)> {
    LEVELS
        .into_iter()
        .find_map(|level| queues[level.index()].pop_front().map(|i| (level, i)))
}

fn next_pending_arrival(processes: &[Process], admitted: &[bool]) -> Option<Tick> {
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| !admitted[i] && p.remaining > 0)
        .map(|(_, p)| p.arrival)
        .min()
}
