//! Round robin.
//!
//! A single FIFO ready queue and a fixed quantum. Admission runs in
//! arrival order both before each dispatch and again the moment a slice
//! ends, so a process that arrives during a slice (or exactly as it ends)
//! enqueues ahead of the requeued incumbent.

use std::collections::VecDeque;

use crate::models::{Block, Process, Tick, Timeline};

pub(crate) fn run(processes: &mut [Process], quantum: Tick) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: Tick = 0;

    let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
    arrival_order.sort_by_key(|&i| processes[i].arrival);

    let mut admitted = vec![false; processes.len()];
    let mut ready: VecDeque<usize> = VecDeque::new();

    while processes.iter().any(|p| p.remaining > 0) {
        admit(processes, &arrival_order, &mut admitted, &mut ready, clock);

        let Some(i) = ready.pop_front() else {
            match next_pending_arrival(processes, &admitted) {
                Some(next) => clock = next,
                None => break,
            }
            continue;
        };

        let slice = quantum.min(processes[i].remaining);
        timeline.push(Block::new(processes[i].id.clone(), clock, clock + slice));
        clock += slice;
        processes[i].execute(slice);

        // New arrivals enqueue ahead of the just-run process.
        admit(processes, &arrival_order, &mut admitted, &mut ready, clock);

        if processes[i].remaining > 0 {
            ready.push_back(i);
        } else {
            processes[i].complete(clock);
        }
    }

    timeline
}

/// Enqueues every not-yet-admitted process that has arrived by `clock`,
/// in arrival order.
fn admit(
    processes: &[Process],
    arrival_order: &[usize],
    admitted: &mut [bool],
    ready: &mut VecDeque<usize>,
    clock: Tick,
) {
    for &i in arrival_order {
        if !admitted[i] && processes[i].arrival <= clock && processes[i].remaining > 0 {
            admitted[i] = true;
            ready.push_back(i);
        }
    }
}

fn next_pending_arrival(processes: &[Process], admitted: &[bool]) -> Option<Tick> {
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| !admitted[i] && p.remaining > 0)
        .map(|(_, p)| p.arrival)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn build(specs: &[ProcessSpec]) -> Vec<Process> {
        specs.iter().map(Process::from_spec).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let mut processes = build(&[
            ProcessSpec::new("P1", 0, 5),
            ProcessSpec::new("P2", 1, 3),
        ]);
        let timeline = run(&mut processes, 2);

        let expected = [
            Block::new("P1", 0, 2),
            Block::new("P2", 2, 4),
            Block::new("P1", 4, 6),
            Block::new("P2", 6, 7),
            Block::new("P1", 7, 8),
        ];
        assert_eq!(timeline.blocks, expected);
        assert_eq!(processes[0].finish, Some(8));
        assert_eq!(processes[1].finish, Some(7));
    }

    #[test]
    fn test_arrival_at_slice_end_precedes_incumbent() {
        // P2 arrives exactly when P1's first slice ends: it must run
        // before P1 gets the CPU back.
        let mut processes = build(&[
            ProcessSpec::new("P1", 0, 4),
            ProcessSpec::new("P2", 2, 2),
        ]);
        let timeline = run(&mut processes, 2);
        assert_eq!(timeline.blocks[0], Block::new("P1", 0, 2));
        assert_eq!(timeline.blocks[1], Block::new("P2", 2, 4));
        assert_eq!(timeline.blocks[2], Block::new("P1", 4, 6));
    }

    #[test]
    fn test_short_final_slice() {
        let mut processes = build(&[ProcessSpec::new("P1", 0, 5)]);
        let timeline = run(&mut processes, 2);
        assert_eq!(timeline.block_count(), 3);
        assert_eq!(timeline.blocks[2], Block::new("P1", 4, 5));
        assert_eq!(timeline.blocks[2].duration(), 1);
    }

    #[test]
    fn test_idle_jump_to_late_arrival() {
        let mut processes = build(&[ProcessSpec::new("P1", 7, 2)]);
        let timeline = run(&mut processes, 2);
        assert_eq!(timeline.blocks[0], Block::new("P1", 7, 9));
    }

    #[test]
    fn test_admission_in_arrival_order() {
        // P3 arrives before P2 even though it is later in the list.
        let mut processes = build(&[
            ProcessSpec::new("P1", 0, 2),
            ProcessSpec::new("P2", 5, 1),
            ProcessSpec::new("P3", 3, 1),
        ]);
        let timeline = run(&mut processes, 2);
        assert_eq!(timeline.blocks[0], Block::new("P1", 0, 2));
        assert_eq!(timeline.blocks[1], Block::new("P3", 3, 4));
        assert_eq!(timeline.blocks[2], Block::new("P2", 5, 6));
    }

    #[test]
    fn test_quantum_one_degenerates_to_unit_slices() {
        let mut processes = build(&[
            ProcessSpec::new("P1", 0, 2),
            ProcessSpec::new("P2", 0, 2),
        ]);
        let timeline = run(&mut processes, 1);
        assert_eq!(timeline.block_count(), 4);
        let ids: Vec<&str> = timeline
            .blocks
            .iter()
            .map(|b| b.process_id.as_str())
            .collect();
        assert_eq!(ids, vec!["P1", "P2", "P1", "P2"]);
    }
}
