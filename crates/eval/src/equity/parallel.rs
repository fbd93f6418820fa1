// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel completions scoring.
use std::{panic, thread};

/// Splits `total` items in contiguous chunks and calls `f` for each chunk from
/// `num_tasks` parallel tasks.
///
/// The closure takes the task identifier, the chunk start, and the chunk
/// length. Results are returned in chunk order so that concatenating them
/// gives the same order as a sequential run.
///
/// Panics if `num_tasks` is zero.
pub(super) fn par_chunks<T, F>(num_tasks: usize, total: usize, f: F) -> Vec<T>
where
    F: Fn(usize, usize, usize) -> T + Send + Sync,
    T: Send,
{
    assert!(num_tasks > 0);

    if total == 0 {
        return Vec::new();
    }

    let items_per_task = total.div_ceil(num_tasks);
    if num_tasks == 1 {
        return vec![f(0, 0, total)];
    }

    thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| task_id * items_per_task)
            .take_while(|&start| start < total)
            .enumerate()
            .map(|(task_id, start)| {
                let len = items_per_task.min(total - start);
                let f = &f;
                s.spawn(move || f(task_id, start, len))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_cover_all_items() {
        for tasks in 1..10 {
            for total in [0, 1, 5, 44, 946, 1000] {
                let chunks = par_chunks(tasks, total, |_, start, len| (start, len));
                assert!(chunks.len() <= tasks);

                let mut next = 0;
                for (start, len) in chunks {
                    assert_eq!(start, next);
                    assert!(len > 0);
                    next += len;
                }
                assert_eq!(next, total, "tasks={tasks} total={total}");
            }
        }
    }

    #[test]
    fn chunks_in_order() {
        let items = (0..100).collect::<Vec<usize>>();
        let chunks = par_chunks(4, items.len(), |_, start, len| {
            items[start..start + len].to_vec()
        });

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks.concat(), items);
    }
}
