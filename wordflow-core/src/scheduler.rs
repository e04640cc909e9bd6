use std::sync::mpsc;

use log::{debug, trace, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Executes a batch of independent tasks.  Every implementation returns the outputs in
/// task order, and only once every task has finished.
pub trait Scheduler {
    fn compute<A, B, F>(&self, tasks: Vec<A>, f: F) -> Vec<B>
        where A: Send,
              B: Send,
              F: Fn(usize, A) -> B + Send + Sync;
}

/// Runs each task on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialScheduler;

impl Scheduler for SequentialScheduler {

    fn compute<A, B, F>(&self, tasks: Vec<A>, f: F) -> Vec<B>
        where A: Send,
              B: Send,
              F: Fn(usize, A) -> B + Send + Sync {

        debug!("Number of Tasks Specified: {}", tasks.len());
        tasks.into_iter()
            .enumerate()
            .map(|(idx, task)| {
                trace!("Running task: {}", idx);
                f(idx, task)
            })
            .collect()
    }
}

/// Runs every task of a call concurrently on the global rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeveledScheduler;

impl Scheduler for LeveledScheduler {

    fn compute<A, B, F>(&self, tasks: Vec<A>, f: F) -> Vec<B>
        where A: Send,
              B: Send,
              F: Fn(usize, A) -> B + Send + Sync {

        debug!("Number of Tasks Specified: {}", tasks.len());
        tasks.into_par_iter()
            .enumerate()
            .map(|(idx, task)| f(idx, task))
            .collect()
    }
}

/// Hands tasks to a fixed number of worker threads as they free up.
#[derive(Debug, Clone, Copy)]
pub struct GreedyScheduler(usize);

impl GreedyScheduler {
    pub fn new(n_threads: usize) -> Self { GreedyScheduler(n_threads.max(1)) }

    pub fn n_threads(&self) -> usize { self.0 }
}

impl Default for GreedyScheduler {
    fn default() -> Self { GreedyScheduler::new(rayon::current_num_threads()) }
}

impl Scheduler for GreedyScheduler {

    fn compute<A, B, F>(&self, tasks: Vec<A>, f: F) -> Vec<B>
        where A: Send,
              B: Send,
              F: Fn(usize, A) -> B + Send + Sync {

        debug!("Number of Tasks Specified: {}", tasks.len());

        let pool = match ThreadPoolBuilder::new().num_threads(self.0).build() {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Unable to build pool of {} threads, running sequentially: {}", self.0, e);
                return SequentialScheduler.compute(tasks, f);
            }
        };

        let n_tasks = tasks.len();
        let (tx, rx) = mpsc::channel();
        pool.scope(|s| {
            let f = &f;
            for (idx, task) in tasks.into_iter().enumerate() {
                let thread_tx = tx.clone();
                s.spawn(move |_| {
                    trace!("Running task: {}", idx);
                    let _ = thread_tx.send((idx, f(idx, task)));
                });
            }
        });
        drop(tx);

        let mut slots: Vec<Option<B>> = (0..n_tasks).map(|_| None).collect();
        for (idx, out) in rx {
            trace!("{} finished", idx);
            slots[idx] = Some(out);
        }

        debug!("Finished");
        slots.into_iter().flatten().collect()
    }
}
