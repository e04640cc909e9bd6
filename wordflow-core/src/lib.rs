//! wordflow
//!
//! `wordflow` provides primitives for running partitioned, data parallel batch
//! computations on a local machine.
//!
//! What is it?
//! ---
//!
//! A computation is a list of independent partitions.  Work is expressed with two
//! functions:
//!
//! 1. `batch_apply` - runs a function over every partition as its own task.
//! 2. `tree_reduce` - merges partitions pairwise, level by level, into one value.
//!
//! Both are plain typed functions; there is no graph to build.  Where the work runs is
//! decided by a `Scheduler`: on the calling thread, on the global rayon pool, or on a
//! dedicated pool of worker threads.
//!
//! Example - Sum of squares
//! ---
//! ```rust
//! use wordflow::reduce::{batch_apply, tree_reduce};
//! use wordflow::scheduler::GreedyScheduler;
//!
//! let s = GreedyScheduler::new(2);
//! let parts = vec![vec![1usize, 2], vec![3], vec![4, 5]];
//! let partials = batch_apply(&s, parts, |_idx, vs| vs.iter().map(|x| x * x).sum::<usize>());
//! assert_eq!(tree_reduce(&s, partials, |x, y| x + y), Some(55));
//! ```

#![warn(missing_docs)]

/// Contains the Scheduler trait definition and implementations
#[allow(missing_docs)]
pub mod scheduler;

/// Contains partition-wise application and tree reductions
pub mod reduce;
