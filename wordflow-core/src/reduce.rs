use log::debug;

use crate::scheduler::Scheduler;

/// Applies `f` to every partition as an independent task.
pub fn batch_apply<
    S: Scheduler,
    A: Send,
    B: Send,
    F: Sync + Send + Fn(usize, A) -> B
    >(s: &S, parts: Vec<A>, f: F)
-> Vec<B> {
    s.compute(parts, f)
}

/// Reduces partitions pairwise, level by level, into a single value.  Returns `None`
/// when there is nothing to reduce.
pub fn tree_reduce<S: Scheduler,
                   A: Send,
                   F: Sync + Send + Fn(A, A) -> A
>(
    s: &S,
    parts: Vec<A>,
    f: F
) -> Option<A> {
    tree_reduce_until(s, parts, 1, f).and_then(|defs| defs.into_iter().next())
}

/// Reduces adjacent pairs until at most `parts` values remain.  Each level is one
/// scheduler call, so every merge of a level completes before the next level starts.
/// Pairs keep their left to right order; an odd tail moves up a level untouched.
pub fn tree_reduce_until<S: Scheduler,
                   A: Send,
                   F: Sync + Send + Fn(A, A) -> A
>(
    s: &S,
    defs: Vec<A>,
    parts: usize,
    f: F
) -> Option<Vec<A>> {
    if defs.is_empty() {
        return None;
    }

    let parts = parts.max(1);
    let mut level = 0usize;
    let mut pass = defs;
    while pass.len() > parts {
        let mut pairs = Vec::with_capacity(pass.len() / 2 + 1);
        let mut it = pass.into_iter();
        while let Some(left) = it.next() {
            pairs.push((left, it.next()));
        }

        debug!("Level: {}, Tasks: {}", level, pairs.len());
        pass = s.compute(pairs, |_idx, (left, right)| {
            match right {
                Some(right) => f(left, right),
                None        => left
            }
        });
        level += 1;
    }
    Some(pass)
}
