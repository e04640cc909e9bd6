//! MemoryCollection
//! ---
//! MemoryCollection holds a bounded set of records in memory, split into partitions.
//! Each partition is the unit of work handed to a Scheduler.
//!

use wordflow::reduce::batch_apply;
use wordflow::scheduler::Scheduler;

/// MemoryCollection struct
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCollection<A> {
    partitions: Vec<Vec<A>>
}

impl<A> MemoryCollection<A> {

    /// Creates a MemoryCollection from existing partitions.
    pub fn from_partitions(partitions: Vec<Vec<A>>) -> MemoryCollection<A> {
        MemoryCollection { partitions }
    }

    /// Creates a new MemoryCollection with a single partition holding every item
    /// ```rust
    ///   use wordflow_count::collection::memory::MemoryCollection;
    ///
    ///   let col = MemoryCollection::from_vec(vec![1, 2, 3usize]);
    ///   assert_eq!(col.n_partitions(), 1);
    ///   assert_eq!(col.to_vec(), vec![1, 2, 3usize]);
    /// ```
    pub fn from_vec(vs: Vec<A>) -> MemoryCollection<A> {
        MemoryCollection { partitions: vec![vs] }
    }

    /// Returns the current number of data partitions
    pub fn n_partitions(&self) -> usize {
        self.partitions.len()
    }

    /// Total number of items across all partitions
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|p| p.len()).sum()
    }

    /// True when no partition holds an item
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|p| p.is_empty())
    }

    /// Provides raw access to the partitions
    pub fn partitions(&self) -> &[Vec<A>] {
        &self.partitions
    }

    /// Unwraps into the partitions
    pub fn into_partitions(self) -> Vec<Vec<A>> {
        self.partitions
    }

    /// Concatenates two collections, keeping the partitions of both
    /// ```rust
    ///   use wordflow_count::collection::memory::MemoryCollection;
    ///
    ///   let one = MemoryCollection::from_vec(vec![1, 2, 3usize]);
    ///   let two = MemoryCollection::from_vec(vec![4usize, 5, 6]);
    ///   let cat = one.concat(two);
    ///   assert_eq!(cat.n_partitions(), 2);
    ///   assert_eq!(cat.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn concat(mut self, other: MemoryCollection<A>) -> MemoryCollection<A> {
        self.partitions.extend(other.partitions);
        self
    }

    /// Re-partitions a collection into `n_chunks` partitions, dealing items out round
    /// robin.  Items keep their relative order within each new partition.
    /// ```rust
    ///   use wordflow_count::collection::memory::MemoryCollection;
    ///
    ///   let col = MemoryCollection::from_vec(vec![1, 2, 3usize]);
    ///   let two = col.split(2);
    ///   assert_eq!(two.n_partitions(), 2);
    ///   assert_eq!(two.to_vec(), vec![1, 3, 2]);
    /// ```
    pub fn split(self, n_chunks: usize) -> MemoryCollection<A> {
        let n_chunks = n_chunks.max(1);
        let mut parts: Vec<Vec<A>> = (0..n_chunks).map(|_| Vec::new()).collect();
        let items = self.partitions.into_iter().flatten();
        for (idx, item) in items.enumerate() {
            parts[idx % n_chunks].push(item);
        }
        MemoryCollection { partitions: parts }
    }

    /// Flattens the partitions into a single Vec, partition by partition
    pub fn to_vec(self) -> Vec<A> {
        self.partitions.into_iter().flatten().collect()
    }

    /// Runs `f` over every partition on the given Scheduler, returning one output per
    /// partition in partition order.
    pub fn apply<
        S: Scheduler,
        B: Send,
        F: Sync + Send + Fn(usize, Vec<A>) -> B
    >(self, s: &S, f: F) -> Vec<B> where A: Send {
        batch_apply(s, self.partitions, f)
    }
}

impl<A> Default for MemoryCollection<A> {
    fn default() -> Self {
        MemoryCollection { partitions: Vec::new() }
    }
}

impl<A> FromIterator<A> for MemoryCollection<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        MemoryCollection::from_vec(iter.into_iter().collect())
    }
}
