use serde_derive::{Deserialize, Serialize};

/// Running min/max/sum of a series of lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthDistribution {
    count: u64,
    sum: u64,
    min: u64,
    max: u64,
}

impl LengthDistribution {

    /// Adds one observation
    pub fn update(&mut self, len: u64) {
        if self.count == 0 {
            self.min = len;
            self.max = len;
        } else {
            self.min = self.min.min(len);
            self.max = self.max.max(len);
        }
        self.count += 1;
        self.sum += len;
    }

    /// Combines two distributions as if every observation had been seen by one
    pub fn merge(&mut self, other: &LengthDistribution) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Number of observations
    pub fn count(&self) -> u64 { self.count }

    /// Sum of all observations
    pub fn sum(&self) -> u64 { self.sum }

    /// Smallest observation, if any
    pub fn min(&self) -> Option<u64> {
        if self.count == 0 { None } else { Some(self.min) }
    }

    /// Largest observation, if any
    pub fn max(&self) -> Option<u64> {
        if self.count == 0 { None } else { Some(self.max) }
    }

    /// Mean observation, if any
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 { None } else { Some(self.sum as f64 / self.count as f64) }
    }
}

/// Counters gathered while tokenizing a block of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    /// Records seen
    pub records: u64,

    /// Records that are empty once surrounding whitespace is trimmed
    pub empty_lines: u64,

    /// Tokens emitted
    pub tokens: u64,

    /// Record lengths, in characters
    pub line_len: LengthDistribution,
}

impl LineStats {

    /// Records one line
    pub fn record_line(&mut self, line: &str) {
        self.records += 1;
        if line.trim().is_empty() {
            self.empty_lines += 1;
        }
        self.line_len.update(line.chars().count() as u64);
    }

    /// Combines the counters of two disjoint blocks
    pub fn merge(&mut self, other: &LineStats) {
        self.records += other.records;
        self.empty_lines += other.empty_lines;
        self.tokens += other.tokens;
        self.line_len.merge(&other.line_len);
    }
}

#[cfg(test)]
mod metrics_test {
    use super::*;

    #[test]
    fn test_distribution() {
        let mut d = LengthDistribution::default();
        assert_eq!(d.min(), None);
        assert_eq!(d.mean(), None);
        for len in vec![4, 0, 8] {
            d.update(len);
        }
        assert_eq!(d.count(), 3);
        assert_eq!(d.sum(), 12);
        assert_eq!(d.min(), Some(0));
        assert_eq!(d.max(), Some(8));
        assert_eq!(d.mean(), Some(4.0));
    }

    #[test]
    fn test_distribution_merge() {
        let mut a = LengthDistribution::default();
        a.update(5);
        let mut b = LengthDistribution::default();
        b.update(2);
        b.update(9);

        let mut ab = a;
        ab.merge(&b);
        let mut ba = b;
        ba.merge(&a);
        assert_eq!(ab, ba);
        assert_eq!(ab.min(), Some(2));
        assert_eq!(ab.max(), Some(9));

        let mut empty = LengthDistribution::default();
        empty.merge(&a);
        assert_eq!(empty, a);
    }

    #[test]
    fn test_line_stats() {
        let mut stats = LineStats::default();
        for line in vec!["hi there", "", "   ", "héllo"] {
            stats.record_line(line);
        }
        assert_eq!(stats.records, 4);
        assert_eq!(stats.empty_lines, 2);
        assert_eq!(stats.line_len.max(), Some(8));
        assert_eq!(stats.line_len.sum(), 8 + 0 + 3 + 5);
    }
}
