//! Sliding window of recent energy samples.

use std::collections::VecDeque;

/// One recorded reading. `tick` is the position inside the window, so the
/// oldest retained sample always has tick 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub tick: usize,
    /// Energy in µW.
    pub value: f64,
}

/// Fixed-capacity FIFO of readings; the oldest sample is evicted first.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    values: VecDeque<f64>,
    capacity: usize,
}

impl SampleHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a value, dropping the oldest ones beyond capacity.
    /// Returns the sample as stored.
    pub fn push(&mut self, value: f64) -> EnergySample {
        self.values.push_back(value);
        while self.values.len() > self.capacity {
            self.values.pop_front();
        }
        EnergySample {
            tick: self.values.len() - 1,
            value,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<EnergySample> {
        self.values.back().map(|&value| EnergySample {
            tick: self.values.len() - 1,
            value,
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = EnergySample> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(tick, &value)| EnergySample { tick, value })
    }

    /// Samples as `[x, y]` pairs ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples()
            .map(|s| [s.tick as f64, s.value])
            .collect()
    }
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new(crate::config::HISTORY_CAPACITY)
    }
}
