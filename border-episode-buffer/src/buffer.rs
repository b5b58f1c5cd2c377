//! Episode buffer prioritized by total reward.
use crate::{Episode, EpisodeBufferConfig, EpisodeBufferError};
use log::{info, trace};
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// An episode with its priority. Ordered by priority only.
struct Entry {
    priority: OrderedFloat<f32>,
    episode: Episode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A fixed-capacity buffer of episodes, keyed by the sum of rewards.
///
/// Once full, each admission pushes the new episode and then drops the entry with the
/// lowest priority, which may be the new episode itself. The buffer therefore always
/// holds the `capacity` highest-priority episodes seen so far. Ties are broken arbitrarily.
///
/// Episodes with fewer than two timesteps are silently discarded.
pub struct EpisodeBuffer {
    capacity: usize,
    seed: u64,

    /// Min-heap on priority.
    heap: BinaryHeap<Reverse<Entry>>,

    rng: StdRng,
}

impl EpisodeBuffer {
    /// Minimum number of timesteps for an episode to be admitted.
    pub const MIN_EPISODE_LEN: usize = 2;

    /// Constructs an empty buffer.
    ///
    /// Returns [`EpisodeBufferError::InvalidConfig`] if `capacity` is zero.
    pub fn new(capacity: usize, seed: u64) -> Result<Self, EpisodeBufferError> {
        if capacity == 0 {
            return Err(EpisodeBufferError::InvalidConfig(
                "capacity must be positive".to_string(),
            ));
        }

        info!("Construct episode buffer");
        info!("Capacity = {}", capacity);
        info!("Seed     = {}", seed);

        Ok(Self {
            capacity,
            seed,
            heap: BinaryHeap::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Constructs an empty buffer from the configuration.
    pub fn build(config: &EpisodeBufferConfig) -> Result<Self, EpisodeBufferError> {
        Self::new(config.capacity, config.seed)
    }

    /// Adds an episode given as its four sequences.
    ///
    /// Returns [`EpisodeBufferError::ShapeMismatch`] and leaves the buffer untouched
    /// if the sequences disagree in shape.
    pub fn add_episode(
        &mut self,
        states: Vec<Vec<f32>>,
        actions: Vec<i64>,
        rewards: Vec<f32>,
        next_states: Vec<Vec<f32>>,
    ) -> Result<(), EpisodeBufferError> {
        let episode = Episode::new(states, actions, rewards, next_states)?;
        self.push(episode);
        Ok(())
    }

    /// Adds an episode.
    pub fn push(&mut self, episode: Episode) {
        if episode.len() < Self::MIN_EPISODE_LEN {
            trace!("Discard episode of length {}", episode.len());
            return;
        }

        let priority = OrderedFloat(episode.total_reward());
        trace!("Push episode with priority {}", priority);
        self.heap.push(Reverse(Entry { priority, episode }));

        if self.heap.len() > self.capacity {
            if let Some(Reverse(evicted)) = self.heap.pop() {
                trace!("Evict episode with priority {}", evicted.priority);
            }
        }
    }

    /// Returns the `k` episodes with the highest priority.
    ///
    /// If `k` exceeds [`len`](Self::len), all episodes are returned.
    /// The order of the returned episodes is unspecified.
    pub fn top_episodes(&self, k: usize) -> Vec<&Episode> {
        if k == 0 {
            return vec![];
        }
        let mut entries = self.heap.iter().map(|e| &e.0).collect::<Vec<_>>();
        if k < entries.len() {
            entries.select_nth_unstable_by(k - 1, |a, b| b.cmp(a));
            entries.truncate(k);
        }
        entries.into_iter().map(|e| &e.episode).collect()
    }

    /// Samples `k` episodes uniformly with replacement.
    ///
    /// Returns [`EpisodeBufferError::EmptyBuffer`] if the buffer is empty and `k > 0`.
    pub fn sample_episodes(&mut self, k: usize) -> Result<Vec<&Episode>, EpisodeBufferError> {
        if k == 0 {
            return Ok(vec![]);
        }
        if self.heap.is_empty() {
            return Err(EpisodeBufferError::EmptyBuffer);
        }

        let entries = self.heap.as_slice();
        let rng = &mut self.rng;
        let episodes = (0..k)
            .map(|_| &entries[rng.gen_range(0..entries.len())].0.episode)
            .collect();
        Ok(episodes)
    }

    /// Returns the number of episodes in the buffer.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the buffer holds no episodes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the seed the buffer was constructed with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Lowest priority in the buffer, the one evicted next.
    pub fn min_priority(&self) -> Option<f32> {
        self.heap.peek().map(|e| e.0.priority.into_inner())
    }

    /// Highest priority in the buffer.
    pub fn max_priority(&self) -> Option<f32> {
        self.heap.iter().map(|e| e.0.priority).max().map(|p| p.into_inner())
    }

    /// Iterates over the episodes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Episode> {
        self.heap.iter().map(|e| &e.0.episode)
    }

    /// Removes all episodes. The state of the random number generator is kept.
    pub fn clear(&mut self) {
        info!("Clear episode buffer ({} episodes)", self.heap.len());
        self.heap.clear();
    }
}
