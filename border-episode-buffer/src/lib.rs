#![warn(missing_docs)]
//! A replay buffer of whole episodes, prioritized by total reward.
//!
//! Unlike transition-level replay buffers, [`EpisodeBuffer`] stores complete trajectories
//! `(states, actions, rewards, next_states)` and keeps only the `capacity` episodes with the
//! highest total reward seen so far. Consumers either take the best episodes with
//! [`EpisodeBuffer::top_episodes`] or draw a uniform sample with replacement with
//! [`EpisodeBuffer::sample_episodes`].
//!
//! ```rust
//! use border_episode_buffer::{EpisodeBuffer, EpisodeBufferConfig, EpisodeBufferError};
//!
//! # fn main() -> Result<(), EpisodeBufferError> {
//! let config = EpisodeBufferConfig::default().capacity(2).seed(4076);
//! let mut buffer = EpisodeBuffer::build(&config)?;
//!
//! for r in [1.0, 3.0, 2.0] {
//!     buffer.add_episode(
//!         vec![vec![0.0, 0.0], vec![0.0, 1.0]],
//!         vec![0, 1],
//!         vec![r, 0.0],
//!         vec![vec![0.0, 1.0], vec![1.0, 1.0]],
//!     )?;
//! }
//!
//! // The episode with total reward 1.0 has been evicted.
//! assert_eq!(buffer.len(), 2);
//! assert_eq!(buffer.min_priority(), Some(2.0));
//!
//! let batch = buffer.sample_episodes(4)?;
//! assert_eq!(batch.len(), 4);
//! # Ok(())
//! # }
//! ```
mod buffer;
mod config;
mod episode;
pub mod error;

pub use buffer::EpisodeBuffer;
pub use config::EpisodeBufferConfig;
pub use episode::Episode;
pub use error::EpisodeBufferError;
