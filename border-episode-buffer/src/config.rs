//! Configuration of [`EpisodeBuffer`](crate::EpisodeBuffer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`EpisodeBuffer`](crate::EpisodeBuffer).
///
/// ```rust
/// use border_episode_buffer::EpisodeBufferConfig;
///
/// let config = EpisodeBufferConfig::default().capacity(500).seed(0);
/// assert_eq!(config.capacity, 500);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpisodeBufferConfig {
    /// Maximum number of episodes held in the buffer.
    pub capacity: usize,

    /// Seed of the random number generator used in
    /// [`sample_episodes`](crate::EpisodeBuffer::sample_episodes).
    pub seed: u64,
}

impl Default for EpisodeBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 10000,
            seed: 4076,
        }
    }
}

impl EpisodeBufferConfig {
    /// Sets the capacity of the buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_episode_buffer_config() -> Result<()> {
        let config = EpisodeBufferConfig::default().capacity(64).seed(7);

        let dir = TempDir::new("episode_buffer_config")?;
        let path = dir.path().join("episode_buffer.yaml");

        config.save(&path)?;
        let config_ = EpisodeBufferConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(EpisodeBufferConfig::load("no/such/episode_buffer.yaml").is_err());
    }
}
