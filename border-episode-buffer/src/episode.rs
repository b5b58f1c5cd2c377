//! Episode, a whole trajectory of `(s_t, a_t, r_t, s_t+1)`.
use crate::error::EpisodeBufferError;

/// A complete trajectory.
///
/// The four sequences are indexed by timestep `t = 0..T-1` and always have the same length `T`.
/// All state vectors, in both `states` and `next_states`, share one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    states: Vec<Vec<f32>>,
    actions: Vec<i64>,
    rewards: Vec<f32>,
    next_states: Vec<Vec<f32>>,
}

impl Episode {
    /// Constructs an episode.
    ///
    /// Returns [`EpisodeBufferError::ShapeMismatch`] if the sequences have different lengths
    /// or if the state vectors do not share one dimension.
    pub fn new(
        states: Vec<Vec<f32>>,
        actions: Vec<i64>,
        rewards: Vec<f32>,
        next_states: Vec<Vec<f32>>,
    ) -> Result<Self, EpisodeBufferError> {
        let n = states.len();
        if actions.len() != n || rewards.len() != n || next_states.len() != n {
            return Err(EpisodeBufferError::ShapeMismatch(format!(
                "states: {}, actions: {}, rewards: {}, next_states: {}",
                n,
                actions.len(),
                rewards.len(),
                next_states.len()
            )));
        }

        if let Some(dim) = states.first().map(Vec::len) {
            for (name, seq) in [("states", &states), ("next_states", &next_states)] {
                if let Some((t, s)) = seq.iter().enumerate().find(|(_, s)| s.len() != dim) {
                    return Err(EpisodeBufferError::ShapeMismatch(format!(
                        "{}[{}] has dimension {}, expected {}",
                        name,
                        t,
                        s.len(),
                        dim
                    )));
                }
            }
        }

        Ok(Self {
            states,
            actions,
            rewards,
            next_states,
        })
    }

    /// Number of timesteps `T`.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the episode has no timesteps.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sum of rewards, used as the priority in [`EpisodeBuffer`](crate::EpisodeBuffer).
    pub fn total_reward(&self) -> f32 {
        self.rewards.iter().sum()
    }

    /// Returns `s_t`.
    pub fn states(&self) -> &[Vec<f32>] {
        &self.states
    }

    /// Returns `a_t`.
    pub fn actions(&self) -> &[i64] {
        &self.actions
    }

    /// Returns `r_t`.
    pub fn rewards(&self) -> &[f32] {
        &self.rewards
    }

    /// Returns `s_t+1`.
    pub fn next_states(&self) -> &[Vec<f32>] {
        &self.next_states
    }

    /// Unpacks the data `(s_t, a_t, r_t, s_t+1)`.
    pub fn into_parts(self) -> (Vec<Vec<f32>>, Vec<i64>, Vec<f32>, Vec<Vec<f32>>) {
        (self.states, self.actions, self.rewards, self.next_states)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let ep = Episode::new(
            vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![2.0, 3.0]],
            vec![1, 0, 1],
            vec![0.5, 1.5, -1.0],
            vec![vec![1.0, 2.0], vec![2.0, 3.0], vec![3.0, 4.0]],
        )
        .unwrap();
        assert_eq!(ep.len(), 3);
        assert!(!ep.is_empty());
        assert_eq!(ep.total_reward(), 1.0);
        assert_eq!(ep.actions(), &[1, 0, 1]);
        assert_eq!(ep.next_states()[2], vec![3.0, 4.0]);

        let (s, a, r, s_) = ep.into_parts();
        assert_eq!(s.len(), 3);
        assert_eq!(a, vec![1, 0, 1]);
        assert_eq!(r, vec![0.5, 1.5, -1.0]);
        assert_eq!(s_[0], vec![1.0, 2.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let res = Episode::new(
            vec![vec![0.0], vec![1.0]],
            vec![0],
            vec![1.0, 1.0],
            vec![vec![1.0], vec![2.0]],
        );
        assert!(matches!(res, Err(EpisodeBufferError::ShapeMismatch(_))));
    }

    #[test]
    fn test_dimension_mismatch() {
        let res = Episode::new(
            vec![vec![0.0, 0.0], vec![1.0, 0.0]],
            vec![0, 1],
            vec![1.0, 1.0],
            vec![vec![1.0, 0.0], vec![2.0]],
        );
        match res {
            Err(EpisodeBufferError::ShapeMismatch(msg)) => {
                assert_eq!(msg, "next_states[1] has dimension 1, expected 2")
            }
            _ => panic!("expected ShapeMismatch"),
        }
    }

    #[test]
    fn test_empty_episode() {
        let ep = Episode::new(vec![], vec![], vec![], vec![]).unwrap();
        assert!(ep.is_empty());
        assert_eq!(ep.total_reward(), 0.0);
    }
}
