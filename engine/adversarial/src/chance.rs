//! Chance models for expectimax adversary nodes.
//!
//! The search never samples: an adversary node backs up the expectation of
//! its children under the model's weights. Randomness belongs to whoever
//! actually plays the adversary.

use engine_core::AgentIndex;

/// Relative likelihood of each adversary action.
pub trait ChanceModel {
    /// Unnormalized weights for `num_actions` actions of `agent`, in
    /// enumeration order. Must be non-negative with a positive sum.
    fn weights(&self, agent: AgentIndex, num_actions: usize) -> Vec<f64>;

    /// Weighted mean of `values` (one per legal action).
    fn expectation(&self, agent: AgentIndex, values: &[f64]) -> f64 {
        let weights = self.weights(agent, values.len());
        let total: f64 = weights.iter().sum();
        let weighted: f64 = weights.iter().zip(values).map(|(w, v)| w * v).sum();
        weighted / total
    }
}

/// Every legal action equally likely: the expectation is the arithmetic mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformChance;

impl ChanceModel for UniformChance {
    fn weights(&self, _agent: AgentIndex, num_actions: usize) -> Vec<f64> {
        vec![1.0; num_actions]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always plays the action at `index`.
    struct Fixed {
        index: usize,
    }

    impl ChanceModel for Fixed {
        fn weights(&self, _agent: AgentIndex, num_actions: usize) -> Vec<f64> {
            (0..num_actions)
                .map(|i| if i == self.index { 1.0 } else { 0.0 })
                .collect()
        }
    }

    #[test]
    fn test_uniform_is_arithmetic_mean() {
        assert_eq!(UniformChance.expectation(1, &[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(UniformChance.expectation(2, &[-3.0, 5.0]), 1.0);
        assert_eq!(UniformChance.expectation(1, &[7.5]), 7.5);
    }

    #[test]
    fn test_fixed_model_selects_one_child() {
        let model = Fixed { index: 2 };
        assert_eq!(model.expectation(1, &[2.0, 4.0, 6.0]), 6.0);
    }

    #[test]
    fn test_weights_are_normalized() {
        struct Skewed;
        impl ChanceModel for Skewed {
            fn weights(&self, _agent: AgentIndex, num_actions: usize) -> Vec<f64> {
                (1..=num_actions).map(|w| w as f64).collect()
            }
        }

        // (1*3 + 2*6 + 3*9) / 6
        assert!((Skewed.expectation(1, &[3.0, 6.0, 9.0]) - 7.0).abs() < 1e-9);
    }
}
