//! Shannon entropy over a cell's remaining possibilities, weighted by label
//! frequency in the sample.

use crate::alphabet::Label;
use crate::weights::Weights;

/// `H = ln(S) - Σw·ln(w) / S` where `S = Σw` over `possibilities`.
///
/// An empty `possibilities` (a contradiction) returns `0.0` rather than
/// `NaN`; callers that need to distinguish a contradiction from a genuinely
/// collapsed cell should check `possibilities.is_empty()` directly rather
/// than relying on the entropy value.
pub fn shannon_entropy(possibilities: &[Label], weights: &Weights) -> f64 {
    let mut sum_of_weights = 0.0f64;
    let mut sum_of_weight_log_weights = 0.0f64;

    for label in possibilities {
        let weight = *weights.get(label).unwrap_or(&0) as f64;
        sum_of_weights += weight;
        if weight > 0.0 {
            sum_of_weight_log_weights += weight * weight.ln();
        }
    }

    if sum_of_weights == 0.0 {
        return 0.0;
    }

    sum_of_weights.ln() - (sum_of_weight_log_weights / sum_of_weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weights(pairs: &[(&str, u32)]) -> Weights {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn entropy_matches_known_weighted_value() {
        let w = weights(&[("LAND", 2), ("SEA", 1), ("COAST", 1)]);
        let possibilities = vec!["LAND".to_string(), "SEA".to_string(), "COAST".to_string()];
        let h = shannon_entropy(&possibilities, &w);
        assert!((h - 1.0397207708399179).abs() < 1e-9);
    }

    #[test]
    fn singleton_possibility_has_zero_entropy() {
        let w = weights(&[("LAND", 7)]);
        let h = shannon_entropy(&["LAND".to_string()], &w);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn empty_possibilities_is_zero_not_nan() {
        let w = weights(&[("LAND", 7)]);
        let h = shannon_entropy(&[], &w);
        assert_eq!(h, 0.0);
        assert!(!h.is_nan());
    }

    #[test]
    fn zero_weight_label_contributes_zero_not_nan() {
        let w = weights(&[("LAND", 0), ("SEA", 3)]);
        let h = shannon_entropy(&["LAND".to_string(), "SEA".to_string()], &w);
        assert!(!h.is_nan());
    }

    proptest! {
        #[test]
        fn prop_entropy_grows_as_possibilities_are_added(
            land in 1u32..50,
            sea in 1u32..50,
            coast in 1u32..50,
        ) {
            let w = weights(&[("LAND", land), ("SEA", sea), ("COAST", coast)]);
            let p1 = vec!["LAND".to_string()];
            let p2 = vec!["LAND".to_string(), "SEA".to_string()];
            let p3 = vec!["LAND".to_string(), "SEA".to_string(), "COAST".to_string()];

            let h1 = shannon_entropy(&p1, &w);
            let h2 = shannon_entropy(&p2, &w);
            let h3 = shannon_entropy(&p3, &w);

            prop_assert!(h1 <= h2 + 1e-9);
            prop_assert!(h2 <= h3 + 1e-9);
        }
    }
}
