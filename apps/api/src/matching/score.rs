//! Blended resume/JD match score.
//!
//! score = (0.7 × semantic similarity + 0.3 × skill overlap) × 100,
//! rounded to two decimals.

pub const SEMANTIC_WEIGHT: f64 = 0.7;
pub const SKILL_OVERLAP_WEIGHT: f64 = 0.3;

/// Cosine similarity in [-1, 1]. Zero-length or zero-norm vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Final match score as a percentage with two decimals.
///
/// A negative similarity would push the raw value below zero; the result is
/// clamped to [0, 100].
pub fn blended_score(semantic_similarity: f64, skill_overlap_ratio: f64) -> f64 {
    let raw = (SEMANTIC_WEIGHT * semantic_similarity + SKILL_OVERLAP_WEIGHT * skill_overlap_ratio)
        * 100.0;
    round2(raw).clamp(0.0, 100.0)
}

/// Two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_similarity_one() {
        let v = [0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors_similarity_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_opposite_vectors_similarity_negative_one() {
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero_not_nan() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]);
        assert_eq!(sim, 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_score_zero() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_blended_score_formula() {
        // (0.7 * 0.8 + 0.3 * 0.5) * 100 = 71.0
        assert!((blended_score(0.8, 0.5) - 71.0).abs() < 1e-9);
    }

    #[test]
    fn test_blended_score_rounds_to_two_decimals() {
        // (0.7 * 0.123456 + 0.3 * 0.0) * 100 = 8.64192
        assert_eq!(blended_score(0.123456, 0.0), 8.64);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(12.5), 12.5);
    }

    #[test]
    fn test_blended_score_bounds() {
        assert_eq!(blended_score(1.0, 1.0), 100.0);
        assert_eq!(blended_score(0.0, 0.0), 0.0);
        assert_eq!(blended_score(-1.0, 0.0), 0.0);
    }
}
