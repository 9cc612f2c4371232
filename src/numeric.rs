//! Shared numeric helpers for trait-space math.
//!
//! All functions operate on plain `f64` slices so the trait-vector,
//! archetype, and compass layers stay free of duplicated arithmetic.
//! None of them allocate or branch on dimensionality; dimension checks
//! belong to the callers, which construct slices of matching length.

/// Guard against division by zero in similarity and normalization math.
pub const EPSILON: f64 = 1e-10;

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm of a slice.
pub fn l2_norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Euclidean distance between two equal-length slices.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity with an epsilon guard for near-zero norms.
///
/// Range is mathematically [-1, 1]; for vectors confined to the unit
/// hypercube it is practically [0, 1]. A near-zero vector on either side
/// yields a similarity near 0 instead of dividing by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    dot(a, b) / (l2_norm(a) * l2_norm(b) + EPSILON)
}

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation. Returns 0.0 for an empty slice.
pub fn population_std_dev(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64;
    var.sqrt()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_norm() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
        assert_eq!(l2_norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_euclidean_unit_hypercube_diagonal() {
        // Distance between the all-zero and all-one corners is sqrt(N).
        let zeros = [0.0; 5];
        let ones = [1.0; 5];
        let d = euclidean(&zeros, &ones);
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((d - 2.23606797749979).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_symmetry_and_identity() {
        let a = [0.2, 0.9, 0.4];
        let b = [0.7, 0.1, 0.5];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn test_cosine_identical_direction() {
        let a = [0.5, 0.5, 0.5];
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector_does_not_divide_by_zero() {
        let zero = [0.0, 0.0, 0.0];
        let b = [1.0, 1.0, 1.0];
        let sim = cosine_similarity(&zero, &b);
        assert!(sim.is_finite());
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_mean_and_std() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&xs), 5.0);
        // Classic population-std example: variance 4, std 2.
        assert!((population_std_dev(&xs) - 2.0).abs() < 1e-12);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[3.0]), 0.0);
    }
}
