/// Ratio of observed attribute count against a fixed ideal target.
///
/// The ratio is unbounded above: a listing with more than the ideal count
/// scores above 1.0 and the rating thresholds treat that the same as any
/// other score.
#[derive(Debug, Clone, Copy)]
pub struct CoverageScorer {
    ideal: usize,
}

impl CoverageScorer {
    /// `ideal` is a design-time constant and must be non-zero.
    pub fn new(ideal: usize) -> Self {
        assert!(ideal > 0, "ideal count must be non-zero");
        Self { ideal }
    }

    pub fn score(&self, observed: usize) -> f32 {
        observed as f32 / self.ideal as f32
    }

    pub fn ideal(&self) -> usize {
        self.ideal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_coverage_is_one() {
        assert_eq!(CoverageScorer::new(5).score(5), 1.0);
    }

    #[test]
    fn no_coverage_is_zero() {
        assert_eq!(CoverageScorer::new(5).score(0), 0.0);
    }

    #[test]
    fn exceeding_ideal_scores_above_one() {
        assert_eq!(CoverageScorer::new(5).score(10), 2.0);
    }

    #[test]
    fn partial_coverage() {
        assert_eq!(CoverageScorer::new(5).score(3), 0.6);
        let images = CoverageScorer::new(3).score(2);
        assert!((images - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "ideal count must be non-zero")]
    fn zero_ideal_is_rejected_at_construction() {
        let _ = CoverageScorer::new(0);
    }
}
