use serde::{Deserialize, Serialize};

const SCORE_MAX: f64 = 100.0;

/// Whether a higher or a lower raw value is the better one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    pub fn is_inverted(self) -> bool {
        matches!(self, Polarity::LowerIsBetter)
    }
}

/// Domain range of a statistic together with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
    pub polarity: Polarity,
}

impl StatRange {
    pub const fn higher_is_better(min: f64, max: f64) -> Self {
        Self { min, max, polarity: Polarity::HigherIsBetter }
    }

    pub const fn lower_is_better(min: f64, max: f64) -> Self {
        Self { min, max, polarity: Polarity::LowerIsBetter }
    }

    pub fn score(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max, self.polarity.is_inverted())
    }
}

/// Maps `value` into a score in `[0, 100]`.
///
/// Values outside `[min, max]` saturate. A degenerate range (`min == max`)
/// always scores `0`.
pub fn normalize(value: f64, min: f64, max: f64, invert: bool) -> f64 {
    if is_degenerate(min, max) {
        return 0.0;
    }

    let t = scale(value, min, max);
    apply_polarity(t, invert) * SCORE_MAX
}

/// Min-max scaling clamped to `[0, 1]`.
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    if is_degenerate(min, max) {
        return 0.0;
    }

    let value = if value.is_finite() { value } else { 0.0 };
    let scaled = (value - min) / (max - min);
    scaled.clamp(0.0, 1.0)
}

fn is_degenerate(min: f64, max: f64) -> bool {
    min == max
}

fn apply_polarity(t: f64, invert: bool) -> f64 {
    if invert { 1.0 - t } else { t }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(0.3, 0.3, 1.0, false), 0.0);
        assert_eq!(normalize(1.0, 0.3, 1.0, false), 100.0);
        assert!((normalize(0.65, 0.3, 1.0, false) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_saturates_out_of_range() {
        assert_eq!(normalize(-4.0, 0.0, 10.0, false), 0.0);
        assert_eq!(normalize(42.0, 0.0, 10.0, false), 100.0);
        assert_eq!(normalize(42.0, 0.0, 10.0, true), 0.0);
    }

    #[test]
    fn test_inverted_is_complement() {
        let samples = [-1.0, 0.0, 0.8, 1.37, 2.0, 3.5, 9.99];
        for v in samples {
            let plain = normalize(v, 0.8, 2.0, false);
            let inverted = normalize(v, 0.8, 2.0, true);
            assert!((inverted - (100.0 - plain)).abs() < EPS, "value {v}");
            assert!((0.0..=100.0).contains(&plain));
            assert!((0.0..=100.0).contains(&inverted));
        }
    }

    #[test]
    fn test_degenerate_range_scores_zero() {
        for k in [0.0, 1.5, -3.0] {
            assert_eq!(normalize(7.0, k, k, false), 0.0);
            assert_eq!(normalize(7.0, k, k, true), 0.0);
            assert_eq!(normalize(k, k, k, true), 0.0);
        }
    }

    #[test]
    fn test_era_style_score() {
        let era = StatRange::lower_is_better(0.0, 10.0);
        assert!((era.score(2.5) - 75.0).abs() < EPS);
        assert_eq!(era.score(0.0), 100.0);
    }

    #[test]
    fn test_nan_scores_like_zero() {
        let ops = StatRange::higher_is_better(0.3, 1.0);
        assert_eq!(ops.score(f64::NAN), ops.score(0.0));
    }
}
