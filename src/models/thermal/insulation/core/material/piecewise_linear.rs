use super::{Conductivity, MaterialError};

/// Number of equally spaced samples used by the trapezoidal mean.
const SAMPLES: usize = 100;

/// One linear piece `k = intercept + slope·T` of a [`PiecewiseLinear`] curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub intercept: f64,
    pub slope: f64,
}

impl Segment {
    #[must_use]
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    fn at(self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Conductivity made of three linear segments split at two breakpoints.
///
/// ```text
/// k(T) = a1 + b1·T   for T ≤ T_lower
///        a2 + b2·T   for T_lower < T ≤ T_upper
///        a3 + b3·T   for T > T_upper
/// ```
///
/// The curve may be discontinuous at the breakpoints, so the mean is found
/// numerically: `k` is sampled at 100 equally spaced temperatures across the
/// interval and integrated with the trapezoidal rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseLinear {
    low: Segment,
    t_lower: f64,
    mid: Segment,
    t_upper: f64,
    high: Segment,
}

impl PiecewiseLinear {
    /// Creates a three-segment curve.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError`] if any parameter is not finite or
    /// `t_lower > t_upper`.
    pub fn new(
        low: Segment,
        t_lower: f64,
        mid: Segment,
        t_upper: f64,
        high: Segment,
    ) -> Result<Self, MaterialError> {
        MaterialError::check_finite(&[
            low.intercept,
            low.slope,
            t_lower,
            mid.intercept,
            mid.slope,
            t_upper,
            high.intercept,
            high.slope,
        ])?;

        if t_lower > t_upper {
            return Err(MaterialError::Breakpoints {
                lower: t_lower,
                upper: t_upper,
            });
        }

        Ok(Self {
            low,
            t_lower,
            mid,
            t_upper,
            high,
        })
    }
}

impl Conductivity for PiecewiseLinear {
    fn conductivity(&self, t: f64) -> f64 {
        if t <= self.t_lower {
            self.low.at(t)
        } else if t <= self.t_upper {
            self.mid.at(t)
        } else {
            self.high.at(t)
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_conductivity(&self, t1: f64, t2: f64) -> f64 {
        if t1 == t2 {
            return self.conductivity(t1);
        }

        let step = (t2 - t1) / (SAMPLES - 1) as f64;
        let samples: Vec<f64> = (0..SAMPLES)
            .map(|i| self.conductivity(t1 + i as f64 * step))
            .collect();

        let area: f64 = samples
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1]) * step)
            .sum();

        area / (t2 - t1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn calcium_silicate() -> PiecewiseLinear {
        PiecewiseLinear::new(
            Segment::new(0.30, 1.0e-4),
            200.0,
            Segment::new(0.28, 2.0e-4),
            600.0,
            Segment::new(0.16, 4.0e-4),
        )
        .unwrap()
    }

    #[test]
    fn selects_segment_by_temperature() {
        let material = calcium_silicate();

        assert_relative_eq!(material.conductivity(100.0), 0.31, epsilon = 1e-12);
        assert_relative_eq!(material.conductivity(200.0), 0.32, epsilon = 1e-12);
        assert_relative_eq!(material.conductivity(400.0), 0.36, epsilon = 1e-12);
        assert_relative_eq!(material.conductivity(800.0), 0.48, epsilon = 1e-12);
    }

    #[test]
    fn mean_is_exact_within_one_segment() {
        let material = calcium_silicate();

        // Trapezoids integrate a straight line exactly.
        assert_relative_eq!(
            material.mean_conductivity(300.0, 500.0),
            material.conductivity(400.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            material.mean_conductivity(500.0, 300.0),
            material.conductivity(400.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn mean_across_breakpoint_is_close_to_exact() {
        let material = calcium_silicate();

        // Exact: ∫100^200 (0.30 + 1e-4 T) + ∫200^300 (0.28 + 2e-4 T), over 200 °F.
        let exact = (30.0 + 1.5 + 28.0 + 5.0) / 200.0;
        assert_relative_eq!(
            material.mean_conductivity(100.0, 300.0),
            exact,
            epsilon = 1e-3
        );
    }

    #[test]
    fn rejects_reversed_breakpoints() {
        let segment = Segment::new(0.3, 1e-4);
        assert_eq!(
            PiecewiseLinear::new(segment, 600.0, segment, 200.0, segment),
            Err(MaterialError::Breakpoints {
                lower: 600.0,
                upper: 200.0
            })
        );
    }
}
