/// A closed range of real values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// The value `numerator / denominator` of the way from min to max.
    ///
    /// Evaluated as `min + numerator * size / denominator`; raster positions
    /// depend on this exact operation order.
    pub fn lerp(&self, numerator: f64, denominator: f64) -> f64 {
        self.min + numerator * self.size() / denominator
    }

    /// Ray parameters accepted as real intersections.
    pub const HIT_RANGE: Interval = Interval {
        min: crate::TOLERANCE,
        max: f64::INFINITY,
    };

    /// The range of an 8-bit color channel.
    pub const CHANNEL: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);

        let negative = Interval::new(-5.0, 5.0);
        assert_eq!(negative.size(), 10.0);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::CHANNEL;

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.5), 128.5);
        assert_eq!(interval.clamp(300.0), 255.0);
    }

    #[test]
    fn test_interval_lerp() {
        let plane_x = Interval::new(-0.5, 0.5);

        assert_eq!(plane_x.lerp(0.0, 2000.0), -0.5);
        assert_eq!(plane_x.lerp(1000.0, 2000.0), 0.0);
        assert!((plane_x.lerp(2000.0, 2000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hit_range_excludes_self_intersection() {
        assert!(!Interval::HIT_RANGE.contains(0.0));
        assert!(!Interval::HIT_RANGE.contains(0.0009));
        assert!(Interval::HIT_RANGE.contains(crate::TOLERANCE));
        assert!(Interval::HIT_RANGE.contains(1e9));
    }
}
