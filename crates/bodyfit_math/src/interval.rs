/// A closed range of values along one axis.
///
/// Used as the building block of [`Aabb`](crate::Aabb); the geometry core
/// mostly cares about the vertical interval of a mesh, where bands are
/// placed at fractions of its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if the interval contains no values (min > max).
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Value at fraction `t` of the way from min to max.
    ///
    /// `t` is not clamped, so fractions outside [0, 1] extrapolate.
    pub fn at(&self, t: f32) -> f32 {
        self.min + self.size() * t
    }

    /// Expands the interval by delta/2 on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Creates an interval that surrounds two other intervals.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
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
    fn test_interval_at_fraction() {
        // A 180 cm figure standing on y = 0
        let height = Interval::new(0.0, 180.0);

        assert!((height.at(0.72) - 129.6).abs() < 0.001);
        assert!((height.at(0.5) - 90.0).abs() < 0.001);

        // Offset figures keep the fraction relative to min
        let raised = Interval::new(10.0, 110.0);
        assert!((raised.at(0.6) - 70.0).abs() < 0.001);
    }

    #[test]
    fn test_interval_expand() {
        let interval = Interval::new(0.0, 10.0);
        let expanded = interval.expand(4.0);

        // Expanded by 2.0 on each side (4.0 / 2)
        assert_eq!(expanded.min, -2.0);
        assert_eq!(expanded.max, 12.0);
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.is_empty());
        assert!(empty.size() < 0.0);

        let merged = Interval::surrounding(&empty, &Interval::new(1.0, 2.0));
        assert_eq!(merged, Interval::new(1.0, 2.0));
    }
}
