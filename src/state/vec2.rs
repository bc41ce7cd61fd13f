use std::ops::{Add, AddAssign, Sub};

/// Screen-space vector in CSS pixels (client coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(Vec2::new(self.x / len, self.y / len))
    }

    /// Heading of the vector in whole degrees, mapped into [0, 360).
    /// Screen y grows downward, so "up" is 270.
    pub fn heading_degrees(self) -> Option<f64> {
        let dir = self.normalized()?;
        let degrees = dir.y.atan2(dir.x).to_degrees();
        // half-way values round toward +inf, like the browser's Math.round
        let rounded = (degrees + 0.5).floor();
        Some((360.0 + rounded).rem_euclid(360.0))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(Vec2::ZERO.normalized(), None);
        assert_eq!(Vec2::ZERO.heading_degrees(), None);
    }

    #[test]
    fn headings_follow_screen_axes() {
        assert_eq!(Vec2::new(10.0, 0.0).heading_degrees(), Some(0.0));
        assert_eq!(Vec2::new(0.0, 10.0).heading_degrees(), Some(90.0));
        assert_eq!(Vec2::new(-10.0, 0.0).heading_degrees(), Some(180.0));
        assert_eq!(Vec2::new(0.0, -50.0).heading_degrees(), Some(270.0));
        assert_eq!(Vec2::new(3.0, -3.0).heading_degrees(), Some(315.0));
    }

    #[test]
    fn heading_rounds_to_whole_degrees() {
        let v = Vec2::new(1.0, 0.3);
        let h = v.heading_degrees().unwrap();
        assert_eq!(h, h.floor());
        assert_eq!(h, 17.0);
    }

    #[test]
    fn huge_components_keep_their_direction() {
        assert_eq!(Vec2::new(1e300, 1e300).heading_degrees(), Some(45.0));
        assert_eq!(Vec2::new(-1e300, 0.0).heading_degrees(), Some(180.0));
        assert!(Vec2::new(1e300, 1e300).length().is_finite());
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert_eq!(n, Vec2::new(0.6, 0.8));
    }
}
