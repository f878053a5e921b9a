use crate::fixed::Fixed;
use crate::vector::Vec2;

/// Axis-aligned bounding box in map units
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub top: Fixed,
    pub bottom: Fixed,
    pub left: Fixed,
    pub right: Fixed,
}

impl BBox {
    pub fn new(v1: Vec2, v2: Vec2) -> Self {
        BBox {
            left: v1.x.min(v2.x),
            right: v1.x.max(v2.x),
            bottom: v1.y.min(v2.y),
            top: v1.y.max(v2.y),
        }
    }

    /// The square footprint of a thing at `origin` with `radius`
    pub fn from_radius(origin: Vec2, radius: Fixed) -> Self {
        BBox {
            left: origin.x - radius,
            right: origin.x + radius,
            bottom: origin.y - radius,
            top: origin.y + radius,
        }
    }

    /// A degenerate box that any `add` widens
    pub fn inverted() -> Self {
        BBox {
            left: Fixed::MAX,
            right: Fixed::MIN,
            bottom: Fixed::MAX,
            top: Fixed::MIN,
        }
    }

    /// Grow to include the point
    pub fn add(&mut self, v: Vec2) {
        if v.x < self.left {
            self.left = v.x;
        }
        if v.x > self.right {
            self.right = v.x;
        }
        if v.y < self.bottom {
            self.bottom = v.y;
        }
        if v.y > self.top {
            self.top = v.y;
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.top > other.bottom
            && self.bottom < other.top
    }

    #[inline]
    pub fn contains(&self, v: Vec2) -> bool {
        v.x >= self.left && v.x <= self.right && v.y >= self.bottom && v.y <= self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap() {
        let a = BBox::from_radius(Vec2::ZERO, Fixed::from_int(16));
        let b = BBox::from_radius(Vec2::from_ints(20, 0), Fixed::from_int(16));
        let c = BBox::from_radius(Vec2::from_ints(40, 0), Fixed::from_int(4));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        // edges that only touch do not overlap
        assert!(!b.overlaps(&c));
    }

    #[test]
    fn grow() {
        let mut b = BBox::inverted();
        b.add(Vec2::from_ints(-10, 5));
        b.add(Vec2::from_ints(3, -7));
        assert_eq!(b.left, Fixed::from_int(-10));
        assert_eq!(b.right, Fixed::from_int(3));
        assert_eq!(b.top, Fixed::from_int(5));
        assert_eq!(b.bottom, Fixed::from_int(-7));
    }
}
