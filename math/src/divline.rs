use crate::fixed::{Fixed, FRACBITS};
use crate::vector::Vec2;

/// A point plus a direction: the unit of all trace/side math. Both traces
/// and map lines are reduced to this before intersecting.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivLine {
    pub xy: Vec2,
    pub dxy: Vec2,
}

impl DivLine {
    #[inline]
    pub const fn new(xy: Vec2, dxy: Vec2) -> Self {
        Self { xy, dxy }
    }

    #[inline]
    pub fn from_points(v1: Vec2, v2: Vec2) -> Self {
        Self {
            xy: v1,
            dxy: v2 - v1,
        }
    }

    /// `P_PointOnDivlineSide`: 0 = front, 1 = back. The full 64-bit cross
    /// product replaces the original's shift-and-hope overflow dodge.
    #[inline]
    pub fn point_on_side(&self, v: Vec2) -> usize {
        let dx = (v.x - self.xy.x).to_bits() as i64;
        let dy = (v.y - self.xy.y).to_bits() as i64;
        let left = self.dxy.y.to_bits() as i64 * dx;
        let right = dy * self.dxy.x.to_bits() as i64;
        if right < left {
            0
        } else {
            1
        }
    }
}

/// `P_InterceptVector`: fraction along `trace` at which it crosses `line`,
/// negative if parallel. Wide intermediates take the place of the
/// original's `>>8` pre-scaling.
#[inline]
pub fn intercept_vector(trace: DivLine, line: DivLine) -> Fixed {
    let den = (line.dxy.y.to_bits() as i64 * trace.dxy.x.to_bits() as i64
        - line.dxy.x.to_bits() as i64 * trace.dxy.y.to_bits() as i64)
        >> FRACBITS;
    if den == 0 {
        return -Fixed::ONE;
    }
    let num = ((line.xy.x - trace.xy.x).to_bits() as i64 * line.dxy.y.to_bits() as i64
        + (trace.xy.y - line.xy.y).to_bits() as i64 * line.dxy.x.to_bits() as i64)
        >> FRACBITS;
    let frac = (num << FRACBITS) / den;
    if frac > i32::MAX as i64 {
        Fixed::MAX
    } else if frac < i32::MIN as i64 {
        Fixed::MIN
    } else {
        Fixed::from_bits(frac as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_of_vertical_line() {
        // front is to the right of the direction of travel
        let dl = DivLine::from_points(Vec2::ZERO, Vec2::from_ints(0, 100));
        assert_eq!(dl.point_on_side(Vec2::from_ints(10, 50)), 0);
        assert_eq!(dl.point_on_side(Vec2::from_ints(-10, 50)), 1);
    }

    #[test]
    fn crossing_fraction() {
        // Trace east 100 units, line crosses it perpendicular at x = 25
        let trace = DivLine::from_points(Vec2::ZERO, Vec2::from_ints(100, 0));
        let line = DivLine::from_points(Vec2::from_ints(25, -50), Vec2::from_ints(25, 50));
        let frac = intercept_vector(trace, line);
        assert_eq!(frac, Fixed::from_bits(0x4000)); // 0.25
    }

    #[test]
    fn parallel_is_negative() {
        let trace = DivLine::from_points(Vec2::ZERO, Vec2::from_ints(100, 0));
        let line = DivLine::from_points(Vec2::from_ints(0, 10), Vec2::from_ints(100, 10));
        assert!(intercept_vector(trace, line).is_negative());
    }

    #[test]
    fn long_trace_does_not_overflow() {
        // Near the map-size extreme; 32-bit products would wrap here
        let trace = DivLine::from_points(Vec2::from_ints(-16000, -16000), Vec2::from_ints(16000, 16000));
        let line = DivLine::from_points(Vec2::from_ints(-16000, 16000), Vec2::from_ints(16000, -16000));
        let frac = intercept_vector(trace, line);
        assert_eq!(frac, Fixed::from_bits(0x8000)); // dead centre
    }
}
