use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use once_cell::sync::Lazy;

use crate::fixed::Fixed;
use crate::vector::Vec2;

/// Angle lookup granularity: the high 13 bits of a BAM select a table entry
pub const FINEANGLES: usize = 8192;
pub const FINEMASK: usize = FINEANGLES - 1;
pub const ANGLETOFINESHIFT: u32 = 19;

/// Sine for a full turn plus a quarter, so cosine reads are just an offset
/// with no masking. Sampled on exact steps so the cardinal headings come
/// out as exact zeroes and ones, keeping straight movement straight.
static FINESINE: Lazy<[Fixed; FINEANGLES + FINEANGLES / 4]> = Lazy::new(|| {
    let mut table = [Fixed::ZERO; FINEANGLES + FINEANGLES / 4];
    for (i, val) in table.iter_mut().enumerate() {
        let rad = i as f64 * TAU / FINEANGLES as f64;
        *val = Fixed::from_float(rad.sin());
    }
    table
});

/// Binary angle: 2^32 steps per full turn. Wraparound is the whole point,
/// so all arithmetic is wrapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Angle(u32);

pub const ANG45: Angle = Angle(0x2000_0000);
pub const ANG90: Angle = Angle(0x4000_0000);
pub const ANG180: Angle = Angle(0x8000_0000);
pub const ANG270: Angle = Angle(0xC000_0000);

impl Angle {
    pub const ZERO: Angle = Angle(0);

    #[inline]
    pub const fn new(bam: u32) -> Self {
        Self(bam)
    }

    #[inline]
    pub const fn to_bam(self) -> u32 {
        self.0
    }

    /// Map-thing angles come in whole degrees (usually multiples of 45)
    #[inline]
    pub fn from_degrees(degrees: i32) -> Self {
        Self((degrees as i64 * (1i64 << 32) / 360).rem_euclid(1 << 32) as u32)
    }

    /// Index into the fine trig tables
    #[inline]
    pub const fn to_fine(self) -> usize {
        (self.0 >> ANGLETOFINESHIFT) as usize
    }

    #[inline]
    pub fn sin(self) -> Fixed {
        FINESINE[self.to_fine()]
    }

    #[inline]
    pub fn cos(self) -> Fixed {
        FINESINE[self.to_fine() + FINEANGLES / 4]
    }

    /// Unit displacement for this heading
    #[inline]
    pub fn unit(self) -> Vec2 {
        Vec2::new(self.cos(), self.sin())
    }
}

/// Sine straight from a fine-table index (momentum thrust helpers)
#[inline]
pub fn fine_sine(fine: usize) -> Fixed {
    FINESINE[fine & FINEMASK]
}

#[inline]
pub fn fine_cosine(fine: usize) -> Fixed {
    FINESINE[(fine & FINEMASK) + FINEANGLES / 4]
}

impl Add for Angle {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Angle {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl Neg for Angle {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0 as f64 * 360.0 / (1u64 << 32) as f64)
    }
}

/// `R_PointToAngle2`: the BAM heading from `source` towards `dest`
#[inline]
pub fn point_to_angle_2(dest: Vec2, source: Vec2) -> Angle {
    let dx = (dest.x - source.x).to_float();
    let dy = (dest.y - source.y).to_float();
    let rad = dy.atan2(dx);
    Angle(((rad / TAU).rem_euclid(1.0) * (1u64 << 32) as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_headings_are_exact() {
        assert_eq!(Angle::ZERO.sin(), Fixed::ZERO);
        assert_eq!(Angle::ZERO.cos(), Fixed::ONE);
        assert_eq!(ANG90.sin(), Fixed::ONE);
        assert_eq!(ANG180.sin(), Fixed::ZERO);
        assert_eq!(ANG270.cos(), Fixed::ZERO);
    }

    #[test]
    fn quarter_turns() {
        assert!((ANG90.sin().to_float() - 1.0).abs() < 0.001);
        assert!(ANG90.cos().to_float().abs() < 0.001);
        assert!((ANG180.cos().to_float() + 1.0).abs() < 0.001);
        assert!((Angle::ZERO.cos().to_float() - 1.0).abs() < 0.001);
    }

    #[test]
    fn wraparound() {
        assert_eq!(ANG270 + ANG90 + ANG90, ANG90);
        assert_eq!(Angle::ZERO - ANG90, ANG270);
        assert_eq!(-ANG90, ANG270);
    }

    #[test]
    fn degrees() {
        assert_eq!(Angle::from_degrees(90), ANG90);
        assert_eq!(Angle::from_degrees(315), ANG270 + ANG45);
        assert_eq!(Angle::from_degrees(-45), ANG270 + ANG45);
    }

    #[test]
    fn heading() {
        let a = point_to_angle_2(Vec2::from_ints(10, 10), Vec2::ZERO);
        // 45 degrees, within fine-table quantization
        let diff = a.to_bam().wrapping_sub(ANG45.to_bam()) as i32;
        assert!(diff.unsigned_abs() < 1 << 20);
    }
}
