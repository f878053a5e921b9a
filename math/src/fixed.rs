use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign};

pub const FRACBITS: i32 = 16;
pub const FRACUNIT: i32 = 1 << FRACBITS;

/// The classic 16.16 signed fixed-point number. Every distance, height,
/// momentum and fraction in the simulation uses this type; floats never
/// touch gameplay math so two runs with the same inputs stay bit-identical.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(FRACUNIT);
    pub const MAX: Fixed = Fixed(i32::MAX);
    pub const MIN: Fixed = Fixed(i32::MIN);
    /// The smallest representable step above zero
    pub const EPSILON: Fixed = Fixed(1);

    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value << FRACBITS)
    }

    /// Truncate towards negative infinity (arithmetic shift, as the original
    /// engine does everywhere)
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> FRACBITS
    }

    /// Only for building lookup tables and test assertions. Gameplay code
    /// must never round-trip through floats.
    #[inline]
    pub fn from_float(value: f64) -> Self {
        Self((value * FRACUNIT as f64) as i32)
    }

    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / FRACUNIT as f64
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

/// 16.16 multiply through a 64-bit intermediate. A 32-bit product would
/// overflow for anything larger than +-1 unit squared.
impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64 * rhs.0 as i64) >> FRACBITS;
        if wide > i32::MAX as i64 {
            Self::MAX
        } else if wide < i32::MIN as i64 {
            Self::MIN
        } else {
            Self(wide as i32)
        }
    }
}

impl Mul<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        let wide = self.0 as i64 * rhs as i64;
        if wide > i32::MAX as i64 {
            Self::MAX
        } else if wide < i32::MIN as i64 {
            Self::MIN
        } else {
            Self(wide as i32)
        }
    }
}

/// 16.16 divide through a 64-bit intermediate. Division by zero saturates
/// in the direction of the numerator, like the original's overflow guard.
impl Div for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            return if self.0 < 0 { Self::MIN } else { Self::MAX };
        }
        let wide = ((self.0 as i64) << FRACBITS) / rhs.0 as i64;
        if wide > i32::MAX as i64 {
            Self::MAX
        } else if wide < i32::MIN as i64 {
            Self::MIN
        } else {
            Self(wide as i32)
        }
    }
}

impl Div<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        if rhs == 0 {
            return if self.0 < 0 { Self::MIN } else { Self::MAX };
        }
        Self(self.0 / rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Shr<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: i32) -> Self {
        Self(self.0 >> rhs)
    }
}

impl Shl<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: i32) -> Self {
        Self(self.0 << rhs)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl From<i16> for Fixed {
    fn from(value: i16) -> Self {
        Self::from_int(value as i32)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_float())
    }
}

/// `P_AproxDistance`: a magnitude estimate good enough for range gates and
/// direction picking, without a square root.
#[inline]
pub fn approx_distance(dx: Fixed, dy: Fixed) -> Fixed {
    let dx = dx.abs();
    let dy = dy.abs();
    if dx < dy {
        dx + dy - (dx >> 1)
    } else {
        dx + dy - (dy >> 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        assert_eq!(Fixed::from_int(24).to_int(), 24);
        assert_eq!(Fixed::from_int(-24).to_int(), -24);
        assert_eq!(Fixed::ONE.to_bits(), FRACUNIT);
    }

    #[test]
    fn mul_uses_wide_intermediate() {
        // the raw product here would overflow a 32-bit intermediate
        let half = Fixed::from_bits(FRACUNIT / 2);
        assert_eq!(Fixed::from_int(30) * half, Fixed::from_int(15));

        // past the 16.16 range the product saturates
        let a = Fixed::from_int(1024);
        assert_eq!(a * a, Fixed::MAX);
    }

    #[test]
    fn div_uses_wide_intermediate() {
        let a = Fixed::from_int(20000);
        let b = Fixed::from_int(2);
        assert_eq!((a / b).to_int(), 10000);
        // Div by zero saturates rather than trapping
        assert_eq!(a / Fixed::ZERO, Fixed::MAX);
        assert_eq!(-a / Fixed::ZERO, Fixed::MIN);
    }

    #[test]
    fn approx_distance_bounds() {
        let d = approx_distance(Fixed::from_int(3), Fixed::from_int(4));
        // Always >= the true distance, < sum of components
        assert!(d.to_int() >= 5);
        assert!(d.to_int() <= 7);
        assert_eq!(
            approx_distance(Fixed::from_int(10), Fixed::ZERO),
            Fixed::from_int(10)
        );
    }
}
