use derive_more::{Add, AddAssign, Deref, Display, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};

/// PDF points, 1/72 of an inch. All coordinates and sizes in the crate are
/// expressed in points; [In] converts into them.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// Inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Mul, Display)]
pub struct In(pub f32);

impl Pt {
    /// Absolute value of the length
    pub fn abs(self) -> Pt {
        Pt(self.0.abs())
    }

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    /// Ratio between two lengths
    pub fn ratio(self, other: Pt) -> f32 {
        self.0 / other.0
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> In {
        In(value.0 / 72.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(4.15).into();
        assert!((pt.0 - 298.8).abs() < 1e-3);
        let back: In = Pt(36.0).into();
        assert_eq!(back, In(0.5));
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(3.5)].into_iter().sum();
        assert_eq!(total, Pt(7.0));
        assert_eq!(Pt(10.0) * 0.5, Pt(5.0));
        assert_eq!(Pt(10.0) / 4.0, Pt(2.5));
        assert_eq!((Pt(1.0) - Pt(3.0)).abs(), Pt(2.0));
        assert_eq!(Pt(3.0).ratio(Pt(6.0)), 0.5);
    }
}
