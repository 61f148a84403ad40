use crate::error::DualError;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Dual number for forward-mode automatic differentiation.
///
/// `Dual { real, dual }` represents `real + dual·ε` with `ε² = 0`: the real
/// part carries the function value, the dual part the derivative coefficient.
/// Both components are plain scalars; nested duals are not supported. Every
/// operation returns a newly constructed value, nothing is mutated in place.
///
/// A bare `f64` mixed into any binary operation is promoted to a constant,
/// `Dual::constant(s)`, on whichever side it appears.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dual {
    /// Value component.
    pub real: f64,
    /// Derivative (tangent) component.
    pub dual: f64,
}

impl Dual {
    /// Stores both components verbatim, no validation.
    pub fn new(real: f64, dual: f64) -> Self {
        Self { real, dual }
    }

    /// A constant: zero derivative. This is the image of scalar promotion.
    pub fn constant(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    /// The variable of differentiation: unit derivative.
    pub fn variable(real: f64) -> Self {
        Self::new(real, 1.0)
    }

    /// Value component.
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Derivative component.
    pub fn dual(&self) -> f64 {
        self.dual
    }

    /// Unary plus: the operand unchanged.
    pub fn pos(self) -> Self {
        self
    }

    /// Multiplicative inverse `(1/a, -b/a²)`, defined for nonzero real part.
    pub fn invert(self) -> Result<Self, DualError> {
        if self.real == 0.0 {
            return Err(DualError::DivisionInvalid);
        }
        Ok(Self::new(
            1.0 / self.real,
            -self.dual / (self.real * self.real),
        ))
    }

    /// Quotient rule division `(a/c, (b·c - a·d)/c²)`.
    ///
    /// The divisor's real part must be nonzero (exact comparison). The
    /// in-place form is a value rebind at the call site:
    /// `x = x.try_div(y)?`.
    pub fn try_div(self, rhs: impl Into<Dual>) -> Result<Self, DualError> {
        let rhs = rhs.into();
        if rhs.real == 0.0 {
            return Err(DualError::DivisionInvalid);
        }
        Ok(Self::new(
            self.real / rhs.real,
            (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real),
        ))
    }

    /// Generalized power rule `(aⁿ, n·b·aⁿ⁻¹)` where `n` is the exponent's
    /// real part.
    ///
    /// The exponent must be a constant: a nonzero dual part on the exponent
    /// is rejected, differentiating with respect to the exponent is
    /// unsupported.
    pub fn try_pow(self, exponent: impl Into<Dual>) -> Result<Self, DualError> {
        let exponent = exponent.into();
        if exponent.dual != 0.0 {
            return Err(DualError::ExponentiationInvalid);
        }
        let n = exponent.real;
        Ok(Self::new(
            self.real.powf(n),
            n * self.dual * self.real.powf(n - 1.0),
        ))
    }
}

impl From<f64> for Dual {
    fn from(real: f64) -> Self {
        Dual::constant(real)
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dual(real={}, dual={})", self.real, self.dual)
    }
}

/// Error parsing the canonical `Dual(real=…, dual=…)` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid dual number literal: {0:?}")]
pub struct ParseDualError(String);

impl FromStr for Dual {
    type Err = ParseDualError;

    /// Parses exactly the form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseDualError(s.to_string());
        let body = s
            .trim()
            .strip_prefix("Dual(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let (real, dual) = body.split_once(',').ok_or_else(bad)?;
        let real = real.trim().strip_prefix("real=").ok_or_else(bad)?;
        let dual = dual.trim().strip_prefix("dual=").ok_or_else(bad)?;
        Ok(Dual::new(
            real.trim().parse().map_err(|_| bad())?,
            dual.trim().parse().map_err(|_| bad())?,
        ))
    }
}

// Arithmetic operators. Each mixed (f64) form promotes the scalar to a
// constant on its own side, so the non-commutative cases keep the correct
// operand order.

impl Add for Dual {
    type Output = Dual;
    fn add(self, rhs: Dual) -> Dual {
        Dual::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl Add<f64> for Dual {
    type Output = Dual;
    fn add(self, rhs: f64) -> Dual {
        self + Dual::constant(rhs)
    }
}

impl Add<Dual> for f64 {
    type Output = Dual;
    fn add(self, rhs: Dual) -> Dual {
        Dual::constant(self) + rhs
    }
}

impl Sub for Dual {
    type Output = Dual;
    fn sub(self, rhs: Dual) -> Dual {
        Dual::new(self.real - rhs.real, self.dual - rhs.dual)
    }
}

impl Sub<f64> for Dual {
    type Output = Dual;
    fn sub(self, rhs: f64) -> Dual {
        self - Dual::constant(rhs)
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;
    fn sub(self, rhs: Dual) -> Dual {
        Dual::constant(self) - rhs
    }
}

impl Mul for Dual {
    type Output = Dual;
    fn mul(self, rhs: Dual) -> Dual {
        Dual::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}

impl Mul<f64> for Dual {
    type Output = Dual;
    fn mul(self, rhs: f64) -> Dual {
        self * Dual::constant(rhs)
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;
    fn mul(self, rhs: Dual) -> Dual {
        Dual::constant(self) * rhs
    }
}

impl Neg for Dual {
    type Output = Dual;
    fn neg(self) -> Dual {
        Dual::new(-self.real, -self.dual)
    }
}

// Compound assignment rebinds to a freshly computed value; other copies of
// the old value are unaffected.

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Dual) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for Dual {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign for Dual {
    fn sub_assign(&mut self, rhs: Dual) {
        *self = *self - rhs;
    }
}

impl SubAssign<f64> for Dual {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign for Dual {
    fn mul_assign(&mut self, rhs: Dual) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for Dual {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

// Exact component-wise equality. Callers needing approximate comparison
// supply their own tolerance.

impl PartialEq for Dual {
    fn eq(&self, other: &Dual) -> bool {
        self.real == other.real && self.dual == other.dual
    }
}

impl PartialEq<f64> for Dual {
    fn eq(&self, other: &f64) -> bool {
        *self == Dual::constant(*other)
    }
}

impl PartialEq<Dual> for f64 {
    fn eq(&self, other: &Dual) -> bool {
        Dual::constant(*self) == *other
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.dual == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl FromPrimitive for Dual {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::constant(n))
    }
}

impl ToPrimitive for Dual {
    fn to_i64(&self) -> Option<i64> {
        self.real.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.real.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.real)
    }
}
