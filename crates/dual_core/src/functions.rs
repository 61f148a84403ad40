//! Elementary function extensions for [`Dual`] numbers.
//!
//! Each function applies the real-valued `f` to the real part and the chain
//! rule `f'(a)·b` to the dual part. Every function is available both as a
//! method on [`Dual`] and as a free function, so composition chains can be
//! written either way.

use crate::dual::Dual;
use crate::error::DualError;

impl Dual {
    /// `(sin a, b·cos a)`.
    pub fn sin(self) -> Self {
        Dual::new(self.real.sin(), self.dual * self.real.cos())
    }

    /// `(cos a, -b·sin a)`.
    pub fn cos(self) -> Self {
        Dual::new(self.real.cos(), -self.dual * self.real.sin())
    }

    /// `(tan a, b/cos²a)`.
    ///
    /// Odd multiples of π/2 are not guarded; the underlying numeric blowup
    /// propagates into the components.
    pub fn tan(self) -> Self {
        let c = self.real.cos();
        Dual::new(self.real.tan(), self.dual / (c * c))
    }

    /// Natural logarithm `(ln a, b/a)`, defined for strictly positive real
    /// part.
    pub fn ln(self) -> Result<Self, DualError> {
        if self.real <= 0.0 {
            return Err(DualError::LogarithmInvalid);
        }
        Ok(Dual::new(self.real.ln(), self.dual / self.real))
    }

    /// `(exp a, b·exp a)`.
    pub fn exp(self) -> Self {
        let e = self.real.exp();
        Dual::new(e, self.dual * e)
    }
}

pub fn sin(x: Dual) -> Dual {
    x.sin()
}

pub fn cos(x: Dual) -> Dual {
    x.cos()
}

pub fn tan(x: Dual) -> Dual {
    x.tan()
}

/// Natural logarithm; free-function surface for [`Dual::ln`].
pub fn log(x: Dual) -> Result<Dual, DualError> {
    x.ln()
}

pub fn exp(x: Dual) -> Dual {
    x.exp()
}

/// Derivative of `f` at `x`, computed in one forward pass by seeding the
/// dual part with 1.
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: FnOnce(Dual) -> Dual,
{
    f(Dual::variable(x)).dual
}

/// Like [`derivative`], for chains containing fallible operations.
pub fn try_derivative<F>(f: F, x: f64) -> Result<f64, DualError>
where
    F: FnOnce(Dual) -> Result<Dual, DualError>,
{
    Ok(f(Dual::variable(x))?.dual)
}
