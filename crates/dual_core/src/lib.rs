//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] pairs a value with its derivative coefficient, `a + b·ε` with
//! `ε² = 0`. Evaluating a function at [`Dual::variable`] (dual part 1)
//! yields the function value and its derivative in a single pass:
//!
//! ```
//! use dual_core::{derivative, Dual};
//!
//! let f = |x: Dual| x * x + 3.0 * x;
//! assert_eq!(derivative(f, 2.0), 7.0);
//! ```
//!
//! Key components:
//! - [`Dual`]: the value type with its arithmetic operator set, scalar
//!   promotion, and exact component-wise equality.
//! - [`functions`]: elementary extensions (sin, cos, tan, ln, exp) and the
//!   [`derivative`] helpers.
//! - [`DualError`]: the fault taxonomy for division, logarithm, and
//!   exponentiation domain violations, surfaced as `Result` per operation.

pub mod dual;
pub mod error;
pub mod functions;

pub use dual::{Dual, ParseDualError};
pub use error::DualError;
pub use functions::{derivative, try_derivative};
