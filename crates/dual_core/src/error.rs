use thiserror::Error;

/// Faults raised by partial dual-number operations.
///
/// Every fault is a deterministic function of the operands; there is no
/// transient-failure class. Operations surface these through `Result` rather
/// than printing or producing IEEE infinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DualError {
    /// Division or inversion where the real part of the divisor is exactly zero.
    #[error("division invalid: real part of divisor is zero")]
    DivisionInvalid,
    /// Natural logarithm of a dual number whose real part is not strictly positive.
    #[error("logarithm invalid: real part must be strictly positive")]
    LogarithmInvalid,
    /// Exponentiation by an exponent whose dual part is nonzero.
    #[error("exponentiation invalid: dual part of exponent must be zero")]
    ExponentiationInvalid,
}
