/// Core reduction engine.
///
/// Holds the [`core::Reducer`], which walks the call tree post-order, and
/// [`core::evaluate_tree`], which turns the fully reduced tree into the final
/// integer.
pub mod core;

/// Arithmetic function evaluation.
///
/// Computes `add`, `sub`, `multi` and `div` on 32-bit operands.
pub mod arithmetic;

/// `let` binding evaluation.
///
/// Implements substitution of a bound value into the body of a `let`.
pub mod binding;
