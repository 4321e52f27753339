// ============================================================================
// Numeric Module
// Exact decimal literals and scale-preserving arithmetic for longitudes
// ============================================================================
//
// This module provides:
// - DecimalLiteral: sign + integer digits + fractional digits, never a float
// - add_integer / subtract_magnitude / integer_mod: exact arithmetic
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - The longitude operand's fractional-digit count is authoritative

pub mod arithmetic;
mod decimal_literal;
mod errors;

pub use arithmetic::{add_integer, integer_mod, subtract_magnitude};
pub use decimal_literal::{DecimalLiteral, MAX_SCALE};
pub use errors::{NumericError, NumericResult};
