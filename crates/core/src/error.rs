//! Arithmetic-domain errors raised by vector construction and normalization.

use std::fmt;

/// One of the three vector components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// An operation whose input or result would not be a number.
///
/// Kept separate from general argument validation so callers can tell a
/// mathematically undefined result apart from other misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A component passed to a constructor was NaN
    NanComponent {
        /// First NaN component, in x, y, z order
        axis: Axis,
    },
    /// Normalization of a vector whose magnitude is exactly zero
    ZeroLength,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::NanComponent { axis } => {
                write!(f, "Vector component {axis} is NaN")
            }
            ArithmeticError::ZeroLength => write!(f, "Cannot normalize a zero-length vector"),
        }
    }
}

impl std::error::Error for ArithmeticError {}
