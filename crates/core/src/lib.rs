//! Small vector math library
//!
//! Provides [`Vec3`], an immutable three-component `f32` vector whose
//! components are never NaN, together with the [`ArithmeticError`] returned
//! by the operations that would otherwise produce an undefined result.
//!
//! Conversions to and from `nalgebra::Vector3<f32>` let callers hand values to
//! heavier linear-algebra code, and `approx` comparisons work on whole vectors.

pub mod error;
pub mod vec3;

pub use error::{ArithmeticError, Axis};
pub use vec3::{Component, Vec3};
