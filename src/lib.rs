//! Quaternions over any primitive numeric component type.
//!
//! `Quaternion<T>` supports construction from partial and mixed-type
//! component lists, conversion from complex numbers, and addition and
//! subtraction with other quaternions and with bare scalars. Operands of
//! different component types are promoted to their common type, see
//! [`Promote`].
//!
//! Scalars only touch the real component. Note that `s - q` keeps the
//! imaginary components of `q` unchanged rather than negating them.

mod macros;
mod ops;
mod parsing;
pub mod plugin;
mod quat;

#[cfg(feature = "plugin")]
mod exports;

pub use parsing::ParseQuaternionError;
pub use quat::Quaternion;
pub use quat_algebra_base::{Component, Promote, Promoted};
