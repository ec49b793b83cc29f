#![warn(missing_docs)]
//! Uniform hash-code values computed by name-keyed digest algorithms.
//!
//! One value type, [`HashValue`], represents hash codes of any fixed bit
//! width, whether packed into a machine word or kept as raw digest bytes,
//! with one serialization, equality and ordering contract across both
//! layouts. One interface, [`Hasher`], computes them, and
//! [`HasherRegistry`] binds the standard algorithm names (`MD5`, `SHA1`,
//! `SHA256`, `MURMUR3`, `XX`, `CITY`, `FARM_NA`, `FARM_UO`) to singleton
//! hashers.
//!
//! This is not a cryptographic-security library: it makes no collision- or
//! timing-resistance promises, it just gives every digest algorithm the
//! same value and computation surface.
//!
//! # Example
//! ```
//! use hashcode::{Hasher, HasherRegistry};
//!
//! fn main() -> Result<(), hashcode::Error> {
//!     let md5 = HasherRegistry::standard().for_name("MD5")?;
//!     let code = md5.hash_text("hello world");
//!     println!("{} ({} bits)", code.to_hex(), code.bit_width());
//!     Ok(())
//! }
//! ```

mod error;
mod hasher;
mod native;
mod registry;
mod value;

pub use error::Error;
pub use hasher::Hasher;
pub use native::NativeHasher;
pub use registry::{HasherRegistry, RegistryBuilder};
pub use value::HashValue;
