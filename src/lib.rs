//! # ECC - Finite Field Elements
//!
//! The first building block of an educational elliptic curve cryptography
//! library: elements of a prime field F_p with validated construction and
//! modular addition and subtraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use ecc::{FieldElement, FieldError};
//!
//! let a = FieldElement::new(1, 7)?;
//! let b = FieldElement::new(4, 7)?;
//!
//! // 1 - 4 = -3 ≡ 4 (mod 7)
//! assert_eq!((a - b)?, FieldElement::new(4, 7)?);
//!
//! // Elements of different fields never mix
//! let c = FieldElement::new(1, 3)?;
//! assert!((a + c).is_err());
//! # Ok::<(), FieldError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`field`] - Prime field elements and their arithmetic
//! - [`config`] - Field parameters (`PrimeField`)
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod field;

pub use config::PrimeField;
pub use error::{FieldError, FieldOp};
pub use field::FieldElement;
