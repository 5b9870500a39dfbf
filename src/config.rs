//! Field configuration
//!
//! `PrimeField` carries the parameters of a prime field (just the prime p)
//! and hands out elements of that field.

use crate::error::FieldError;
use crate::field::FieldElement;
use std::fmt;

/// Parameters of the prime field F_p
///
/// Primality of `prime` is not checked. Elements created through the same
/// `PrimeField` can always be combined with each other.
///
/// # Example
/// ```
/// use ecc::PrimeField;
///
/// let f13 = PrimeField::new(13);
/// let a = f13.element(7).unwrap();
/// let b = f13.element(12).unwrap();
///
/// assert_eq!((a + b).unwrap(), f13.element(6).unwrap());
/// assert!(f13.element(13).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    prime: i64,
}

impl PrimeField {
    pub const fn new(prime: i64) -> Self {
        PrimeField { prime }
    }

    /// Returns the prime modulus p of the field
    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// Number of elements in the field (0 for a non-positive modulus)
    pub fn order(&self) -> u64 {
        self.prime.max(0) as u64
    }

    /// Creates an element of this field
    pub fn element(&self, value: i64) -> Result<FieldElement, FieldError> {
        FieldElement::new(value, self.prime)
    }

    /// Additive identity
    pub fn zero(&self) -> Result<FieldElement, FieldError> {
        self.element(0)
    }

    /// Multiplicative identity
    pub fn one(&self) -> Result<FieldElement, FieldError> {
        self.element(1)
    }

    /// True when `element` belongs to this field
    pub fn contains(&self, element: &FieldElement) -> bool {
        element.modulus() == self.prime
    }

    /// Iterates over every element 0, 1, ..., p-1
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> {
        let prime = self.prime;
        (0..prime.max(0)).filter_map(move |value| FieldElement::new(value, prime).ok())
    }
}

impl From<&FieldElement> for PrimeField {
    fn from(element: &FieldElement) -> Self {
        element.field()
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "F_{}", self.prime)
    }
}
