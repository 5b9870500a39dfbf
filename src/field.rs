//! Prime field element implementation
//!
//! An element of Z/pZ for a caller-supplied prime p. Construction validates
//! that the value lies in `[0, p)`, and addition and subtraction are only
//! defined between elements sharing the same modulus.

use crate::config::PrimeField;
use crate::error::{FieldError, FieldOp};
use log::debug;
use std::fmt;
use std::ops::{Add, Sub};

/// Element of the prime field F_p
///
/// Immutable once created. Elements of different fields compare unequal,
/// and combining them with `+` or `-` yields [`FieldError::FieldMismatch`].
///
/// # Example
/// ```
/// use ecc::FieldElement;
///
/// let a = FieldElement::new(7, 13).unwrap();
/// let b = FieldElement::new(12, 13).unwrap();
///
/// // 7 + 12 = 19 ≡ 6 (mod 13)
/// assert_eq!((a + b).unwrap(), FieldElement::new(6, 13).unwrap());
/// assert_eq!(a.to_string(), "FieldElement_7(13)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: i64,
    modulus: i64, // prime p
}

impl FieldElement {
    /// Creates a field element, rejecting values outside `[0, modulus)`
    ///
    /// Primality of `modulus` is not checked. A non-positive modulus
    /// rejects every value.
    pub fn new(value: i64, modulus: i64) -> Result<Self, FieldError> {
        if value < 0 || value >= modulus {
            debug!("rejected {} for field of modulus {}", value, modulus);
            return Err(FieldError::OutOfRange { value, modulus });
        }
        Ok(FieldElement { value, modulus })
    }

    /// Get the value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Get the modulus
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// The field this element belongs to
    pub fn field(&self) -> PrimeField {
        PrimeField::new(self.modulus)
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// True when both elements live in the same field
    pub fn same_field(&self, other: &FieldElement) -> bool {
        self.modulus == other.modulus
    }

    /// Addition: (a + b) mod p
    pub fn try_add(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_field(other, FieldOp::Add)?;
        // Both operands are in [0, p), so one reduction is enough.
        let sum = i128::from(self.value) + i128::from(other.value);
        self.reduce(sum)
    }

    /// Subtraction: (a - b) mod p, always non-negative
    pub fn try_sub(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.check_field(other, FieldOp::Sub)?;
        let diff = i128::from(self.value) - i128::from(other.value);
        self.reduce(diff)
    }

    fn check_field(&self, other: &FieldElement, op: FieldOp) -> Result<(), FieldError> {
        if self.same_field(other) {
            return Ok(());
        }
        debug!(
            "cannot {} elements of moduli {} and {}",
            op, self.modulus, other.modulus
        );
        Err(FieldError::FieldMismatch {
            op,
            left: self.modulus,
            right: other.modulus,
        })
    }

    // Euclidean remainder keeps the result in [0, p) for negative input.
    fn reduce(&self, n: i128) -> Result<FieldElement, FieldError> {
        let modulus = i128::from(self.modulus);
        let value = n.rem_euclid(modulus) as i64;
        FieldElement::new(value, self.modulus)
    }
}

impl Add for FieldElement {
    type Output = Result<FieldElement, FieldError>;

    fn add(self, other: FieldElement) -> Self::Output {
        self.try_add(&other)
    }
}

impl Add for &FieldElement {
    type Output = Result<FieldElement, FieldError>;

    fn add(self, other: &FieldElement) -> Self::Output {
        self.try_add(other)
    }
}

impl Sub for FieldElement {
    type Output = Result<FieldElement, FieldError>;

    fn sub(self, other: FieldElement) -> Self::Output {
        self.try_sub(&other)
    }
}

impl Sub for &FieldElement {
    type Output = Result<FieldElement, FieldError>;

    fn sub(self, other: &FieldElement) -> Self::Output {
        self.try_sub(other)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.value, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(value: i64, modulus: i64) -> FieldElement {
        FieldElement::new(value, modulus).unwrap()
    }

    #[test]
    fn test_construction() {
        let a = fe(7, 13);
        assert_eq!(a.value(), 7);
        assert_eq!(a.modulus(), 13);
        assert!(fe(0, 13).is_zero());
        assert!(!a.is_zero());
    }

    #[test]
    fn test_construction_out_of_range() {
        assert_eq!(
            FieldElement::new(13, 13),
            Err(FieldError::OutOfRange {
                value: 13,
                modulus: 13
            })
        );
        assert!(FieldElement::new(-1, 13).is_err());
        assert!(FieldElement::new(0, 0).is_err());
        assert!(FieldElement::new(0, -5).is_err());
    }

    #[test]
    fn test_equality() {
        let a = fe(7, 13);
        let b = fe(7, 13);
        let c = fe(6, 13);
        assert_eq!(a, b);
        assert_ne!(a, c);
        // Same value in a different field is simply unequal
        assert_ne!(fe(1, 2), fe(1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(fe(1, 2).to_string(), "FieldElement_1(2)");
        assert_eq!(fe(7, 13).to_string(), "FieldElement_7(13)");
    }

    #[test]
    fn test_field_arithmetic() {
        // 7 + 12 = 19 ≡ 6 (mod 13)
        assert_eq!((fe(7, 13) + fe(12, 13)).unwrap(), fe(6, 13));

        // 9 - 29 = -20 ≡ 37 (mod 57)
        assert_eq!((fe(9, 57) - fe(29, 57)).unwrap(), fe(37, 57));

        // 1 - 4 = -3 ≡ 4 (mod 7)
        assert_eq!((fe(1, 7) - fe(4, 7)).unwrap(), fe(4, 7));

        // 1 + 1 = 2 ≡ 0 (mod 2)
        assert_eq!((fe(1, 2) + fe(1, 2)).unwrap(), fe(0, 2));
    }

    #[test]
    fn test_reference_operators() {
        let a = fe(3, 7);
        let b = fe(5, 7);
        assert_eq!((&a + &b).unwrap(), fe(1, 7));
        assert_eq!((&a - &b).unwrap(), fe(5, 7));
        // Operands are untouched
        assert_eq!(a, fe(3, 7));
        assert_eq!(b, fe(5, 7));
    }

    #[test]
    fn test_field_mismatch() {
        let a = fe(1, 2);
        let b = fe(1, 3);

        let err = (a + b).unwrap_err();
        assert_eq!(
            err,
            FieldError::FieldMismatch {
                op: FieldOp::Add,
                left: 2,
                right: 3
            }
        );
        assert_eq!(err.to_string(), "Cannot add two numbers in different Fields");

        let err = (a - b).unwrap_err();
        assert_eq!(err.to_string(), "Cannot sub two numbers in different Fields");
    }

    #[test]
    fn test_large_modulus_no_overflow() {
        let p = i64::MAX;
        let a = fe(p - 1, p);
        let b = fe(p - 2, p);
        // (p-1) + (p-2) = 2p - 3 ≡ p - 3
        assert_eq!((a + b).unwrap(), fe(p - 3, p));
        // 0 - (p-1) ≡ 1
        assert_eq!((fe(0, p) - a).unwrap(), fe(1, p));
    }

    #[test]
    fn test_field_of_element() {
        let a = fe(4, 11);
        assert_eq!(a.field(), PrimeField::new(11));
        assert!(a.same_field(&fe(10, 11)));
        assert!(!a.same_field(&fe(4, 13)));
    }
}
