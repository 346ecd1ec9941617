//! # Tax identifiers
//!
//! Generation and verification of CUIL/CUIT-style tax identifiers of the form
//! `PP-DDDDDDDD-V`: a two-digit type prefix, an eight-digit zero-padded
//! subject number and a mod-11 verifier digit.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

/// Prefix used when the caller does not pick one.
pub const DEFAULT_PREFIX: u8 = 20;

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
const MAX_SUBJECT: u32 = 99_999_999;
const MAX_PREFIX: u8 = 99;

static TAX_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})-(\d{8})-(\d)$").expect("tax id pattern is a valid regex")
});

/// Errors produced while building or parsing a [`TaxId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxIdError {
    #[error("subject number {value} does not fit in 8 digits")]
    SubjectOutOfRange { value: u32 },
    #[error("type prefix {value} does not fit in 2 digits")]
    PrefixOutOfRange { value: u8 },
    #[error("'{value}' is not of the form PP-DDDDDDDD-V")]
    Malformed { value: String },
    #[error("verifier digit of '{value}' should be {expected}")]
    ChecksumMismatch { value: String, expected: u8 },
}

/// A tax identifier whose verifier digit matches its prefix and subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxId {
    prefix: u8,
    subject: u32,
    verifier: u8,
}

impl TaxId {
    /// Builds the identifier for `subject` under the given type prefix.
    pub fn generate(subject: u32, prefix: u8) -> Result<Self, TaxIdError> {
        let verifier = verifier_digit(prefix, subject)?;
        Ok(Self {
            prefix,
            subject,
            verifier,
        })
    }

    /// Builds the identifier for `subject` under [`DEFAULT_PREFIX`].
    pub fn with_default_prefix(subject: u32) -> Result<Self, TaxIdError> {
        Self::generate(subject, DEFAULT_PREFIX)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn subject(&self) -> u32 {
        self.subject
    }

    pub fn verifier(&self) -> u8 {
        self.verifier
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:08}-{}",
            self.prefix, self.subject, self.verifier
        )
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || TaxIdError::Malformed {
            value: value.to_string(),
        };
        let captures = TAX_ID_PATTERN.captures(value.trim()).ok_or_else(malformed)?;

        let prefix: u8 = captures[1].parse().map_err(|_| malformed())?;
        let subject: u32 = captures[2].parse().map_err(|_| malformed())?;
        let verifier: u8 = captures[3].parse().map_err(|_| malformed())?;

        let expected = verifier_digit(prefix, subject)?;
        if expected != verifier {
            return Err(TaxIdError::ChecksumMismatch {
                value: value.to_string(),
                expected,
            });
        }

        Ok(Self {
            prefix,
            subject,
            verifier,
        })
    }
}

/// Computes the verifier digit for `prefix` followed by the zero-padded
/// `subject`.
///
/// Each of the ten digits is multiplied by its positional weight and the
/// products are summed; the digit is `11 - sum % 11`, with 11 mapped to 0 and
/// 10 mapped to 9.
pub fn verifier_digit(prefix: u8, subject: u32) -> Result<u8, TaxIdError> {
    if prefix > MAX_PREFIX {
        return Err(TaxIdError::PrefixOutOfRange { value: prefix });
    }
    if subject > MAX_SUBJECT {
        return Err(TaxIdError::SubjectOutOfRange { value: subject });
    }

    let sum: u32 = digits(prefix, subject)
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();

    let digit = match 11 - sum % 11 {
        11 => 0,
        10 => 9,
        other => other,
    };
    // 0..=9 after the mapping above
    Ok(digit as u8)
}

fn digits(prefix: u8, subject: u32) -> [u32; 10] {
    let mut out = [0u32; 10];
    out[0] = u32::from(prefix / 10);
    out[1] = u32::from(prefix % 10);

    let mut rest = subject;
    for slot in out[2..].iter_mut().rev() {
        *slot = rest % 10;
        rest /= 10;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_known_identifiers() {
        assert_eq!(
            TaxId::generate(12345678, 20).unwrap().to_string(),
            "20-12345678-6"
        );
        assert_eq!(
            TaxId::generate(87654321, 27).unwrap().to_string(),
            "27-87654321-9"
        );
        assert_eq!(
            TaxId::generate(11223344, 23).unwrap().to_string(),
            "23-11223344-9"
        );
        assert_eq!(
            TaxId::generate(55667788, 27).unwrap().to_string(),
            "27-55667788-9"
        );
        assert_eq!(
            TaxId::generate(99887766, 20).unwrap().to_string(),
            "20-99887766-1"
        );
    }

    #[test]
    fn remainder_zero_maps_to_zero() {
        // 2*5 + 6*2 = 22, 22 % 11 == 0
        let id = TaxId::generate(6, 20).unwrap();
        assert_eq!(id.verifier(), 0);
        assert_eq!(id.to_string(), "20-00000006-0");
    }

    #[test]
    fn remainder_one_maps_to_nine() {
        // 2*5 + 1*2 = 12, 11 - 1 = 10
        assert_eq!(verifier_digit(20, 1).unwrap(), 9);
    }

    #[test]
    fn default_prefix_is_twenty() {
        let id = TaxId::with_default_prefix(12345678).unwrap();
        assert_eq!(id.prefix(), 20);
        assert_eq!(id, TaxId::generate(12345678, 20).unwrap());
    }

    #[test]
    fn verifier_is_a_single_digit_and_deterministic() {
        for prefix in [0u8, 20, 23, 24, 27, 30, 33, 99] {
            for subject in (0..MAX_SUBJECT).step_by(7_654_321) {
                let first = verifier_digit(prefix, subject).unwrap();
                assert!(first <= 9);
                assert_eq!(first, verifier_digit(prefix, subject).unwrap());
            }
        }
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert_eq!(
            TaxId::generate(100_000_000, 20),
            Err(TaxIdError::SubjectOutOfRange { value: 100_000_000 })
        );
        assert_eq!(
            TaxId::generate(1, 100),
            Err(TaxIdError::PrefixOutOfRange { value: 100 })
        );
    }

    #[test]
    fn parses_generated_identifiers() {
        let id = TaxId::generate(55667788, 27).unwrap();
        let parsed: TaxId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.subject(), 55667788);
    }

    #[test]
    fn parse_rejects_bad_checksum_and_shape() {
        assert_eq!(
            "20-12345678-5".parse::<TaxId>(),
            Err(TaxIdError::ChecksumMismatch {
                value: "20-12345678-5".to_string(),
                expected: 6,
            })
        );
        assert!(matches!(
            "2012345678-6".parse::<TaxId>(),
            Err(TaxIdError::Malformed { .. })
        ));
        assert!(matches!(
            "20-1234567-6".parse::<TaxId>(),
            Err(TaxIdError::Malformed { .. })
        ));
    }
}
