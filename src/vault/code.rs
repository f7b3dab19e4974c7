//! Share code generation and parsing
//!
//! A share code is the short identifier a sharer reads out loud or pastes to
//! the receiver, e.g. "X7K9P2". Codes are built from a restricted alphabet so
//! they stay easy to type and hard to misread.
//!
//! # Example
//!
//! ```rust,ignore
//! use codedrop::vault::ShareCode;
//!
//! let code = ShareCode::generate();
//! println!("Share this code: {}", code);
//!
//! // Receiver-side input is normalized before lookup
//! let same = ShareCode::parse(" x7k9p2 ")?;
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

/// Alphabet share codes are drawn from.
///
/// Uppercase letters and digits, excluding the visually ambiguous
/// characters I, O, 0 and 1.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every share code.
pub const CODE_LEN: usize = 6;

/// Errors that can occur when parsing a share code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// The input is not exactly [`CODE_LEN`] characters long
    #[error("share code must be {CODE_LEN} characters, got {0}")]
    WrongLength(usize),

    /// The input contains a character outside the code alphabet
    #[error("invalid share code character {0:?}")]
    InvalidCharacter(char),
}

/// A 6-character package identifier
///
/// Share codes address stored packages. They are generated on the sharing
/// side and typed back in on the receiving side, so parsing is forgiving
/// about case and surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareCode(String);

impl ShareCode {
    /// Generates a new random share code
    ///
    /// Each character is drawn uniformly, with replacement, from
    /// [`CODE_ALPHABET`]. Generation never fails and performs no uniqueness
    /// check; callers that need a free code retry against their store.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LEN)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Parses a share code from user input
    ///
    /// The input is trimmed and upper-cased before validation, so
    /// `" x7k9p2 "` and `"X7K9P2"` resolve to the same code.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is not exactly [`CODE_LEN`]
    /// characters or contains a character outside [`CODE_ALPHABET`].
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let s = s.trim();
        let len = s.chars().count();
        if len != CODE_LEN {
            return Err(CodeError::WrongLength(len));
        }

        let mut code = String::with_capacity(CODE_LEN);
        for ch in s.chars() {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii() || !CODE_ALPHABET.contains(&(upper as u8)) {
                return Err(CodeError::InvalidCharacter(ch));
            }
            code.push(upper);
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShareCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Generation Tests =====

    #[test]
    fn test_generate_length_and_alphabet() {
        for _ in 0..100 {
            let code = ShareCode::generate();
            assert_eq!(code.as_str().len(), CODE_LEN);
            assert!(
                code.as_str()
                    .bytes()
                    .all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in {}",
                code
            );
        }
    }

    #[test]
    fn test_generate_codes_vary() {
        let codes: Vec<ShareCode> = (0..20).map(|_| ShareCode::generate()).collect();
        let first = &codes[0];
        assert!(
            codes.iter().any(|c| c != first),
            "20 consecutive codes were identical"
        );
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_characters() {
        assert_eq!(CODE_ALPHABET.len(), 32);
        for excluded in [b'I', b'O', b'0', b'1'] {
            assert!(!CODE_ALPHABET.contains(&excluded));
        }
    }

    // ===== Parsing Tests =====

    #[test]
    fn test_parse_round_trip() {
        let code = ShareCode::generate();
        let parsed = ShareCode::parse(code.as_str()).unwrap();
        assert_eq!(code, parsed);
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let parsed = ShareCode::parse("  x7k9p2\n").unwrap();
        assert_eq!(parsed.as_str(), "X7K9P2");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(ShareCode::parse(""), Err(CodeError::WrongLength(0)));
        assert_eq!(ShareCode::parse("ABC23"), Err(CodeError::WrongLength(5)));
        assert_eq!(ShareCode::parse("ABCD234"), Err(CodeError::WrongLength(7)));
    }

    #[test]
    fn test_parse_rejects_excluded_characters() {
        for bad in ["ABCI23", "ABCO23", "ABC023", "ABC123"] {
            assert!(
                matches!(ShareCode::parse(bad), Err(CodeError::InvalidCharacter(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_alphabet_characters() {
        assert_eq!(
            ShareCode::parse("AB-C23"),
            Err(CodeError::InvalidCharacter('-'))
        );
        assert!(matches!(
            ShareCode::parse("AB৳C23"),
            Err(CodeError::InvalidCharacter('৳'))
        ));
    }

    #[test]
    fn test_from_str() {
        let code: ShareCode = "X7K9P2".parse().unwrap();
        assert_eq!(code.as_str(), "X7K9P2");
        assert!("nope".parse::<ShareCode>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        let code = ShareCode::parse("X7K9P2").unwrap();
        assert_eq!(code.to_string(), code.as_str());
    }
}
