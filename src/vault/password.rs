//! Password strength rules and salted digest storage
//!
//! Submission of a new package is gated on four fixed strength rules, and the
//! same evaluation drives live per-rule feedback while the sharer types.
//! Stored passwords are kept as salted SHA-256 digests; the external contract
//! is unchanged (an equality test gates access), only the representation is
//! hardened.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: &str = "@!৳&$#^%*()_+-=[]{};':\"\\|,.<>/?";

const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

/// One of the fixed password strength rules
///
/// The variant order is the order rules are evaluated and displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// At least one ASCII uppercase letter
    Uppercase,
    /// At least one ASCII lowercase letter
    Lowercase,
    /// At least one ASCII digit
    Number,
    /// At least one character from [`SPECIAL_CHARS`]
    Special,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 4] = [Rule::Uppercase, Rule::Lowercase, Rule::Number, Rule::Special];

    /// Short stable identifier for this rule
    pub const fn id(self) -> &'static str {
        match self {
            Rule::Uppercase => "upper",
            Rule::Lowercase => "lower",
            Rule::Number => "number",
            Rule::Special => "special",
        }
    }

    /// Human-readable label for this rule
    pub const fn label(self) -> &'static str {
        match self {
            Rule::Uppercase => "At least 1 uppercase letter",
            Rule::Lowercase => "At least 1 lowercase letter",
            Rule::Number => "At least 1 number",
            Rule::Special => "At least 1 special character (@ ! ৳ & $ # etc.)",
        }
    }

    /// Returns true if `password` satisfies this rule
    pub fn is_satisfied(self, password: &str) -> bool {
        match self {
            Rule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Rule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Rule::Number => password.chars().any(|c| c.is_ascii_digit()),
            Rule::Special => password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }
}

/// Outcome of evaluating a single rule against a candidate password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleStatus {
    /// The rule that was evaluated.
    pub rule: Rule,
    /// Whether the candidate satisfied it.
    pub satisfied: bool,
}

impl RuleStatus {
    /// Short stable identifier of the evaluated rule
    pub const fn id(&self) -> &'static str {
        self.rule.id()
    }

    /// Human-readable label of the evaluated rule
    pub const fn label(&self) -> &'static str {
        self.rule.label()
    }
}

/// Evaluates all rules against a candidate password, in fixed order
///
/// Pure function of the password string; drives both submission gating and
/// live feedback.
pub fn evaluate(password: &str) -> [RuleStatus; 4] {
    Rule::ALL.map(|rule| RuleStatus {
        rule,
        satisfied: rule.is_satisfied(password),
    })
}

/// Returns true if `password` satisfies every rule
pub fn is_valid(password: &str) -> bool {
    Rule::ALL.iter().all(|rule| rule.is_satisfied(password))
}

/// Salted SHA-256 digest of a package password
///
/// Each derivation draws a fresh random salt, so two packages protected by
/// the same password store different digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: [u8; SALT_LEN],
    digest: [u8; DIGEST_LEN],
}

impl PasswordDigest {
    /// Derives a digest from a password with a fresh random salt
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = Self::digest_with(&salt, password);
        Self { salt, digest }
    }

    /// Returns true if `candidate` is the password this digest was derived from
    pub fn verify(&self, candidate: &str) -> bool {
        Self::digest_with(&self.salt, candidate) == self.digest
    }

    fn digest_with(salt: &[u8; SALT_LEN], password: &str) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }
}
