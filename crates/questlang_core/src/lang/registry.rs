//! Shareable metadata for `questlang_core::lang` registries.
//!
//! Every vocabulary table (keywords, operators, punctuation, subjects) reuses the small metadata types defined here.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for docs/diagnostics; enforcement of syntax rules lives in `questlang_syntax`.

/// Identify the language version a vocabulary item is available since (for example, `"0.1"`).
pub type SinceVersion = &'static str;

/// Version tag used by every entry of the initial vocabulary.
pub const INITIAL_VERSION: SinceVersion = "0.1";

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Examples
/// ```rust
/// use questlang_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(s.as_str(), "stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Lexed and reserved, but not accepted anywhere by the grammar yet.
    Reserved,
}

impl Stability {
    /// Lowercase label used by the reference generator.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Reserved => "reserved",
        }
    }
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use questlang_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "if (hero) { jump }",
///     note: Some("Jump when the hero condition holds."),
/// };
/// assert!(ex.code.contains("if"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
