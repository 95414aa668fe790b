//! Define the reserved keyword vocabulary for QuestLang.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`Jump` is an identifier, not a keyword).
//! - The table is `const`: it is built at compile time and cannot be mutated.
//!
//! ## Examples
//! ```rust
//! use questlang_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("attack"), Some(KeywordId::Attack));
//! assert_eq!(keywords::category(KeywordId::MoveLeft), KeywordCategory::Movement);
//! assert_eq!(keywords::from_str("hero"), None);
//! ```

use super::registry::{Example, INITIAL_VERSION, SinceVersion, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Movement commands
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Action commands
    Jump,
    Attack,
    Defend,

    // Control flow
    If,
    Else,
    While,
    For,
}

/// High-level grouping for documentation and the checker's statement dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Movement,
    Action,
    ControlFlow,
}

impl KeywordCategory {
    /// Human-readable heading for docs.
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Movement => "Movement commands",
            KeywordCategory::Action => "Action commands",
            KeywordCategory::ControlFlow => "Control flow",
        }
    }
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since_version: SinceVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords, grouped by category.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Movement commands
    info(
        KeywordId::MoveUp,
        "move_up",
        KeywordCategory::Movement,
        "Move one step up.",
    ),
    info(
        KeywordId::MoveDown,
        "move_down",
        KeywordCategory::Movement,
        "Move one step down.",
    ),
    info(
        KeywordId::MoveLeft,
        "move_left",
        KeywordCategory::Movement,
        "Move one step left.",
    ),
    info(
        KeywordId::MoveRight,
        "move_right",
        KeywordCategory::Movement,
        "Move one step right.",
    ),
    // Action commands
    info(KeywordId::Jump, "jump", KeywordCategory::Action, "Jump in place."),
    info(
        KeywordId::Attack,
        "attack",
        KeywordCategory::Action,
        "Attack whatever is in front.",
    ),
    info(KeywordId::Defend, "defend", KeywordCategory::Action, "Raise the shield."),
    // Control flow
    KeywordInfo {
        examples: &[Example {
            code: "if (enemy) { attack }",
            note: Some("The condition must name one of the subjects."),
        }],
        ..info(
            KeywordId::If,
            "if",
            KeywordCategory::ControlFlow,
            "Run a block when the condition subject is present.",
        )
    },
    KeywordInfo {
        stability: Stability::Reserved,
        ..info(
            KeywordId::Else,
            "else",
            KeywordCategory::ControlFlow,
            "Reserved; not accepted as a statement.",
        )
    },
    KeywordInfo {
        examples: &[Example {
            code: "while (trap) { jump }",
            note: None,
        }],
        ..info(
            KeywordId::While,
            "while",
            KeywordCategory::ControlFlow,
            "Repeat a block while the condition subject is present.",
        )
    },
    KeywordInfo {
        examples: &[Example {
            code: "for (treasure; trap; hero) { defend }",
            note: Some("Each header clause must be an identifier."),
        }],
        ..info(
            KeywordId::For,
            "for",
            KeywordCategory::ControlFlow,
            "Loop with initialization, condition and increment clauses.",
        )
    },
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        since_version: INITIAL_VERSION,
        stability: Stability::Stable,
        examples: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_match_grouping() {
        let movement: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.category == KeywordCategory::Movement)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(movement, vec!["move_up", "move_down", "move_left", "move_right"]);

        let actions: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.category == KeywordCategory::Action)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(actions, vec!["jump", "attack", "defend"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("while"), Some(KeywordId::While));
        assert_eq!(from_str("While"), None);
        assert_eq!(from_str("MOVE_UP"), None);
    }

    #[test]
    fn test_only_else_is_reserved() {
        for k in KEYWORDS {
            let expected = if k.id == KeywordId::Else {
                Stability::Reserved
            } else {
                Stability::Stable
            };
            assert_eq!(k.stability, expected, "unexpected stability for {:?}", k.id);
        }
    }
}
