//! Condition subjects.
//!
//! An `if` or `while` condition may only name one of four fixed subjects. They are ordinary identifiers to the
//! lexer; only the checker consults this table.
//!
//! ## Examples
//! ```rust
//! use questlang_core::lang::subjects::{self, SubjectId};
//!
//! assert_eq!(subjects::from_str("hero"), Some(SubjectId::Hero));
//! assert_eq!(subjects::from_str("dragon"), None);
//! assert_eq!(subjects::expected_list(), "'hero', 'enemy', 'treasure' or 'trap'");
//! ```

use super::registry::{INITIAL_VERSION, SinceVersion};

/// Stable identifier for every condition subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectId {
    Hero,
    Enemy,
    Treasure,
    Trap,
}

/// Metadata for a subject.
#[derive(Debug, Clone, Copy)]
pub struct SubjectInfo {
    pub id: SubjectId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub since_version: SinceVersion,
}

/// Registry of all subjects, in the order diagnostics list them.
pub const SUBJECTS: &[SubjectInfo] = &[
    info(SubjectId::Hero, "hero", "The player character."),
    info(SubjectId::Enemy, "enemy", "An enemy in range."),
    info(SubjectId::Treasure, "treasure", "Treasure in reach."),
    info(SubjectId::Trap, "trap", "A trap ahead."),
];

/// Return the canonical spelling for a subject.
pub fn as_str(id: SubjectId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a subject.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SubjectId) -> &'static SubjectInfo {
    SUBJECTS.iter().find(|s| s.id == id).expect("subject info missing")
}

/// Resolve an identifier spelling to a subject, if allowed in conditions.
pub fn from_str(s: &str) -> Option<SubjectId> {
    SUBJECTS.iter().find(|info| info.canonical == s).map(|info| info.id)
}

/// Render the allow-list for diagnostics: `'a', 'b', 'c' or 'd'`.
pub fn expected_list() -> String {
    let quoted: Vec<String> = SUBJECTS.iter().map(|s| format!("'{}'", s.canonical)).collect();
    match quoted.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => String::new(),
    }
}

const fn info(id: SubjectId, canonical: &'static str, description: &'static str) -> SubjectInfo {
    SubjectInfo {
        id,
        canonical,
        description,
        since_version: INITIAL_VERSION,
    }
}
