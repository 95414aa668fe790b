//! Operator vocabulary.
//!
//! QuestLang lexes arithmetic (`+ - * /`) and logical (`&& || !`) operators, but the grammar does not accept them
//! anywhere yet: the checker reports them as unexpected statement heads.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - There is deliberately no `=` / `==` entry; the lexer classifies those spellings as illegal.
//!
//! ## Examples
//! ```rust
//! use questlang_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("&&"), Some(OperatorId::AndAnd));
//! assert_eq!(operators::info_for(OperatorId::Bang).category, OperatorCategory::Logical);
//! assert_eq!(operators::from_str("=="), None);
//! ```

use super::registry::{INITIAL_VERSION, SinceVersion, Stability};

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Logical
    AndAnd,
    OrOr,
    Bang,
}

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Logical,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
    pub fixity: Fixity,
    pub since_version: SinceVersion,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic, Fixity::Infix),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic, Fixity::Infix),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic, Fixity::Infix),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic, Fixity::Infix),
    // Logical
    op(OperatorId::AndAnd, "&&", OperatorCategory::Logical, Fixity::Infix),
    op(OperatorId::OrOr, "||", OperatorCategory::Logical, Fixity::Infix),
    op(OperatorId::Bang, "!", OperatorCategory::Logical, Fixity::Prefix),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, canonical: &'static str, category: OperatorCategory, fixity: Fixity) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        category,
        fixity,
        since_version: INITIAL_VERSION,
        // Lexed but not part of any statement form.
        stability: Stability::Reserved,
    }
}
