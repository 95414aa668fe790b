//! Render the vocabulary registries as a Markdown language reference.
//!
//! The `generate_lang_reference` binary writes the output of [`render_markdown`] to
//! `docs/language/reference.md`. Keeping the rendering here (pure, no IO) lets it be unit tested.

use super::keywords::{self, KeywordCategory};
use super::{operators, punctuation, subjects};

/// Render the full language reference document.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# QuestLang language reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `cargo run -p questlang_core --bin generate_lang_reference`\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Keywords](#keywords)\n");
    out.push_str("- [Condition subjects](#condition-subjects)\n");
    out.push_str("- [Operators](#operators)\n");
    out.push_str("- [Punctuation](#punctuation)\n\n");

    render_keywords_section(&mut out);
    render_subjects_section(&mut out);
    render_operators_section(&mut out);
    render_punctuation_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    out.push('\n');
    out
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count {
        out.pop();
    }
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines_to_at_most_two(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
    out.push_str(heading);
    out.push_str("\n\n");
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Keywords");

    for category in [
        KeywordCategory::Movement,
        KeywordCategory::Action,
        KeywordCategory::ControlFlow,
    ] {
        out.push_str(&format!("### {}\n\n", category.as_str()));
        out.push_str("| Id | Canonical | Description | Since | Stability |\n");
        out.push_str("|----|---|---|---|---|\n");
        for k in keywords::KEYWORDS.iter().filter(|k| k.category == category) {
            out.push_str(&format!(
                "| {:?} | `{}` | {} | {} | {} |\n",
                k.id,
                k.canonical,
                k.description,
                k.since_version,
                k.stability.as_str()
            ));
        }
        out.push('\n');
    }

    out.push_str("### Examples\n\n");
    for k in keywords::KEYWORDS {
        for ex in k.examples {
            out.push_str(&format!("#### `{}`\n\n", k.canonical));
            out.push_str("```questlang\n");
            out.push_str(ex.code);
            out.push_str("\n```\n\n");
            if let Some(note) = ex.note {
                out.push_str(note);
                out.push_str("\n\n");
            }
        }
    }
}

fn render_subjects_section(out: &mut String) {
    start_section(out, "## Condition subjects");

    out.push_str("`if` and `while` conditions must name exactly one of these identifiers.\n\n");
    out.push_str("| Id | Canonical | Description | Since |\n");
    out.push_str("|----|---|---|---|\n");
    for s in subjects::SUBJECTS {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} |\n",
            s.id, s.canonical, s.description, s.since_version
        ));
    }
}

fn render_operators_section(out: &mut String) {
    start_section(out, "## Operators");

    out.push_str("| Id | Spelling | Category | Fixity | Since | Stability |\n");
    out.push_str("|----|---|---|---|---|---|\n");
    for o in operators::OPERATORS {
        out.push_str(&format!(
            "| {:?} | `{}` | {:?} | {:?} | {} | {} |\n",
            o.id,
            escape_cell(o.canonical),
            o.category,
            o.fixity,
            o.since_version,
            o.stability.as_str()
        ));
    }
}

/// Escape `|` so spellings like `||` do not split a table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn render_punctuation_section(out: &mut String) {
    start_section(out, "## Punctuation");

    out.push_str("| Id | Spelling | Category | Since |\n");
    out.push_str("|----|---|---|---|\n");
    for p in punctuation::PUNCTUATION {
        out.push_str(&format!(
            "| {:?} | `{}` | {:?} | {} |\n",
            p.id, p.canonical, p.category, p.since_version
        ));
    }
}
