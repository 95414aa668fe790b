//! Generate the Markdown language reference from `questlang_core::lang` registries.
//!
//! ## Notes
//! - The generated file is checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the registries instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p questlang_core --bin generate_lang_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use questlang_core::lang::reference;

fn main() {
    let out_dir = workspace_root().join("docs/language");
    fs::create_dir_all(&out_dir).expect("create docs/language/");

    let path = out_dir.join("reference.md");
    fs::write(&path, reference::render_markdown()).expect("write reference.md");
    println!("wrote {}", path.display());
}

fn workspace_root() -> PathBuf {
    // crates/questlang_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/questlang_core)")
}
