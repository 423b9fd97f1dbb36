//! Canonical ASCII search-key normalization for free-form text (product
//! titles, HTML snippets), with a suffix heuristic approximating
//! Brazilian-Portuguese singularization.

pub mod entities;
pub mod folding;
pub mod markup;
pub mod plural;

// Re-export the pipeline surface for convenient access
pub use entities::decode_entities;
pub use folding::{collapse_non_word, fold_accents, normalize_text};
pub use markup::{normalize_html, strip_tags};
pub use plural::singularize;
