//! Turns display names into enumeration variant names.
//!
//! `"Crude Oil (Raw)"` becomes `CrudeOilRaw`: every whitespace-separated word
//! loses its `(`, `)`, `.` and `-` characters and gets its first character
//! upper-cased, and the words are glued together. The rest of each word keeps
//! its case, so `"High-purity Silicon"` becomes `HighpuritySilicon`.
//!
//! Upper-casing uses the full Unicode mapping, which may expand a character:
//! `"ßtraße"` becomes `SStraße`.

/// Characters dropped from every word.
pub const STRIPPED_CHARS: [char; 4] = ['(', ')', '.', '-'];

/// Derives the identifier for a display name.
///
/// Never fails. Distinct names may derive the same identifier; see
/// [`crate::record::check_unique`].
pub fn derive(name: &str) -> String {
    name.split_whitespace().map(niceify).collect()
}

fn niceify(word: &str) -> String {
    let cleaned: String = word.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect();
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if `id` can be used as a Rust identifier (keywords excluded).
pub fn is_valid_identifier(id: &str) -> bool {
    syn::parse_str::<syn::Ident>(id).is_ok()
}
