//! Renders per-language lookup tables.
//!
//! A table is a slice literal of `(Enum::Variant, "name")` pairs, meant to be
//! pulled into the consuming crate with `include!`.

use crate::record::Record;

/// Renders the lookup table of `records` for `enum_name`, naming each record with `name_of`.
pub fn emit<'a>(
    records: &'a [Record],
    enum_name: &str,
    name_of: impl Fn(&'a Record) -> &'a str,
) -> String {
    let mut out = String::from("&[\n");
    for record in records {
        out.push_str(&format!(
            "    ({}::{}, \"{}\"),\n",
            enum_name,
            record.id,
            escape(name_of(record))
        ));
    }
    out.push_str("]\n");
    out
}

/// Escapes the characters that would end or break a string literal.
fn escape(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    escaped
}
