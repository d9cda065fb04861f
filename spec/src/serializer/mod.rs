//! Serializers for annotated graphs.
//!
//! Two serialization formats are supported:
//! - **Turtle** ([`turtle`]): vocabulary prefixes compacted, one block per subject
//! - **N-Triples** ([`ntriples`]): one triple per line, absolute IRIs

pub mod ntriples;
pub mod turtle;

/// Escapes a literal's lexical form for a double-quoted Turtle / N-Triples string.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
