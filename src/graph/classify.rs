// Attribute value classification
//
// Decides whether a value found at a usage site ends the trace (a literal
// or an expression too complex to follow) or continues it one level up.

use crate::extractors::SPREAD_SENTINEL;
use regex::Regex;
use std::sync::LazyLock;

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\$]|\\.|\$[^{])*\$?`)$"#)
        .expect("valid string literal pattern")
});

static INTEGER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|[0-9][0-9_]*)n?$")
        .expect("valid integer pattern")
});

static PROPS_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^props\s*\.\s*([A-Za-z_$][A-Za-z0-9_$]*)$").expect("valid props access pattern")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier pattern"));

/// Identifiers that name a value rather than a binding to follow
const VALUE_KEYWORDS: &[&str] = &["null", "undefined", "NaN", "Infinity", "this"];

/// What a usage-site value means for the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// String, boolean or integer literal; the value originates here
    Literal,
    /// `props.x`; continue with prop `x`
    PropsAccess(String),
    /// A bare identifier; continue with a prop of the same name
    Identifier(String),
    /// The spread sentinel; continue with the prop name unchanged
    Spread,
    /// Anything else; not followed
    Opaque,
}

impl ValueKind {
    /// Whether the trace stops at the hop carrying this value
    pub fn is_terminal(&self) -> bool {
        matches!(self, ValueKind::Literal | ValueKind::Opaque)
    }

    /// Prop name to look for on the next hop, given the current one
    pub fn next_prop<'a>(&'a self, current: &'a str) -> &'a str {
        match self {
            ValueKind::PropsAccess(name) | ValueKind::Identifier(name) => name,
            _ => current,
        }
    }
}

pub fn classify_value(value: &str) -> ValueKind {
    let value = value.trim();

    if value == SPREAD_SENTINEL {
        return ValueKind::Spread;
    }
    if value == "true"
        || value == "false"
        || STRING_LITERAL.is_match(value)
        || INTEGER_LITERAL.is_match(value)
    {
        return ValueKind::Literal;
    }
    if let Some(captures) = PROPS_ACCESS.captures(value) {
        return ValueKind::PropsAccess(captures[1].to_string());
    }
    if IDENTIFIER.is_match(value) && !VALUE_KEYWORDS.contains(&value) {
        return ValueKind::Identifier(value.to_string());
    }
    ValueKind::Opaque
}
