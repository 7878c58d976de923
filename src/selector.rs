//! Selector term rendering and merging
//!
//! Both label and field selectors are rendered with the same set-based syntax:
//! - One value: `key=value`
//! - Several values: `key in (value1,value2)`
//! - Terms combined with commas: `key1=value1,key2 in (v2,v3)`

use std::fmt;

/// A key with its accepted values, rendered as one selector term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub key: String,
    pub values: Vec<String>,
}

impl Requirement {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Parse an equality or `in` term
    ///
    /// Returns `None` for terms the builder never merges into: inequality,
    /// `notin`, existence checks and anything malformed.
    pub fn parse(term: &str) -> Option<Self> {
        let term = term.trim();

        if let Some((key, rest)) = term.split_once(" in ") {
            let rest = rest.trim();
            let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
            let values = inner
                .split(',')
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect();
            return Some(Self::new(key.trim(), values));
        }

        if term.contains(" notin ") || term.starts_with('!') || term.contains("!=") {
            return None;
        }

        let (key, value) = term
            .split_once("==")
            .or_else(|| term.split_once('='))?;
        Some(Self::new(key.trim(), vec![value.trim().to_string()]))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.values.as_slice() {
            [value] => write!(f, "{}={}", self.key, value),
            values => write!(f, "{} in ({})", self.key, values.join(",")),
        }
    }
}

/// Split a selector string by commas, but not inside parentheses
pub fn split_terms(selector: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut depth = 0i32;

    for (i, ch) in selector.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                result.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    result.push(&selector[start..]);

    result
        .into_iter()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}

enum Term {
    Verbatim(String),
    Merged(Requirement),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Verbatim(term) => f.write_str(term),
            Term::Merged(requirement) => requirement.fmt(f),
        }
    }
}

/// How a derived requirement combines with a caller term on the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// Append the derived values after the caller's
    Extend,
    /// The derived values take the caller term's place
    Replace,
}

/// Merge derived requirements into a caller-supplied selector
///
/// Caller terms keep their text and position. A derived requirement whose key
/// already appears in a caller equality or `in` term is combined with that term
/// as its [`Combine`] says; otherwise it is appended. Returns `None` when
/// nothing remains.
pub fn merge(caller: Option<&str>, derived: Vec<(Requirement, Combine)>) -> Option<String> {
    let mut terms: Vec<Term> = caller
        .map(split_terms)
        .unwrap_or_default()
        .into_iter()
        .map(|term| Term::Verbatim(term.to_string()))
        .collect();

    for (requirement, combine) in derived {
        let slot = terms.iter_mut().find_map(|term| {
            let parsed = match term {
                Term::Verbatim(text) => Requirement::parse(text)?,
                Term::Merged(existing) => existing.clone(),
            };
            (parsed.key == requirement.key).then_some((term, parsed))
        });

        match (slot, combine) {
            (Some((term, mut existing)), Combine::Extend) => {
                existing.values.extend(requirement.values);
                *term = Term::Merged(existing);
            }
            (Some((term, _)), Combine::Replace) => *term = Term::Merged(requirement),
            (None, _) => terms.push(Term::Merged(requirement)),
        }
    }

    if terms.is_empty() {
        return None;
    }

    Some(
        terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )
}
