//! # Line Index
//!
//! A line-oriented pass over the raw template text that records where each
//! parameter and resource is declared. It is a structural approximation of
//! what the YAML parser sees, not a reparse: only canonical block layout
//! (section key at column 0, declarations indented by two spaces) is
//! recognised, and anything else is simply left out of the index.

use std::collections::HashMap;

const DECLARATION_INDENT: &str = "  ";

/// Which top-level section a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Parameter,
    Resource,
}

impl DeclarationKind {
    pub fn prefix(self) -> &'static str {
        match self {
            DeclarationKind::Parameter => "parameter",
            DeclarationKind::Resource => "resource",
        }
    }

    fn from_section_header(line: &str) -> Option<Self> {
        match line.trim_end() {
            "Parameters:" => Some(DeclarationKind::Parameter),
            "Resources:" => Some(DeclarationKind::Resource),
            _ => None,
        }
    }
}

/// Map from `<kind>_<name>` to the 1-based line of the declaration header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    entries: HashMap<String, usize>,
}

impl LineIndex {
    pub fn build(text: &str) -> Self {
        let mut entries = HashMap::new();
        let mut section: Option<DeclarationKind> = None;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (i, line) in text.lines().enumerate() {
            let line_number = i + 1;

            if is_top_level(line) {
                section = DeclarationKind::from_section_header(line);
                continue;
            }

            let Some(kind) = section else {
                continue;
            };

            if let Some(name) = declaration_name(line) {
                entries
                    .entry(composite_key(kind, name))
                    .or_insert(line_number);
            }
        }

        log::debug!("Indexed {} declaration lines", entries.len());
        Self { entries }
    }

    pub fn line(&self, kind: DeclarationKind, name: &str) -> Option<usize> {
        self.entries.get(&composite_key(kind, name)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn composite_key(kind: DeclarationKind, name: &str) -> String {
    format!("{}_{}", kind.prefix(), name)
}

/// An unindented line that starts a new top-level key (comments and blanks don't count).
fn is_top_level(line: &str) -> bool {
    match line.chars().next() {
        None => false,
        Some(c) => !c.is_whitespace() && c != '#',
    }
}

/// Name of a `  Name:` declaration header, if `line` is one.
fn declaration_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(DECLARATION_INDENT)?;
    let first = rest.chars().next()?;
    if first.is_whitespace() || first == '#' || first == '-' {
        return None;
    }

    let key = rest.trim_end().strip_suffix(':')?;
    let key = strip_quotes(key.trim_end());
    if key.is_empty() || key.contains(": ") {
        return None;
    }
    Some(key)
}

fn strip_quotes(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = key
            .strip_prefix(quote)
            .and_then(|k| k.strip_suffix(quote))
        {
            return inner;
        }
    }
    key
}
