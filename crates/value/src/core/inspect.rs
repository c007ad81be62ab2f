//! Human-readable value inspection
//!
//! Deterministic rendering used by failure messages and diffs. Nested
//! structures indent two spaces per level; collection headers carry the
//! kind and length so truncated output still tells you what it was.

use std::fmt;

use chrono::SecondsFormat;

use crate::collections::Property;
use crate::core::value::Value;

const GETTER_FAILED: &str = "[Getter (failed)]";

impl Value {
    /// Render this value as a human-readable string.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.inspect_at(0)
    }

    /// Render at a given indentation depth (two spaces per level).
    #[must_use]
    pub fn inspect_at(&self, depth: usize) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::BigInt(i) => format!("{i}n"),
            Self::Float(f) => f.to_string(),
            Self::Text(t) => format!("\"{}\"", t.as_str()),
            Self::Pattern(p) => p.to_string(),
            Self::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Bytes(b) => {
                let head = format!("[Bytes({})]", b.len());
                let items = b.as_slice().iter().map(ToString::to_string).collect();
                format!("{head} {}", enclose(Brace::Square, items, depth))
            }
            Self::Function(f) => match f.name() {
                Some(name) => format!("[Function: {name}]"),
                None => "[Function (anonymous)]".to_string(),
            },
            Self::Opaque(o) => o.to_string(),
            Self::Array(a) => {
                let head = format!("[Array({})]", a.len());
                let items = a.iter().map(|v| v.inspect_at(depth + 1)).collect();
                format!("{head} {}", enclose(Brace::Square, items, depth))
            }
            Self::Set(s) => {
                let head = format!("[Set({})]", s.len());
                let items = s.iter().map(|v| v.inspect_at(depth + 1)).collect();
                format!("{head} {}", enclose(Brace::Curly, items, depth))
            }
            Self::Map(m) => {
                let head = format!("[Map({})]", m.len());
                let items = m
                    .iter()
                    .map(|(k, v)| {
                        format!("{}: {}", k.inspect_at(depth + 1), v.inspect_at(depth + 1))
                    })
                    .collect();
                format!("{head} {}", enclose(Brace::Curly, items, depth))
            }
            Self::Object(o) => {
                let head = format!("[{}]", o.type_name());
                let items = o
                    .sorted_keys()
                    .into_iter()
                    .filter_map(|key| o.get(key).map(|property| (key, property)))
                    .map(|(key, property)| format!("{key}: {}", render_property(property, depth)))
                    .collect();
                format!("{head} {}", enclose(Brace::Curly, items, depth))
            }
            Self::Error(e) => {
                let head = if e.message().is_empty() {
                    format!("[{}]", e.name())
                } else {
                    format!("[{}: {}]", e.name(), e.message())
                };
                let mut keys: Vec<&str> = e
                    .properties()
                    .map(|(k, _)| k.as_str())
                    .filter(|k| *k != "message" && *k != "stack")
                    .collect();
                keys.sort_unstable();
                let items: Vec<String> = keys
                    .into_iter()
                    .filter_map(|key| e.get(key).map(|property| (key, property)))
                    .map(|(key, property)| format!("{key}: {}", render_property(property, depth)))
                    .collect();
                let block = enclose(Brace::Curly, items, depth);
                if block == "{}" { head } else { format!("{head} {block}") }
            }
        }
    }
}

/// `Display` renders the same text as [`Value::inspect`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

fn render_property(property: &Property, depth: usize) -> String {
    match property.read() {
        Some(value) => value.inspect_at(depth + 1),
        None => GETTER_FAILED.to_string(),
    }
}

#[derive(Clone, Copy)]
enum Brace {
    Curly,
    Square,
}

fn enclose(brace: Brace, items: Vec<String>, depth: usize) -> String {
    let (open, close) = match brace {
        Brace::Curly => ('{', '}'),
        Brace::Square => ('[', ']'),
    };
    if items.is_empty() {
        return format!("{open}{close}");
    }
    let list: Vec<String> = items.into_iter().map(|item| indent(&item, depth + 1)).collect();
    format!("{open}\n{}\n{}{close}", list.join(",\n"), "  ".repeat(depth))
}

fn indent(item: &str, depth: usize) -> String {
    format!("{}{item}", "  ".repeat(depth))
}
