//! Cell content.
//!
//! A [`Cell`] is whatever the caller wants shown in a table slot. The table
//! never inspects it beyond [`Cell::visible_text`], the flattened plain text
//! used for searching and for untyped sorting.

use std::fmt;
use std::sync::Arc;

/// Caller-rendered cell content.
///
/// Implement this for content the table should treat as opaque. Only the
/// visible text is ever asked for.
pub trait CustomCell: Send + Sync {
    /// The text a user would see when this content is rendered.
    fn visible_text(&self) -> String;
}

/// Renderable content of a single cell, header-less detail entry or panel.
#[derive(Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    /// A hyperlink. Only the label is visible.
    Link { label: String, href: String },
    /// A status pill or tag.
    Badge { label: String },
    /// An icon glyph. Icons carry no visible text.
    Icon { name: String },
    /// Rich content made of several parts, rendered in order.
    Fragment(Vec<Cell>),
    Custom(Arc<dyn CustomCell>),
}

impl Cell {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Create a link cell.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Cell::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Create a badge cell.
    pub fn badge(label: impl Into<String>) -> Self {
        Cell::Badge {
            label: label.into(),
        }
    }

    /// Create an icon cell.
    pub fn icon(name: impl Into<String>) -> Self {
        Cell::Icon { name: name.into() }
    }

    /// Wrap caller-rendered content.
    pub fn custom(content: impl CustomCell + 'static) -> Self {
        Cell::Custom(Arc::new(content))
    }

    /// Returns `true` for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Flatten this cell to the plain text a user would see.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        self.write_visible_text(&mut out);
        out
    }

    fn write_visible_text(&self, out: &mut String) {
        match self {
            Cell::Empty | Cell::Icon { .. } => {}
            Cell::Text(s) => out.push_str(s),
            Cell::Integer(n) => out.push_str(&n.to_string()),
            Cell::Float(n) => out.push_str(&n.to_string()),
            Cell::Link { label, .. } | Cell::Badge { label } => out.push_str(label),
            Cell::Fragment(parts) => {
                for part in parts {
                    part.write_visible_text(out);
                }
            }
            Cell::Custom(content) => out.push_str(&content.visible_text()),
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Float(n) => write!(f, "Float({n})"),
            Self::Link { label, href } => write!(f, "Link({label:?} -> {href:?})"),
            Self::Badge { label } => write!(f, "Badge({label:?})"),
            Self::Icon { name } => write!(f, "Icon({name:?})"),
            Self::Fragment(parts) => write!(f, "Fragment({parts:?})"),
            Self::Custom(content) => write!(f, "Custom({:?})", content.visible_text()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Integer(n.into())
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Integer(n)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Float(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stars(u8);

    impl CustomCell for Stars {
        fn visible_text(&self) -> String {
            "*".repeat(self.0 as usize)
        }
    }

    #[test]
    fn test_visible_text_plain() {
        assert_eq!(Cell::text("Contoso").visible_text(), "Contoso");
        assert_eq!(Cell::from(42).visible_text(), "42");
        assert_eq!(Cell::from(2.5).visible_text(), "2.5");
        assert_eq!(Cell::Empty.visible_text(), "");
    }

    #[test]
    fn test_visible_text_rich() {
        let cell = Cell::Fragment(vec![
            Cell::icon("mail"),
            Cell::link("amy@example.com", "mailto:amy@example.com"),
            Cell::text(" "),
            Cell::badge("Primary"),
        ]);
        assert_eq!(cell.visible_text(), "amy@example.com Primary");
    }

    #[test]
    fn test_visible_text_custom() {
        assert_eq!(Cell::custom(Stars(3)).visible_text(), "***");
    }
}
