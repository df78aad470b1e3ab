use serde::Serialize;

use crate::icons::Icon;

/// A run of text with a single emphasis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
    /// Highlighted in the theme's accent colour.
    Accent(String),
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Strong(s) | Inline::Accent(s) => s,
        }
    }
}

/// Concatenate the text of a run of inlines, dropping emphasis.
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::as_str).collect()
}

/// Category of a callout box. Each kind has its own colour and marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalloutKind {
    Normal,
    Audit,
    Trap,
    Evidence,
}

impl CalloutKind {
    /// Marker drawn before the callout title.
    pub fn marker(self) -> Option<Icon> {
        match self {
            Self::Normal => None,
            Self::Audit => Some(Icon::Search),
            Self::Trap => Some(Icon::AlertTriangle),
            Self::Evidence => Some(Icon::FileSearch),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Audit => "audit",
            Self::Trap => "trap",
            Self::Evidence => "evidence",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub title: String,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Centered hero block: large icon, headline and supporting paragraphs.
    Lead {
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        headline: Vec<Inline>,
        paragraphs: Vec<Vec<Inline>>,
    },
    Paragraph(Vec<Inline>),
    Bullets(Vec<Vec<Inline>>),
    Callout {
        kind: CalloutKind,
        title: String,
        body: Vec<Block>,
    },
    /// Side-by-side groups; stacked when the frame is narrow.
    Columns(Vec<Vec<Block>>),
    Cards(Vec<Card>),
    Quote {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl Block {
    /// Number of leaf text items, used to sanity check that nothing renders empty.
    pub fn text_items(&self) -> usize {
        match self {
            Block::Lead { paragraphs, .. } => 1 + paragraphs.len(),
            Block::Paragraph(_) | Block::Quote { .. } => 1,
            Block::Bullets(items) => items.len(),
            Block::Callout { body, .. } => 1 + body.iter().map(Block::text_items).sum::<usize>(),
            Block::Columns(columns) => columns.iter().flatten().map(Block::text_items).sum(),
            Block::Cards(cards) => cards
                .iter()
                .map(|c| 1 + c.body.iter().map(Block::text_items).sum::<usize>())
                .sum(),
        }
    }
}

pub fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

pub fn strong(s: &str) -> Inline {
    Inline::Strong(s.to_string())
}

pub fn accent(s: &str) -> Inline {
    Inline::Accent(s.to_string())
}

pub fn paragraph(inlines: Vec<Inline>) -> Block {
    Block::Paragraph(inlines)
}

pub fn callout(kind: CalloutKind, title: &str, body: Vec<Block>) -> Block {
    Block::Callout {
        kind,
        title: title.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_drops_emphasis() {
        let inlines = vec![text("Use "), strong("SoA"), accent(" often")];
        assert_eq!(plain_text(&inlines), "Use SoA often");
    }

    #[test]
    fn callout_markers_follow_kind() {
        assert_eq!(CalloutKind::Normal.marker(), None);
        assert_eq!(CalloutKind::Audit.marker(), Some(Icon::Search));
        assert_eq!(CalloutKind::Trap.marker(), Some(Icon::AlertTriangle));
        assert_eq!(CalloutKind::Evidence.marker(), Some(Icon::FileSearch));
    }

    #[test]
    fn text_items_counts_nested_blocks() {
        let block = callout(
            CalloutKind::Audit,
            "Checks",
            vec![Block::Bullets(vec![vec![text("a")], vec![text("b")]])],
        );
        assert_eq!(block.text_items(), 3);
    }
}
