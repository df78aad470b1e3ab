use serde::Serialize;

/// Closed set of glyphs the deck can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ShieldCheck,
    BookOpen,
    Users,
    BrainCircuit,
    Activity,
    TrendingUp,
    CheckCircle,
    LayoutGrid,
    Briefcase,
    Building,
    Cpu,
    Server,
    Lock,
    Search,
    AlertTriangle,
    FileSearch,
    Printer,
    MonitorPlay,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    /// Stable identifier, independent of how the glyph is drawn.
    pub fn id(self) -> &'static str {
        match self {
            Self::ShieldCheck => "shield-check",
            Self::BookOpen => "book-open",
            Self::Users => "users",
            Self::BrainCircuit => "brain-circuit",
            Self::Activity => "activity",
            Self::TrendingUp => "trending-up",
            Self::CheckCircle => "check-circle",
            Self::LayoutGrid => "layout-grid",
            Self::Briefcase => "briefcase",
            Self::Building => "building",
            Self::Cpu => "cpu",
            Self::Server => "server",
            Self::Lock => "lock",
            Self::Search => "search",
            Self::AlertTriangle => "alert-triangle",
            Self::FileSearch => "file-search",
            Self::Printer => "printer",
            Self::MonitorPlay => "monitor-play",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
        }
    }

    pub fn all() -> &'static [Icon] {
        &[
            Icon::ShieldCheck,
            Icon::BookOpen,
            Icon::Users,
            Icon::BrainCircuit,
            Icon::Activity,
            Icon::TrendingUp,
            Icon::CheckCircle,
            Icon::LayoutGrid,
            Icon::Briefcase,
            Icon::Building,
            Icon::Cpu,
            Icon::Server,
            Icon::Lock,
            Icon::Search,
            Icon::AlertTriangle,
            Icon::FileSearch,
            Icon::Printer,
            Icon::MonitorPlay,
            Icon::ChevronLeft,
            Icon::ChevronRight,
        ]
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Maps an [`Icon`] to the text that draws it.
pub trait GlyphProvider {
    fn glyph(&self, icon: Icon) -> &'static str;
}

/// Unicode glyphs covered by egui's bundled emoji fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiGlyphs;

impl GlyphProvider for EmojiGlyphs {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::ShieldCheck => "\u{1F6E1}",
            Icon::BookOpen => "\u{1F4D6}",
            Icon::Users => "\u{1F465}",
            Icon::BrainCircuit => "\u{1F9E0}",
            Icon::Activity => "\u{1F4C8}",
            Icon::TrendingUp => "\u{1F4CA}",
            Icon::CheckCircle => "\u{2705}",
            Icon::LayoutGrid => "\u{25A6}",
            Icon::Briefcase => "\u{1F4BC}",
            Icon::Building => "\u{1F3E2}",
            Icon::Cpu => "\u{1F4BB}",
            Icon::Server => "\u{1F5C4}",
            Icon::Lock => "\u{1F512}",
            Icon::Search => "\u{1F50D}",
            Icon::AlertTriangle => "\u{26A0}",
            Icon::FileSearch => "\u{1F4C4}",
            Icon::Printer => "\u{1F5B6}",
            Icon::MonitorPlay => "\u{1F5B5}",
            Icon::ChevronLeft => "\u{23F4}",
            Icon::ChevronRight => "\u{23F5}",
        }
    }
}

/// ASCII tags, for outputs that cannot rely on an emoji font.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainGlyphs;

impl GlyphProvider for PlainGlyphs {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::ChevronLeft => "<",
            Icon::ChevronRight => ">",
            Icon::AlertTriangle => "!",
            Icon::Search => "?",
            Icon::CheckCircle => "v",
            _ => "*",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Icon::all().iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), Icon::all().len());
    }

    #[test]
    fn every_icon_has_an_emoji_glyph() {
        for icon in Icon::all() {
            assert!(!EmojiGlyphs.glyph(*icon).is_empty(), "{icon} has no glyph");
        }
    }

    #[test]
    fn serializes_as_kebab_case_id() {
        let json = serde_json::to_string(&Icon::BrainCircuit).unwrap();
        assert_eq!(json, "\"brain-circuit\"");
    }
}
