pub mod blocks;
pub mod paint;

use crate::deck::{Block, SlideRecord};
use crate::icons::Icon;
use crate::nav::ViewMode;

/// Header row shared by both modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    pub icon: Icon,
    pub title: &'a str,
    pub subtitle: &'a str,
    /// `"<position> / <total>"`, interactive frames only.
    pub indicator: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightPolicy {
    /// Bounded by the viewport; taller content scrolls inside the region.
    Scroll,
    /// Grows to the content's natural height so nothing is cut off.
    Expand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegion<'a> {
    pub policy: HeightPolicy,
    pub blocks: &'a [Block],
}

impl ContentRegion<'_> {
    /// Whether any content can end up out of reach. Scrolling regions keep
    /// overflow reachable and expanding ones have none.
    pub fn clips(&self) -> bool {
        match self.policy {
            HeightPolicy::Scroll | HeightPolicy::Expand => false,
        }
    }
}

/// Screen-only ornaments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Gradient strip along the bottom edge of the frame.
    FooterBar,
}

/// Layout description of one rendered slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub slide_id: &'a str,
    pub header: Header<'a>,
    pub content: ContentRegion<'a>,
    pub decoration: Option<Decoration>,
    /// Start the next slide on a new printed page.
    pub page_break_after: bool,
}

/// Build the frame for `slide` in the given mode.
///
/// `position` is 1-based. It only shows up in interactive frames; print
/// frames read like a document and carry no slide counter.
pub fn render<'a>(slide: &'a SlideRecord, mode: ViewMode, position: usize, total: usize) -> Frame<'a> {
    let header = |indicator| Header {
        icon: slide.icon,
        title: &slide.title,
        subtitle: &slide.subtitle,
        indicator,
    };
    match mode {
        ViewMode::Interactive => Frame {
            slide_id: &slide.id,
            header: header(Some(format!("{position} / {total}"))),
            content: ContentRegion {
                policy: HeightPolicy::Scroll,
                blocks: &slide.content,
            },
            decoration: Some(Decoration::FooterBar),
            page_break_after: false,
        },
        ViewMode::Print => Frame {
            slide_id: &slide.id,
            header: header(None),
            content: ContentRegion {
                policy: HeightPolicy::Expand,
                blocks: &slide.content,
            },
            decoration: None,
            page_break_after: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn interactive_frame_scrolls_and_counts() {
        let slide = Deck::builtin().get(3).unwrap();
        let frame = render(slide, ViewMode::Interactive, 4, 14);
        assert_eq!(frame.header.indicator.as_deref(), Some("4 / 14"));
        assert_eq!(frame.content.policy, HeightPolicy::Scroll);
        assert_eq!(frame.decoration, Some(Decoration::FooterBar));
        assert!(!frame.page_break_after);
    }

    #[test]
    fn print_frame_expands_without_ornaments() {
        let slide = Deck::builtin().get(3).unwrap();
        let frame = render(slide, ViewMode::Print, 4, 14);
        assert_eq!(frame.header.indicator, None);
        assert_eq!(frame.content.policy, HeightPolicy::Expand);
        assert_eq!(frame.decoration, None);
        assert!(frame.page_break_after);
        assert!(!frame.content.clips());
    }

    #[test]
    fn both_modes_carry_the_full_content() {
        let slide = Deck::builtin().get(0).unwrap();
        let interactive = render(slide, ViewMode::Interactive, 1, 14);
        let print = render(slide, ViewMode::Print, 1, 14);
        assert_eq!(interactive.content.blocks, slide.content.as_slice());
        assert_eq!(print.content.blocks, slide.content.as_slice());
        assert_eq!(interactive.header.title, print.header.title);
        assert_eq!(interactive.header.icon, print.header.icon);
    }

    #[test]
    fn rendering_is_a_function_of_slide_and_mode() {
        let slide = Deck::builtin().get(5).unwrap();
        assert_eq!(
            render(slide, ViewMode::Interactive, 6, 14),
            render(slide, ViewMode::Interactive, 6, 14)
        );
    }
}
