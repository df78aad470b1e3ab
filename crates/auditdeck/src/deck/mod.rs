pub mod content;
mod iso27001;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{DeckError, Result};
use crate::icons::Icon;

pub use content::{Block, CalloutKind, Card, Inline};

static BUILTIN: LazyLock<Deck> = LazyLock::new(iso27001::deck);

/// One static unit of deck content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: Icon,
    pub content: Vec<Block>,
}

/// Ordered, immutable sequence of slides.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    slides: Vec<SlideRecord>,
}

impl Deck {
    pub fn new(slides: Vec<SlideRecord>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateId(slide.id.clone()));
            }
        }
        Ok(Self { slides })
    }

    /// The ISO 27001:2022 audit deck, built on first use.
    pub fn builtin() -> &'static Deck {
        &BUILTIN
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Result<&SlideRecord> {
        self.slides.get(index).ok_or(DeckError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }

    /// Index of the slide with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_deck(count: usize) -> Deck {
    let slides = (0..count)
        .map(|i| SlideRecord {
            id: format!("slide-{i}"),
            title: format!("Slide {i}"),
            subtitle: format!("Subtitle {i}"),
            icon: Icon::BookOpen,
            content: vec![content::paragraph(vec![content::text("body")])],
        })
        .collect();
    Deck::new(slides).expect("sample deck is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_source_slides_in_order() {
        let deck = Deck::builtin();
        assert_eq!(deck.count(), 14);
        assert_eq!(deck.get(0).unwrap().id, "intro");
        assert_eq!(deck.get(1).unwrap().id, "clause-4");
        assert_eq!(deck.get(8).unwrap().id, "annex-intro");
        assert_eq!(deck.get(13).unwrap().id, "conclusion");
    }

    #[test]
    fn builtin_slides_are_never_empty() {
        for slide in Deck::builtin() {
            assert!(!slide.title.is_empty(), "{} has no title", slide.id);
            assert!(!slide.subtitle.is_empty(), "{} has no subtitle", slide.id);
            let items: usize = slide.content.iter().map(Block::text_items).sum();
            assert!(items > 0, "{} has no content", slide.id);
        }
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(Deck::builtin(), Deck::builtin()));
    }

    #[test]
    fn get_out_of_range() {
        let deck = sample_deck(3);
        assert_eq!(
            deck.get(3).unwrap_err(),
            DeckError::OutOfRange { index: 3, count: 3 }
        );
        assert!(deck.get(2).is_ok());
    }

    #[test]
    fn rejects_empty_deck() {
        assert_eq!(Deck::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut slides: Vec<_> = sample_deck(2).iter().cloned().collect();
        slides[1].id = slides[0].id.clone();
        assert_eq!(
            Deck::new(slides).unwrap_err(),
            DeckError::DuplicateId("slide-0".to_string())
        );
    }

    #[test]
    fn position_finds_by_id() {
        let deck = Deck::builtin();
        assert_eq!(deck.position("clause-6"), Some(3));
        assert_eq!(deck.position("missing"), None);
    }
}
