use colored::Colorize;

use crate::deck::Deck;
use crate::icons::{EmojiGlyphs, GlyphProvider};

pub fn run(json: bool) -> anyhow::Result<()> {
    let deck = Deck::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(deck)?);
        return Ok(());
    }
    for line in lines(deck, &EmojiGlyphs) {
        println!("{line}");
    }
    Ok(())
}

fn lines(deck: &Deck, glyphs: &dyn GlyphProvider) -> Vec<String> {
    let width = deck.iter().map(|s| s.id.len()).max().unwrap_or(0);
    deck.iter()
        .enumerate()
        .map(|(i, slide)| {
            format!(
                "{:>3}  {:<width$}  {} {}  {}",
                (i + 1).to_string().bold(),
                slide.id.cyan(),
                glyphs.glyph(slide.icon),
                slide.title,
                slide.subtitle.dimmed(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::PlainGlyphs;

    #[test]
    fn one_line_per_slide() {
        colored::control::set_override(false);
        let deck = Deck::builtin();
        let lines = lines(deck, &PlainGlyphs);
        assert_eq!(lines.len(), deck.count());
        assert!(lines[0].trim_start().starts_with("1  intro"));
        assert!(lines.last().unwrap().contains("conclusion"));
    }

    #[test]
    fn json_lists_every_slide() {
        let value = serde_json::to_value(Deck::builtin()).unwrap();
        let slides = value["slides"].as_array().unwrap();
        assert_eq!(slides.len(), Deck::builtin().count());
        assert_eq!(slides[12]["id"], "annex-tech");
    }
}
