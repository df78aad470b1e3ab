//! Write the print view as a standalone HTML document for the browser's
//! print-to-PDF.

use std::path::Path;

use colored::Colorize;

use crate::deck::{Block, Card, Deck, Inline};
use crate::icons::{EmojiGlyphs, GlyphProvider, PlainGlyphs};
use crate::render::{Frame, HeightPolicy};
use crate::views::print::{Document, Instructions};

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; padding: 2rem; background: #fff; color: #1e293b;
       font-family: "Noto Sans TC", "PingFang TC", "Microsoft JhengHei", sans-serif; }
main { max-width: 64rem; margin: 0 auto; }
.instructions { text-align: center; border-bottom: 1px solid #e2e8f0; padding-bottom: 2rem; margin-bottom: 2rem; }
.instructions h1 { color: #2563eb; font-size: 1.5rem; margin: 0 0 .5rem; }
.slide { background: #f8fafc; border: 2px solid #e2e8f0; border-radius: .75rem; padding: 2rem; margin-bottom: 2rem; }
.slide > header { display: flex; align-items: center; gap: .75rem; border-bottom: 1px solid #e2e8f0; padding-bottom: 1rem; margin-bottom: 1.5rem; }
.slide > header .icon { font-size: 2rem; color: #2563eb; }
.slide h2 { margin: 0; font-size: 1.5rem; color: #0f172a; }
.slide .subtitle { margin: 0; font-size: .875rem; color: #64748b; }
.content.expand { overflow: visible; height: auto; max-height: none; }
.content.scroll { overflow-y: auto; }
.lead { text-align: center; padding: 2rem 0; }
.lead .icon { font-size: 4rem; color: #2563eb; }
.lead h1 { font-size: 2.25rem; }
.callout { padding: 1rem; border-left: 4px solid; border-radius: 0 .5rem .5rem 0; margin-bottom: 1rem; }
.callout h3 { margin: 0 0 .5rem; font-size: 1rem; }
.callout-normal { background: #fff; border-color: #94a3b8; } .callout-normal h3 { color: #334155; }
.callout-audit { background: #eff6ff; border-color: #2563eb; } .callout-audit h3 { color: #1e40af; }
.callout-trap { background: #fffbeb; border-color: #f59e0b; } .callout-trap h3 { color: #92400e; }
.callout-evidence { background: #ecfdf5; border-color: #10b981; } .callout-evidence h3 { color: #065f46; }
.columns, .cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1rem; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: .5rem; padding: 1rem; }
.card h4 { margin: 0 0 .5rem; }
ul { list-style: disc; padding-left: 1.25rem; margin: 0; }
li { margin-bottom: .5rem; }
.accent { color: #2563eb; font-weight: bold; }
blockquote { text-align: center; font-size: 1.5rem; font-weight: bold; margin: 2rem 0 0; }
blockquote footer { font-size: 1rem; font-weight: normal; color: #64748b; margin-top: .5rem; }
.page-break { break-after: page; page-break-after: always; }
.callout, .card, .lead, blockquote { break-inside: avoid; page-break-inside: avoid; }
@media print {
  @page { margin: 1cm; size: auto; }
  body { padding: 0; -webkit-print-color-adjust: exact; print-color-adjust: exact; }
  .no-print { display: none !important; }
  .slide { margin-bottom: 0; }
}
"#;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn inlines_html(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(s) => escape(s),
            Inline::Strong(s) => format!("<strong>{}</strong>", escape(s)),
            Inline::Accent(s) => format!("<span class=\"accent\">{}</span>", escape(s)),
        })
        .collect()
}

fn blocks_html(blocks: &[Block], glyphs: &dyn GlyphProvider) -> String {
    blocks.iter().map(|b| block_html(b, glyphs)).collect()
}

fn card_html(card: &Card, glyphs: &dyn GlyphProvider) -> String {
    let icon = card
        .icon
        .map(|i| format!("<span class=\"icon\">{}</span> ", glyphs.glyph(i)))
        .unwrap_or_default();
    format!(
        "<div class=\"card\"><h4>{icon}{}</h4>{}</div>",
        escape(&card.title),
        blocks_html(&card.body, glyphs)
    )
}

fn block_html(block: &Block, glyphs: &dyn GlyphProvider) -> String {
    match block {
        Block::Lead {
            icon,
            headline,
            paragraphs,
        } => {
            let icon = icon
                .map(|i| format!("<div class=\"icon\">{}</div>", glyphs.glyph(i)))
                .unwrap_or_default();
            let paragraphs: String = paragraphs
                .iter()
                .map(|p| format!("<p>{}</p>", inlines_html(p)))
                .collect();
            format!(
                "<div class=\"lead\">{icon}<h1>{}</h1>{paragraphs}</div>",
                inlines_html(headline)
            )
        }
        Block::Paragraph(inlines) => format!("<p>{}</p>", inlines_html(inlines)),
        Block::Bullets(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", inlines_html(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Block::Callout { kind, title, body } => {
            let marker = kind
                .marker()
                .map(|i| format!("{} ", glyphs.glyph(i)))
                .unwrap_or_default();
            format!(
                "<div class=\"callout callout-{}\"><h3>{marker}{}</h3>{}</div>",
                kind.name(),
                escape(title),
                blocks_html(body, glyphs)
            )
        }
        Block::Columns(columns) => {
            let columns: String = columns
                .iter()
                .map(|c| format!("<div class=\"column\">{}</div>", blocks_html(c, glyphs)))
                .collect();
            format!("<div class=\"columns\">{columns}</div>")
        }
        Block::Cards(cards) => {
            let cards: String = cards.iter().map(|c| card_html(c, glyphs)).collect();
            format!("<div class=\"cards\">{cards}</div>")
        }
        Block::Quote { text, caption } => {
            let caption = caption
                .as_deref()
                .map(|c| format!("<footer>{}</footer>", escape(c)))
                .unwrap_or_default();
            format!("<blockquote>{}{caption}</blockquote>", escape(text))
        }
    }
}

fn frame_html(frame: &Frame<'_>, glyphs: &dyn GlyphProvider) -> String {
    let mut classes = String::from("slide");
    if frame.page_break_after {
        classes.push_str(" page-break");
    }
    let indicator = frame
        .header
        .indicator
        .as_deref()
        .map(|i| format!("<span class=\"indicator\">{}</span>", escape(i)))
        .unwrap_or_default();
    let policy = match frame.content.policy {
        HeightPolicy::Scroll => "scroll",
        HeightPolicy::Expand => "expand",
    };
    format!(
        "<section class=\"{classes}\" id=\"{}\">\n<header><span class=\"icon\">{}</span><div><h2>{}</h2><p class=\"subtitle\">{}</p></div>{indicator}</header>\n<div class=\"content {policy}\">{}</div>\n</section>\n",
        escape(frame.slide_id),
        glyphs.glyph(frame.header.icon),
        escape(frame.header.title),
        escape(frame.header.subtitle),
        blocks_html(frame.content.blocks, glyphs),
    )
}

fn instructions_html(instructions: &Instructions) -> String {
    format!(
        "<div class=\"instructions no-print\"><h1>{}</h1><p>{}</p></div>\n",
        escape(instructions.heading),
        escape(instructions.body)
    )
}

/// Render a print document as a complete HTML page.
pub fn render_html(document: &Document<'_>, title: &str, glyphs: &dyn GlyphProvider) -> String {
    let frames: String = document
        .frames
        .iter()
        .map(|f| frame_html(f, glyphs))
        .collect();
    format!(
        "<!DOCTYPE html>\n<html lang=\"zh-Hant\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{}{frames}</main>\n</body>\n</html>\n",
        escape(title),
        instructions_html(&document.instructions),
    )
}

pub fn run(output: &Path, plain_icons: bool) -> anyhow::Result<()> {
    let deck = Deck::builtin();
    let document = Document::new(deck);
    let title = deck.get(0)?.title.as_str();
    let html = if plain_icons {
        render_html(&document, title, &PlainGlyphs)
    } else {
        render_html(&document, title, &EmojiGlyphs)
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, html)?;
    log::info!("Wrote {} slides to {}", document.frames.len(), output.display());

    eprintln!(
        "{} {} slides to {}",
        "Exported".green().bold(),
        document.frames.len(),
        output.display()
    );
    eprintln!("Open it in a browser and print (Ctrl+P / Command+P) to save as PDF.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::sample_deck;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape("<a href=\"x\">R&D's</a>"),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn one_section_per_slide_with_page_breaks() {
        let deck = Deck::builtin();
        let html = render_html(&Document::new(deck), "deck", &PlainGlyphs);
        assert_eq!(html.matches("<section class=\"slide page-break\"").count(), deck.count());
        assert!(html.contains("break-after: page"));
        assert!(html.contains("break-inside: avoid"));
        assert!(!html.contains("class=\"content scroll\""));
    }

    #[test]
    fn omits_slide_counters() {
        let deck = sample_deck(15);
        let html = render_html(&Document::new(&deck), "deck", &PlainGlyphs);
        assert!(!html.contains("class=\"indicator\""));
        assert!(!html.contains("1 / 15"));
    }

    #[test]
    fn instructions_are_screen_only() {
        let html = render_html(&Document::new(Deck::builtin()), "deck", &PlainGlyphs);
        assert!(html.contains("<div class=\"instructions no-print\">"));
        assert!(html.contains(".no-print { display: none !important; }"));
    }

    #[test]
    fn callouts_carry_kind_and_marker() {
        let block = crate::deck::content::callout(
            crate::deck::CalloutKind::Trap,
            "Pitfalls",
            vec![crate::deck::content::paragraph(vec![
                crate::deck::content::text("a < b"),
            ])],
        );
        let html = block_html(&block, &PlainGlyphs);
        assert_eq!(
            html,
            "<div class=\"callout callout-trap\"><h3>! Pitfalls</h3><p>a &lt; b</p></div>"
        );
    }

    #[test]
    fn writes_file() {
        let dir = std::env::temp_dir().join(format!("auditdeck-export-{}", std::process::id()));
        let path = dir.join("deck.html");
        run(&path, true).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"conclusion\""));
        let _ = std::fs::remove_dir_all(dir);
    }
}
