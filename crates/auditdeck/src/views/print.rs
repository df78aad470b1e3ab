use eframe::egui::{self, RichText};

use crate::deck::Deck;
use crate::icons::GlyphProvider;
use crate::nav::ViewMode;
use crate::render::{self, Frame, paint::paint_frame};
use crate::theme::Theme;

const MAX_DOCUMENT_WIDTH: f32 = 1100.0;

/// Screen-only text explaining how to produce a paged document. Never part
/// of the printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instructions {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const INSTRUCTIONS: Instructions = Instructions {
    heading: "準備列印",
    body: "請按 Ctrl+P (或 Command+P) 另存為 PDF",
};

/// Shown in the window, where the print dialog lives in the browser.
pub const EXPORT_HINT: &str = "執行 `auditdeck export deck.html` 產生列印文件，再以瀏覽器開啟";

/// The whole deck laid out for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    pub instructions: Instructions,
    pub frames: Vec<Frame<'a>>,
}

impl<'a> Document<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        let total = deck.count();
        let frames = deck
            .iter()
            .enumerate()
            .map(|(i, slide)| render::render(slide, ViewMode::Print, i + 1, total))
            .collect();
        Self {
            instructions: INSTRUCTIONS,
            frames,
        }
    }
}

/// Draw the document in a scrollable column.
pub fn show(ui: &mut egui::Ui, document: &Document<'_>, theme: &Theme, glyphs: &dyn GlyphProvider) {
    egui::ScrollArea::vertical()
        .id_salt("print_view")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let width = ui.available_width().min(MAX_DOCUMENT_WIDTH);
            let side = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    draw_instructions(ui, &document.instructions, theme);
                    for frame in &document.frames {
                        paint_frame(ui, frame, theme, glyphs);
                        if frame.page_break_after {
                            draw_page_break(ui, theme);
                        }
                    }
                });
            });
        });
}

fn draw_instructions(ui: &mut egui::Ui, instructions: &Instructions, theme: &Theme) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(instructions.heading)
                .size(theme.title_size)
                .strong()
                .color(theme.accent),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(EXPORT_HINT).size(theme.body_size).color(theme.foreground));
        ui.label(RichText::new(instructions.body).size(theme.body_size).color(theme.foreground));
    });
    ui.add_space(24.0);
    ui.separator();
    ui.add_space(24.0);
}

fn draw_page_break(ui: &mut egui::Ui, theme: &Theme) {
    ui.add_space(16.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 12.0), egui::Sense::hover());
    let y = rect.center().y;
    let stroke = egui::Stroke::new(1.0, theme.muted);
    let dash = 8.0;
    let mut x = rect.left();
    while x < rect.right() {
        let end = (x + dash).min(rect.right());
        ui.painter()
            .line_segment([egui::pos2(x, y), egui::pos2(end, y)], stroke);
        x += dash * 2.0;
    }
    ui.add_space(16.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::sample_deck;
    use crate::render::HeightPolicy;

    #[test]
    fn one_frame_per_slide_in_order() {
        let deck = sample_deck(15);
        let document = Document::new(&deck);
        assert_eq!(document.frames.len(), 15);
        for (frame, slide) in document.frames.iter().zip(deck.iter()) {
            assert_eq!(frame.slide_id, slide.id);
        }
    }

    #[test]
    fn every_frame_is_expanded_and_breaks_the_page() {
        let document = Document::new(Deck::builtin());
        assert_eq!(document.frames.len(), Deck::builtin().count());
        for frame in &document.frames {
            assert_eq!(frame.content.policy, HeightPolicy::Expand);
            assert!(!frame.content.clips());
            assert!(frame.page_break_after);
            assert!(frame.header.indicator.is_none());
            assert!(frame.decoration.is_none());
        }
    }

    #[test]
    fn document_carries_instructions() {
        let document = Document::new(Deck::builtin());
        assert_eq!(document.instructions, INSTRUCTIONS);
    }
}
