use eframe::egui::{self, Color32, FontFamily, FontId, RichText, Stroke};

use crate::deck::{Block, Card, Inline};
use crate::icons::GlyphProvider;
use crate::theme::Theme;

/// Below this width, columns and card grids stack vertically.
const NARROW_WIDTH: f32 = 640.0;
const CALLOUT_BAR_WIDTH: f32 = 4.0;

/// Create a LayoutJob from inline elements.
pub fn inlines_to_job(
    inlines: &[Inline],
    theme: &Theme,
    font_size: f32,
    color: Color32,
    max_width: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;
    append_inlines(&mut job, inlines, theme, font_size, color);
    job
}

fn append_inlines(
    job: &mut egui::text::LayoutJob,
    inlines: &[Inline],
    theme: &Theme,
    font_size: f32,
    color: Color32,
) {
    for inline in inlines {
        let (text, size, color) = match inline {
            Inline::Text(s) => (s, font_size, color),
            Inline::Strong(s) => (s, font_size + 1.0, theme.heading_color),
            Inline::Accent(s) => (s, font_size + 1.0, theme.accent),
        };
        let format = egui::text::TextFormat {
            font_id: FontId::new(size, FontFamily::Proportional),
            color,
            ..Default::default()
        };
        job.append(text, 0.0, format);
    }
}

/// Lay out a sequence of blocks top to bottom in the current `Ui`.
pub fn paint_blocks(ui: &mut egui::Ui, blocks: &[Block], theme: &Theme, glyphs: &dyn GlyphProvider) {
    for block in blocks {
        paint_block(ui, block, theme, glyphs);
        ui.add_space(12.0);
    }
}

fn paint_block(ui: &mut egui::Ui, block: &Block, theme: &Theme, glyphs: &dyn GlyphProvider) {
    match block {
        Block::Lead {
            icon,
            headline,
            paragraphs,
        } => {
            ui.vertical_centered(|ui| {
                if let Some(icon) = icon {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(glyphs.glyph(*icon))
                            .size(theme.lead_size * 2.0)
                            .color(theme.accent),
                    );
                }
                ui.add_space(12.0);
                let width = ui.available_width();
                let job = inlines_to_job(
                    headline,
                    theme,
                    theme.lead_size,
                    theme.heading_color,
                    width,
                );
                ui.label(job);
                for paragraph in paragraphs {
                    let job = inlines_to_job(
                        paragraph,
                        theme,
                        theme.body_size * 1.3,
                        theme.foreground,
                        width,
                    );
                    ui.label(job);
                }
            });
        }
        Block::Paragraph(inlines) => {
            let job = inlines_to_job(
                inlines,
                theme,
                theme.body_size,
                theme.foreground,
                ui.available_width(),
            );
            ui.label(job);
        }
        Block::Bullets(items) => {
            for item in items {
                let mut job = egui::text::LayoutJob::default();
                job.wrap.max_width = ui.available_width();
                job.append(
                    "\u{2022}  ",
                    0.0,
                    egui::text::TextFormat {
                        font_id: FontId::proportional(theme.body_size),
                        color: theme.muted,
                        ..Default::default()
                    },
                );
                append_inlines(&mut job, item, theme, theme.body_size, theme.foreground);
                ui.label(job);
                ui.add_space(4.0);
            }
        }
        Block::Callout { kind, title, body } => {
            let style = theme.callout(*kind);
            let response = egui::Frame::new()
                .fill(style.fill)
                .corner_radius(6.0)
                .inner_margin(egui::Margin {
                    left: 16,
                    right: 16,
                    top: 12,
                    bottom: 12,
                })
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if let Some(marker) = kind.marker() {
                            ui.label(
                                RichText::new(glyphs.glyph(marker))
                                    .size(theme.body_size + 2.0)
                                    .color(style.title),
                            );
                        }
                        ui.label(
                            RichText::new(title)
                                .size(theme.body_size + 2.0)
                                .strong()
                                .color(style.title),
                        );
                    });
                    ui.add_space(6.0);
                    for block in body {
                        paint_block(ui, block, theme, glyphs);
                        ui.add_space(4.0);
                    }
                })
                .response;
            let rect = response.rect;
            let bar = egui::Rect::from_min_max(
                rect.left_top(),
                egui::pos2(rect.left() + CALLOUT_BAR_WIDTH, rect.bottom()),
            );
            ui.painter().rect_filled(bar, 0.0, style.bar);
        }
        Block::Columns(columns) => {
            if columns.is_empty() {
                return;
            }
            if ui.available_width() < NARROW_WIDTH {
                for column in columns {
                    paint_blocks(ui, column, theme, glyphs);
                }
            } else {
                ui.columns(columns.len(), |uis| {
                    for (ui, column) in uis.iter_mut().zip(columns) {
                        paint_blocks(ui, column, theme, glyphs);
                    }
                });
            }
        }
        Block::Cards(cards) => paint_cards(ui, cards, theme, glyphs),
        Block::Quote { text, caption } => {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    RichText::new(text)
                        .size(theme.lead_size * 0.75)
                        .strong()
                        .color(theme.heading_color),
                );
                if let Some(caption) = caption {
                    ui.add_space(6.0);
                    ui.label(RichText::new(caption).size(theme.body_size).color(theme.muted));
                }
            });
        }
    }
}

fn cards_per_row(count: usize, width: f32) -> usize {
    if width < NARROW_WIDTH || count <= 1 {
        1
    } else if count == 3 {
        3
    } else {
        2
    }
}

fn paint_cards(ui: &mut egui::Ui, cards: &[Card], theme: &Theme, glyphs: &dyn GlyphProvider) {
    let per_row = cards_per_row(cards.len(), ui.available_width());
    for row in cards.chunks(per_row) {
        ui.columns(per_row, |uis| {
            for (ui, card) in uis.iter_mut().zip(row) {
                paint_card(ui, card, theme, glyphs);
            }
        });
        ui.add_space(8.0);
    }
}

fn paint_card(ui: &mut egui::Ui, card: &Card, theme: &Theme, glyphs: &dyn GlyphProvider) {
    egui::Frame::new()
        .fill(theme.card)
        .stroke(Stroke::new(1.0, theme.border))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                if let Some(icon) = card.icon {
                    ui.label(
                        RichText::new(glyphs.glyph(icon))
                            .size(theme.body_size + 4.0)
                            .color(theme.accent),
                    );
                }
                ui.label(
                    RichText::new(&card.title)
                        .size(theme.body_size + 4.0)
                        .strong()
                        .color(theme.heading_color),
                );
            });
            ui.add_space(6.0);
            for block in &card.body {
                paint_block(ui, block, theme, glyphs);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::content::{accent, strong, text};

    #[test]
    fn job_keeps_text_order_and_emphasis_colours() {
        let theme = Theme::light();
        let inlines = vec![text("from "), accent("PDCA"), strong(" loop")];
        let job = inlines_to_job(&inlines, &theme, 14.0, theme.foreground, 400.0);
        assert_eq!(job.text, "from PDCA loop");
        assert_eq!(job.sections.len(), 3);
        assert_eq!(job.sections[0].format.color, theme.foreground);
        assert_eq!(job.sections[1].format.color, theme.accent);
        assert_eq!(job.sections[2].format.color, theme.heading_color);
        assert_eq!(job.wrap.max_width, 400.0);
    }

    #[test]
    fn card_rows_collapse_when_narrow() {
        assert_eq!(cards_per_row(4, 300.0), 1);
        assert_eq!(cards_per_row(3, 900.0), 3);
        assert_eq!(cards_per_row(4, 900.0), 2);
        assert_eq!(cards_per_row(1, 900.0), 1);
    }
}
