use eframe::egui::{self, Color32, RichText, Stroke};

use super::blocks::paint_blocks;
use super::{Decoration, Frame, Header, HeightPolicy};
use crate::icons::GlyphProvider;
use crate::theme::Theme;

const FRAME_MARGIN: f32 = 32.0;
const DECORATION_HEIGHT: f32 = 4.0;

/// Draw a [`Frame`] into `ui`. Scrolling frames fill the available height;
/// expanding frames take their natural height.
pub fn paint_frame(ui: &mut egui::Ui, frame: &Frame<'_>, theme: &Theme, glyphs: &dyn GlyphProvider) {
    let border_width = match frame.content.policy {
        HeightPolicy::Scroll => 1.0,
        HeightPolicy::Expand => 2.0,
    };
    let response = egui::Frame::new()
        .fill(theme.surface)
        .stroke(Stroke::new(border_width, theme.border))
        .corner_radius(12.0)
        .inner_margin(FRAME_MARGIN)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if frame.content.policy == HeightPolicy::Scroll {
                ui.set_min_height(ui.available_height());
            }
            paint_header(ui, &frame.header, theme, glyphs);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(16.0);
            match frame.content.policy {
                HeightPolicy::Scroll => {
                    egui::ScrollArea::vertical()
                        .id_salt(frame.slide_id)
                        .auto_shrink([false, false])
                        .show(ui, |ui| paint_blocks(ui, frame.content.blocks, theme, glyphs));
                }
                HeightPolicy::Expand => paint_blocks(ui, frame.content.blocks, theme, glyphs),
            }
        })
        .response;

    if let Some(Decoration::FooterBar) = frame.decoration {
        let rect = response.rect;
        let bar = egui::Rect::from_min_max(
            egui::pos2(rect.left(), rect.bottom() - DECORATION_HEIGHT),
            rect.right_bottom(),
        );
        draw_gradient_bar(ui, bar, theme.decoration);
    }
}

fn paint_header(ui: &mut egui::Ui, header: &Header<'_>, theme: &Theme, glyphs: &dyn GlyphProvider) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(glyphs.glyph(header.icon))
                .size(theme.title_size + 6.0)
                .color(theme.accent),
        );
        ui.add_space(8.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new(header.title)
                    .size(theme.title_size)
                    .strong()
                    .color(theme.heading_color),
            );
            if !header.subtitle.is_empty() {
                ui.label(
                    RichText::new(header.subtitle)
                        .size(theme.subtitle_size)
                        .color(theme.muted),
                );
            }
        });
        if let Some(indicator) = &header.indicator {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(indicator)
                        .monospace()
                        .size(theme.small_size + 2.0)
                        .color(theme.muted),
                );
            });
        }
    });
}

/// Horizontal gradient through three colour stops.
fn draw_gradient_bar(ui: &egui::Ui, rect: egui::Rect, stops: [Color32; 3]) {
    let mid = rect.center().x;
    let mut mesh = egui::Mesh::default();
    let columns = [(rect.left(), stops[0]), (mid, stops[1]), (rect.right(), stops[2])];
    for (x, color) in columns {
        mesh.colored_vertex(egui::pos2(x, rect.top()), color);
        mesh.colored_vertex(egui::pos2(x, rect.bottom()), color);
    }
    // Two quads: vertices (0,1,2,3) and (2,3,4,5)
    for base in [0, 2] {
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    ui.painter().add(egui::Shape::mesh(mesh));
}
