use eframe::egui::{self, RichText, Sense};

use crate::deck::Deck;
use crate::icons::{GlyphProvider, Icon};
use crate::nav::{Navigator, ViewMode};
use crate::render::{self, paint::paint_frame};
use crate::theme::Theme;

const CONTROLS_HEIGHT: f32 = 56.0;
const HINT_HEIGHT: f32 = 28.0;
const MAX_FRAME_WIDTH: f32 = 1100.0;
const DOT_SIZE: f32 = 12.0;
const CURRENT_DOT_WIDTH: f32 = 32.0;
const DOT_GAP: f32 = 8.0;

pub const KEYBOARD_HINT: &str = "提示：使用鍵盤 ← → 鍵切換，或點擊上方按鈕切換至列印模式";

/// One progress dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub current: bool,
}

/// State of the navigation controls for the current slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub dots: Vec<Dot>,
}

impl Controls {
    pub fn from_navigator(nav: &Navigator) -> Self {
        let current = nav.current_index();
        Self {
            prev_enabled: !nav.at_first(),
            next_enabled: !nav.at_last(),
            dots: (0..nav.count())
                .map(|index| Dot {
                    index,
                    current: index == current,
                })
                .collect(),
        }
    }

    fn dots_width(&self) -> f32 {
        let widths: f32 = self
            .dots
            .iter()
            .map(|d| if d.current { CURRENT_DOT_WIDTH } else { DOT_SIZE })
            .sum();
        widths + DOT_GAP * self.dots.len().saturating_sub(1) as f32
    }
}

/// What the user asked for through the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Previous,
    Next,
    GoTo(usize),
}

/// Apply a control action through the navigator.
pub fn apply(nav: &mut Navigator, action: ControlAction) {
    match action {
        ControlAction::Previous => {
            nav.previous();
        }
        ControlAction::Next => {
            nav.next();
        }
        ControlAction::GoTo(index) => {
            // Dot indices come from the deck itself, so a failure is a bug.
            let result = nav.go_to(index);
            debug_assert!(result.is_ok(), "progress dot out of range: {result:?}");
            if let Err(e) = result {
                log::error!("{e}");
            }
        }
    }
}

/// Draw the current slide with its controls. Returns the action the user
/// triggered this frame, if any.
pub fn show(
    ui: &mut egui::Ui,
    deck: &Deck,
    nav: &Navigator,
    theme: &Theme,
    glyphs: &dyn GlyphProvider,
) -> Option<ControlAction> {
    let index = nav.current_index();
    let slide = match deck.get(index) {
        Ok(slide) => slide,
        Err(e) => {
            log::error!("{e}");
            return None;
        }
    };
    let frame = render::render(slide, ViewMode::Interactive, index + 1, deck.count());

    let area = ui.available_rect_before_wrap();
    let width = area.width().min(MAX_FRAME_WIDTH);
    let height = (width * 9.0 / 16.0)
        .min(area.height() - CONTROLS_HEIGHT - HINT_HEIGHT)
        .max(160.0);
    let frame_rect = egui::Rect::from_min_size(
        egui::pos2(area.center().x - width / 2.0, area.top()),
        egui::vec2(width, height),
    );
    let mut frame_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(frame_rect)
            .id_salt("slide_frame"),
    );
    paint_frame(&mut frame_ui, &frame, theme, glyphs);

    let controls_rect = egui::Rect::from_min_size(
        egui::pos2(frame_rect.left(), frame_rect.bottom() + 12.0),
        egui::vec2(width, CONTROLS_HEIGHT),
    );
    let mut controls_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(controls_rect)
            .id_salt("slide_controls"),
    );
    let controls = Controls::from_navigator(nav);
    let action = draw_controls(&mut controls_ui, deck, &controls, theme, glyphs);

    let hint_galley = ui.painter().layout_no_wrap(
        KEYBOARD_HINT.to_string(),
        egui::FontId::proportional(theme.small_size + 1.0),
        theme.muted,
    );
    let hint_pos = egui::pos2(
        area.center().x - hint_galley.rect.width() / 2.0,
        controls_rect.bottom() + 4.0,
    );
    ui.painter().galley(hint_pos, hint_galley, theme.muted);

    ui.advance_cursor_after_rect(frame_rect.union(controls_rect));
    action
}

fn draw_controls(
    ui: &mut egui::Ui,
    deck: &Deck,
    controls: &Controls,
    theme: &Theme,
    glyphs: &dyn GlyphProvider,
) -> Option<ControlAction> {
    let mut action = None;
    ui.columns(3, |cols| {
        cols[0].with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
            let label = format!("{} Previous", glyphs.glyph(Icon::ChevronLeft));
            if nav_button(ui, &label, controls.prev_enabled, false, theme).clicked() {
                action = Some(ControlAction::Previous);
            }
        });

        cols[1].horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = DOT_GAP;
            ui.add_space(((ui.available_width() - controls.dots_width()) / 2.0).max(0.0));
            for dot in &controls.dots {
                let title = deck.get(dot.index).map(|s| s.title.as_str()).unwrap_or("");
                if progress_dot(ui, dot, theme).on_hover_text(title).clicked() {
                    action = Some(ControlAction::GoTo(dot.index));
                }
            }
        });

        cols[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = format!("Next {}", glyphs.glyph(Icon::ChevronRight));
            if nav_button(ui, &label, controls.next_enabled, true, theme).clicked() {
                action = Some(ControlAction::Next);
            }
        });
    });
    action
}

fn nav_button(
    ui: &mut egui::Ui,
    label: &str,
    enabled: bool,
    primary: bool,
    theme: &Theme,
) -> egui::Response {
    let (fill, text) = match (enabled, primary) {
        (false, _) => (theme.disabled, theme.muted),
        (true, true) => (theme.accent, egui::Color32::WHITE),
        (true, false) => (theme.card, theme.heading_color),
    };
    let button = egui::Button::new(RichText::new(label).strong().color(text))
        .fill(fill)
        .corner_radius(20.0)
        .min_size(egui::vec2(120.0, 40.0));
    ui.add_enabled(enabled, button)
}

fn progress_dot(ui: &mut egui::Ui, dot: &Dot, theme: &Theme) -> egui::Response {
    let width = if dot.current { CURRENT_DOT_WIDTH } else { DOT_SIZE };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, DOT_SIZE), Sense::click());
    let color = if dot.current {
        theme.accent
    } else if response.hovered() {
        theme.foreground
    } else {
        theme.muted
    };
    ui.painter().rect_filled(rect, DOT_SIZE / 2.0, color);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Keyboard;

    fn navigator(count: usize) -> Navigator {
        Navigator::new(count, Keyboard::new()).unwrap()
    }

    #[test]
    fn previous_disabled_on_first_slide() {
        let nav = navigator(15);
        let controls = Controls::from_navigator(&nav);
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn next_disabled_on_last_slide() {
        let mut nav = navigator(15);
        nav.last();
        let controls = Controls::from_navigator(&nav);
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn one_dot_per_slide_with_single_current() {
        let mut nav = navigator(15);
        nav.go_to(6).unwrap();
        let controls = Controls::from_navigator(&nav);
        assert_eq!(controls.dots.len(), 15);
        let current: Vec<_> = controls.dots.iter().filter(|d| d.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].index, 6);
    }

    #[test]
    fn dot_action_jumps() {
        let mut nav = navigator(15);
        nav.go_to(5).unwrap();
        apply(&mut nav, ControlAction::GoTo(12));
        assert_eq!(nav.current_index(), 12);
    }

    #[test]
    fn button_actions_clamp() {
        let mut nav = navigator(3);
        apply(&mut nav, ControlAction::Previous);
        assert_eq!(nav.current_index(), 0);
        for _ in 0..5 {
            apply(&mut nav, ControlAction::Next);
        }
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn dots_width_accounts_for_current_dot() {
        let nav = navigator(3);
        let controls = Controls::from_navigator(&nav);
        assert_eq!(
            controls.dots_width(),
            CURRENT_DOT_WIDTH + 2.0 * DOT_SIZE + 2.0 * DOT_GAP
        );
    }
}
