use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::deck::Deck;
use crate::fonts;
use crate::icons::{EmojiGlyphs, GlyphProvider, Icon};
use crate::nav::{Keyboard, NavKey, Navigator, ViewMode};
use crate::theme::Theme;
use crate::views::{presentation, print};

const WINDOW_TITLE: &str = "auditdeck \u{2014} ISO 27001:2022";
const TOAST_DURATION: f32 = 1.5;
const TOAST_FADE_START: f32 = 1.0;

/// How the window should come up.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub windowed: bool,
    /// 1-based slide number or slide id.
    pub slide: Option<String>,
    pub print: bool,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        if elapsed < TOAST_FADE_START {
            1.0
        } else if elapsed < TOAST_DURATION {
            1.0 - (elapsed - TOAST_FADE_START) / (TOAST_DURATION - TOAST_FADE_START)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_DURATION
    }
}

struct DeckApp {
    deck: &'static Deck,
    nav: Navigator,
    theme: Theme,
    glyphs: EmojiGlyphs,
    toast: Option<Toast>,
}

impl DeckApp {
    fn new(deck: &'static Deck, nav: Navigator, theme: Theme) -> Self {
        Self {
            deck,
            nav,
            theme,
            glyphs: EmojiGlyphs,
            toast: None,
        }
    }

    fn toggle_view_mode(&mut self) {
        let mode = self.nav.toggle_view_mode();
        let label = match mode {
            ViewMode::Interactive => "簡報模式 (Interactive)",
            ViewMode::Print => "列印模式 (Print View)",
        };
        self.toast = Some(Toast::new(label.to_string()));
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::info!("Theme: {}", self.theme.name);
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        // Viewport commands go out after the input closure; sending them
        // inside ctx.input() deadlocks on the context lock.
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut keys = Vec::new();
        let mut toggle_mode = false;
        let mut toggle_theme = false;
        let mut jump: Option<bool> = None;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                keys.push(NavKey::Left);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                keys.push(NavKey::Right);
            }
            toggle_mode = i.key_pressed(egui::Key::P);
            toggle_theme = i.key_pressed(egui::Key::D);
            if i.key_pressed(egui::Key::Home) {
                jump = Some(true);
            } else if i.key_pressed(egui::Key::End) {
                jump = Some(false);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        for key in keys {
            self.nav.handle_key(key);
        }
        // Home/End ride on the same binding as the arrows.
        if self.nav.keyboard_bound() {
            match jump {
                Some(true) => {
                    self.nav.first();
                }
                Some(false) => {
                    self.nav.last();
                }
                None => {}
            }
        }
        if toggle_mode {
            self.toggle_view_mode();
        }
        if toggle_theme {
            self.toggle_theme();
        }
    }

    fn draw_top_bar(&mut self, ui: &mut egui::Ui) {
        let (icon, label) = match self.nav.view_mode() {
            ViewMode::Interactive => (Icon::Printer, "全覽/列印模式 (Print View)"),
            ViewMode::Print => (Icon::MonitorPlay, "返回簡報模式 (Interactive)"),
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let text = egui::RichText::new(format!("{}  {label}", self.glyphs.glyph(icon)))
                .color(self.theme.heading_color);
            let button = egui::Button::new(text)
                .fill(self.theme.card)
                .corner_radius(8.0)
                .min_size(egui::vec2(0.0, 36.0));
            if ui.add(button).clicked() {
                self.toggle_view_mode();
            }
        });
    }

    fn draw_toast(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(toast) = &self.toast else {
            return;
        };
        let opacity = toast.opacity();
        if opacity <= 0.0 {
            return;
        }
        let text_color = Theme::with_opacity(self.theme.heading_color, opacity);
        let galley = ui.painter().layout_no_wrap(
            toast.message.clone(),
            egui::FontId::proportional(18.0),
            text_color,
        );
        let padding = egui::vec2(16.0, 10.0);
        let size = galley.rect.size() + padding * 2.0;
        let toast_rect = egui::Rect::from_min_size(
            egui::pos2(rect.center().x - size.x / 2.0, rect.bottom() - size.y - 32.0),
            size,
        );
        ui.painter().rect_filled(
            toast_rect,
            8.0,
            Theme::with_opacity(self.theme.card, 0.95 * opacity),
        );
        ui.painter()
            .galley(toast_rect.min + padding, galley, text_color);
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }

        let backdrop = match self.nav.view_mode() {
            ViewMode::Interactive => self.theme.backdrop,
            ViewMode::Print => self.theme.card,
        };

        egui::TopBottomPanel::top("mode_bar")
            .frame(egui::Frame::new().fill(backdrop).inner_margin(12.0))
            .show_separator_line(false)
            .show(ctx, |ui| self.draw_top_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(backdrop).inner_margin(16.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                match self.nav.view_mode() {
                    ViewMode::Interactive => {
                        let action =
                            presentation::show(ui, self.deck, &self.nav, &self.theme, &self.glyphs);
                        if let Some(action) = action {
                            presentation::apply(&mut self.nav, action);
                        }
                    }
                    ViewMode::Print => {
                        let document = print::Document::new(self.deck);
                        print::show(ui, &document, &self.theme, &self.glyphs);
                    }
                }
                self.draw_toast(ui, rect);
            });

        if self.toast.is_some() {
            ctx.request_repaint();
        }
    }
}

/// Resolve a `--slide` argument: a 1-based number or a slide id.
pub fn resolve_slide(deck: &Deck, spec: &str) -> anyhow::Result<usize> {
    if let Ok(number) = spec.parse::<usize>() {
        if number == 0 || number > deck.count() {
            anyhow::bail!(
                "Slide {number} does not exist (deck has {} slides)",
                deck.count()
            );
        }
        return Ok(number - 1);
    }
    deck.position(spec)
        .ok_or_else(|| anyhow::anyhow!("No slide with id '{spec}'. Run `auditdeck outline` to list them."))
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let deck = Deck::builtin();
    let config = Config::load_or_default();

    let mut nav = Navigator::new(deck.count(), Keyboard::new())?;
    if let Some(spec) = &options.slide {
        nav.go_to(resolve_slide(deck, spec)?)?;
    }
    let mode = if options.print {
        ViewMode::Print
    } else {
        config.start_mode().unwrap_or_default()
    };
    nav.set_view_mode(mode);

    let theme = Theme::from_name(config.theme().unwrap_or("light"));
    let font: Option<PathBuf> = config.font().map(|p| p.to_path_buf());

    log::info!(
        "Starting at slide {} of {} in {} mode",
        nav.current_index() + 1,
        deck.count(),
        nav.view_mode()
    );

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(WINDOW_TITLE)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(WINDOW_TITLE)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            fonts::install(&cc.egui_ctx, font.as_deref());
            Ok(Box::new(DeckApp::new(deck, nav, theme)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numbers_as_one_based() {
        let deck = Deck::builtin();
        assert_eq!(resolve_slide(deck, "1").unwrap(), 0);
        assert_eq!(resolve_slide(deck, "14").unwrap(), 13);
    }

    #[test]
    fn resolves_ids() {
        assert_eq!(resolve_slide(Deck::builtin(), "annex-tech").unwrap(), 12);
    }

    #[test]
    fn rejects_unknown_slides() {
        let deck = Deck::builtin();
        assert!(resolve_slide(deck, "0").is_err());
        assert!(resolve_slide(deck, "15").is_err());
        assert!(resolve_slide(deck, "clause-11").is_err());
    }

    #[test]
    fn toast_fades_out() {
        let toast = Toast::new("hi".to_string());
        assert_eq!(toast.opacity(), 1.0);
        assert!(!toast.is_expired());
    }
}
