use eframe::egui::Color32;

use crate::deck::CalloutKind;

/// Colours for one callout kind.
#[derive(Debug, Clone, Copy)]
pub struct CalloutStyle {
    pub fill: Color32,
    pub bar: Color32,
    pub title: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Area around the slide frame.
    pub backdrop: Color32,
    pub surface: Color32,
    pub card: Color32,
    pub border: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub disabled: Color32,
    /// Left-to-right stops of the decorative footer bar.
    pub decoration: [Color32; 3],
    pub title_size: f32,
    pub subtitle_size: f32,
    pub lead_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    callouts: [CalloutStyle; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            backdrop: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            surface: Color32::from_rgb(0xF8, 0xFA, 0xFC),
            card: Color32::WHITE,
            border: Color32::from_rgb(0xE2, 0xE8, 0xF0),
            foreground: Color32::from_rgb(0x33, 0x41, 0x55),
            heading_color: Color32::from_rgb(0x0F, 0x17, 0x2A),
            muted: Color32::from_rgb(0x64, 0x74, 0x8B),
            accent: Color32::from_rgb(0x25, 0x63, 0xEB),
            disabled: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            decoration: [
                Color32::from_rgb(0x3B, 0x82, 0xF6),
                Color32::from_rgb(0x63, 0x66, 0xF1),
                Color32::from_rgb(0x64, 0x74, 0x8B),
            ],
            title_size: 26.0,
            subtitle_size: 14.0,
            lead_size: 34.0,
            body_size: 15.0,
            small_size: 12.0,
            callouts: [
                CalloutStyle {
                    fill: Color32::WHITE,
                    bar: Color32::from_rgb(0x94, 0xA3, 0xB8),
                    title: Color32::from_rgb(0x33, 0x41, 0x55),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0xEF, 0xF6, 0xFF),
                    bar: Color32::from_rgb(0x25, 0x63, 0xEB),
                    title: Color32::from_rgb(0x1E, 0x40, 0xAF),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0xFF, 0xFB, 0xEB),
                    bar: Color32::from_rgb(0xF5, 0x9E, 0x0B),
                    title: Color32::from_rgb(0x92, 0x40, 0x0E),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0xEC, 0xFD, 0xF5),
                    bar: Color32::from_rgb(0x10, 0xB9, 0x81),
                    title: Color32::from_rgb(0x06, 0x5F, 0x46),
                },
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            backdrop: Color32::from_rgb(0x0F, 0x17, 0x2A),
            surface: Color32::from_rgb(0x1E, 0x29, 0x3B),
            card: Color32::from_rgb(0x33, 0x41, 0x55),
            border: Color32::from_rgb(0x47, 0x55, 0x69),
            foreground: Color32::from_rgb(0xCB, 0xD5, 0xE1),
            heading_color: Color32::from_rgb(0xF1, 0xF5, 0xF9),
            muted: Color32::from_rgb(0x94, 0xA3, 0xB8),
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            disabled: Color32::from_rgb(0x47, 0x55, 0x69),
            decoration: [
                Color32::from_rgb(0x60, 0xA5, 0xFA),
                Color32::from_rgb(0x81, 0x8C, 0xF8),
                Color32::from_rgb(0x94, 0xA3, 0xB8),
            ],
            callouts: [
                CalloutStyle {
                    fill: Color32::from_rgb(0x33, 0x41, 0x55),
                    bar: Color32::from_rgb(0x94, 0xA3, 0xB8),
                    title: Color32::from_rgb(0xE2, 0xE8, 0xF0),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0x1E, 0x3A, 0x8A),
                    bar: Color32::from_rgb(0x60, 0xA5, 0xFA),
                    title: Color32::from_rgb(0xBF, 0xDB, 0xFE),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0x78, 0x35, 0x0F),
                    bar: Color32::from_rgb(0xFB, 0xBF, 0x24),
                    title: Color32::from_rgb(0xFD, 0xE6, 0x8A),
                },
                CalloutStyle {
                    fill: Color32::from_rgb(0x06, 0x4E, 0x3B),
                    bar: Color32::from_rgb(0x34, 0xD3, 0x99),
                    title: Color32::from_rgb(0xA7, 0xF3, 0xD0),
                },
            ],
            ..Self::light()
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn callout(&self, kind: CalloutKind) -> CalloutStyle {
        let slot = match kind {
            CalloutKind::Normal => 0,
            CalloutKind::Audit => 1,
            CalloutKind::Trap => 2,
            CalloutKind::Evidence => 3,
        };
        self.callouts[slot]
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_same_theme() {
        let theme = Theme::light();
        assert_eq!(theme.toggled().toggled().name, "light");
        assert_eq!(theme.toggled().name, "dark");
    }

    #[test]
    fn unknown_names_fall_back_to_light() {
        assert_eq!(Theme::from_name("sepia").name, "light");
    }

    #[test]
    fn callout_kinds_have_distinct_bars() {
        let theme = Theme::light();
        let bars = [
            theme.callout(CalloutKind::Normal).bar,
            theme.callout(CalloutKind::Audit).bar,
            theme.callout(CalloutKind::Trap).bar,
            theme.callout(CalloutKind::Evidence).bar,
        ];
        for (i, a) in bars.iter().enumerate() {
            for b in &bars[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
