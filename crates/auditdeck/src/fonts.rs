use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

const FONT_NAME: &str = "cjk-fallback";

/// Well-known locations of fonts with Traditional Chinese coverage.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/adobe-source-han-sans/SourceHanSans-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Paths to try, configured font first.
fn candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from))
        .collect()
}

pub fn find_cjk_font(configured: Option<&Path>) -> Option<PathBuf> {
    candidates(configured).into_iter().find(|p| p.is_file())
}

/// Append a CJK-capable font to egui's families so the deck text renders.
pub fn install(ctx: &egui::Context, configured: Option<&Path>) {
    let Some(path) = find_cjk_font(configured) else {
        log::warn!("No CJK font found; Chinese text will not render. Set one with `auditdeck config set defaults.font <path>`.");
        return;
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to read font {}: {e}", path.display());
            return;
        }
    };
    log::info!("Using CJK font {}", path.display());

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_string());
    }
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_font_is_tried_first() {
        let configured = Path::new("/opt/fonts/custom.otf");
        let list = candidates(Some(configured));
        assert_eq!(list[0], configured);
        assert_eq!(list.len(), SYSTEM_FONTS.len() + 1);
    }

    #[test]
    fn missing_configured_font_is_skipped() {
        let found = find_cjk_font(Some(Path::new("/definitely/not/here.ttf")));
        assert_ne!(found.as_deref(), Some(Path::new("/definitely/not/here.ttf")));
    }
}
