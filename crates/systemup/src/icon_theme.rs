/// Tray glyph variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTheme {
    /// Light glyph, drawn on dark taskbars.
    Light,
    /// Dark glyph, drawn on light taskbars.
    Dark,
}

impl IconTheme {
    /// Glyph that stays visible on the given taskbar.
    pub fn for_taskbar(dark_taskbar: bool) -> Self {
        if dark_taskbar {
            IconTheme::Light
        } else {
            IconTheme::Dark
        }
    }
}
