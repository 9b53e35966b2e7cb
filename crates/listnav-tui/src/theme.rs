use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey2: Color,

    // Semantic colors
    pub accent: Color,
    /// Active row background
    pub selection: Color,
    /// Hovered row foreground
    pub hover: Color,
    /// Filter match highlight
    pub matched: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            selection: Color::Rgb(0x50, 0x49, 0x45),
            hover: Color::Rgb(0x7d, 0xae, 0xa3),
            matched: Color::Rgb(0xd8, 0xa6, 0x57),
        }
    }
}
