/// A concrete RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Layer another style over this one. Set colors in `over` win,
    /// text attributes accumulate. State styles (selected, disabled,
    /// highlight) compose independently over the base option style.
    pub fn merge(&self, over: &Style) -> Style {
        Style {
            background: over.background.or(self.background),
            foreground: over.foreground.or(self.foreground),
            bold: self.bold || over.bold,
            dim: self.dim || over.dim,
            underline: self.underline || over.underline,
        }
    }
}

/// Flex direction of a container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Positioning scheme of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Laid out in normal flow.
    #[default]
    Static,
    /// Positioned relative to the parent, outside normal flow.
    /// Used by overlays such as the select dropdown menu.
    Absolute,
}
