//! Bridge: shapes delegate coloring to a separate color hierarchy.

/// The implementation side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }

    pub fn ansi_code(&self) -> &'static str {
        match self {
            Color::Red => "31m",
            Color::Blue => "34m",
        }
    }

    /// Wrap `text` in this color's ANSI escape, resetting afterwards.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[{}{}\x1b[0m", self.ansi_code(), text)
    }
}

/// The abstraction side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle(Color),
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Circle(color) => *color,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Shape::Circle(color) => {
                color.paint(&format!("This is a Circle with color {}", color.name()))
            }
        }
    }
}
