//! Color themes for the terminal UI.

mod light;
mod slate;

use ratatui::style::{Color, Style};

pub use light::LIGHT;
pub use slate::SLATE;

/// Style bundle consumed by the rendering components.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub highlight: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Built-in themes in lookup order.
const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let wanted = name.trim();
    BUILTINS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
        .map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert!(by_name(" Slate ").is_some());
        assert!(by_name("LIGHT").is_some());
        assert!(by_name("midnight").is_none());
    }

    #[test]
    fn every_builtin_is_listed() {
        let names = names();
        assert_eq!(names, vec!["slate", "light"]);
        for name in names {
            assert!(by_name(name).is_some());
        }
    }
}
