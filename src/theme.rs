use ratatui::style::Color;

use crate::catalog::ColorTag;

pub const THEMES: &[&str] = &["default", "dawn", "dusk", "forest"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub amber: Color,
    pub blue: Color,
    pub purple: Color,
    pub indigo: Color,
    pub border_color: Color,
    pub accent_color: Color,
}

impl Theme {
    pub fn color(&self, tag: ColorTag) -> Color {
        match tag {
            ColorTag::Amber => self.amber,
            ColorTag::Blue => self.blue,
            ColorTag::Purple => self.purple,
            ColorTag::Indigo => self.indigo,
        }
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "dawn" => Theme {
            amber: Color::Rgb(255, 183, 77),
            blue: Color::Rgb(129, 212, 250),
            purple: Color::Rgb(244, 143, 177),
            indigo: Color::Rgb(179, 157, 219),
            border_color: Color::Rgb(255, 204, 128),
            accent_color: Color::Rgb(255, 112, 67),
        },
        "dusk" => Theme {
            amber: Color::Rgb(255, 145, 0),
            blue: Color::Rgb(92, 107, 192),
            purple: Color::Rgb(186, 104, 200),
            indigo: Color::Rgb(121, 134, 203),
            border_color: Color::Rgb(149, 117, 205),
            accent_color: Color::Rgb(240, 98, 146),
        },
        "forest" => Theme {
            amber: Color::Rgb(220, 200, 80),
            blue: Color::Rgb(77, 182, 172),
            purple: Color::Rgb(174, 213, 129),
            indigo: Color::Rgb(38, 166, 154),
            border_color: Color::Rgb(102, 187, 106),
            accent_color: Color::Rgb(255, 213, 79),
        },
        _ => Theme {
            amber: Color::Rgb(245, 158, 11),
            blue: Color::Rgb(59, 130, 246),
            purple: Color::Rgb(168, 85, 247),
            indigo: Color::Rgb(99, 102, 241),
            border_color: Color::Rgb(96, 165, 250),
            accent_color: Color::Rgb(244, 63, 94),
        },
    }
}

/// Next (or previous) theme name, wrapping. Unknown names restart the cycle.
pub fn cycle(current: &str, forward: bool) -> &'static str {
    let idx = THEMES.iter().position(|&t| t == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % THEMES.len()
    } else {
        (idx + THEMES.len() - 1) % THEMES.len()
    };
    THEMES[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_in_both_directions() {
        assert_eq!(cycle("default", true), "dawn");
        assert_eq!(cycle("forest", true), "default");
        assert_eq!(cycle("default", false), "forest");
        assert_eq!(cycle("nonsense", true), "dawn");
    }

    #[test]
    fn unknown_theme_uses_default_palette() {
        assert_eq!(get_theme("nonsense"), get_theme("default"));
        assert_ne!(get_theme("dusk").color(ColorTag::Amber), get_theme("default").color(ColorTag::Amber));
    }
}
