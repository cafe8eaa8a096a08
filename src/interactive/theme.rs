//! Color themes

use crate::core::Verdict;
use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Border of an empty cell
    pub outline: Color,
    /// Border of a cell holding an unrevealed letter
    pub filled_outline: Color,
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
    /// Key without an indicator
    pub key: Color,
    pub key_text: Color,
    /// Text on colored cells and keys
    pub revealed_text: Color,
    pub accent: Color,
}

const GREEN: Color = Color::Rgb(0x6a, 0xaa, 0x64);
const YELLOW: Color = Color::Rgb(0xc9, 0xb4, 0x58);

impl Theme {
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x1a, 0x1a, 0x1b),
                outline: Color::Rgb(0xd3, 0xd6, 0xda),
                filled_outline: Color::Rgb(0x87, 0x8a, 0x8c),
                correct: GREEN,
                present: YELLOW,
                absent: Color::Rgb(0x78, 0x7c, 0x7e),
                key: Color::Rgb(0xd3, 0xd6, 0xda),
                key_text: Color::Rgb(0x1a, 0x1a, 0x1b),
                revealed_text: Color::Rgb(0xff, 0xff, 0xff),
                accent: Color::Rgb(0x78, 0x7c, 0x7e),
            },
            Self::Dark => Palette {
                background: Color::Rgb(0x12, 0x12, 0x13),
                text: Color::Rgb(0xf8, 0xf8, 0xf8),
                outline: Color::Rgb(0x3a, 0x3a, 0x3c),
                filled_outline: Color::Rgb(0x56, 0x57, 0x58),
                correct: Color::Rgb(0x53, 0x8d, 0x4e),
                present: Color::Rgb(0xb5, 0x9f, 0x3b),
                absent: Color::Rgb(0x3a, 0x3a, 0x3c),
                key: Color::Rgb(0x81, 0x83, 0x84),
                key_text: Color::Rgb(0xf8, 0xf8, 0xf8),
                revealed_text: Color::Rgb(0xf8, 0xf8, 0xf8),
                accent: Color::Rgb(0x81, 0x83, 0x84),
            },
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Palette {
    #[must_use]
    pub const fn verdict(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Correct => self.correct,
            Verdict::Present => self.present,
            Verdict::Absent => self.absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn verdict_colors_distinct() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            assert_ne!(palette.verdict(Verdict::Correct), palette.verdict(Verdict::Present));
            assert_ne!(palette.verdict(Verdict::Present), palette.verdict(Verdict::Absent));
        }
    }
}
