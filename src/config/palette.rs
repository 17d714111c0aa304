use ratatui::style::Color;
use std::str::FromStr;
use thiserror::Error;

pub const PALETTE_SIZE: usize = 6;

pub const DEFAULT_PALETTE: [&str; PALETTE_SIZE] = [
    "#ffebcd", "#add8e6", "#f5deb3", "#d8bfd8", "#fafad2", "#e0ffff",
];

const DEFAULT_COLORS: [Color; PALETTE_SIZE] = [
    Color::Rgb(0xff, 0xeb, 0xcd),
    Color::Rgb(0xad, 0xd8, 0xe6),
    Color::Rgb(0xf5, 0xde, 0xb3),
    Color::Rgb(0xd8, 0xbf, 0xd8),
    Color::Rgb(0xfa, 0xfa, 0xd2),
    Color::Rgb(0xe0, 0xff, 0xff),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Palette must have exactly {expected} colors, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Palette entry {index} is not a color: '{value}'")]
    InvalidColor { index: usize, value: String },
}

/// Fixed table of page background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
        }
    }
}

impl Palette {
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        if entries.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongLength {
                expected: PALETTE_SIZE,
                actual: entries.len(),
            });
        }

        let mut colors = DEFAULT_COLORS;
        for (index, entry) in entries.iter().enumerate() {
            let value = entry.as_ref().trim();
            colors[index] = Color::from_str(value).map_err(|_| PaletteError::InvalidColor {
                index,
                value: value.to_string(),
            })?;
        }
        Ok(Self { colors })
    }

    /// Palette slot used for a given primary count.
    pub fn index_for(count: u64) -> usize {
        (count % PALETTE_SIZE as u64) as usize
    }

    pub fn color(&self, index: usize) -> Color {
        self.colors[index % PALETTE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strings_parse_to_default_colors() {
        let parsed = Palette::parse(&DEFAULT_PALETTE).unwrap();
        assert_eq!(parsed, Palette::default());
    }

    #[test]
    fn index_wraps_every_six() {
        assert_eq!(Palette::index_for(0), 0);
        assert_eq!(Palette::index_for(5), 5);
        assert_eq!(Palette::index_for(6), 0);
        assert_eq!(Palette::index_for(15), 3);
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Palette::parse(&["#000000"]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::WrongLength {
                expected: 6,
                actual: 1
            }
        );
    }

    #[test]
    fn bad_entry_reports_index() {
        let mut entries: Vec<&str> = DEFAULT_PALETTE.to_vec();
        entries[4] = "not-a-color";
        let err = Palette::parse(&entries).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor { index: 4, .. }));
    }
}
