//! Cyclic chart palette used to color breakdown segments.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Colors used by the dashboard charts unless configured otherwise.
pub const DEFAULT_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

/// Palette construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "chart palette must contain at least one color"),
        }
    }
}

impl Error for PaletteError {}

/// Non-empty ordered list of segment colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ChartPalette {
    colors: Vec<String>,
}

impl ChartPalette {
    pub fn new<I, C>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Color for the segment at `index`; wraps with `index % len`.
    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl TryFrom<Vec<String>> for ChartPalette {
    type Error = PaletteError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChartPalette> for Vec<String> {
    fn from(value: ChartPalette) -> Self {
        value.colors
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect(),
        }
    }
}
