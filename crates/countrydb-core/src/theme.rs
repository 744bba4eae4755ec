// crates/countrydb-core/src/theme.rs

//! Design tokens for the light and dark appearance.
//!
//! The active token set is a pure function of [`ThemeMode`]: call [`tokens`]
//! and pass the result down to whatever renders. There is no global theme.
//!
//! ```
//! use countrydb_core::theme::{tokens, ThemeMode};
//!
//! let dark = tokens(ThemeMode::Dark);
//! assert_eq!(dark.background, "#0f172a");
//! assert_eq!(tokens(ThemeMode::Dark.toggle()).background, "#ffffff");
//! ```

use crate::error::CountryDbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CountryDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(CountryDbError::Config(format!(
                "unknown theme '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

/// Text colors, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextTokens {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputTokens {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

/// Colors that change with the theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: TextTokens,
    pub border: &'static str,
    pub card: &'static str,
    pub input: InputTokens,
}

pub const LIGHT: ThemeTokens = ThemeTokens {
    background: "#ffffff",
    surface: "#f8fafc",
    text: TextTokens {
        primary: "#1f2937",
        secondary: "#6b7280",
        tertiary: "#9ca3af",
    },
    border: "#e5e7eb",
    card: "#ffffff",
    input: InputTokens {
        background: "#f9fafb",
        border: "#d1d5db",
        text: "#374151",
    },
};

pub const DARK: ThemeTokens = ThemeTokens {
    background: "#0f172a",
    surface: "#1e293b",
    text: TextTokens {
        primary: "#f8fafc",
        secondary: "#cbd5e1",
        tertiary: "#94a3b8",
    },
    border: "#334155",
    card: "#1e293b",
    input: InputTokens {
        background: "#334155",
        border: "#475569",
        text: "#e2e8f0",
    },
};

/// Token set for `mode`.
#[inline]
pub fn tokens(mode: ThemeMode) -> &'static ThemeTokens {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// A ten-step color ramp (50, 100, 200, ..., 900), the same in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale(pub [&'static str; 10]);

const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

impl ColorScale {
    /// Color for a shade step; `None` for steps outside the ramp.
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        STEPS.iter().position(|s| *s == step).map(|i| self.0[i])
    }
}

pub const PRIMARY: ColorScale = ColorScale([
    "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7", "#0369a1",
    "#075985", "#0c4a6e",
]);

pub const SECONDARY: ColorScale = ColorScale([
    "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46",
    "#27272a", "#18181b",
]);

pub const SUCCESS: ColorScale = ColorScale([
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d",
]);

pub const WARNING: ColorScale = ColorScale([
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f",
]);

pub const ERROR: ColorScale = ColorScale([
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d",
]);

/// Spacing scale in density-independent pixels.
pub struct Spacing;

impl Spacing {
    pub const XS: u16 = 4;
    pub const SM: u16 = 8;
    pub const MD: u16 = 16;
    pub const LG: u16 = 24;
    pub const XL: u16 = 32;
    pub const XXL: u16 = 48;
}

/// Corner radii in density-independent pixels.
pub struct Radius;

impl Radius {
    pub const SM: u16 = 8;
    pub const MD: u16 = 12;
    pub const LG: u16 = 16;
    pub const XL: u16 = 20;
    pub const XXL: u16 = 24;
    /// Pill shape.
    pub const FULL: u16 = 999;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn lookup_is_keyed_by_mode() {
        assert_eq!(tokens(ThemeMode::Light), &LIGHT);
        assert_eq!(tokens(ThemeMode::Dark).input.background, "#334155");
        assert_ne!(tokens(ThemeMode::Light), tokens(ThemeMode::Dark));
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(CountryDbError::Config(_))
        ));
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn color_scale_steps() {
        assert_eq!(PRIMARY.shade(500), Some("#0ea5e9"));
        assert_eq!(ERROR.shade(50), Some("#fef2f2"));
        assert_eq!(SUCCESS.shade(900), Some("#14532d"));
        assert_eq!(WARNING.shade(550), None);
    }
}
