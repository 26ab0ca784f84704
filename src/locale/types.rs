//! Locale value types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    En,
}

impl Locale {
    /// Every supported locale
    pub const SUPPORTED: [Locale; 2] = [Locale::Ar, Locale::En];

    /// Locale used when nothing else applies
    pub const DEFAULT: Locale = Locale::En;

    /// Two-letter code as stored and sent over the wire
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Exact, case-sensitive match against the supported codes
    pub fn parse(code: &str) -> Option<Self> {
        Self::SUPPORTED
            .into_iter()
            .find(|locale| locale.code() == code)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn direction(self) -> Direction {
        if self.is_rtl() {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unsupported locale: {}", s))
    }
}

/// Text direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// Where the effective locale of a request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    Session,
    Subject,
    Default,
    /// Replaced by a language change during this request
    Changed,
}

/// Effective locale of a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleContext {
    pub locale: Locale,
    pub source: LocaleSource,
}

impl LocaleContext {
    pub fn new(locale: Locale, source: LocaleSource) -> Self {
        Self { locale, source }
    }

    /// Replace the resolved value after a successful change
    pub fn set(&mut self, locale: Locale) {
        self.locale = locale;
        self.source = LocaleSource::Changed;
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::DEFAULT, LocaleSource::Default)
    }
}
