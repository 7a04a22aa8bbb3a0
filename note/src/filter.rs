//! Enharmonic spelling preference. Five of the twelve pitch classes have two common names (C# and
//! Db are the same pitch). A `Filter` decides which of those names is shown: the sharp one, the
//! flat one, or both joined by a "/".
//!
//! Callers outside of Rust hand the preference over as the tokens `"#"`, `"b"` or `false`. Those
//! raw tokens are represented by `FilterToken` and only become a `Filter` by passing through
//! `Filter::validate`.
use crate::error::{InvalidInput, Result};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    Sharp,
    Flat,
    /// Show both spellings, sharp first, joined by "/" (e.g. "C#/Db").
    Both,
}

/// An unvalidated spelling preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterToken<'a> {
    Text(&'a str),
    Flag(bool),
}

impl<'a> From<&'a str> for FilterToken<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FilterToken<'_> {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl Display for FilterToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl Filter {
    pub const ALL: [Self; 3] = [Self::Sharp, Self::Flat, Self::Both];

    pub const SHARP_TOKEN: &'static str = "#";
    pub const FLAT_TOKEN: &'static str = "b";

    /// Accepts exactly `"#"`, `"b"` and `false`. Everything else, including `true` and the empty
    /// string, is rejected.
    pub fn validate<'a>(token: impl Into<FilterToken<'a>>) -> Result<Self> {
        let token = token.into();
        match token {
            FilterToken::Text(Self::SHARP_TOKEN) => Ok(Self::Sharp),
            FilterToken::Text(Self::FLAT_TOKEN) => Ok(Self::Flat),
            FilterToken::Flag(false) => Ok(Self::Both),
            _ => {
                log::debug!("rejecting flat/sharp filter {}", token);
                let raw = match token {
                    FilterToken::Text(s) => s.to_string(),
                    FilterToken::Flag(b) => b.to_string(),
                };
                Err(InvalidInput::Filter(raw))
            }
        }
    }

    /// The raw token this filter is validated from.
    pub const fn token(self) -> FilterToken<'static> {
        match self {
            Self::Sharp => FilterToken::Text(Self::SHARP_TOKEN),
            Self::Flat => FilterToken::Text(Self::FLAT_TOKEN),
            Self::Both => FilterToken::Flag(false),
        }
    }

    /// Picks one of the three filters uniformly at random.
    pub fn random() -> Self {
        Self::random_from_rng(&mut rand::rng())
    }

    pub fn random_from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let filter = Self::ALL[rng.random_range(0..Self::ALL.len())];
        log::trace!("random flat/sharp filter: {:?}", filter);
        filter
    }
}

/// Parses the textual tokens "#" and "b". The "both" filter has no textual token; use
/// `Filter::validate(false)` for it.
impl FromStr for Filter {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        Self::validate(s)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self.token() {
            FilterToken::Text(s) => serializer.serialize_str(s),
            FilterToken::Flag(b) => serializer.serialize_bool(b),
        }
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Flag(bool),
        }
        let result = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::validate(s.as_str()),
            Raw::Flag(b) => Self::validate(b),
        };
        result.map_err(serde::de::Error::custom)
    }
}
