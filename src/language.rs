//! Languages offered by the random-word API.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A word language the player can pick from the menu.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Brazilian Portuguese (`pt-br`).
    #[strum(to_string = "Brazilian Portuguese")]
    BrazilianPortuguese,
    /// French (`fr`).
    French,
    /// German (`de`).
    German,
    /// Italian (`it`).
    Italian,
    /// Spanish (`es`).
    Spanish,
    /// English, the API default.
    English,
}

impl Language {
    /// Returns the `lang` query value, or `None` when the API default applies.
    pub fn api_code(self) -> Option<&'static str> {
        match self {
            Language::BrazilianPortuguese => Some("pt-br"),
            Language::French => Some("fr"),
            Language::German => Some("de"),
            Language::Italian => Some("it"),
            Language::Spanish => Some("es"),
            Language::English => None,
        }
    }

    /// All languages in menu order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Error returned when a language name or code is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown language: {}", name)]
pub struct UnknownLanguage {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Accepts a display name (`"Spanish"`), a variant name
    /// (`"brazilian_portuguese"`) or an API code (`"es"`, `"en"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "");
        Self::iter()
            .find(|language| {
                let name = language.to_string().to_lowercase().replace(' ', "");
                let code = language.api_code().unwrap_or("en");
                wanted == name || wanted == code
            })
            .ok_or_else(|| UnknownLanguage {
                name: s.to_string(),
            })
    }
}
