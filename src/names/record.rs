//! Name records as published by the name day website.

use serde::{Deserialize, Serialize};

use super::DayKey;

/// One celebrated name and the day it is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    /// Link to the name's page on the website.
    #[serde(default)]
    pub url: String,
    /// The name itself.
    pub name: String,
    /// Day of the month, 1-31.
    pub day: u32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Official or unofficial listing.
    #[serde(default)]
    pub type_of_name: NameType,
    /// Gender tag, informational only.
    #[serde(default)]
    pub gender: Gender,
}

impl Name {
    /// Create a standard name with no gender tag.
    pub fn new(name: impl Into<String>, month: u32, day: u32) -> Self {
        Self {
            url: String::new(),
            name: name.into(),
            day,
            month,
            type_of_name: NameType::Standard,
            gender: Gender::Unspecified,
        }
    }

    /// Set the classification.
    pub fn with_type(mut self, type_of_name: NameType) -> Self {
        self.type_of_name = type_of_name;
        self
    }

    /// The day this name is celebrated on.
    pub fn day_key(&self) -> DayKey {
        DayKey::new(self.month, self.day)
    }

    /// Whether this is an informally added name.
    pub fn is_unofficial(&self) -> bool {
        self.type_of_name == NameType::Unofficial
    }
}

/// What kind of listing a name is.
///
/// Unknown values from the website are kept verbatim and treated like
/// standard names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NameType {
    /// An official almanac name (`NAME`).
    #[default]
    Standard,
    /// An unofficial, newer addition (`NEW_NAME`).
    Unofficial,
    /// Any other value.
    Other(String),
}

impl From<String> for NameType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NAME" => Self::Standard,
            "NEW_NAME" => Self::Unofficial,
            _ => Self::Other(s),
        }
    }
}

impl From<NameType> for String {
    fn from(t: NameType) -> Self {
        match t {
            NameType::Standard => "NAME".to_string(),
            NameType::Unofficial => "NEW_NAME".to_string(),
            NameType::Other(s) => s,
        }
    }
}

/// Gender tag of a name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Both,
    Other(String),
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NOT_SET" => Self::Unspecified,
            "BOY" => Self::Male,
            "GIRL" => Self::Female,
            "BOTH" => Self::Both,
            _ => Self::Other(s),
        }
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        match g {
            Gender::Unspecified => "NOT_SET".to_string(),
            Gender::Male => "BOY".to_string(),
            Gender::Female => "GIRL".to_string(),
            Gender::Both => "BOTH".to_string(),
            Gender::Other(s) => s,
        }
    }
}

/// Sort names by month, then day, then name, all ascending.
pub fn sort_names(names: &mut [Name]) {
    names.sort_by(|a, b| {
        a.day_key()
            .cmp(&b.day_key())
            .then_with(|| a.name.cmp(&b.name))
    });
}
