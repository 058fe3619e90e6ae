use std::{fmt, str::FromStr};

use crate::Error;

/// Ascending ordering criterion applied when rendering a comment list
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Likes,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Date, SortKey::Likes];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Likes => "likes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Likes => "Likes",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<SortKey, Error> {
        match s {
            "date" => Ok(SortKey::Date),
            "likes" => Ok(SortKey::Likes),
            _ => Err(Error::UnknownSortKey(String::from(s))),
        }
    }
}
