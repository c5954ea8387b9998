use crate::error::{Error, KeyKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub social_handle: String,
}

/// Site identity shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Absolute production URL, never ending in `/`
    pub url: String,
    pub social_handle: String,
    pub author: Author,
}

/// Keys of the social preview image registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgImageKey {
    Default,
    Home,
    Pricing,
    About,
    Dashboard,
    Login,
    Signup,
}

impl OgImageKey {
    pub const ALL: [OgImageKey; 7] = [
        OgImageKey::Default,
        OgImageKey::Home,
        OgImageKey::Pricing,
        OgImageKey::About,
        OgImageKey::Dashboard,
        OgImageKey::Login,
        OgImageKey::Signup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OgImageKey::Default => "default",
            OgImageKey::Home => "home",
            OgImageKey::Pricing => "pricing",
            OgImageKey::About => "about",
            OgImageKey::Dashboard => "dashboard",
            OgImageKey::Login => "login",
            OgImageKey::Signup => "signup",
        }
    }
}

impl fmt::Display for OgImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OgImageKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OgImageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey {
                kind: KeyKind::Image,
                key: s.to_string(),
            })
    }
}

/// Keys of the per-page SEO registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Home,
    About,
    Pricing,
    Dashboard,
    Login,
    Signup,
}

impl PageKey {
    pub const ALL: [PageKey; 6] = [
        PageKey::Home,
        PageKey::About,
        PageKey::Pricing,
        PageKey::Dashboard,
        PageKey::Login,
        PageKey::Signup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::Pricing => "pricing",
            PageKey::Dashboard => "dashboard",
            PageKey::Login => "login",
            PageKey::Signup => "signup",
        }
    }

    /// The preview image that belongs to this page.
    ///
    /// Every page has its own image key and none maps to `default`.
    pub fn image_key(&self) -> OgImageKey {
        match self {
            PageKey::Home => OgImageKey::Home,
            PageKey::About => OgImageKey::About,
            PageKey::Pricing => OgImageKey::Pricing,
            PageKey::Dashboard => OgImageKey::Dashboard,
            PageKey::Login => OgImageKey::Login,
            PageKey::Signup => OgImageKey::Signup,
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownKey {
                kind: KeyKind::Page,
                key: s.to_string(),
            })
    }
}

/// Twitter card layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    Summary,
    #[default]
    SummaryLargeImage,
}

impl TwitterCardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardType::Summary => "summary",
            TwitterCardType::SummaryLargeImage => "summary_large_image",
        }
    }
}

impl fmt::Display for TwitterCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TwitterCardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(TwitterCardType::Summary),
            "summary_large_image" => Ok(TwitterCardType::SummaryLargeImage),
            other => Err(Error::ConfigParse(format!(
                "Invalid twitter card type '{}', expected 'summary' or 'summary_large_image'",
                other
            ))),
        }
    }
}

/// Site-wide SEO fallbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoDefaults {
    /// Title pattern with a single `%s` for the page title
    pub title_template: String,
    pub default_title: String,
    pub default_description: String,
    pub default_image: String,
    pub twitter_card_type: TwitterCardType,
    pub og_type: String,
}

/// Title, description and preview image for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSeoEntry {
    pub title: String,
    pub description: String,
    pub image: String,
}
