use crate::error::{Error, Result};
use crate::registry::{ImageRegistry, MetadataRegistry};
use crate::template::{TITLE_PLACEHOLDER, interpolate};
use crate::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    images: BTreeMap<String, String>,
    #[serde(default)]
    seo: RawSeo,
    #[serde(default)]
    pages: BTreeMap<String, RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    name: String,
    tagline: String,
    description: String,
    url: String,
    twitter: String,
    author: RawAuthor,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    name: String,
    twitter: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSeo {
    twitter_card: Option<String>,
    og_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPage {
    title: Option<String>, // Supports {name}, {tagline}, ...
    description: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<MetadataRegistry> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading site config");
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<MetadataRegistry> {
    let raw: RawConfig = toml::from_str(content)?;

    let name = non_empty(raw.site.name, "site.name")?;
    if name.contains(TITLE_PLACEHOLDER) {
        return Err(Error::ConfigParse(format!(
            "site.name must not contain '{}': '{}'",
            TITLE_PLACEHOLDER, name
        )));
    }
    // Home page title and description come from these
    let tagline = non_empty(raw.site.tagline, "site.tagline")?;
    let description = non_empty(raw.site.description, "site.description")?;
    validate_url(&raw.site.url)?;

    let site = SiteIdentity {
        name,
        tagline,
        description,
        url: raw.site.url,
        social_handle: raw.site.twitter,
        author: Author {
            name: raw.site.author.name,
            social_handle: raw.site.author.twitter,
        },
    };

    // Unlisted images keep the standard /og/<key>.png path
    let mut images = ImageRegistry::standard();
    for (key, path) in raw.images {
        let key: OgImageKey = key.parse()?;
        validate_image_path(&path, &format!("images.{}", key))?;
        *images.path_mut(key) = path;
    }

    let mut registry = MetadataRegistry::new(site, images);

    if let Some(card) = raw.seo.twitter_card {
        registry = registry.with_twitter_card(card.parse()?);
    }
    if let Some(og_type) = raw.seo.og_type {
        if og_type.trim().is_empty() {
            return Err(Error::ConfigParse("seo.og_type must not be empty".to_string()));
        }
        registry = registry.with_og_type(og_type);
    }

    for (key, page) in raw.pages {
        let key: PageKey = key.parse()?;
        let current = registry.page_seo(key);
        let site = registry.site_identity();

        let title = match page.title {
            Some(t) => interpolate(&non_empty(t, &format!("pages.{}.title", key))?, site),
            None => current.title.clone(),
        };
        let description = match page.description {
            Some(d) => interpolate(
                &non_empty(d, &format!("pages.{}.description", key))?,
                site,
            ),
            None => current.description.clone(),
        };

        registry = registry.with_page(key, title, description);
    }

    Ok(registry)
}

/// The site URL must be absolute http(s).
///
/// A trailing slash is accepted here and stripped when the registry is built.
fn validate_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            Error::ConfigParse(format!(
                "site.url must be an absolute http(s) URL, got '{}'",
                url
            ))
        })?;

    if rest.trim_matches('/').is_empty() {
        return Err(Error::ConfigParse(format!(
            "site.url has no host: '{}'",
            url
        )));
    }

    Ok(())
}

/// Image paths are site-relative and must start with `/`
fn validate_image_path(path: &str, field_name: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(Error::ConfigParse(format!(
            "Image path in '{}' must start with '/': '{}'",
            field_name, path
        )));
    }
    if path.trim_end_matches('/').is_empty() {
        return Err(Error::ConfigParse(format!(
            "Image path in '{}' has no file name",
            field_name
        )));
    }
    Ok(())
}

fn non_empty(value: String, field_name: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "'{}' must not be empty",
            field_name
        )));
    }
    Ok(value)
}
