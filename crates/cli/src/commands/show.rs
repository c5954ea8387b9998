use anyhow::{Context, Result};
use serde::Serialize;
use sitemeta_core::{MetadataRegistry, OgImageKey, PageKey, parse_site_toml};
use std::path::Path;

/// What to print
#[derive(Debug, Clone)]
pub enum Target {
    Site,
    Defaults,
    Pages,
    Page(String),
    Image(String),
}

#[derive(Serialize)]
struct ImageOutput<'a> {
    key: OgImageKey,
    path: &'a str,
}

#[derive(Serialize)]
struct PageOutput<'a> {
    key: PageKey,
    document_title: String,
    #[serde(flatten)]
    entry: &'a sitemeta_core::PageSeoEntry,
}

/// Print part of the registry as JSON
pub fn run(config: Option<&Path>, target: Target) -> Result<()> {
    let registry = load(config)?;
    println!("{}", render(&registry, &target)?);
    Ok(())
}

fn load(config: Option<&Path>) -> Result<MetadataRegistry> {
    match config {
        Some(path) => parse_site_toml(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(MetadataRegistry::default()),
    }
}

fn page_output(registry: &MetadataRegistry, key: PageKey) -> PageOutput<'_> {
    PageOutput {
        key,
        document_title: registry.page_title(key),
        entry: registry.page_seo(key),
    }
}

fn render(registry: &MetadataRegistry, target: &Target) -> Result<String> {
    let json = match target {
        Target::Site => serde_json::to_string_pretty(registry.site_identity())?,
        Target::Defaults => serde_json::to_string_pretty(registry.seo_defaults())?,
        Target::Pages => {
            let pages: Vec<_> = PageKey::ALL
                .into_iter()
                .map(|key| page_output(registry, key))
                .collect();
            serde_json::to_string_pretty(&pages)?
        }
        Target::Page(name) => {
            let key: PageKey = name.parse()?;
            serde_json::to_string_pretty(&page_output(registry, key))?
        }
        Target::Image(name) => {
            let key: OgImageKey = name.parse()?;
            serde_json::to_string_pretty(&ImageOutput {
                key,
                path: registry.image_path(key),
            })?
        }
    };
    Ok(json)
}
