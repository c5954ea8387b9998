use anyhow::{Context, Result};
use sitemeta_core::MetadataRegistry;
use std::fs;
use std::path::PathBuf;

/// Escape a string for safe inclusion in a TOML basic string
///
/// The template is written by hand to keep its comments, so values are
/// escaped here instead of going through the toml serializer.
///
/// See: https://toml.io/en/v1.0.0#string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Create a site.toml populated with the built-in values
pub fn run(path: PathBuf, name: Option<String>, url: Option<String>) -> Result<()> {
    println!("Initializing site config in: {}", path.display());

    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;

    let toml = generate_site_toml(name.as_deref(), url.as_deref());
    fs::write(&site_toml_path, toml)
        .with_context(|| format!("Failed to write {}", site_toml_path.display()))?;

    println!("✓ Wrote {}", site_toml_path.display());
    println!("\nNext steps:");
    println!("  1. Edit site.toml (name, tagline, url, social handles)");
    println!("  2. Add 1200x630 preview images under static/og/");
    println!("  3. Check it: sitemeta validate {}", path.display());

    Ok(())
}

fn generate_site_toml(name: Option<&str>, url: Option<&str>) -> String {
    let defaults = MetadataRegistry::default();
    let site = defaults.site_identity();
    let seo = defaults.seo_defaults();

    let name = toml_escape_string(name.unwrap_or(&site.name));
    let url = toml_escape_string(url.unwrap_or(&site.url).trim_end_matches('/'));
    let tagline = toml_escape_string(&site.tagline);
    let description = toml_escape_string(&site.description);
    let twitter = toml_escape_string(&site.social_handle);
    let author_name = toml_escape_string(&site.author.name);
    let author_twitter = toml_escape_string(&site.author.social_handle);

    let mut toml = format!(
        "# Generated by sitemeta init\n\
# Edit these values to describe your site\n\
\n\
[site]\n\
name = \"{name}\"\n\
tagline = \"{tagline}\"\n\
description = \"{description}\"\n\
url = \"{url}\"  # Production URL, no trailing slash\n\
twitter = \"{twitter}\"\n\
\n\
[site.author]\n\
name = \"{author_name}\"\n\
twitter = \"{author_twitter}\"\n\
\n\
# Social preview images (1200x630 recommended), relative to the public dir\n\
[images]\n"
    );

    for (key, path) in defaults.images().iter() {
        toml.push_str(&format!("{} = \"{}\"\n", key, toml_escape_string(path)));
    }

    toml.push_str(&format!(
        "\n\
[seo]\n\
twitter_card = \"{}\"  # summary | summary_large_image\n\
og_type = \"{}\"\n\
\n\
# Per-page overrides. {{name}}, {{tagline}}, {{description}} and {{url}}\n\
# are replaced with the site values.\n\
# [pages.pricing]\n\
# title = \"Pricing\"\n\
# description = \"Simple, transparent pricing for {{name}}.\"\n",
        seo.twitter_card_type,
        toml_escape_string(&seo.og_type)
    ));

    toml
}
