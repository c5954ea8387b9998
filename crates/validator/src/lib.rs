//! Checks for a metadata registry and the preview images it points at.

use sitemeta_core::template::placeholder_count;
use sitemeta_core::{ImageRegistry, MetadataRegistry, OgImageKey, PageKey, PageSeoEntry};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Recommended social preview size
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.info.extend(other.info);
    }
}

/// Check the registry's internal invariants
pub fn validate_registry(registry: &MetadataRegistry) -> ValidationReport {
    let mut report = ValidationReport::default();
    let site = registry.site_identity();
    let seo = registry.seo_defaults();

    if site.url.ends_with('/') {
        report
            .errors
            .push(format!("site.url ends with '/': {}", site.url));
    }

    for (key, path) in registry.images().iter() {
        if !path.starts_with('/') {
            report
                .errors
                .push(format!("images.{} must start with '/': {}", key, path));
        }
    }

    let placeholders = placeholder_count(&seo.title_template);
    if placeholders != 1 {
        report.errors.push(format!(
            "Title template '{}' has {} placeholders, expected 1",
            seo.title_template, placeholders
        ));
    }

    if seo.default_image != registry.image_path(OgImageKey::Default) {
        report.errors.push(format!(
            "Default SEO image '{}' differs from images.default '{}'",
            seo.default_image,
            registry.image_path(OgImageKey::Default)
        ));
    }

    for (key, entry) in registry.pages().iter() {
        if entry.title.trim().is_empty() {
            report.errors.push(format!("pages.{} has an empty title", key));
        }
        if entry.description.trim().is_empty() {
            report
                .errors
                .push(format!("pages.{} has an empty description", key));
        }
        if let Some(error) = check_page_image(key, entry, registry.images()) {
            report.errors.push(error);
        }
    }

    if report.is_ok() {
        report.info.push(format!(
            "Registry for '{}' is consistent ({} pages)",
            site.name,
            registry.pages().iter().count()
        ));
    }

    report
}

/// A page's image must be its own entry in the image registry
fn check_page_image(key: PageKey, entry: &PageSeoEntry, images: &ImageRegistry) -> Option<String> {
    let expected = images.path(key.image_key());
    (entry.image != expected).then(|| {
        format!(
            "pages.{} image '{}' should be images.{} '{}'",
            key,
            entry.image,
            key.image_key(),
            expected
        )
    })
}

/// Check that each registered image exists under `public_dir` and has the
/// recommended size. Images under `public_dir/og` that nothing references
/// are reported as warnings.
pub fn validate_assets(registry: &MetadataRegistry, public_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let referenced: BTreeSet<&str> = registry.images().iter().map(|(_, path)| path).collect();

    for path in &referenced {
        let file = public_dir.join(path.trim_start_matches('/'));
        debug!(file = %file.display(), "checking preview image");

        if !file.is_file() {
            report
                .errors
                .push(format!("Image not found: {} ({})", path, file.display()));
            continue;
        }

        match image::image_dimensions(&file) {
            Ok((OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT)) => {
                report.info.push(format!(
                    "{}: {}x{}",
                    path, OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT
                ));
            }
            Ok((width, height)) => {
                report.warnings.push(format!(
                    "{} is {}x{}, recommended {}x{}",
                    path, width, height, OG_IMAGE_WIDTH, OG_IMAGE_HEIGHT
                ));
            }
            Err(e) => {
                report
                    .errors
                    .push(format!("Cannot read image {}: {}", path, e));
            }
        }
    }

    let og_dir = public_dir.join("og");
    if og_dir.is_dir() {
        for entry in WalkDir::new(&og_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let is_image = entry
                .path()
                .extension()
                .map(|ext| {
                    IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str())
                })
                .unwrap_or(false);
            if !is_image {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(public_dir) else {
                continue;
            };
            let site_path = format!(
                "/{}",
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            );
            if !referenced.contains(site_path.as_str()) {
                report
                    .warnings
                    .push(format!("Unreferenced image: {}", site_path));
            }
        }
    }

    report
}
