use anyhow::{Context, Result};
use sitemeta_core::parse_site_toml;
use sitemeta_validator::{ValidationReport, validate_assets, validate_registry};
use std::path::PathBuf;

/// Validate site.toml and, when a public dir is available, its images
pub fn run(path: PathBuf, public: Option<PathBuf>) -> Result<()> {
    println!("Validating site at: {}", path.display());

    let config_path = path.join("site.toml");
    let registry = parse_site_toml(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    println!("✓ site.toml valid");
    println!("  Site: {} ({})", registry.site_identity().name, registry.site_identity().url);

    let mut report = validate_registry(&registry);

    let public = public.or_else(|| Some(path.join("static")).filter(|p| p.is_dir()));
    match public {
        Some(dir) => {
            println!("  Assets: {}", dir.display());
            report.merge(validate_assets(&registry, &dir));
        }
        None => println!("  Assets: skipped (no public dir)"),
    }

    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!();
    for line in &report.info {
        println!("  ✓ {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        println!("  ✗ {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SITE: &str = r##"
[site]
name = "Acme"
tagline = "Rockets for everyone"
description = "We sell rockets."
url = "https://acme.test"
twitter = "@acme"

[site.author]
name = "Wile E."
twitter = "@wile"
"##;

    #[test]
    fn test_validate_without_assets() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE).unwrap();
        assert!(run(dir.path().to_path_buf(), None).is_ok());
    }

    #[test]
    fn test_validate_fails_on_missing_images() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE).unwrap();
        fs::create_dir(dir.path().join("static")).unwrap();

        let err = run(dir.path().to_path_buf(), None).unwrap_err();
        assert!(err.to_string().contains("Validation failed with 7 error(s)"));
    }

    #[test]
    fn test_validate_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path().to_path_buf(), None).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }
}
