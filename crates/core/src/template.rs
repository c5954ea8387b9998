//! String templates for titles and page text.

use crate::types::SiteIdentity;

/// Placeholder a renderer fills with the page title
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Build the site title template, e.g. `"%s | ShipFast"`
pub fn title_template(site_name: &str) -> String {
    format!("{} | {}", TITLE_PLACEHOLDER, site_name)
}

/// Format a full document title from a page title and the site name
pub fn format_title(page_title: &str, site_name: &str) -> String {
    format!("{} | {}", page_title, site_name)
}

/// Fill the first placeholder of a title template.
///
/// Templates without a placeholder are returned unchanged.
pub fn apply_title_template(template: &str, page_title: &str) -> String {
    template.replacen(TITLE_PLACEHOLDER, page_title, 1)
}

/// Number of `%s` placeholders in a template
pub fn placeholder_count(template: &str) -> usize {
    template.matches(TITLE_PLACEHOLDER).count()
}

/// Replace `{name}`, `{tagline}`, `{description}` and `{url}` with site fields.
///
/// Any other `{...}` token is kept verbatim.
pub fn interpolate(template: &str, site: &SiteIdentity) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let Some(end) = after.find('}') else {
            out.push_str(after);
            return out;
        };

        let token = &after[1..end];
        match token {
            "name" => out.push_str(&site.name),
            "tagline" => out.push_str(&site.tagline),
            "description" => out.push_str(&site.description),
            "url" => out.push_str(&site.url),
            _ => out.push_str(&after[..=end]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
