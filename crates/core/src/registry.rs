//! The metadata registry: site identity, preview images, SEO defaults and
//! per-page SEO entries, built once and read-only afterwards.

use crate::error::Result;
use crate::template::{format_title, interpolate, title_template};
use crate::types::*;
use serde::Serialize;
use tracing::debug;

/// Relative paths of the social preview images (1200x630)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRegistry {
    pub default: String,
    pub home: String,
    pub pricing: String,
    pub about: String,
    pub dashboard: String,
    pub login: String,
    pub signup: String,
}

impl ImageRegistry {
    /// `/og/<key>.png` for every key
    pub fn standard() -> Self {
        let path = |key: OgImageKey| format!("/og/{}.png", key.as_str());
        Self {
            default: path(OgImageKey::Default),
            home: path(OgImageKey::Home),
            pricing: path(OgImageKey::Pricing),
            about: path(OgImageKey::About),
            dashboard: path(OgImageKey::Dashboard),
            login: path(OgImageKey::Login),
            signup: path(OgImageKey::Signup),
        }
    }

    pub fn path(&self, key: OgImageKey) -> &str {
        match key {
            OgImageKey::Default => &self.default,
            OgImageKey::Home => &self.home,
            OgImageKey::Pricing => &self.pricing,
            OgImageKey::About => &self.about,
            OgImageKey::Dashboard => &self.dashboard,
            OgImageKey::Login => &self.login,
            OgImageKey::Signup => &self.signup,
        }
    }

    pub(crate) fn path_mut(&mut self, key: OgImageKey) -> &mut String {
        match key {
            OgImageKey::Default => &mut self.default,
            OgImageKey::Home => &mut self.home,
            OgImageKey::Pricing => &mut self.pricing,
            OgImageKey::About => &mut self.about,
            OgImageKey::Dashboard => &mut self.dashboard,
            OgImageKey::Login => &mut self.login,
            OgImageKey::Signup => &mut self.signup,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OgImageKey, &str)> {
        OgImageKey::ALL.into_iter().map(|key| (key, self.path(key)))
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.iter().any(|(_, p)| p == path)
    }
}

/// SEO entry for every known page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSeoRegistry {
    pub home: PageSeoEntry,
    pub about: PageSeoEntry,
    pub pricing: PageSeoEntry,
    pub dashboard: PageSeoEntry,
    pub login: PageSeoEntry,
    pub signup: PageSeoEntry,
}

impl PageSeoRegistry {
    pub fn entry(&self, key: PageKey) -> &PageSeoEntry {
        match key {
            PageKey::Home => &self.home,
            PageKey::About => &self.about,
            PageKey::Pricing => &self.pricing,
            PageKey::Dashboard => &self.dashboard,
            PageKey::Login => &self.login,
            PageKey::Signup => &self.signup,
        }
    }

    fn entry_mut(&mut self, key: PageKey) -> &mut PageSeoEntry {
        match key {
            PageKey::Home => &mut self.home,
            PageKey::About => &mut self.about,
            PageKey::Pricing => &mut self.pricing,
            PageKey::Dashboard => &mut self.dashboard,
            PageKey::Login => &mut self.login,
            PageKey::Signup => &mut self.signup,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageKey, &PageSeoEntry)> {
        PageKey::ALL.into_iter().map(|key| (key, self.entry(key)))
    }
}

/// Built-in (title, description) text for a page.
///
/// `{name}` and friends are filled from the site identity.
fn builtin_page_text(key: PageKey) -> (&'static str, &'static str) {
    match key {
        PageKey::Home => ("{tagline}", "{description}"),
        PageKey::About => ("About", "Learn more about {name} and our mission."),
        PageKey::Pricing => (
            "Pricing",
            "Simple, transparent pricing for {name}. Choose the plan that fits your needs.",
        ),
        PageKey::Dashboard => ("Dashboard", "Your {name} dashboard."),
        PageKey::Login => ("Sign In", "Sign in to your {name} account."),
        PageKey::Signup => ("Sign Up", "Create your {name} account and get started."),
    }
}

/// Immutable metadata for the whole site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRegistry {
    site: SiteIdentity,
    images: ImageRegistry,
    seo: SeoDefaults,
    pages: PageSeoRegistry,
}

impl MetadataRegistry {
    /// Build the registry from a site identity and image paths.
    ///
    /// SEO defaults and page entries are derived in that order. A trailing
    /// `/` on the site URL is stripped.
    pub fn new(mut site: SiteIdentity, images: ImageRegistry) -> Self {
        let trimmed = site.url.trim_end_matches('/').len();
        site.url.truncate(trimmed);

        let seo = SeoDefaults {
            title_template: title_template(&site.name),
            default_title: site.name.clone(),
            default_description: site.description.clone(),
            default_image: images.default.clone(),
            twitter_card_type: TwitterCardType::SummaryLargeImage,
            og_type: "website".to_string(),
        };

        let entry = |key: PageKey| {
            let (title, description) = builtin_page_text(key);
            PageSeoEntry {
                title: interpolate(title, &site),
                description: interpolate(description, &site),
                image: images.path(key.image_key()).to_string(),
            }
        };
        let pages = PageSeoRegistry {
            home: entry(PageKey::Home),
            about: entry(PageKey::About),
            pricing: entry(PageKey::Pricing),
            dashboard: entry(PageKey::Dashboard),
            login: entry(PageKey::Login),
            signup: entry(PageKey::Signup),
        };

        debug!(site = %site.name, url = %site.url, "built metadata registry");

        Self {
            site,
            images,
            seo,
            pages,
        }
    }

    /// Replace one page's title and description.
    ///
    /// The image stays the page's own entry in the image registry.
    pub fn with_page(
        mut self,
        key: PageKey,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let image = self.images.path(key.image_key()).to_string();
        *self.pages.entry_mut(key) = PageSeoEntry {
            title: title.into(),
            description: description.into(),
            image,
        };
        self
    }

    pub fn with_twitter_card(mut self, card: TwitterCardType) -> Self {
        self.seo.twitter_card_type = card;
        self
    }

    pub fn with_og_type(mut self, og_type: impl Into<String>) -> Self {
        self.seo.og_type = og_type.into();
        self
    }

    pub fn page_seo(&self, key: PageKey) -> &PageSeoEntry {
        self.pages.entry(key)
    }

    pub fn image_path(&self, key: OgImageKey) -> &str {
        self.images.path(key)
    }

    pub fn site_identity(&self) -> &SiteIdentity {
        &self.site
    }

    pub fn seo_defaults(&self) -> &SeoDefaults {
        &self.seo
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    pub fn pages(&self) -> &PageSeoRegistry {
        &self.pages
    }

    /// Look up a page by its string key, failing on anything outside the
    /// known set
    pub fn page_seo_by_name(&self, key: &str) -> Result<&PageSeoEntry> {
        let key: PageKey = key.parse()?;
        Ok(self.page_seo(key))
    }

    /// Look up an image path by its string key
    pub fn image_path_by_name(&self, key: &str) -> Result<&str> {
        let key: OgImageKey = key.parse()?;
        Ok(self.image_path(key))
    }

    /// Full document title for a page, e.g. `"Pricing | ShipFast"`
    pub fn page_title(&self, key: PageKey) -> String {
        format_title(&self.page_seo(key).title, &self.site.name)
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        let site = SiteIdentity {
            name: "ShipFast".to_string(),
            tagline: "Ship your SaaS in days, not months".to_string(),
            description: "The complete stack for building and launching your next project. \
                          SvelteKit and Supabase Auth. Minimal config, maximum speed."
                .to_string(),
            url: "https://yoursite.com".to_string(),
            social_handle: "@yourhandle".to_string(),
            author: Author {
                name: "Your Name".to_string(),
                social_handle: "@yourhandle".to_string(),
            },
        };
        Self::new(site, ImageRegistry::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, KeyKind};
    use crate::template::{TITLE_PLACEHOLDER, placeholder_count};

    #[test]
    fn test_every_page_is_populated() {
        let registry = MetadataRegistry::default();
        for key in PageKey::ALL {
            let entry = registry.page_seo(key);
            assert!(!entry.title.is_empty(), "{} has empty title", key);
            assert!(!entry.description.is_empty(), "{} has empty description", key);
            assert!(
                registry.images().contains_path(&entry.image),
                "{} image {} not in image registry",
                key,
                entry.image
            );
        }
    }

    #[test]
    fn test_title_template_fills_to_site_name() {
        let registry = MetadataRegistry::default();
        let template = &registry.seo_defaults().title_template;
        assert_eq!(placeholder_count(template), 1);
        assert_eq!(
            template.replace(TITLE_PLACEHOLDER, "X"),
            format!("X | {}", registry.site_identity().name)
        );
    }

    #[test]
    fn test_default_image_matches_seo_default() {
        let registry = MetadataRegistry::default();
        assert_eq!(
            registry.image_path(OgImageKey::Default),
            registry.seo_defaults().default_image
        );
    }

    #[test]
    fn test_url_has_no_trailing_slash() {
        let registry = MetadataRegistry::default();
        assert!(!registry.site_identity().url.ends_with('/'));

        let mut site = registry.site_identity().clone();
        site.url = "https://example.com//".to_string();
        let registry = MetadataRegistry::new(site, ImageRegistry::standard());
        assert_eq!(registry.site_identity().url, "https://example.com");
    }

    #[test]
    fn test_pricing_page() {
        let registry = MetadataRegistry::default();
        assert_eq!(
            registry.page_seo(PageKey::Pricing),
            &PageSeoEntry {
                title: "Pricing".to_string(),
                description:
                    "Simple, transparent pricing for ShipFast. Choose the plan that fits your needs."
                        .to_string(),
                image: "/og/pricing.png".to_string(),
            }
        );
    }

    #[test]
    fn test_login_page() {
        let registry = MetadataRegistry::default();
        assert_eq!(
            registry.page_seo(PageKey::Login),
            &PageSeoEntry {
                title: "Sign In".to_string(),
                description: "Sign in to your ShipFast account.".to_string(),
                image: "/og/login.png".to_string(),
            }
        );
    }

    #[test]
    fn test_home_page_uses_site_identity() {
        let registry = MetadataRegistry::default();
        let home = registry.page_seo(PageKey::Home);
        assert_eq!(home.title, "Ship your SaaS in days, not months");
        assert_eq!(home.description, registry.site_identity().description);
        assert_eq!(home.image, "/og/home.png");
    }

    #[test]
    fn test_seo_defaults() {
        let registry = MetadataRegistry::default();
        let seo = registry.seo_defaults();
        assert_eq!(seo.title_template, "%s | ShipFast");
        assert_eq!(seo.default_title, "ShipFast");
        assert_eq!(seo.default_description, registry.site_identity().description);
        assert_eq!(seo.default_image, "/og/default.png");
        assert_eq!(seo.twitter_card_type, TwitterCardType::SummaryLargeImage);
        assert_eq!(seo.og_type, "website");
    }

    #[test]
    fn test_accessors_are_idempotent() {
        let registry = MetadataRegistry::default();
        for key in PageKey::ALL {
            assert_eq!(registry.page_seo(key), registry.page_seo(key));
        }
        for key in OgImageKey::ALL {
            assert_eq!(registry.image_path(key), registry.image_path(key));
        }
        assert_eq!(registry.site_identity(), registry.site_identity());
        assert_eq!(registry.seo_defaults(), registry.seo_defaults());
    }

    #[test]
    fn test_unknown_page_name_is_an_error() {
        let registry = MetadataRegistry::default();
        let err = registry.page_seo_by_name("blog").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownKey {
                kind: KeyKind::Page,
                ref key,
            } if key == "blog"
        ));
        // `default` is an image key, not a page
        assert!(registry.page_seo_by_name("default").is_err());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = MetadataRegistry::default();
        assert_eq!(
            registry.page_seo_by_name("signup").unwrap().title,
            "Sign Up"
        );
        assert_eq!(
            registry.image_path_by_name("default").unwrap(),
            "/og/default.png"
        );
        assert!(registry.image_path_by_name("hero").is_err());
    }

    #[test]
    fn test_page_title() {
        let registry = MetadataRegistry::default();
        assert_eq!(registry.page_title(PageKey::Pricing), "Pricing | ShipFast");
        assert_eq!(registry.page_title(PageKey::Login), "Sign In | ShipFast");
    }

    #[test]
    fn test_site_name_flows_into_pages() {
        let mut site = MetadataRegistry::default().site_identity().clone();
        site.name = "Acme".to_string();
        let registry = MetadataRegistry::new(site, ImageRegistry::standard());

        assert_eq!(
            registry.page_seo(PageKey::Dashboard).description,
            "Your Acme dashboard."
        );
        assert_eq!(registry.seo_defaults().title_template, "%s | Acme");
    }

    #[test]
    fn test_custom_images_flow_into_pages() {
        let mut images = ImageRegistry::standard();
        images.about = "/social/about.jpg".to_string();
        images.default = "/social/fallback.jpg".to_string();
        let site = MetadataRegistry::default().site_identity().clone();
        let registry = MetadataRegistry::new(site, images);

        assert_eq!(registry.page_seo(PageKey::About).image, "/social/about.jpg");
        assert_eq!(registry.seo_defaults().default_image, "/social/fallback.jpg");
    }

    #[test]
    fn test_with_page_leaves_original_untouched() {
        let original = MetadataRegistry::default();
        let changed = original
            .clone()
            .with_page(PageKey::Pricing, "Plans", "Pick one.");

        assert_eq!(
            changed.page_seo(PageKey::Pricing),
            &PageSeoEntry {
                title: "Plans".to_string(),
                description: "Pick one.".to_string(),
                image: "/og/pricing.png".to_string(),
            }
        );
        assert_eq!(original.page_seo(PageKey::Pricing).title, "Pricing");
        assert_eq!(changed.page_seo(PageKey::Login), original.page_seo(PageKey::Login));
    }

    #[test]
    fn test_with_page_keeps_own_image() {
        let mut images = ImageRegistry::standard();
        images.signup = "/social/join.jpg".to_string();
        let site = MetadataRegistry::default().site_identity().clone();
        let registry = MetadataRegistry::new(site, images).with_page(
            PageKey::Signup,
            "Join",
            "Create an account.",
        );

        let entry = registry.page_seo(PageKey::Signup);
        assert_eq!(entry.image, "/social/join.jpg");
        assert_eq!(entry.image, registry.image_path(PageKey::Signup.image_key()));
    }

    #[test]
    fn test_page_title_matches_seo_template() {
        let registry = MetadataRegistry::default().with_page(PageKey::About, "Team", "Us.");
        for key in PageKey::ALL {
            let filled = crate::template::apply_title_template(
                &registry.seo_defaults().title_template,
                &registry.page_seo(key).title,
            );
            assert_eq!(registry.page_title(key), filled);
        }
        assert_eq!(registry.page_title(PageKey::About), "Team | ShipFast");
    }

    #[test]
    fn test_image_iter_order() {
        let images = ImageRegistry::standard();
        let keys: Vec<_> = images.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, OgImageKey::ALL.to_vec());
        assert!(images.iter().all(|(_, path)| path.starts_with('/')));
    }
}
