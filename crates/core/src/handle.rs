//! Shared registry with atomic replacement.
//!
//! Readers take an `Arc` snapshot and never observe a partially built
//! registry. Reloads build a complete new registry and swap it in.

use crate::config::parse_site_toml;
use crate::error::Result;
use crate::registry::MetadataRegistry;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct SharedRegistry {
    inner: ArcSwap<MetadataRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: MetadataRegistry) -> Self {
        Self {
            inner: ArcSwap::from_pointee(registry),
        }
    }

    /// Current snapshot
    #[inline]
    pub fn load(&self) -> Arc<MetadataRegistry> {
        self.inner.load_full()
    }

    /// Swap in a new registry, returning the previous one
    pub fn replace(&self, registry: MetadataRegistry) -> Arc<MetadataRegistry> {
        let previous = self.inner.swap(Arc::new(registry));
        info!(site = %previous.site_identity().name, "replaced metadata registry");
        previous
    }

    /// Rebuild from a site.toml file.
    ///
    /// On error the current registry stays in place.
    pub fn reload_from<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let registry = parse_site_toml(path)?;
        self.replace(registry);
        Ok(())
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(MetadataRegistry::default())
    }
}
