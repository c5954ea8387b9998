pub mod config;
pub mod error;
pub mod handle;
pub mod registry;
pub mod template;
pub mod types;

pub use config::parse_site_toml;
pub use error::{Error, KeyKind, Result};
pub use handle::SharedRegistry;
pub use registry::{ImageRegistry, MetadataRegistry, PageSeoRegistry};
pub use template::format_title;
pub use types::*;
