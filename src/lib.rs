//! # a3s-dork
//!
//! A search dork generator with cross-engine query translation.
//!
//! Dork templates are authored once in Google syntax against the placeholder
//! domain `example.com`. This library substitutes a target domain, rewrites
//! each query into the dialect of every selected engine, and builds the
//! encoded search URLs:
//!
//! - Bing gets `NOT` / `OR` instead of `-` / `|`
//! - DuckDuckGo gets quoted phrases instead of `inurl:` and bare negation
//! - Google, Brave and Yandex receive the canonical query unchanged
//!
//! ## Example
//!
//! ```rust
//! use a3s_dork::{render, Catalog, DorkTemplate, EngineRegistry};
//!
//! let catalog = Catalog::new(vec![DorkTemplate::new(
//!     "Admin panels",
//!     "site:example.com inurl:admin -login",
//! )]);
//! let registry = EngineRegistry::with_defaults();
//!
//! let dorks = render(&catalog.with_target("acme.org"), &registry, &[]).unwrap();
//! for link in &dorks[0].patterns[0].links {
//!     println!("{}: {}", link.engine, link.url);
//! }
//! ```

mod engine;
mod error;
mod registry;
mod render;
mod result;
mod template;
mod translate;

pub mod debounce;
pub mod engines;
pub mod source;

pub use engine::{Engine, EngineConfig, QUERY_PLACEHOLDER};
pub use error::{DorkError, Result};
pub use registry::{translate, EngineRegistry};
pub use render::{render, render_for_target};
pub use result::{EngineLink, RenderedDork, RenderedPattern, SearchUrl};
pub use template::{
    apply_target, resolve_target, Catalog, DorkPatterns, DorkTemplate, PLACEHOLDER_DOMAIN,
};
pub use translate::{tokenize, Dialect, Token};
