//! Build configuration for the shellpack renderer bundle.
//!
//! A [`ConfigResolver`] turns a fixed base template and the application's
//! dependency manifest into a finalized [`BuildConfig`] for one environment.
//! The bundling itself is done by an external engine that consumes the
//! serialized config.

pub mod build;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod resolver;
pub mod template;
pub mod validation;

// Re-export main types
pub use build::*;
pub use environment::Environment;
pub use error::*;
pub use manifest::{DependencyManifest, MANIFEST_FILE};
pub use resolver::{ConfigResolver, production_defines};

pub use validation::{ConfigValidator, FsValidator, SchemaValidator};
