pub mod config;
pub mod declarations;
pub mod discovery;
pub mod error;
pub mod validation;

// Re-export main types
pub use config::*;
pub use declarations::FlagDeclarations;
pub use error::*;

// Re-export discovery and validation
pub use discovery::{CONFIG_FILE, ConfigDiscovery, ConfigSource, PACKAGE_FIELD, package_section};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
