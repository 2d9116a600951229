//! Objmap Core - recursive key/value transformer for nested JSON objects
//!
//! This crate rebuilds a nested JSON object by passing every key and every
//! leaf value through a caller-supplied, possibly asynchronous, transform.
//! Nested objects are transformed recursively with the same function.
//!
//! # Main Components
//!
//! - **Mapper**: [`map_object`] and the configurable [`ObjectMapper`]
//! - **Core Types**: [`Mapping`], [`MappedEntry`], [`ValueKind`], [`MapOptions`]
//! - **Error Handling**: Error types using `thiserror`, with transform
//!   failures carried as `anyhow` sources
//!
//! # Example
//!
//! ```no_run
//! use objmap_core::{map_object, MappedEntry, Result};
//! use serde_json::{json, Value};
//!
//! async fn example() -> Result<()> {
//!     let input = json!({"foo": "bar", "baz": {"qux": "quux"}});
//!     let input = input.as_object().cloned().unwrap_or_default();
//!
//!     let output = map_object(&input, |key, value| async move {
//!         let value = match value {
//!             Value::String(s) => Value::String(format!("V:{}", s)),
//!             other => other,
//!         };
//!         Ok::<_, std::convert::Infallible>(MappedEntry::new(format!("K:{}", key), value))
//!     })
//!     .await?;
//!
//!     assert_eq!(Value::Object(output), json!({"K:foo": "V:bar", "K:baz": {"K:qux": "V:quux"}}));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use mapper::{map_object, ObjectMapper};
pub use types::{MapOptions, MappedEntry, Mapping, ShapeMismatchPolicy, ValueKind};

pub use serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
