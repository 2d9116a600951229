//! Recursive object mapper
//!
//! Walks a nested JSON object depth-first, handing every entry to a
//! caller-supplied transform and rebuilding a fresh object from the
//! entries it returns. Nested objects are walked with the same transform.
//!
//! The decision to recurse is made on the *original* value while the
//! recursion itself walks the value the transform *returned*. A transform
//! that receives an object is therefore expected to hand back an object;
//! what happens otherwise is governed by [`ShapeMismatchPolicy`].
//!
//! Entries are processed strictly one after another. Each transform future
//! is awaited, and each nested walk completes, before the next sibling is
//! looked at.
//!
//! Copyright (c) 2025 Objmap Contributors
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::types::{MapOptions, MappedEntry, Mapping, ShapeMismatchPolicy, ValueKind};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::{debug, trace, warn};

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<Mapping>> + Send + 'a>>;

/// Map every key and leaf value of `input` through `transform` using
/// default options.
///
/// See [`ObjectMapper::map`].
pub async fn map_object<F, Fut, E>(input: &Mapping, transform: F) -> Result<Mapping>
where
    F: FnMut(String, Value) -> Fut + Send,
    Fut: Future<Output = std::result::Result<MappedEntry, E>> + Send,
    E: Into<anyhow::Error> + Send,
{
    ObjectMapper::new().map(input, transform).await
}

/// Configurable recursive mapper
#[derive(Debug, Clone, Default)]
pub struct ObjectMapper {
    options: MapOptions,
}

impl ObjectMapper {
    /// Create a mapper with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper from a full set of options
    pub fn with_options(options: MapOptions) -> Self {
        Self { options }
    }

    /// Set the policy for object entries transformed into non-objects
    pub fn shape_mismatch(mut self, policy: ShapeMismatchPolicy) -> Self {
        self.options.shape_mismatch = policy;
        self
    }

    /// Limit how deeply nested objects may go
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = Some(max_depth);
        self
    }

    /// Current options
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Produce a new mapping from `input`.
    ///
    /// `transform` is called exactly once per entry, in insertion order,
    /// with the original key and value. When the original value is an
    /// object, the returned value is walked recursively with the same
    /// transform. Any other returned value is stored as-is, even if it is
    /// itself an object. Arrays are never descended into.
    ///
    /// If two entries are given the same new key, the later value replaces
    /// the earlier one in the earlier one's position.
    ///
    /// `input` is left untouched. Any failure aborts the walk and no partial
    /// output is returned.
    pub async fn map<F, Fut, E>(&self, input: &Mapping, mut transform: F) -> Result<Mapping>
    where
        F: FnMut(String, Value) -> Fut + Send,
        Fut: Future<Output = std::result::Result<MappedEntry, E>> + Send,
        E: Into<anyhow::Error> + Send,
    {
        let start_time = Instant::now();
        debug!(entries = input.len(), "Mapping object");

        let output = walk(input.clone(), &mut transform, &self.options, String::from("$"), 0).await?;

        debug!(
            entries = output.len(),
            elapsed = ?start_time.elapsed(),
            "Mapped object"
        );
        Ok(output)
    }

    /// Synchronous version of [`ObjectMapper::map`]
    #[cfg(feature = "blocking")]
    pub fn map_blocking<F, Fut, E>(&self, input: &Mapping, transform: F) -> Result<Mapping>
    where
        F: FnMut(String, Value) -> Fut + Send,
        Fut: Future<Output = std::result::Result<MappedEntry, E>> + Send,
        E: Into<anyhow::Error> + Send,
    {
        // Must not be called from within an async context.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| Error::Runtime {
                message: format!("Failed to create runtime: {}", source),
                source,
            })?;

        runtime.block_on(self.map(input, transform))
    }
}

fn walk<'a, F, Fut, E>(
    input: Mapping,
    transform: &'a mut F,
    options: &'a MapOptions,
    path: String,
    depth: usize,
) -> WalkFuture<'a>
where
    F: FnMut(String, Value) -> Fut + Send,
    Fut: Future<Output = std::result::Result<MappedEntry, E>> + Send + 'a,
    E: Into<anyhow::Error> + Send + 'a,
{
    Box::pin(async move {
        if let Some(max_depth) = options.max_depth {
            if depth > max_depth {
                return Err(Error::DepthExceeded { path, max_depth });
            }
        }

        let mut output = Mapping::with_capacity(input.len());

        for (key, value) in input {
            let entry_path = child_path(&path, &key);
            let kind = ValueKind::of(&value);
            let descend = kind.is_container();
            trace!(path = %entry_path, %kind, descend, "Transforming entry");

            let MappedEntry { new_key, new_value } = transform(key.clone(), value)
                .await
                .map_err(|source| Error::Callback {
                    key,
                    path: entry_path.clone(),
                    source: source.into(),
                })?;

            let resolved = if descend {
                match new_value {
                    Value::Object(nested) => {
                        let nested = walk(nested, &mut *transform, options, entry_path, depth + 1).await?;
                        Value::Object(nested)
                    }
                    other => {
                        let found = ValueKind::of(&other);
                        match options.shape_mismatch {
                            ShapeMismatchPolicy::Error => {
                                return Err(Error::ShapeMismatch { path: entry_path, found });
                            }
                            ShapeMismatchPolicy::Leaf => {
                                warn!(
                                    path = %entry_path,
                                    %found,
                                    "Transform replaced an object with a non-object, storing it as a leaf"
                                );
                                other
                            }
                        }
                    }
                }
            } else {
                new_value
            };

            if output.contains_key(&new_key) {
                debug!(path = %path, key = %new_key, "Transformed key collides with an earlier entry, overwriting");
            }
            output.insert(new_key, resolved);
        }

        Ok(output)
    })
}

/// Append `key` to a `$`-rooted path, bracketing keys that are not plain identifiers
fn child_path(parent: &str, key: &str) -> String {
    let plain = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        format!("{}.{}", parent, key)
    } else {
        format!("{}[{}]", parent, Value::String(key.to_string()))
    }
}
