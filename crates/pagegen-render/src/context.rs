//! The data tree placeholders are resolved against.
//!
//! A [`Context`] wraps a `serde_json::Value` and is never modified by
//! rendering. Lookups walk dotted paths through nested objects:
//!
//! ```rust
//! use pagegen_render::Context;
//! use serde_json::json;
//!
//! let ctx = Context::from(json!({"product": {"name": "Glow", "price": null}}));
//!
//! assert_eq!(ctx.resolve("product.name"), Some(&json!("Glow")));
//! assert_eq!(ctx.resolve("product.price"), None);
//! assert_eq!(ctx.resolve("product.name.first"), None);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Read-only nested data supplied to a render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    root: Value,
}

impl Context {
    /// Creates an empty context. Every key resolves to missing.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Builds a context from any serializable data.
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        Ok(Self {
            root: serde_json::to_value(data)?,
        })
    }

    /// Returns the underlying value tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Resolves a dotted key path such as `product.name`.
    ///
    /// Each segment must be looked up in an object. Returns `None` when a
    /// step lands on a non-object, the key is absent, or the value found is
    /// `null`; an explicit `null` and an absent key are not distinguished.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;

        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                _ => return None,
            };
            if current.is_null() {
                return None;
            }
        }

        Some(current)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Context {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<Map<String, Value>> for Context {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(map),
        }
    }
}
