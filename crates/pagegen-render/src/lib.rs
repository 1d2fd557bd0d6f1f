//! # Pagegen Render - JSON Pages from Templates
//!
//! `pagegen-render` fills JSON templates with values from a nested context and
//! returns the parsed document. It is the rendering step of a page pipeline:
//! other stages build the context (product data, generated FAQ answers,
//! comparison blocks) and persist the rendered pages.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagegen_render::{render, Context};
//! use serde_json::json;
//!
//! let template = r#"{
//!     "title": "{{ product.name }}",
//!     "price": "{{ product.price }}",
//!     "ingredients": {{ product.ingredients }},
//!     "rating": {{ product.rating }}
//! }"#;
//!
//! let ctx = Context::from(json!({
//!     "product": {
//!         "name": "GlowBoost Vitamin C Serum",
//!         "price": 699,
//!         "ingredients": ["Vitamin C", "Hyaluronic Acid"]
//!     }
//! }));
//!
//! let page = render(template, &ctx).unwrap();
//! assert_eq!(page["title"], "GlowBoost Vitamin C Serum");
//! assert_eq!(page["price"], "699");
//! assert_eq!(page["ingredients"], json!(["Vitamin C", "Hyaluronic Acid"]));
//! assert!(page["rating"].is_null());
//! ```
//!
//! ## Substitution Rules
//!
//! A placeholder is quoted when the characters on both sides of it are `"`.
//!
//! - Missing keys (absent, `null`, or reached through a non-object) become
//!   `""` when quoted and `null` otherwise.
//! - Lists and objects become their JSON text. Leave these placeholders
//!   unquoted; inside quotes the page fails to parse.
//! - Scalars become their JSON literal, or, when quoted, the inside of their
//!   JSON string literal so the template's quotes remain the only delimiters.
//!
//! ## Errors
//!
//! [`RenderError::TemplateNotFound`] for unknown template names and
//! [`RenderError::Render`] when the filled text is not valid JSON. Neither is
//! retried or recovered.
//!
//! ## Logging
//!
//! Rendering emits `tracing` events at `debug` and `trace` level. No subscriber
//! is installed by this crate.

pub mod context;
pub mod error;
pub mod template;

pub use context::Context;
pub use error::{RenderError, Result};
pub use template::{
    assemble, placeholder_keys, render, render_serialize, scan, to_pretty_json, Placeholder,
    Quoting, RenderedDocument, Renderer, TemplateRegistry,
};
