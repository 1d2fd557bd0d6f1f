//! JSON templates with `{{dotted.key}}` placeholders.
//!
//! A template is JSON text with placeholders where values go. Rendering runs
//! in three steps that map to the submodules:
//!
//! 1. [`scanner`]: find placeholders and note whether each sits between two
//!    `"` characters.
//! 2. [`serialize`]: turn the looked-up value into text suited to that
//!    position.
//! 3. [`renderer`]: stitch literal text and substitutions together, then parse.
//!
//! ```text
//! Template: {"name": "{{product.name}}", "tags": {{product.tags}}}
//! Context:  {"product": {"name": "Glow", "tags": ["a", "b"]}}
//! Text:     {"name": "Glow", "tags": ["a","b"]}
//! ```
//!
//! Placeholders meant to receive lists or objects must be left unquoted.
//!
//! ## Template Registry
//!
//! Named templates are stored in a [`TemplateRegistry`], filled from inline
//! strings or template directories, and rendered through a [`Renderer`].

pub mod registry;
pub mod renderer;
pub mod scanner;
pub mod serialize;

pub use registry::{
    walk_template_dir, ResolvedTemplate, TemplateFile, TemplateRegistry, TEMPLATE_EXTENSIONS,
};
pub use renderer::{assemble, render, render_serialize, to_pretty_json, RenderedDocument, Renderer};
pub use scanner::{placeholder_keys, scan, Placeholder, Placeholders, Quoting};
pub use serialize::substitution;
