//! Template rendering into JSON documents.
//!
//! Rendering is a single left-to-right pass: the literal text between
//! placeholders is copied into a buffer, each placeholder is replaced by its
//! [`substitution`], and the finished buffer is parsed as JSON. The result is
//! either the whole document or a [`RenderError::Render`] carrying the
//! assembled text; there is no partial output.
//!
//! ```rust
//! use pagegen_render::{render, Context};
//! use serde_json::json;
//!
//! let template = r#"{"name": "{{product.name}}", "tags": {{product.tags}}, "missing": "{{x.y}}"}"#;
//! let ctx = Context::from(json!({"product": {"name": "Glow", "tags": ["a", "b"]}}));
//!
//! let page = render(template, &ctx).unwrap();
//! assert_eq!(page, json!({"name": "Glow", "tags": ["a", "b"], "missing": ""}));
//! ```

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use super::registry::TemplateRegistry;
use super::scanner::scan;
use super::serialize::substitution;
use crate::context::Context;
use crate::error::{RenderError, Result};

/// A rendered page: the parsed JSON value produced from a template.
pub type RenderedDocument = Value;

/// Substitutes every placeholder in `template` and returns the raw text,
/// without checking that it is valid JSON.
pub fn assemble(template: &str, context: &Context) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for placeholder in scan(template) {
        out.push_str(&template[last..placeholder.span.start]);

        let quoting = placeholder.quoting();
        let resolved = context.resolve(placeholder.key);
        trace!(
            key = placeholder.key,
            ?quoting,
            missing = resolved.is_none(),
            "substituting placeholder"
        );
        out.push_str(&substitution(resolved, quoting));

        last = placeholder.span.end;
    }

    out.push_str(&template[last..]);
    out
}

/// Renders `template` against `context` and parses the result as JSON.
///
/// # Errors
///
/// Returns [`RenderError::Render`] if the assembled text is not valid JSON,
/// for example when a list or object is substituted inside a quoted slot.
pub fn render(template: &str, context: &Context) -> Result<RenderedDocument> {
    debug!(template_len = template.len(), "rendering template");
    let text = assemble(template, context);

    match serde_json::from_str::<RenderedDocument>(&text) {
        Ok(document) => Ok(document),
        Err(source) => {
            debug!(error = %source, "rendered template is not valid JSON");
            Err(RenderError::Render { text, source })
        }
    }
}

/// Renders `template` with a context built from any serializable data.
pub fn render_serialize<T: Serialize + ?Sized>(
    template: &str,
    data: &T,
) -> Result<RenderedDocument> {
    let context = Context::from_serialize(data)?;
    render(template, &context)
}

/// Formats a rendered document with two-space indentation.
///
/// Non-ASCII text is kept as UTF-8 rather than escaped.
pub fn to_pretty_json(document: &RenderedDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// A renderer with named templates.
///
/// Templates are looked up in a [`TemplateRegistry`] on every render, so file
/// templates reflect their current content on disk.
///
/// ```rust
/// use pagegen_render::{Context, Renderer};
/// use serde_json::json;
///
/// let mut renderer = Renderer::new();
/// renderer.add_template("faq", r#"{"title": "{{ product.name }}", "items": {{ faqs }}}"#);
///
/// let ctx = Context::from(json!({"product": {"name": "Glow"}, "faqs": []}));
/// let page = renderer.render_named("faq", &ctx).unwrap();
/// assert_eq!(page["title"], "Glow");
/// ```
#[derive(Debug, Default)]
pub struct Renderer {
    registry: TemplateRegistry,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer over an existing registry.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Registers an inline template, replacing any template of the same name.
    pub fn add_template(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.registry.add_inline(name, template);
    }

    /// Registers every template file found under `path`.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.registry.add_template_dir(path)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.registry
    }

    /// Renders the template registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateNotFound`] for an unknown name, in
    /// addition to the errors of [`render`].
    pub fn render_named(&self, name: &str, context: &Context) -> Result<RenderedDocument> {
        let template = self.registry.get_content(name)?;
        debug!(template = name, "rendering named template");
        render(&template, context)
    }

    /// Renders an unregistered template string.
    pub fn render_template(&self, template: &str, context: &Context) -> Result<RenderedDocument> {
        render(template, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(value: Value) -> Context {
        Context::from(value)
    }

    #[test]
    fn test_plain_template() {
        let doc = render("{\"a\": [1, 2, {\"b\": null}]}", &Context::new()).unwrap();
        assert_eq!(doc, json!({"a": [1, 2, {"b": null}]}));
    }

    #[test]
    fn test_assemble_preserves_literal_text() {
        let text = assemble("{ \"n\" :  {{ n }} }", &ctx(json!({"n": 7})));
        assert_eq!(text, "{ \"n\" :  7 }");
    }

    #[test]
    fn test_missing_keys() {
        let doc = render("{\"q\": \"{{x}}\", \"u\": {{x}}}", &Context::new()).unwrap();
        assert_eq!(doc, json!({"q": "", "u": null}));
    }

    #[test]
    fn test_nested_number() {
        let c = ctx(json!({"a": {"b": {"c": 42}}}));
        assert_eq!(render("{{a.b.c}}", &c).unwrap(), json!(42));
        assert_eq!(render("\"{{a.b.c}}\"", &c).unwrap(), json!("42"));
    }

    #[test]
    fn test_list_of_strings() {
        let c = ctx(json!({"tags": ["z", "a", "m"]}));
        assert_eq!(render("{{tags}}", &c).unwrap(), json!(["z", "a", "m"]));
    }

    #[test]
    fn test_object_value() {
        let c = ctx(json!({"p": {"name": "Glow", "price": 699}}));
        let doc = render("{\"product\": {{p}}}", &c).unwrap();
        assert_eq!(doc, json!({"product": {"name": "Glow", "price": 699}}));
    }

    #[test]
    fn test_placeholder_inside_longer_string() {
        let c = ctx(json!({"name": "Glow"}));
        // Only one neighbor is a quote, so the value keeps its own quotes.
        let err = render("{\"title\": \"About {{name}}\"}", &c).unwrap_err();
        assert_eq!(
            err.assembled_text(),
            Some("{\"title\": \"About \"Glow\"\"}")
        );
    }

    #[test]
    fn test_escaping_inside_quoted_slot() {
        let c = ctx(json!({"s": "line1\nsaid \"ok\""}));
        let doc = render("{\"s\": \"{{s}}\"}", &c).unwrap();
        assert_eq!(doc, json!({"s": "line1\nsaid \"ok\""}));
    }

    #[test]
    fn test_composite_in_quoted_slot_fails() {
        let c = ctx(json!({"product": {"tags": ["a", "b"]}}));
        let err = render("{\"tags\": \"{{product.tags}}\"}", &c).unwrap_err();

        assert!(matches!(err, RenderError::Render { .. }));
        assert_eq!(err.assembled_text(), Some("{\"tags\": \"[\"a\",\"b\"]\"}"));
    }

    #[test]
    fn test_malformed_template_fails() {
        let err = render("{\"a\": ", &Context::new()).unwrap_err();
        assert_eq!(err.assembled_text(), Some("{\"a\": "));
    }

    #[test]
    fn test_unrecognized_tokens_stay_literal() {
        let c = ctx(json!({"a": 1}));
        let text = assemble("\"{{ a-b }}\"", &c);
        assert_eq!(text, "\"{{ a-b }}\"");
        assert_eq!(render("\"{{ a-b }}\"", &c).unwrap(), json!("{{ a-b }}"));
    }

    #[test]
    fn test_render_serialize() {
        #[derive(Serialize)]
        struct Page {
            title: &'static str,
            count: u32,
        }

        let doc = render_serialize(
            "{\"t\": \"{{title}}\", \"n\": {{count}}}",
            &Page { title: "FAQ", count: 5 },
        )
        .unwrap();
        assert_eq!(doc, json!({"t": "FAQ", "n": 5}));
    }

    #[test]
    fn test_to_pretty_json() {
        let out = to_pretty_json(&json!({"price": "₹699", "tags": ["a"]})).unwrap();
        assert_eq!(
            out,
            "{\n  \"price\": \"₹699\",\n  \"tags\": [\n    \"a\"\n  ]\n}"
        );
    }

    #[test]
    fn test_renderer_named() {
        let mut renderer = Renderer::new();
        renderer.add_template("page", "{\"name\": \"{{p.name}}\"}");

        assert!(renderer.has_template("page"));
        let doc = renderer
            .render_named("page", &ctx(json!({"p": {"name": "Glow"}})))
            .unwrap();
        assert_eq!(doc, json!({"name": "Glow"}));
    }

    #[test]
    fn test_renderer_named_not_found() {
        let renderer = Renderer::new();
        let err = renderer.render_named("missing", &Context::new()).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_renderer_template_string() {
        let renderer = Renderer::new();
        let doc = renderer
            .render_template("[{{a}}, \"{{b}}\"]", &ctx(json!({"a": true, "b": 1.5})))
            .unwrap();
        assert_eq!(doc, json!([true, "1.5"]));
    }

    #[test]
    fn test_pretty_json_keeps_template_key_order() {
        let c = ctx(json!({"p": {"name": "Glow", "price": "₹699", "b": {"zeta": 1, "alpha": 2}}}));
        let doc = render(
            "{\"title\": \"{{p.name}}\", \"price\": \"{{p.price}}\", \"benefits\": {{p.b}}}",
            &c,
        )
        .unwrap();

        assert_eq!(
            to_pretty_json(&doc).unwrap(),
            "{\n  \"title\": \"Glow\",\n  \"price\": \"₹699\",\n  \"benefits\": {\n    \"zeta\": 1,\n    \"alpha\": 2\n  }\n}"
        );
    }

    #[test]
    fn test_composite_substitution_keeps_context_order() {
        let c = ctx(json!({"b": {"zeta": 1, "alpha": 2}}));
        assert_eq!(assemble("{{b}}", &c), "{\"zeta\":1,\"alpha\":2}");
    }

    #[test]
    fn test_renderer_with_registry() {
        let mut registry = TemplateRegistry::new();
        registry.add_inline("product", "{\"name\": \"{{p.name}}\"}");

        let mut renderer = Renderer::with_registry(registry);
        assert!(renderer.registry().contains("product"));

        renderer
            .registry_mut()
            .add_inline("faq", "{\"faqs\": {{faqs}}}");
        assert!(renderer.has_template("faq"));

        let doc = renderer
            .render_named("faq", &ctx(json!({"faqs": ["q1"]})))
            .unwrap();
        assert_eq!(doc, json!({"faqs": ["q1"]}));
        assert_eq!(renderer.registry().len(), 2);
    }
}
