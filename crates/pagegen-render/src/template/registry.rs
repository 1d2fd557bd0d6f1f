//! Named template storage.
//!
//! [`TemplateRegistry`] maps template names to their text. Templates come
//! from two sources:
//!
//! 1. Inline strings added with [`TemplateRegistry::add_inline`] (highest priority)
//! 2. Files found under directories added with [`TemplateRegistry::add_template_dir`]
//!
//! File templates resolve with or without their extension, so
//! `templates/product_template.json` answers to both `"product_template"` and
//! `"product_template.json"`. Nested directories use `/` in the name
//! (`"pages/faq"`).
//!
//! File content is read from disk on every lookup, so edits to a template are
//! picked up without rebuilding the registry.
//!
//! # Collisions
//!
//! - Same directory, different extensions: the higher-priority extension wins.
//! - Different directories, same name: [`RenderError::Collision`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = TemplateRegistry::new();
//! registry.add_template_dir("./templates")?;
//! registry.add_inline("override", "{\"title\": \"{{ product.name }}\"}");
//!
//! let text = registry.get_content("faq_template")?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RenderError, Result};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".json", ".json.tmpl"];

/// A template file discovered while walking a template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Resolution name without extension (e.g. "faq_template" or "pages/faq")
    pub name: String,
    /// Resolution name with extension (e.g. "faq_template.json")
    pub name_with_ext: String,
    /// Absolute path to the template file
    pub absolute_path: PathBuf,
    /// The template directory root this file belongs to
    pub source_dir: PathBuf,
}

impl TemplateFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Returns the extension priority (lower is higher priority).
    ///
    /// Returns `usize::MAX` if the extension is not recognized.
    pub fn extension_priority(&self) -> usize {
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(*ext))
            .unwrap_or(usize::MAX)
    }
}

/// Where a resolved template's text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Text held in memory.
    Inline(String),
    /// Text read from this file on demand.
    File(PathBuf),
}

/// Registry resolving template names to template text.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    inline: HashMap<String, String>,

    /// File templates, keyed by both extensionless and full name.
    files: HashMap<String, PathBuf>,

    /// name → (path, source_dir), for collision detection.
    sources: HashMap<String, (PathBuf, PathBuf)>,

    /// Registered directories, in registration order, for refresh.
    dirs: Vec<PathBuf>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an inline template. Inline templates shadow file templates of
    /// the same name; adding the same name twice keeps the latest text.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.inline.insert(name.into(), content.into());
    }

    /// Registers every template file under `path`, recursively.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateDir`] if `path` is not a directory and
    /// [`RenderError::Collision`] if a name is already provided by another
    /// directory.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let files = walk_template_dir(path)?;
        debug!(dir = %path.display(), files = files.len(), "registering template directory");
        self.add_from_files(files)?;
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Registers discovered template files.
    ///
    /// Files are processed in extension priority order so that, within one
    /// directory, `config.json` wins over `config.json.tmpl` for the name
    /// `"config"`. Both stay reachable by their full name.
    pub fn add_from_files(&mut self, files: Vec<TemplateFile>) -> Result<()> {
        let mut sorted_files = files;
        sorted_files.sort_by_key(|f| f.extension_priority());

        for file in sorted_files {
            if let Some((existing_path, existing_dir)) = self.sources.get(&file.name) {
                if existing_dir != &file.source_dir {
                    return Err(RenderError::Collision {
                        name: file.name,
                        existing: existing_path.clone(),
                        conflicting: file.absolute_path,
                    });
                }
                self.files
                    .insert(file.name_with_ext, file.absolute_path);
                continue;
            }

            self.sources.insert(
                file.name.clone(),
                (file.absolute_path.clone(), file.source_dir.clone()),
            );
            self.files
                .insert(file.name.clone(), file.absolute_path.clone());
            self.files.insert(file.name_with_ext, file.absolute_path);
        }

        Ok(())
    }

    /// Looks up a template by name, inline templates first.
    pub fn get(&self, name: &str) -> Result<ResolvedTemplate> {
        if let Some(content) = self.inline.get(name) {
            return Ok(ResolvedTemplate::Inline(content.clone()));
        }

        if let Some(path) = self.files.get(name) {
            return Ok(ResolvedTemplate::File(path.clone()));
        }

        Err(RenderError::TemplateNotFound {
            name: name.to_string(),
        })
    }

    /// Returns a template's text, reading it from disk if it is a file.
    pub fn get_content(&self, name: &str) -> Result<String> {
        match self.get(name)? {
            ResolvedTemplate::Inline(content) => Ok(content),
            ResolvedTemplate::File(path) => {
                std::fs::read_to_string(&path).map_err(|source| RenderError::TemplateRead {
                    path,
                    source,
                })
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inline.contains_key(name) || self.files.contains_key(name)
    }

    /// Re-walks all registered directories, picking up added or removed files.
    pub fn refresh(&mut self) -> Result<()> {
        self.files.clear();
        self.sources.clear();

        for dir in self.dirs.clone() {
            let files = walk_template_dir(&dir)?;
            self.add_from_files(files)?;
        }

        Ok(())
    }

    /// Returns the number of registered names.
    ///
    /// File templates count twice: once with and once without extension.
    pub fn len(&self) -> usize {
        self.inline.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.files.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inline
            .keys()
            .map(|s| s.as_str())
            .chain(self.files.keys().map(|s| s.as_str()))
    }

    pub fn clear(&mut self) {
        self.inline.clear();
        self.files.clear();
        self.sources.clear();
        self.dirs.clear();
    }
}

/// Walks a template directory and collects files with a recognized extension.
///
/// # Errors
///
/// Returns [`RenderError::TemplateDir`] if `root` is not a directory and
/// [`RenderError::TemplateRead`] if a subdirectory cannot be listed.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(RenderError::TemplateDir {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    walk_recursive(root, root, &mut files)?;
    Ok(files)
}

fn walk_recursive(root: &Path, dir: &Path, files: &mut Vec<TemplateFile>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|source| RenderError::TemplateRead {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| RenderError::TemplateRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            walk_recursive(root, &path, files)?;
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let name_with_ext = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let Some(ext) = TEMPLATE_EXTENSIONS
            .iter()
            .find(|ext| name_with_ext.ends_with(**ext))
        else {
            continue;
        };
        let name = name_with_ext[..name_with_ext.len() - ext.len()].to_string();

        files.push(TemplateFile::new(name, name_with_ext, path, root));
    }

    Ok(())
}
