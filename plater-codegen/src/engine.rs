//! Template engine wrapper.
//!
//! Templates are discovered once at start-up from a directory; each
//! file's base name before the first `.` becomes its lookup key, so
//! `entity.ts.j2` registers as `entity`.

use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::error::{Error, Result};

/// File extension that marks a template file.
const TEMPLATE_EXT: &str = ".j2";

/// A name-keyed lookup of loaded templates.
///
/// Two helper transforms are registered for the templates: `lower`
/// (lower-casing) and `plural` (English pluralization).
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
    keys: Vec<String>,
}

impl TemplateEngine {
    /// Load every template file from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let mut env = Environment::new();
        env.add_filter("lower", |s: String| s.to_lowercase());
        env.add_filter("plural", |s: String| plater_core::pluralize(&s));

        let mut keys = Vec::new();
        let entries = fs::read_dir(dir).map_err(|e| Error::template_dir(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::template_dir(dir, e))?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !file_name.ends_with(TEMPLATE_EXT) {
                continue;
            }

            let key = file_name
                .split('.')
                .next()
                .unwrap_or(file_name)
                .to_string();
            let source = fs::read_to_string(&path).map_err(|e| Error::template_dir(&path, e))?;
            env.add_template_owned(key.clone(), source)
                .map_err(|e| Error::render(&key, e))?;
            keys.push(key);
        }
        keys.sort();

        Ok(Self { env, keys })
    }

    /// The sorted lookup keys of every loaded template.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Render the template registered under `key` with the given
    /// context. Fails when the key is absent or substitution fails.
    pub fn render<S: Serialize>(&self, key: &str, context: S) -> Result<String> {
        let template = self.env.get_template(key).map_err(|_| Error::TemplateNotFound {
            key: key.to_string(),
            available: self.keys.join(", "),
        })?;
        template.render(context).map_err(|e| Error::render(key, e))
    }
}
