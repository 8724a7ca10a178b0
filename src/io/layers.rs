//! Layer path templates with `{Feature}` placeholders

use crate::io::configuration::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::io::error::{Result, TraitError, WithPath, file_system, invalid_parameter};
use crate::io::tokens::Token;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Image path whose `{Feature}` placeholders are filled from a token
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LayerTemplate(String);

impl LayerTemplate {
    /// Wrap a raw template string
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute every placeholder with the token's value for that feature
    ///
    /// Braces that don't enclose a non-empty name are copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlaceholder` if the token has no value for a named
    /// feature
    pub fn render(&self, token: &Token) -> Result<String> {
        let mut rendered = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some((head, tail)) = rest.split_once(PLACEHOLDER_OPEN) {
            rendered.push_str(head);

            let Some((name, after)) = tail.split_once(PLACEHOLDER_CLOSE) else {
                rendered.push(PLACEHOLDER_OPEN);
                rendered.push_str(tail);
                return Ok(rendered);
            };

            if name.is_empty() || name.contains(PLACEHOLDER_OPEN) {
                rendered.push(PLACEHOLDER_OPEN);
                rest = tail;
                continue;
            }

            let value = token
                .get(name)
                .ok_or_else(|| TraitError::UnknownPlaceholder {
                    template: self.0.clone(),
                    placeholder: name.to_string(),
                })?;
            rendered.push_str(value);
            rest = after;
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    /// Render the template and resolve it against `base`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlaceholder` if rendering fails
    pub fn resolve(&self, token: &Token, base: &Path) -> Result<PathBuf> {
        Ok(base.join(self.render(token)?))
    }
}

/// Read the ordered layer list, bottom layer first
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a JSON array of strings
/// - The list is empty
pub fn load_layers(path: &Path) -> Result<Vec<LayerTemplate>> {
    let file = File::open(path).map_err(|e| file_system(path, "open layer file", e))?;
    let layers =
        serde_json::from_reader::<_, Vec<LayerTemplate>>(BufReader::new(file)).with_path(path)?;

    if layers.is_empty() {
        return Err(invalid_parameter(
            "layers",
            &path.display(),
            &"layer list must contain at least a base layer",
        ));
    }

    Ok(layers)
}
