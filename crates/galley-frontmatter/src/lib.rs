//! Front-matter extraction for documentation sources.
//!
//! Documentation sources begin with a delimited metadata block (`---` fences
//! around YAML key/value pairs) followed by the body. The verification
//! harness depends on the `id` field: it names the HTML document the
//! generator is expected to emit for the source.

use serde::Deserialize;

/// Parsed front-matter from a documentation source.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Document identifier; the generator emits `{id}.html` for this source.
    pub id: String,

    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Label shown in the sidebar instead of the title
    #[serde(default)]
    pub sidebar_label: Option<String>,
}

/// Extract front-matter from a document.
///
/// Returns the parsed front-matter and the body following the block. A
/// document without a front-matter block is an error: there is no identity
/// to verify output against.
pub fn extract_frontmatter(source: &str) -> Result<(Frontmatter, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Err(FrontmatterError::Missing);
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let body = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((frontmatter, body.trim_start()))
}

/// Errors that can occur when parsing front-matter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Document has no front-matter block")]
    Missing,

    #[error("Unclosed front-matter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in front-matter: {0}")]
    InvalidYaml(String),
}
