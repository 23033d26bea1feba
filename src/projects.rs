use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

const REGISTRY_FILE: &str = "projects.json";

static GLOBAL_REGISTRY: LazyLock<Result<Vec<ProjectRecord>, RegistryError>> =
    LazyLock::new(load_registry);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub year: String,
    pub description: String,
    pub image: String,
    pub link: Url,
    /// Always opened in a new browsing context, never in the in-page viewer.
    #[serde(default)]
    pub external_only: bool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Project registry not found")]
    NotFound,
    #[error("Couldn't parse project registry: {0}")]
    Malformed(String),
}

/// The ordered project list, front to back as displayed.
pub fn projects() -> Result<&'static [ProjectRecord], RegistryError> {
    GLOBAL_REGISTRY
        .as_deref()
        .map_err(|e| e.clone())
}

fn load_registry() -> Result<Vec<ProjectRecord>, RegistryError> {
    let file = Content::get(REGISTRY_FILE).ok_or(RegistryError::NotFound)?;
    let records = parse_registry(&file.data)?;
    log::debug!("loaded {} projects", records.len());
    Ok(records)
}

pub fn parse_registry(bytes: &[u8]) -> Result<Vec<ProjectRecord>, RegistryError> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_registry() {
        let projects = projects().expect("embedded registry should parse");
        assert_eq!(projects.len(), 6);
        assert_eq!(projects[0].title, "Food For Thought");
        assert_eq!(projects[5].title, "Louis Vuitton x Friday");

        let external = projects
            .iter()
            .filter(|p| p.external_only)
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["Urban Piper"]);
    }

    #[test]
    fn test_external_only_defaults_to_false() {
        let json = br#"[{
            "title": "Roots",
            "year": "2022",
            "description": "Logo",
            "image": "/images/roots.jpg",
            "link": "https://example.com/roots"
        }]"#;
        let records = parse_registry(json).unwrap();
        assert!(!records[0].external_only);
        assert_eq!(records[0].link.host_str(), Some("example.com"));
    }

    #[test]
    fn test_malformed_registry() {
        let bad_url = br#"[{
            "title": "Roots",
            "year": "2022",
            "description": "Logo",
            "image": "/images/roots.jpg",
            "link": "not a url"
        }]"#;
        assert!(matches!(
            parse_registry(bad_url),
            Err(RegistryError::Malformed(_))
        ));
        assert!(matches!(
            parse_registry(b"{}"),
            Err(RegistryError::Malformed(_))
        ));
    }
}
