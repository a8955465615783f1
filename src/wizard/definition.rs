use crate::wizard::PageId;
use crate::wizard::navigator::WizardNavigator;
use crate::wizard::page_registry::PageRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Declarative wizard chain, loadable from YAML or JSON. Pages created this
/// way carry the default always-true validator; callers that need gating
/// register their pages through the builder instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardDefinition {
    pub pages: Vec<PageDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDefinition {
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug)]
pub enum DefinitionError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Empty,
    DuplicateUrl(String),
    UnknownNext { page: String, next: String },
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(err) => write!(f, "invalid wizard yaml: {err}"),
            Self::Json(err) => write!(f, "invalid wizard json: {err}"),
            Self::Empty => write!(f, "wizard definition has no pages"),
            Self::DuplicateUrl(url) => write!(f, "page '{url}' is defined twice"),
            Self::UnknownNext { page, next } => {
                write!(f, "page '{page}' points at undefined page '{next}'")
            }
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<serde_json::Error> for DefinitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl WizardDefinition {
    pub fn from_yaml(source: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_yaml::from_str(source)?;
        definition.check()?;
        Ok(definition)
    }

    pub fn from_json(source: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(source)?;
        definition.check()?;
        Ok(definition)
    }

    /// Builds a navigator rooted at the first defined page.
    pub fn into_navigator(self) -> Result<WizardNavigator, DefinitionError> {
        self.check()?;
        let root = self.pages[0].url.clone();
        let mut registry = PageRegistry::new();
        for page in self.pages {
            registry.get_or_create(page.url, page.name, page.next.map(PageId::new), None);
        }
        // check() guarantees the root is registered.
        WizardNavigator::new(registry, &root).ok_or(DefinitionError::Empty)
    }

    fn check(&self) -> Result<(), DefinitionError> {
        if self.pages.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.url.as_str()) {
                return Err(DefinitionError::DuplicateUrl(page.url.clone()));
            }
        }

        for page in &self.pages {
            if let Some(next) = page.next.as_deref() {
                if !next.is_empty() && !seen.contains(next) {
                    return Err(DefinitionError::UnknownNext {
                        page: page.url.clone(),
                        next: next.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DefinitionError, WizardDefinition};

    const CHAIN_YAML: &str = "\
pages:
  - url: collections
    name: Name your collection
    next: fields
  - url: fields
    name: Define fields
    next: review
  - url: review
    name: Review
";

    #[test]
    fn yaml_chain_builds_a_navigator() {
        let definition = WizardDefinition::from_yaml(CHAIN_YAML).expect("yaml parses");
        let nav = definition.into_navigator().expect("chain builds");

        assert_eq!(nav.current_page().url().as_str(), "collections");
        let pages = nav.page_list();
        let urls: Vec<&str> = pages.iter().map(|page| page.url().as_str()).collect();
        assert_eq!(urls, ["collections", "fields", "review"]);
    }

    #[test]
    fn json_definition_parses() {
        let source = r#"{"pages": [{"url": "a", "name": "A"}]}"#;
        let definition = WizardDefinition::from_json(source).expect("json parses");
        assert_eq!(definition.pages.len(), 1);
        assert!(definition.pages[0].next.is_none());
    }

    #[test]
    fn duplicate_urls_are_rejected() {
        let source = "pages:\n  - {url: a, name: A}\n  - {url: a, name: Again}\n";
        let err = WizardDefinition::from_yaml(source).expect_err("duplicate url");
        assert!(matches!(err, DefinitionError::DuplicateUrl(url) if url == "a"));
    }

    #[test]
    fn dangling_next_is_rejected() {
        let source = "pages:\n  - {url: a, name: A, next: ghost}\n";
        let err = WizardDefinition::from_yaml(source).expect_err("dangling next");
        assert!(matches!(
            err,
            DefinitionError::UnknownNext { page, next } if page == "a" && next == "ghost"
        ));
    }

    #[test]
    fn empty_definition_is_rejected() {
        let err = WizardDefinition::from_yaml("pages: []\n").expect_err("no pages");
        assert!(matches!(err, DefinitionError::Empty));
    }
}
