//! Network document loading and validation
//!
//! Network documents are JSON or YAML:
//!
//! ```yaml
//! programmers:
//!   - name: Bill
//!     recommendations: [Jason, Jill]
//!     skills: [Ruby, Perl, PHP]
//! ```
//!
//! Every field is optional at the parsing stage so that a missing field is
//! reported by [`NetworkValidator`] with the offending programmer, instead of
//! as a generic parse failure.

use super::programmer::Programmer;
use super::store::NetworkStore;
use crate::config::{ConfigError, ConfigResult};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A programmer entry as written in a network document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgrammerRecord {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Recommendations")]
    pub recommendations: Option<Vec<String>>,
    #[serde(alias = "Skills")]
    pub skills: Option<Vec<String>>,
}

/// A whole network document, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkDocument {
    #[serde(alias = "Programmer", alias = "Programmers")]
    pub programmers: Option<Vec<ProgrammerRecord>>,
}

impl NetworkDocument {
    pub fn parse(text: &str, format: DocumentFormat) -> ConfigResult<Self> {
        let document: NetworkDocument = match format {
            DocumentFormat::Json => serde_json::from_str(text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(document)
    }

    /// Validate and convert into a queryable store
    pub fn into_store(self) -> ConfigResult<NetworkStore> {
        NetworkValidator::validate(&self)?;

        let programmers = self
            .programmers
            .unwrap_or_default()
            .into_iter()
            .map(|record| {
                Programmer::new(
                    record.name.unwrap_or_default(),
                    record.recommendations.unwrap_or_default(),
                    record.skills.unwrap_or_default(),
                )
            });

        Ok(NetworkStore::from_programmers(programmers))
    }
}

/// Checks that a network document describes a well-formed network
pub struct NetworkValidator;

impl NetworkValidator {
    /// Each rule is checked across the whole document before the next one
    pub fn validate(document: &NetworkDocument) -> ConfigResult<()> {
        let programmers = document
            .programmers
            .as_ref()
            .ok_or(ConfigError::NoProgrammers)?;

        if let Some(position) = programmers.iter().position(|p| p.name.is_none()) {
            return Err(ConfigError::MissingName(position));
        }

        if let Some(p) = programmers.iter().find(|p| p.recommendations.is_none()) {
            return Err(ConfigError::MissingRecommendations(name_of(p)));
        }

        if let Some(p) = programmers.iter().find(|p| p.skills.is_none()) {
            return Err(ConfigError::MissingSkills(name_of(p)));
        }

        let mut names = FxHashSet::default();
        for p in programmers {
            let name = name_of(p);
            if !names.insert(name.clone()) {
                return Err(ConfigError::DuplicateProgrammer(name));
            }
        }

        for p in programmers {
            for target in p.recommendations.iter().flatten() {
                if !names.contains(target) {
                    return Err(ConfigError::UnknownRecommendation {
                        programmer: name_of(p),
                        target: target.clone(),
                    });
                }
            }
        }

        debug!(programmers = programmers.len(), "network document validated");
        Ok(())
    }
}

fn name_of(record: &ProgrammerRecord) -> String {
    record.name.clone().unwrap_or_default()
}

/// Parse and validate a network document held in memory
pub fn parse_network(text: &str, format: DocumentFormat) -> ConfigResult<NetworkStore> {
    NetworkDocument::parse(text, format)?.into_store()
}

/// Read, parse and validate a network document from disk
pub fn load_network(path: impl AsRef<Path>) -> ConfigResult<NetworkStore> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let store = parse_network(&text, format)?;

    info!(
        path = %path.display(),
        programmers = store.len(),
        recommendations = store.recommendation_count(),
        "loaded network"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkRepository;
    use std::io::Write;
    use tempfile::Builder;

    const YAML_NETWORK: &str = r#"
programmers:
  - name: Bill
    recommendations: [Jason]
    skills: [Ruby, Perl]
  - name: Jason
    recommendations: []
    skills: [Java]
"#;

    fn json(text: &str) -> ConfigResult<NetworkStore> {
        parse_network(text, DocumentFormat::Json)
    }

    #[test]
    fn test_parse_yaml() {
        let store = parse_network(YAML_NETWORK, DocumentFormat::Yaml).unwrap();

        assert_eq!(store.len(), 2);
        let bill = store.get_by_id(&"Bill".into()).unwrap();
        assert_eq!(bill.skill_index("Perl"), Some(2));
    }

    #[test]
    fn test_parse_json_with_document_casing() {
        let store = json(
            r#"{"Programmer": [{"Name": "Nick", "Recommendations": [], "Skills": ["C#"]}]}"#,
        )
        .unwrap();

        assert!(store.contains(&"Nick".into()));
    }

    #[test]
    fn test_missing_programmer_list() {
        assert!(matches!(json("{}"), Err(ConfigError::NoProgrammers)));
    }

    #[test]
    fn test_missing_name() {
        let err = json(r#"{"programmers": [{"recommendations": [], "skills": []}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingName(0)));
    }

    #[test]
    fn test_missing_recommendations() {
        let err = json(r#"{"programmers": [{"name": "Bill", "skills": []}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRecommendations(name) if name == "Bill"));
    }

    #[test]
    fn test_missing_skills() {
        let err = json(r#"{"programmers": [{"name": "Bill", "recommendations": []}]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSkills(name) if name == "Bill"));
    }

    #[test]
    fn test_names_checked_before_lists() {
        let err = json(
            r#"{"programmers": [{"name": "Bill"}, {"recommendations": [], "skills": []}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingName(1)));
    }

    #[test]
    fn test_duplicate_programmer() {
        let err = json(
            r#"{"programmers": [
                {"name": "Bill", "recommendations": [], "skills": []},
                {"name": "Bill", "recommendations": [], "skills": []}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateProgrammer(name) if name == "Bill"));
    }

    #[test]
    fn test_unknown_recommendation() {
        let err = json(r#"{"programmers": [{"name": "Bill", "recommendations": ["Ghost"], "skills": []}]}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Programmer Bill recommends unknown programmer Ghost"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("n.json")).unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("n.YML")).unwrap(), DocumentFormat::Yaml);
        assert!(matches!(
            DocumentFormat::from_path(Path::new("n.xml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_network_from_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML_NETWORK.as_bytes()).unwrap();

        let store = load_network(file.path()).unwrap();
        assert_eq!(store.recommendation_count(), 1);
    }

    #[test]
    fn test_load_network_missing_file() {
        assert!(matches!(
            load_network("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
