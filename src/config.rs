//! Read-only translator settings.
//!
//! An [`AxiomsConfig`] is built once (default, TOML string or TOML file) and
//! then shared by reference with every translator. Nothing in the core mutates
//! it.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::model::EntityKind;

/// Which combinations of entity kinds one IRI may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunningMode {
    /// One entity kind per IRI.
    Strict,
    /// OWL2 DL punning: a class may double as an individual or property, but
    /// class/datatype and any two property kinds are exclusive.
    Dl2,
    /// Anything goes.
    #[default]
    Lax,
}

impl PunningMode {
    /// Whether an IRI declared with all of `kinds` is legal under this mode.
    pub fn allows(self, kinds: &BTreeSet<EntityKind>) -> bool {
        match self {
            PunningMode::Lax => true,
            PunningMode::Strict => kinds.len() <= 1,
            PunningMode::Dl2 => {
                let has = |k: EntityKind| kinds.contains(&k);
                let properties = [
                    EntityKind::ObjectProperty,
                    EntityKind::DataProperty,
                    EntityKind::AnnotationProperty,
                ]
                .into_iter()
                .filter(|k| has(*k))
                .count();
                !(has(EntityKind::Class) && has(EntityKind::Datatype)) && properties <= 1
            }
        }
    }
}

impl std::fmt::Display for PunningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PunningMode::Strict => write!(f, "strict"),
            PunningMode::Dl2 => write!(f, "dl2"),
            PunningMode::Lax => write!(f, "lax"),
        }
    }
}

/// Settings consulted by translators on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxiomsConfig {
    /// Read `Declaration` axioms from `rdf:type` triples.
    #[serde(default = "default_true")]
    pub allow_read_declarations: bool,
    /// Read annotation assertions and annotation-property axioms.
    #[serde(default = "default_true")]
    pub load_annotation_axioms: bool,
    /// One statement per `owl:Axiom` reification instead of merging them.
    #[serde(default)]
    pub split_axiom_annotations: bool,
    /// Skip statements whose construction fails instead of surfacing the error.
    #[serde(default)]
    pub ignore_read_errors: bool,
    /// Entity-kind combinations a single IRI may carry.
    #[serde(default)]
    pub punning: PunningMode,
}

fn default_true() -> bool {
    true
}

impl Default for AxiomsConfig {
    fn default() -> Self {
        Self {
            allow_read_declarations: default_true(),
            load_annotation_axioms: default_true(),
            split_axiom_annotations: false,
            ignore_read_errors: false,
            punning: PunningMode::default(),
        }
    }
}

impl AxiomsConfig {
    /// Default settings with a different punning mode.
    pub fn with_punning(punning: PunningMode) -> Self {
        Self {
            punning,
            ..Default::default()
        }
    }

    /// Parse from a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &[EntityKind]) -> BTreeSet<EntityKind> {
        list.iter().copied().collect()
    }

    #[test]
    fn defaults_honour_declarations_and_annotations() {
        let config = AxiomsConfig::default();
        assert!(config.allow_read_declarations);
        assert!(config.load_annotation_axioms);
        assert!(!config.split_axiom_annotations);
        assert!(!config.ignore_read_errors);
        assert_eq!(config.punning, PunningMode::Lax);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = AxiomsConfig::from_toml_str("punning = \"strict\"\n").unwrap();
        assert_eq!(config.punning, PunningMode::Strict);
        assert!(config.allow_read_declarations);
    }

    #[test]
    fn unknown_punning_mode_is_rejected() {
        let err = AxiomsConfig::from_toml_str("punning = \"sloppy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn strict_allows_one_kind() {
        assert!(PunningMode::Strict.allows(&kinds(&[EntityKind::Class])));
        assert!(!PunningMode::Strict.allows(&kinds(&[
            EntityKind::Class,
            EntityKind::NamedIndividual
        ])));
    }

    #[test]
    fn dl2_permits_class_individual_punning() {
        let mode = PunningMode::Dl2;
        assert!(mode.allows(&kinds(&[EntityKind::Class, EntityKind::NamedIndividual])));
        assert!(mode.allows(&kinds(&[EntityKind::Class, EntityKind::ObjectProperty])));
        assert!(!mode.allows(&kinds(&[EntityKind::Class, EntityKind::Datatype])));
        assert!(!mode.allows(&kinds(&[
            EntityKind::ObjectProperty,
            EntityKind::DataProperty
        ])));
        assert!(!mode.allows(&kinds(&[
            EntityKind::DataProperty,
            EntityKind::AnnotationProperty
        ])));
    }

    #[test]
    fn lax_allows_everything() {
        assert!(PunningMode::Lax.allows(&kinds(&[
            EntityKind::Class,
            EntityKind::Datatype,
            EntityKind::ObjectProperty,
            EntityKind::DataProperty
        ])));
    }
}
