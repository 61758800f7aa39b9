use serde::Deserialize;

use super::tables;
use crate::error::Error;
use crate::perception::PerceptionOptions;

/// Optional atom feature blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomFeatureOptions {
    /// Append the atom stereo parity one-hot.
    #[serde(default = "default_true")]
    pub include_stereo: bool,
    /// Append the implicit hydrogen count one-hot.
    #[serde(default = "default_true")]
    pub include_implicit_hydrogens: bool,
}

impl Default for AtomFeatureOptions {
    fn default() -> Self {
        Self {
            include_stereo: true,
            include_implicit_hydrogens: true,
        }
    }
}

impl AtomFeatureOptions {
    /// Length of every atom feature vector under these options.
    pub fn feature_len(&self) -> usize {
        let mut len = tables::ELEMENTS.len()
            + tables::DEGREES.len()
            + tables::CHARGES.len()
            + 2
            + 3;
        if self.include_stereo {
            len += tables::ATOM_PARITIES.len();
        }
        if self.include_implicit_hydrogens {
            len += tables::HYDROGEN_COUNTS.len();
        }
        len
    }
}

/// Optional bond feature blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondFeatureOptions {
    /// Append the bond stereo parity one-hot.
    #[serde(default = "default_true")]
    pub include_stereo: bool,
}

impl Default for BondFeatureOptions {
    fn default() -> Self {
        Self {
            include_stereo: true,
        }
    }
}

impl BondFeatureOptions {
    /// Length of every bond feature vector under these options.
    pub fn feature_len(&self) -> usize {
        let len = tables::BOND_ORDERS.len() + 1 + 2;
        if self.include_stereo {
            len + tables::BOND_PARITIES.len()
        } else {
            len
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for turning structures into graph records.
///
/// Every section and field is optional in TOML; missing values take their
/// defaults.
///
/// ```toml
/// [atom]
/// include_stereo = true
/// include_implicit_hydrogens = false
///
/// [bond]
/// include_stereo = false
///
/// [perception]
/// explicit_hydrogens = true
/// perceive_aromaticity = true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    pub atom: AtomFeatureOptions,
    pub bond: BondFeatureOptions,
    pub perception: PerceptionOptions,
}

impl FeatureConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML or names
    /// an unknown key.
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        Ok(toml::from_str(document)?)
    }

    pub fn atom_feature_len(&self) -> usize {
        self.atom.feature_len()
    }

    pub fn bond_feature_len(&self) -> usize {
        self.bond.feature_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lengths() {
        let config = FeatureConfig::default();
        assert_eq!(config.atom_feature_len(), 37);
        assert_eq!(config.bond_feature_len(), 10);
    }

    #[test]
    fn lengths_without_optional_blocks() {
        let atom = AtomFeatureOptions {
            include_stereo: false,
            include_implicit_hydrogens: false,
        };
        assert_eq!(atom.feature_len(), 28);

        let atom = AtomFeatureOptions {
            include_stereo: false,
            include_implicit_hydrogens: true,
        };
        assert_eq!(atom.feature_len(), 33);

        let bond = BondFeatureOptions {
            include_stereo: false,
        };
        assert_eq!(bond.feature_len(), 6);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = FeatureConfig::from_toml("").unwrap();
        assert_eq!(config, FeatureConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = FeatureConfig::from_toml(
            r#"
            [atom]
            include_implicit_hydrogens = false

            [perception]
            explicit_hydrogens = false
            "#,
        )
        .unwrap();

        assert!(config.atom.include_stereo);
        assert!(!config.atom.include_implicit_hydrogens);
        assert!(config.bond.include_stereo);
        assert!(!config.perception.explicit_hydrogens);
        assert!(config.perception.perceive_aromaticity);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = FeatureConfig::from_toml("[atom]\ninclude_charge = true\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let result = FeatureConfig::from_toml("[bond]\ninclude_stereo = \"yes\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
