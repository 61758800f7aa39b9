use std::fs;

use anyhow::{Context, Result};

use molgraph_forge::FeatureConfig;

use crate::cli::FeatureOptions;

/// Builds the feature configuration: the TOML file if given, then flags.
pub fn build_feature_config(opts: &FeatureOptions) -> Result<FeatureConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            FeatureConfig::from_toml(&text)
                .with_context(|| format!("Invalid feature configuration: {}", path.display()))?
        }
        None => FeatureConfig::default(),
    };

    apply_overrides(&mut config, opts);
    Ok(config)
}

fn apply_overrides(config: &mut FeatureConfig, opts: &FeatureOptions) {
    if opts.no_atom_stereo {
        config.atom.include_stereo = false;
    }
    if opts.no_implicit_h {
        config.atom.include_implicit_hydrogens = false;
    }
    if opts.no_bond_stereo {
        config.bond.include_stereo = false;
    }
    if opts.implicit_hydrogens {
        config.perception.explicit_hydrogens = false;
    }
    if opts.no_aromaticity {
        config.perception.perceive_aromaticity = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FeatureOptions {
        FeatureOptions {
            config: None,
            no_atom_stereo: false,
            no_bond_stereo: false,
            no_implicit_h: false,
            implicit_hydrogens: false,
            no_aromaticity: false,
        }
    }

    #[test]
    fn defaults_without_flags() {
        let config = build_feature_config(&options()).unwrap();
        assert_eq!(config, FeatureConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let opts = FeatureOptions {
            no_atom_stereo: true,
            no_bond_stereo: true,
            implicit_hydrogens: true,
            ..options()
        };
        let config = build_feature_config(&opts).unwrap();
        assert!(!config.atom.include_stereo);
        assert!(config.atom.include_implicit_hydrogens);
        assert!(!config.bond.include_stereo);
        assert!(!config.perception.explicit_hydrogens);
        assert!(config.perception.perceive_aromaticity);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let opts = FeatureOptions {
            config: Some("/nonexistent/features.toml".into()),
            ..options()
        };
        let err = build_feature_config(&opts).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
