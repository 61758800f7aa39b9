//! Property tests over generated chains and rings.

use molgraph_forge::{FeatureConfig, GraphRecord, encode_smiles};
use proptest::prelude::*;

const ATOMS: &[&str] = &[
    "C", "N", "O", "S", "P", "B", "F", "Cl", "Br", "I", "[Si]", "[Se]", "[NH4+]", "[O-]", "[Fe+2]",
];
const BONDS: &[&str] = &["", "-", "=", "#"];

/// Column ranges of the one-hot blocks in a default atom row.
const ATOM_BLOCKS: &[(usize, usize)] = &[(0, 11), (11, 16), (16, 23), (28, 32), (32, 37)];
/// Column ranges of the one-hot blocks in a default bond row.
const BOND_BLOCKS: &[(usize, usize)] = &[(0, 4), (6, 10)];

/// A linear chain of atoms, optionally closed into a ring.
fn smiles_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(
            (prop::sample::select(BONDS), prop::sample::select(ATOMS)),
            1..12,
        ),
        any::<bool>(),
    )
        .prop_map(|(parts, ring)| {
            let close = ring && parts.len() >= 3;
            let mut smiles = String::new();
            for (i, (bond, atom)) in parts.iter().enumerate() {
                if i > 0 {
                    smiles.push_str(bond);
                }
                smiles.push_str(atom);
                if close && (i == 0 || i == parts.len() - 1) {
                    smiles.push('1');
                }
            }
            smiles
        })
}

fn config_strategy() -> impl Strategy<Value = FeatureConfig> {
    any::<[bool; 5]>().prop_map(|[atom_stereo, hydrogens, bond_stereo, explicit, aromatic]| {
        let mut config = FeatureConfig::default();
        config.atom.include_stereo = atom_stereo;
        config.atom.include_implicit_hydrogens = hydrogens;
        config.bond.include_stereo = bond_stereo;
        config.perception.explicit_hydrogens = explicit;
        config.perception.perceive_aromaticity = aromatic;
        config
    })
}

fn block_sum(row: &[f64], (start, end): (usize, usize)) -> f64 {
    row[start..end].iter().sum()
}

fn assert_symmetric(graph: &GraphRecord) {
    let sources = graph.sources();
    let targets = graph.targets();
    let features = graph.edge_features();
    for k in (0..graph.edge_count()).step_by(2) {
        assert_eq!(sources[k], targets[k + 1]);
        assert_eq!(targets[k], sources[k + 1]);
        assert_eq!(features[k], features[k + 1]);
    }
}

proptest! {
    #[test]
    fn encoding_is_deterministic(smiles in smiles_strategy(), label in -1e6f64..1e6, config in config_strategy()) {
        let first = encode_smiles(&smiles, label, &config).unwrap();
        let second = encode_smiles(&smiles, label, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rows_have_configured_lengths(smiles in smiles_strategy(), config in config_strategy()) {
        let graph = encode_smiles(&smiles, 0.0, &config).unwrap();

        prop_assert!(graph.node_count() > 0);
        prop_assert_eq!(graph.edge_count() % 2, 0);
        prop_assert_eq!(graph.sources().len(), graph.edge_count());
        prop_assert_eq!(graph.targets().len(), graph.edge_count());
        for row in graph.node_features() {
            prop_assert_eq!(row.len(), config.atom_feature_len());
            prop_assert!(row.iter().all(|v| v.is_finite()));
        }
        for row in graph.edge_features() {
            prop_assert_eq!(row.len(), config.bond_feature_len());
        }
        for (s, t) in graph.edges() {
            prop_assert!(s < graph.node_count() && t < graph.node_count());
            prop_assert_ne!(s, t);
        }
    }

    #[test]
    fn one_hot_blocks_have_exactly_one_hot_slot(smiles in smiles_strategy()) {
        let graph = encode_smiles(&smiles, 0.0, &FeatureConfig::default()).unwrap();

        for row in graph.node_features() {
            for &block in ATOM_BLOCKS {
                prop_assert_eq!(block_sum(row, block), 1.0);
            }
        }
        for row in graph.edge_features() {
            for &block in BOND_BLOCKS {
                prop_assert_eq!(block_sum(row, block), 1.0);
            }
        }
    }

    #[test]
    fn edges_come_in_mirrored_pairs(smiles in smiles_strategy(), config in config_strategy()) {
        let graph = encode_smiles(&smiles, 0.0, &config).unwrap();
        assert_symmetric(&graph);
    }

    #[test]
    fn ring_closure_marks_every_member(len in 3usize..10) {
        let smiles = format!("C1{}1", "C".repeat(len - 1));
        let mut config = FeatureConfig::default();
        config.perception.explicit_hydrogens = false;
        let graph = encode_smiles(&smiles, 0.0, &config).unwrap();

        prop_assert_eq!(graph.node_count(), len);
        prop_assert!(graph.node_features().iter().all(|row| row[23] == 1.0));
        prop_assert!(graph.edge_features().iter().all(|row| row[5] == 1.0));
    }

    #[test]
    fn charges_beyond_the_vocabulary_clamp(charge in 3i32..=12) {
        let mut config = FeatureConfig::default();
        config.perception.explicit_hydrogens = false;

        let positive = encode_smiles(&format!("[N+{charge}]"), 0.0, &config).unwrap();
        let bound = encode_smiles("[N+3]", 0.0, &config).unwrap();
        prop_assert_eq!(positive.node_features(), bound.node_features());

        let negative = encode_smiles(&format!("[N-{charge}]"), 0.0, &config).unwrap();
        let bound = encode_smiles("[N-3]", 0.0, &config).unwrap();
        prop_assert_eq!(negative.node_features(), bound.node_features());
    }

    #[test]
    fn label_is_carried_unchanged(label in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let graph = encode_smiles("CCO", label, &FeatureConfig::default()).unwrap();
        prop_assert_eq!(graph.label().to_bits(), label.to_bits());
    }
}
