use tracing::debug;

use super::atom::atom_features;
use super::bond::bond_features;
use super::config::FeatureConfig;
use crate::model::graph::GraphRecord;
use crate::structure::MolecularStructure;

/// Assembles the graph record of a structure.
///
/// Atoms become node rows in structure order. Each bond `(a, c)` becomes
/// the directed edges `a → c` and `c → a`, in that order, sharing one
/// feature row. The label is attached unchanged.
pub fn encode<S>(structure: &S, label: f64, config: &FeatureConfig) -> GraphRecord
where
    S: MolecularStructure + ?Sized,
{
    let n_atoms = structure.atom_count();
    let n_bonds = structure.bond_count();

    let x: Vec<Vec<f64>> = (0..n_atoms)
        .map(|atom| atom_features(structure, atom, &config.atom))
        .collect();

    let mut sources = Vec::with_capacity(2 * n_bonds);
    let mut targets = Vec::with_capacity(2 * n_bonds);
    let mut edge_attr = Vec::with_capacity(2 * n_bonds);

    for bond in 0..n_bonds {
        let (a, c) = structure.bond_atoms(bond);
        let features = bond_features(structure, bond, &config.bond);

        sources.push(a);
        targets.push(c);
        sources.push(c);
        targets.push(a);

        edge_attr.push(features.clone());
        edge_attr.push(features);
    }

    debug!(
        nodes = n_atoms,
        edges = edge_attr.len(),
        label,
        "encoded structure"
    );

    GraphRecord::from_parts(x, sources, targets, edge_attr, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::featurize::testing::{FakeAtom, FakeBond};

    #[test]
    fn single_carbon() {
        let graph = encode(&FakeAtom::element(6), 1.0, &FeatureConfig::default());
        assert_eq!(graph.node_count(), 1);
        assert!(graph.sources().is_empty());
        assert!(graph.targets().is_empty());
        assert!(graph.edge_features().is_empty());
        assert_eq!(graph.label(), 1.0);
    }

    #[test]
    fn single_bond_expands_to_two_edges() {
        let graph = encode(&FakeBond::order(1), 0.0, &FeatureConfig::default());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.sources(), &[0, 1]);
        assert_eq!(graph.targets(), &[1, 0]);

        let rows = graph.edge_features();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[0][..4], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(rows[0][4], 0.0);
        assert_eq!(rows[0][5], 0.0);
    }

    #[test]
    fn endpoint_order_is_kept() {
        let bond = FakeBond {
            endpoints: (1, 0),
            ..FakeBond::order(2)
        };
        let graph = encode(&bond, 0.0, &FeatureConfig::default());
        assert_eq!(graph.sources(), &[1, 0]);
        assert_eq!(graph.targets(), &[0, 1]);
    }

    #[test]
    fn row_lengths_follow_config() {
        let mut config = FeatureConfig::default();
        config.atom.include_stereo = false;
        config.bond.include_stereo = false;

        let graph = encode(&FakeBond::order(3), 2.0, &config);
        assert!(graph.node_features().iter().all(|r| r.len() == 33));
        assert!(graph.edge_features().iter().all(|r| r.len() == 6));
        assert_eq!(graph.label(), 2.0);
    }

    #[test]
    fn label_passes_through_untouched() {
        for label in [-1.5, 0.0, 2.0, 1e9] {
            let graph = encode(&FakeAtom::element(8), label, &FeatureConfig::default());
            assert_eq!(graph.label(), label);
        }
    }

    #[test]
    fn deterministic() {
        let config = FeatureConfig::default();
        let bond = FakeBond {
            aromatic: true,
            ring: true,
            parity: Some(2),
            ..FakeBond::order(2)
        };
        assert_eq!(encode(&bond, 1.0, &config), encode(&bond, 1.0, &config));
    }
}
