use super::config::BondFeatureOptions;
use super::encoding::{flag, push_one_hot};
use super::tables;
use crate::structure::MolecularStructure;

/// Computes the feature vector of one bond.
///
/// Columns, in order: bond type (order 1, 2, 3, aromatic), conjugated flag,
/// ring flag, then optionally stereo parity over codes `[1, 2, 0, 3]`.
pub fn bond_features<S>(structure: &S, bond: usize, options: &BondFeatureOptions) -> Vec<f64>
where
    S: MolecularStructure + ?Sized,
{
    let mut out = Vec::with_capacity(options.feature_len());
    let aromatic = structure.is_aromatic_bond(bond);

    if aromatic {
        out.extend_from_slice(&[0.0, 0.0, 0.0, 1.0]);
    } else {
        let order = structure.bond_order(bond).min(tables::MAX_BOND_ORDER);
        push_one_hot(&mut out, &order, &tables::BOND_ORDERS);
        out.push(0.0);
    }

    // Aromaticity doubles as the conjugation flag.
    out.push(flag(aromatic));
    out.push(flag(structure.is_ring_bond(bond)));

    if options.include_stereo {
        let parity = structure
            .bond_parity(bond)
            .unwrap_or(tables::UNDEFINED_BOND_PARITY);
        push_one_hot(&mut out, &parity, &tables::BOND_PARITIES);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::featurize::testing::FakeBond;

    fn features(bond: FakeBond) -> Vec<f64> {
        bond_features(&bond, 0, &BondFeatureOptions::default())
    }

    #[test]
    fn single_bond() {
        let f = features(FakeBond::order(1));
        assert_eq!(f.len(), 10);
        assert_eq!(f[..6], [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn orders_are_clamped_at_three() {
        assert_eq!(features(FakeBond::order(2))[..4], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(features(FakeBond::order(3))[..4], [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(features(FakeBond::order(4))[..4], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn order_zero_overflows_into_the_third_slot() {
        assert_eq!(features(FakeBond::order(0))[..4], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn aromatic_ignores_formal_order() {
        for order in [1, 2, 3] {
            let f = features(FakeBond {
                aromatic: true,
                ring: true,
                ..FakeBond::order(order)
            });
            assert_eq!(f[..6], [0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn stereo_vocabulary_is_not_numeric() {
        let slot = |parity| {
            let f = features(FakeBond {
                parity,
                ..FakeBond::order(2)
            });
            f[6..].iter().position(|&v| v == 1.0).unwrap()
        };
        assert_eq!(slot(Some(1)), 0);
        assert_eq!(slot(Some(2)), 1);
        assert_eq!(slot(Some(0)), 2);
        assert_eq!(slot(Some(3)), 3);
        assert_eq!(slot(None), 3);
        assert_eq!(slot(Some(7)), 3);
    }

    #[test]
    fn stereo_block_is_optional() {
        let options = BondFeatureOptions {
            include_stereo: false,
        };
        let f = bond_features(&FakeBond::order(2), 0, &options);
        assert_eq!(f, vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
