use super::config::AtomFeatureOptions;
use super::encoding::{flag, push_one_hot};
use super::tables;
use crate::structure::MolecularStructure;

/// Computes the feature vector of one atom.
///
/// Columns, in order: element (11), heavy degree clamped to 4 (5), formal
/// charge clamped to ±3 (7), ring flag, aromatic flag, scaled mass, scaled
/// van der Waals radius, scaled covalent radius, then optionally stereo
/// parity (4) and implicit hydrogens clamped to 4 (5).
pub fn atom_features<S>(structure: &S, atom: usize, options: &AtomFeatureOptions) -> Vec<f64>
where
    S: MolecularStructure + ?Sized,
{
    let mut out = Vec::with_capacity(options.feature_len());
    let z = structure.atomic_number(atom);

    push_one_hot(&mut out, &z, &tables::ELEMENTS);

    let degree = structure.heavy_neighbor_count(atom).min(tables::MAX_DEGREE);
    push_one_hot(&mut out, &degree, &tables::DEGREES);

    let charge = structure
        .formal_charge(atom)
        .clamp(tables::MIN_CHARGE, tables::MAX_CHARGE);
    push_one_hot(&mut out, &charge, &tables::CHARGES);

    out.push(flag(structure.is_ring_atom(atom)));
    out.push(flag(structure.is_aromatic_atom(atom)));

    out.push(tables::MASS_SCALING.apply(tables::mass(z)));
    out.push(tables::VDW_SCALING.apply(tables::vdw_radius(z)));
    out.push(tables::COVALENT_SCALING.apply(tables::covalent_radius(z)));

    if options.include_stereo {
        let parity = structure
            .atom_parity(atom)
            .unwrap_or(tables::UNDEFINED_ATOM_PARITY);
        push_one_hot(&mut out, &parity, &tables::ATOM_PARITIES);
    }

    if options.include_implicit_hydrogens {
        let h = structure.implicit_hydrogens(atom).min(tables::MAX_HYDROGENS);
        push_one_hot(&mut out, &h, &tables::HYDROGEN_COUNTS);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::featurize::testing::FakeAtom;

    const ELEMENT: std::ops::Range<usize> = 0..11;
    const DEGREE: std::ops::Range<usize> = 11..16;
    const CHARGE: std::ops::Range<usize> = 16..23;
    const RING: usize = 23;
    const AROMATIC: usize = 24;
    const MASS: usize = 25;
    const VDW: usize = 26;
    const COVALENT: usize = 27;
    const PARITY: std::ops::Range<usize> = 28..32;
    const HYDROGENS: std::ops::Range<usize> = 32..37;

    fn hot(slice: &[f64]) -> usize {
        assert_eq!(slice.iter().sum::<f64>(), 1.0);
        slice.iter().position(|&v| v == 1.0).unwrap()
    }

    fn features(atom: FakeAtom) -> Vec<f64> {
        atom_features(&atom, 0, &AtomFeatureOptions::default())
    }

    #[test]
    fn carbon_layout() {
        let f = features(FakeAtom::element(6));
        assert_eq!(f.len(), 37);
        assert_eq!(hot(&f[ELEMENT]), 0);
        assert_eq!(hot(&f[DEGREE]), 0);
        assert_eq!(hot(&f[CHARGE]), 3);
        assert_eq!(f[RING], 0.0);
        assert_eq!(f[AROMATIC], 0.0);
        assert_eq!(f[MASS], (12.0 - 10.812) / 116.092);
        assert_eq!(f[VDW], (1.7 - 1.5) / 0.6);
        assert_eq!(f[COVALENT], (0.76 - 0.64) / 0.76);
        assert_eq!(hot(&f[PARITY]), 0);
        assert_eq!(hot(&f[HYDROGENS]), 0);
    }

    #[test]
    fn element_slots_follow_vocabulary_order() {
        let expected = [(6, 0), (7, 1), (8, 2), (16, 3), (9, 4), (15, 5), (17, 6), (35, 7), (53, 8), (5, 9)];
        for (z, slot) in expected {
            assert_eq!(hot(&features(FakeAtom::element(z))[ELEMENT]), slot, "z = {z}");
        }
    }

    #[test]
    fn unlisted_elements_fall_into_other() {
        for z in [1, 3, 14, 26, 34, 118, 0, 200] {
            assert_eq!(hot(&features(FakeAtom::element(z))[ELEMENT]), 10, "z = {z}");
        }
    }

    #[test]
    fn out_of_table_radii_use_fallbacks() {
        let iron = features(FakeAtom::element(26));
        assert_eq!(iron[MASS], (56.0 - 10.812) / 116.092);
        assert_eq!(iron[VDW], 0.0);
        assert_eq!(iron[COVALENT], 0.0);

        let boron = features(FakeAtom::element(5));
        assert_eq!(boron[MASS], (11.0 - 10.812) / 116.092);
        assert_eq!(boron[VDW], 0.0);
    }

    #[test]
    fn unknown_atomic_numbers_use_the_mass_fallback() {
        for z in [0, 119, 200] {
            let f = features(FakeAtom::element(z));
            assert_eq!(f[MASS], (0.0 - 10.812) / 116.092);
        }
    }

    #[test]
    fn hydrogen_uses_its_table_values() {
        let f = features(FakeAtom::element(1));
        assert_eq!(f[MASS], (1.0 - 10.812) / 116.092);
        assert_eq!(f[VDW], (1.2 - 1.5) / 0.6);
        assert_eq!(f[COVALENT], (0.31 - 0.64) / 0.76);
    }

    #[test]
    fn degree_is_clamped() {
        let nine = features(FakeAtom {
            heavy_neighbors: 9,
            ..FakeAtom::element(6)
        });
        let four = features(FakeAtom {
            heavy_neighbors: 4,
            ..FakeAtom::element(6)
        });
        assert_eq!(nine, four);
        assert_eq!(hot(&nine[DEGREE]), 4);
    }

    #[test]
    fn charge_is_clamped() {
        let plus_ten = features(FakeAtom {
            charge: 10,
            ..FakeAtom::element(7)
        });
        let plus_three = features(FakeAtom {
            charge: 3,
            ..FakeAtom::element(7)
        });
        assert_eq!(plus_ten, plus_three);
        assert_eq!(hot(&plus_ten[CHARGE]), 6);

        let minus_five = features(FakeAtom {
            charge: -5,
            ..FakeAtom::element(8)
        });
        assert_eq!(hot(&minus_five[CHARGE]), 0);
    }

    #[test]
    fn hydrogens_are_clamped() {
        let f = features(FakeAtom {
            hydrogens: 7,
            ..FakeAtom::element(6)
        });
        assert_eq!(hot(&f[HYDROGENS]), 4);
    }

    #[test]
    fn parity_defaults_to_zero_and_overflows_to_last() {
        let undefined = features(FakeAtom {
            parity: None,
            ..FakeAtom::element(6)
        });
        assert_eq!(hot(&undefined[PARITY]), 0);

        let odd = features(FakeAtom {
            parity: Some(1),
            ..FakeAtom::element(6)
        });
        assert_eq!(hot(&odd[PARITY]), 1);

        let strange = features(FakeAtom {
            parity: Some(9),
            ..FakeAtom::element(6)
        });
        assert_eq!(hot(&strange[PARITY]), 3);
    }

    #[test]
    fn flags() {
        let f = features(FakeAtom {
            ring: true,
            aromatic: true,
            ..FakeAtom::element(6)
        });
        assert_eq!(f[RING], 1.0);
        assert_eq!(f[AROMATIC], 1.0);
    }

    #[test]
    fn optional_blocks_are_dropped() {
        let atom = FakeAtom {
            hydrogens: 2,
            ..FakeAtom::element(6)
        };
        let full = atom_features(&atom, 0, &AtomFeatureOptions::default());

        let no_stereo = AtomFeatureOptions {
            include_stereo: false,
            include_implicit_hydrogens: true,
        };
        let f = atom_features(&atom, 0, &no_stereo);
        assert_eq!(f.len(), 33);
        assert_eq!(f[..28], full[..28]);
        assert_eq!(f[28..], full[HYDROGENS]);

        let bare = AtomFeatureOptions {
            include_stereo: false,
            include_implicit_hydrogens: false,
        };
        assert_eq!(atom_features(&atom, 0, &bare), full[..28].to_vec());
    }
}
