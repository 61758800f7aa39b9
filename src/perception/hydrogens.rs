use super::{PerceivedAtom, PerceivedBond};
use crate::model::atom::Atom;
use crate::model::types::{BondOrder, Element};

/// Default valences of the SMILES organic subset, lowest first.
fn default_valences(element: Element) -> &'static [u8] {
    match element {
        Element::B => &[3],
        Element::C => &[4],
        Element::N | Element::P => &[3, 5],
        Element::O => &[2],
        Element::S => &[2, 4, 6],
        Element::F | Element::Cl | Element::Br | Element::I => &[1],
        _ => &[],
    }
}

fn charge_adjusted(element: Element, valence: u8, charge: i8) -> i32 {
    let (v, q) = (i32::from(valence), i32::from(charge));
    match element {
        Element::C => v - q.abs(),
        Element::B => v - q,
        _ => v + q,
    }
}

/// Hydrogens needed to bring `atom` up to its next default valence.
///
/// `bond_sum` is the sum of bond multiplicities around the atom, with
/// aromatic bonds counted once. Aromatic atoms count one extra electron
/// and only consult their lowest valence.
pub(super) fn implicit_count(atom: &Atom, bond_sum: u32) -> u8 {
    if let Some(h) = atom.hydrogens {
        return h;
    }

    let valences = default_valences(atom.element);
    let candidates = if atom.aromatic {
        &valences[..valences.len().min(1)]
    } else {
        valences
    };

    let used = i64::from(bond_sum) + i64::from(atom.aromatic);
    candidates
        .iter()
        .map(|&v| i64::from(charge_adjusted(atom.element, v, atom.formal_charge)))
        .find(|&v| v >= used)
        .map(|v| u8::try_from(v - used).unwrap_or(u8::MAX))
        .unwrap_or(0)
}

/// Materializes implicit hydrogens as explicit atoms.
///
/// Hydrogens are appended after all existing atoms, in parent order, and
/// each new bond is written parent → hydrogen after all existing bonds.
/// Returns the number of hydrogens added.
pub(super) fn expand(atoms: &mut Vec<PerceivedAtom>, bonds: &mut Vec<PerceivedBond>) -> usize {
    let parents = atoms.len();
    let mut added = 0;

    for parent in 0..parents {
        let count = std::mem::take(&mut atoms[parent].implicit_hydrogens);
        for _ in 0..count {
            atoms.push(PerceivedAtom::hydrogen());
            bonds.push(PerceivedBond::single(parent, atoms.len() - 1));
            added += 1;
        }
    }

    added
}

/// Sum of bond multiplicities per atom.
pub(super) fn bond_sums(atom_count: usize, bonds: &[PerceivedBond]) -> Vec<u32> {
    let mut sums = vec![0u32; atom_count];
    for bond in bonds {
        let m = u32::from(match bond.order {
            BondOrder::Aromatic => 1,
            other => other.multiplicity(),
        });
        sums[bond.i] += m;
        sums[bond.j] += m;
    }
    sums
}
