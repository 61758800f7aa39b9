use super::{PerceivedAtom, PerceivedBond};
use crate::model::types::{AtomParity, BondOrder, Element};

/// Bonds followed outward from a centre when comparing its branches.
const SIGNATURE_DEPTH: usize = 4;

/// Clears tetrahedral parity on atoms that cannot be stereocentres.
///
/// Only odd/even parities are checked; unknown parity is left alone.
/// A centre keeps its parity only with four substituents (implicit
/// hydrogens included), at most one hydrogen, and four pairwise different
/// branch signatures. Returns the number of centres cleared.
pub(super) fn clear_non_stereogenic(
    atoms: &mut [PerceivedAtom],
    bonds: &[PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
) -> usize {
    let mut cleared = 0;

    for centre in 0..atoms.len() {
        if !matches!(atoms[centre].parity, AtomParity::Odd | AtomParity::Even) {
            continue;
        }
        if !is_stereogenic(centre, atoms, bonds, adjacency) {
            atoms[centre].parity = AtomParity::None;
            cleared += 1;
        }
    }

    cleared
}

fn is_stereogenic(
    centre: usize,
    atoms: &[PerceivedAtom],
    bonds: &[PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
) -> bool {
    let implicit = usize::from(atoms[centre].implicit_hydrogens);
    if adjacency[centre].len() + implicit != 4 {
        return false;
    }

    let hydrogen = hydrogen_signature();
    let mut branches: Vec<String> = adjacency[centre]
        .iter()
        .map(|&(next, bond)| {
            signature(next, centre, bond, SIGNATURE_DEPTH, atoms, bonds, adjacency)
        })
        .collect();
    branches.extend((0..implicit).map(|_| hydrogen.clone()));

    let hydrogens = branches.iter().filter(|s| **s == hydrogen).count();
    if hydrogens > 1 {
        return false;
    }

    branches.sort_unstable();
    branches.windows(2).all(|pair| pair[0] != pair[1])
}

fn bond_code(bond: &PerceivedBond) -> char {
    if bond.aromatic {
        return ':';
    }
    match bond.order {
        BondOrder::Double => '=',
        BondOrder::Triple => '#',
        BondOrder::Quadruple => '$',
        _ => '-',
    }
}

fn atom_code(element: u8, charge: i8, aromatic: bool, implicit: u8) -> String {
    format!("{element}{charge:+}{}h{implicit}", if aromatic { "a" } else { "" })
}

fn hydrogen_signature() -> String {
    format!("-{}()", atom_code(Element::H.atomic_number(), 0, false, 0))
}

/// Canonical text of the branch reached from `from` through `bond`.
fn signature(
    atom: usize,
    from: usize,
    bond: usize,
    depth: usize,
    atoms: &[PerceivedAtom],
    bonds: &[PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
) -> String {
    let a = &atoms[atom];
    let mut children: Vec<String> = if depth > 1 {
        adjacency[atom]
            .iter()
            .filter(|&&(next, _)| next != from)
            .map(|&(next, b)| signature(next, atom, b, depth - 1, atoms, bonds, adjacency))
            .collect()
    } else {
        Vec::new()
    };
    children.sort_unstable();

    format!(
        "{}{}({})",
        bond_code(&bonds[bond]),
        atom_code(
            a.element.atomic_number(),
            a.formal_charge,
            a.aromatic,
            a.implicit_hydrogens
        ),
        children.join(",")
    )
}
