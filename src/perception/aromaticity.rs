use super::{PerceivedAtom, PerceivedBond};
use crate::model::types::{BondOrder, Element};

/// A simple cycle; `bonds[k]` joins `atoms[k]` and `atoms[k + 1]` (wrapping).
struct Cycle {
    atoms: Vec<usize>,
    bonds: Vec<usize>,
}

fn eligible_atom(atom: &PerceivedAtom) -> bool {
    matches!(
        atom.element,
        Element::C | Element::N | Element::O | Element::S
    )
}

fn eligible_bond(bond: &PerceivedBond) -> bool {
    bond.aromatic || matches!(bond.order, BondOrder::Single | BondOrder::Double)
}

/// Enumerates simple cycles of `size` atoms over eligible atoms and bonds.
///
/// Each cycle is reported once: it starts at its lowest atom index and is
/// walked in the direction whose second atom is smaller than its last.
fn cycles(
    size: usize,
    atoms: &[PerceivedAtom],
    bonds: &[PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
) -> Vec<Cycle> {
    let mut found = Vec::new();
    let mut path = Cycle {
        atoms: Vec::with_capacity(size),
        bonds: Vec::with_capacity(size),
    };

    for start in 0..atoms.len() {
        if !eligible_atom(&atoms[start]) {
            continue;
        }
        path.atoms.clear();
        path.bonds.clear();
        path.atoms.push(start);
        extend(size, start, atoms, bonds, adjacency, &mut path, &mut found);
    }

    found
}

fn extend(
    size: usize,
    start: usize,
    atoms: &[PerceivedAtom],
    bonds: &[PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
    path: &mut Cycle,
    found: &mut Vec<Cycle>,
) {
    let Some(&tail) = path.atoms.last() else {
        return;
    };

    for &(next, bond) in &adjacency[tail] {
        if !eligible_bond(&bonds[bond]) {
            continue;
        }

        if path.atoms.len() == size {
            if next == start && path.atoms[1] < path.atoms[size - 1] {
                let mut ring_bonds = path.bonds.clone();
                ring_bonds.push(bond);
                found.push(Cycle {
                    atoms: path.atoms.clone(),
                    bonds: ring_bonds,
                });
            }
            continue;
        }

        if next <= start || path.atoms.contains(&next) || !eligible_atom(&atoms[next]) {
            continue;
        }

        path.atoms.push(next);
        path.bonds.push(bond);
        extend(size, start, atoms, bonds, adjacency, path, found);
        path.atoms.pop();
        path.bonds.pop();
    }
}

fn has_ring_double(cycle: &Cycle, bonds: &[PerceivedBond], atom: usize) -> bool {
    cycle.bonds.iter().any(|&b| {
        let bond = &bonds[b];
        bond.order == BondOrder::Double && (bond.i == atom || bond.j == atom)
    })
}

/// Six carbon/nitrogen atoms, each aromatic or on a double bond of the ring.
fn benzenoid(cycle: &Cycle, atoms: &[PerceivedAtom], bonds: &[PerceivedBond]) -> bool {
    cycle.atoms.iter().all(|&a| {
        matches!(atoms[a].element, Element::C | Element::N)
            && (atoms[a].aromatic || has_ring_double(cycle, bonds, a))
    })
}

/// Four atoms aromatic or on a ring double bond, plus exactly one nitrogen,
/// oxygen or sulfur that contributes its lone pair (pyrrole, furan,
/// thiophene and their fused forms).
fn pyrrole_like(cycle: &Cycle, atoms: &[PerceivedAtom], bonds: &[PerceivedBond]) -> bool {
    let mut donors = 0;
    for &a in &cycle.atoms {
        let atom = &atoms[a];
        if atom.aromatic || has_ring_double(cycle, bonds, a) {
            continue;
        }
        if !matches!(atom.element, Element::N | Element::O | Element::S) {
            return false;
        }
        donors += 1;
    }
    donors == 1
}

/// Marks Kekulé five- and six-membered rings as aromatic.
///
/// The pass repeats until nothing changes so fused systems written with the
/// shared bond single are still picked up. Returns the number of rings
/// marked.
pub(super) fn perceive(
    atoms: &mut [PerceivedAtom],
    bonds: &mut [PerceivedBond],
    adjacency: &[Vec<(usize, usize)>],
) -> usize {
    let mut rings = cycles(6, atoms, bonds, adjacency);
    rings.extend(cycles(5, atoms, bonds, adjacency));

    let mut marked = vec![false; rings.len()];
    let mut changed = true;

    while changed {
        changed = false;

        for (ring, done) in rings.iter().zip(marked.iter_mut()) {
            if *done || ring.bonds.iter().all(|&b| bonds[b].aromatic) {
                continue;
            }

            let qualifies = match ring.atoms.len() {
                6 => benzenoid(ring, atoms, bonds),
                _ => pyrrole_like(ring, atoms, bonds),
            };

            if qualifies {
                for &a in &ring.atoms {
                    atoms[a].aromatic = true;
                }
                for &b in &ring.bonds {
                    bonds[b].aromatic = true;
                }
                *done = true;
                changed = true;
            }
        }
    }

    marked.iter().filter(|&&m| m).count()
}
