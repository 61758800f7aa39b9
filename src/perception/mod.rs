//! Structure perception: turns a raw [`Molecule`] into a queryable [`Topology`].
//!
//! Perception fills in what structure notations leave implicit:
//!
//! - implicit hydrogen counts from default valences,
//! - aromaticity of Kekulé benzenoid rings and five-membered heteroaromatics,
//! - tetrahedral parity only on real stereocentres,
//! - optional expansion of implicit hydrogens into explicit atoms,
//! - ring membership of atoms and bonds,
//! - heavy-atom degrees.
//!
//! The result implements [`MolecularStructure`] and is what the encoder
//! reads.

mod aromaticity;
mod hydrogens;
mod rings;
mod stereo;

use serde::Deserialize;
use tracing::trace;

use crate::error::Error;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule};
use crate::model::types::{AtomParity, BondOrder, BondParity, Element};
use crate::structure::MolecularStructure;

/// Switches for the perception step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerceptionOptions {
    /// Append implicit hydrogens as explicit atoms (after all input atoms)
    /// so they become graph nodes.
    pub explicit_hydrogens: bool,
    /// Detect aromatic rings written in Kekulé form.
    pub perceive_aromaticity: bool,
}

impl Default for PerceptionOptions {
    fn default() -> Self {
        Self {
            explicit_hydrogens: true,
            perceive_aromaticity: true,
        }
    }
}

/// A perceived atom.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceivedAtom {
    pub element: Element,
    pub formal_charge: i8,
    pub aromatic: bool,
    pub in_ring: bool,
    pub parity: AtomParity,
    /// Hydrogens not present as atoms; zero after explicit expansion.
    pub implicit_hydrogens: u8,
    /// Neighbours that are not hydrogen.
    pub heavy_neighbors: usize,
}

impl PerceivedAtom {
    fn from_atom(atom: &Atom) -> Self {
        Self {
            element: atom.element,
            formal_charge: atom.formal_charge,
            aromatic: atom.aromatic,
            in_ring: false,
            parity: atom.parity,
            implicit_hydrogens: 0,
            heavy_neighbors: 0,
        }
    }

    fn hydrogen() -> Self {
        Self::from_atom(&Atom::new(Element::H))
    }
}

/// A perceived bond. `i` and `j` keep the order of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceivedBond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
    pub aromatic: bool,
    pub in_ring: bool,
    pub parity: BondParity,
}

impl PerceivedBond {
    fn from_bond(bond: &Bond) -> Self {
        Self {
            i: bond.i,
            j: bond.j,
            order: bond.order,
            aromatic: bond.order.is_aromatic(),
            in_ring: false,
            parity: bond.parity,
        }
    }

    fn single(i: usize, j: usize) -> Self {
        Self::from_bond(&Bond::new(i, j, BondOrder::Single))
    }
}

/// A molecule with perceived rings, aromaticity and hydrogens.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    atoms: Vec<PerceivedAtom>,
    bonds: Vec<PerceivedBond>,
}

impl Topology {
    /// Perceives a [`Molecule`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBond`] if a bond references an atom index out
    /// of range or joins an atom to itself.
    pub fn from_molecule(molecule: &Molecule, options: &PerceptionOptions) -> Result<Self, Error> {
        let n_atoms = molecule.atom_count();

        for bond in &molecule.bonds {
            if bond.i >= n_atoms || bond.j >= n_atoms {
                return Err(Error::invalid_bond(
                    bond.i,
                    bond.j,
                    format!("atom index out of bounds (n_atoms = {})", n_atoms),
                ));
            }
            if bond.i == bond.j {
                return Err(Error::invalid_bond(
                    bond.i,
                    bond.j,
                    "an atom cannot bond to itself",
                ));
            }
        }

        let mut atoms: Vec<PerceivedAtom> =
            molecule.atoms.iter().map(PerceivedAtom::from_atom).collect();
        let mut bonds: Vec<PerceivedBond> =
            molecule.bonds.iter().map(PerceivedBond::from_bond).collect();

        let sums = hydrogens::bond_sums(n_atoms, &bonds);
        for ((perceived, atom), sum) in atoms.iter_mut().zip(&molecule.atoms).zip(sums) {
            perceived.implicit_hydrogens = hydrogens::implicit_count(atom, sum);
        }

        if options.perceive_aromaticity {
            let adjacency = adjacency(atoms.len(), &bonds);
            let marked = aromaticity::perceive(&mut atoms, &mut bonds, &adjacency);
            trace!(rings = marked, "marked kekulé rings aromatic");
        }

        let stereo_adjacency = adjacency(atoms.len(), &bonds);
        let cleared = stereo::clear_non_stereogenic(&mut atoms, &bonds, &stereo_adjacency);
        if cleared > 0 {
            trace!(centres = cleared, "cleared parity on non-stereogenic centres");
        }

        if options.explicit_hydrogens {
            let added = hydrogens::expand(&mut atoms, &mut bonds);
            trace!(hydrogens = added, "expanded implicit hydrogens");
        }

        let adjacency = adjacency(atoms.len(), &bonds);
        let ring_flags = rings::ring_bonds(&adjacency, bonds.len());
        for (bond, in_ring) in bonds.iter_mut().zip(ring_flags) {
            bond.in_ring = in_ring;
            if in_ring {
                atoms[bond.i].in_ring = true;
                atoms[bond.j].in_ring = true;
            } else if bond.aromatic {
                // Only ring bonds can be aromatic; a link between two
                // aromatic rings is a plain single bond.
                bond.aromatic = false;
                bond.order = BondOrder::Single;
            }
        }

        for (idx, links) in adjacency.iter().enumerate() {
            atoms[idx].heavy_neighbors = links
                .iter()
                .filter(|&&(n, _)| atoms[n].element != Element::H)
                .count();
        }

        Ok(Self { atoms, bonds })
    }

    pub fn atoms(&self) -> &[PerceivedAtom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[PerceivedBond] {
        &self.bonds
    }
}

/// Per-atom `(neighbour, bond index)` lists in bond order.
fn adjacency(atom_count: usize, bonds: &[PerceivedBond]) -> Vec<Vec<(usize, usize)>> {
    let mut adj = vec![Vec::new(); atom_count];
    for (b, bond) in bonds.iter().enumerate() {
        adj[bond.i].push((bond.j, b));
        adj[bond.j].push((bond.i, b));
    }
    adj
}

impl MolecularStructure for Topology {
    #[inline]
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    fn atomic_number(&self, atom: usize) -> u8 {
        self.atoms[atom].element.atomic_number()
    }

    fn heavy_neighbor_count(&self, atom: usize) -> usize {
        self.atoms[atom].heavy_neighbors
    }

    fn formal_charge(&self, atom: usize) -> i32 {
        i32::from(self.atoms[atom].formal_charge)
    }

    fn is_ring_atom(&self, atom: usize) -> bool {
        self.atoms[atom].in_ring
    }

    fn is_aromatic_atom(&self, atom: usize) -> bool {
        self.atoms[atom].aromatic
    }

    fn atom_parity(&self, atom: usize) -> Option<u8> {
        Some(self.atoms[atom].parity.code())
    }

    fn implicit_hydrogens(&self, atom: usize) -> u8 {
        self.atoms[atom].implicit_hydrogens
    }

    fn bond_atoms(&self, bond: usize) -> (usize, usize) {
        let b = &self.bonds[bond];
        (b.i, b.j)
    }

    fn bond_order(&self, bond: usize) -> u8 {
        self.bonds[bond].order.multiplicity()
    }

    fn is_aromatic_bond(&self, bond: usize) -> bool {
        self.bonds[bond].aromatic
    }

    fn is_ring_bond(&self, bond: usize) -> bool {
        self.bonds[bond].in_ring
    }

    fn bond_parity(&self, bond: usize) -> Option<u8> {
        Some(self.bonds[bond].parity.code())
    }
}
