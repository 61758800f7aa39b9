//! Hand-rolled structures for exercising the extractors in isolation.

use crate::structure::MolecularStructure;

/// A structure made of one atom with fixed query answers.
#[derive(Debug, Clone, Copy)]
pub struct FakeAtom {
    pub atomic_number: u8,
    pub heavy_neighbors: usize,
    pub charge: i32,
    pub ring: bool,
    pub aromatic: bool,
    pub parity: Option<u8>,
    pub hydrogens: u8,
}

impl FakeAtom {
    pub fn element(atomic_number: u8) -> Self {
        Self {
            atomic_number,
            heavy_neighbors: 0,
            charge: 0,
            ring: false,
            aromatic: false,
            parity: None,
            hydrogens: 0,
        }
    }
}

impl MolecularStructure for FakeAtom {
    fn atom_count(&self) -> usize {
        1
    }
    fn bond_count(&self) -> usize {
        0
    }
    fn atomic_number(&self, _: usize) -> u8 {
        self.atomic_number
    }
    fn heavy_neighbor_count(&self, _: usize) -> usize {
        self.heavy_neighbors
    }
    fn formal_charge(&self, _: usize) -> i32 {
        self.charge
    }
    fn is_ring_atom(&self, _: usize) -> bool {
        self.ring
    }
    fn is_aromatic_atom(&self, _: usize) -> bool {
        self.aromatic
    }
    fn atom_parity(&self, _: usize) -> Option<u8> {
        self.parity
    }
    fn implicit_hydrogens(&self, _: usize) -> u8 {
        self.hydrogens
    }
    fn bond_atoms(&self, bond: usize) -> (usize, usize) {
        unreachable!("single atom has no bond {bond}")
    }
    fn bond_order(&self, _: usize) -> u8 {
        0
    }
    fn is_aromatic_bond(&self, _: usize) -> bool {
        false
    }
    fn is_ring_bond(&self, _: usize) -> bool {
        false
    }
    fn bond_parity(&self, _: usize) -> Option<u8> {
        None
    }
}

/// Two carbons joined by one bond with fixed query answers.
#[derive(Debug, Clone, Copy)]
pub struct FakeBond {
    pub endpoints: (usize, usize),
    pub order: u8,
    pub aromatic: bool,
    pub ring: bool,
    pub parity: Option<u8>,
}

impl FakeBond {
    pub fn order(order: u8) -> Self {
        Self {
            endpoints: (0, 1),
            order,
            aromatic: false,
            ring: false,
            parity: None,
        }
    }
}

impl MolecularStructure for FakeBond {
    fn atom_count(&self) -> usize {
        2
    }
    fn bond_count(&self) -> usize {
        1
    }
    fn atomic_number(&self, _: usize) -> u8 {
        6
    }
    fn heavy_neighbor_count(&self, _: usize) -> usize {
        1
    }
    fn formal_charge(&self, _: usize) -> i32 {
        0
    }
    fn is_ring_atom(&self, _: usize) -> bool {
        self.ring
    }
    fn is_aromatic_atom(&self, _: usize) -> bool {
        self.aromatic
    }
    fn atom_parity(&self, _: usize) -> Option<u8> {
        None
    }
    fn implicit_hydrogens(&self, _: usize) -> u8 {
        3
    }
    fn bond_atoms(&self, _: usize) -> (usize, usize) {
        self.endpoints
    }
    fn bond_order(&self, _: usize) -> u8 {
        self.order
    }
    fn is_aromatic_bond(&self, _: usize) -> bool {
        self.aromatic
    }
    fn is_ring_bond(&self, _: usize) -> bool {
        self.ring
    }
    fn bond_parity(&self, _: usize) -> Option<u8> {
        self.parity
    }
}
