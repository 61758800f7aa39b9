use super::atom::Atom;
use super::types::{BondOrder, BondParity};

/// A bond between atoms `i` and `j`.
///
/// Endpoints are kept in the order they were written; edge expansion emits
/// `i → j` before `j → i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
    pub parity: BondParity,
}

impl Bond {
    pub fn new(i: usize, j: usize, order: BondOrder) -> Self {
        Self {
            i,
            j,
            order,
            parity: BondParity::None,
        }
    }

    pub fn with_parity(mut self, parity: BondParity) -> Self {
        self.parity = parity;
        self
    }

    /// Returns the endpoint opposite to `atom`, if `atom` is an endpoint.
    #[inline]
    pub fn partner(&self, atom: usize) -> Option<usize> {
        if self.i == atom {
            Some(self.j)
        } else if self.j == atom {
            Some(self.i)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Appends a bond and returns its index.
    pub fn add_bond(&mut self, bond: Bond) -> usize {
        self.bonds.push(bond);
        self.bonds.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;

    #[test]
    fn bond_keeps_written_endpoint_order() {
        let bond = Bond::new(5, 2, BondOrder::Double);
        assert_eq!((bond.i, bond.j), (5, 2));
        assert_eq!(bond.parity, BondParity::None);
    }

    #[test]
    fn bond_partner() {
        let bond = Bond::new(0, 3, BondOrder::Single);
        assert_eq!(bond.partner(0), Some(3));
        assert_eq!(bond.partner(3), Some(0));
        assert_eq!(bond.partner(1), None);
    }

    #[test]
    fn add_returns_indices() {
        let mut mol = Molecule::new();
        assert!(mol.is_empty());
        assert_eq!(mol.add_atom(Atom::new(Element::C)), 0);
        assert_eq!(mol.add_atom(Atom::new(Element::O)), 1);
        assert_eq!(mol.add_bond(Bond::new(0, 1, BondOrder::Double)), 0);
        assert_eq!(mol.atom_count(), 2);
        assert_eq!(mol.bond_count(), 1);
    }
}
