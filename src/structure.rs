//! The query surface the encoder needs from a parsed structure.
//!
//! Any chemistry backend can feed the encoder by implementing
//! [`MolecularStructure`]. The crate's own implementation is
//! [`Topology`](crate::Topology), produced by perceiving a
//! [`Molecule`](crate::Molecule) read from SMILES or SDF.
//!
//! Indices are dense: atoms are `0..atom_count()` and bonds are
//! `0..bond_count()`, in the structure's native order. Callers only pass
//! in-range indices.

/// Read-only per-atom and per-bond queries over a parsed molecule.
pub trait MolecularStructure {
    fn atom_count(&self) -> usize;

    fn bond_count(&self) -> usize;

    fn atomic_number(&self, atom: usize) -> u8;

    /// Number of bonded neighbours that are not hydrogen.
    fn heavy_neighbor_count(&self, atom: usize) -> usize;

    fn formal_charge(&self, atom: usize) -> i32;

    fn is_ring_atom(&self, atom: usize) -> bool;

    fn is_aromatic_atom(&self, atom: usize) -> bool;

    /// Stereo parity code, `None` when undefined.
    fn atom_parity(&self, atom: usize) -> Option<u8>;

    fn implicit_hydrogens(&self, atom: usize) -> u8;

    /// Endpoint atom indices in the order the structure stores them.
    fn bond_atoms(&self, bond: usize) -> (usize, usize);

    fn bond_order(&self, bond: usize) -> u8;

    fn is_aromatic_bond(&self, bond: usize) -> bool;

    fn is_ring_bond(&self, bond: usize) -> bool;

    /// Stereo parity code, `None` when undefined.
    fn bond_parity(&self, bond: usize) -> Option<u8>;
}
