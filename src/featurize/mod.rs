//! Graph encoding of molecular structures.
//!
//! The encoder reads a [`MolecularStructure`] and produces a
//! [`GraphRecord`] with a fixed column layout:
//!
//! - node rows from [`atom_features`],
//! - two directed edges per bond, each carrying [`bond_features`],
//! - the caller's label.
//!
//! Encoding is total. Unknown elements, unusual charges or degrees and
//! missing stereo information are absorbed by overflow slots, clamps and
//! fallback constants. The only failures come from parsing or perceiving
//! the input before any feature is computed.
//!
//! # Examples
//!
//! ```
//! use molgraph_forge::{encode_smiles, FeatureConfig};
//!
//! let config = FeatureConfig::default();
//! let graph = encode_smiles("CO", 1.0, &config).unwrap();
//!
//! // Two heavy atoms plus four explicit hydrogens.
//! assert_eq!(graph.node_count(), 6);
//! assert_eq!(graph.edge_count(), 10);
//! assert_eq!(graph.sources()[..2], [0, 1]);
//! ```

mod assemble;
mod atom;
mod bond;
mod config;
mod encoding;
pub mod schema;
mod tables;

#[cfg(test)]
pub(crate) mod testing;

pub use assemble::encode;
pub use atom::atom_features;
pub use bond::bond_features;
pub use config::{AtomFeatureOptions, BondFeatureOptions, FeatureConfig};
pub use encoding::{flag, one_hot, push_one_hot};

use crate::error::Error;
use crate::io::{self, Format};
use crate::model::graph::GraphRecord;
use crate::model::molecule::Molecule;
use crate::perception::Topology;

/// Perceives `molecule` with `config.perception` and encodes it.
///
/// # Errors
///
/// Returns [`Error::InvalidBond`] if the molecule has a bond that
/// references a missing atom or joins an atom to itself.
pub fn encode_molecule(
    molecule: &Molecule,
    label: f64,
    config: &FeatureConfig,
) -> Result<GraphRecord, Error> {
    let topology = Topology::from_molecule(molecule, &config.perception)?;
    Ok(encode(&topology, label, config))
}

/// Parses a SMILES string and encodes it.
///
/// # Errors
///
/// Returns [`Error::Structure`] carrying `smiles` if it cannot be parsed.
/// Nothing is encoded in that case.
pub fn encode_smiles(smiles: &str, label: f64, config: &FeatureConfig) -> Result<GraphRecord, Error> {
    encode_str(smiles, Format::Smiles, label, config)
}

/// Parses `input` in the given format and encodes it.
///
/// # Errors
///
/// Returns [`Error::Structure`] carrying the input if it cannot be parsed.
pub fn encode_str(
    input: &str,
    format: Format,
    label: f64,
    config: &FeatureConfig,
) -> Result<GraphRecord, Error> {
    let molecule = io::read_str(input, format).map_err(|e| Error::structure(input, e))?;
    encode_molecule(&molecule, label, config)
}
