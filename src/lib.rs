//! Fixed-schema graph encoding of small molecules for graph neural networks.
//!
//! A molecule written as SMILES (or MDL SDF/MOL) is parsed, perceived
//! (rings, aromaticity, hydrogens) and turned into a [`GraphRecord`]: a
//! node feature matrix, a bidirectional edge index, an edge feature matrix
//! and a scalar label. The column layout is fixed, so graphs produced by
//! this crate can be consumed by any model trained on the same layout.
//!
//! # Features
//!
//! - **Deterministic encoding**: Identical input and label always give an
//!   identical record, down to the floating-point bits
//! - **Total featurization**: Unknown elements, unusual charges and
//!   missing stereo information fall into overflow slots, clamps or
//!   fallback constants instead of failing
//! - **Pluggable structures**: Anything implementing
//!   [`MolecularStructure`] can be encoded; the built-in [`Topology`] is
//!   one implementation
//! - **Batch processing**: Parallel encoding of labeled SMILES lists and a
//!   JSON interchange format for the results
//!
//! # Quick Start
//!
//! ```
//! use molgraph_forge::{encode_smiles, Error, FeatureConfig};
//!
//! let mut config = FeatureConfig::default();
//! // Keep hydrogens implicit: one node per heavy atom.
//! config.perception.explicit_hydrogens = false;
//!
//! let graph = encode_smiles("CCO", 1.0, &config)?;
//!
//! // Three atoms, two bonds, four directed edges
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.sources(), &[0, 1, 1, 2]);
//! assert_eq!(graph.targets(), &[1, 0, 2, 1]);
//!
//! // 37 atom columns and 10 bond columns by default
//! assert!(graph.node_features().iter().all(|row| row.len() == 37));
//! assert!(graph.edge_features().iter().all(|row| row.len() == 10));
//! assert_eq!(graph.label(), 1.0);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Feature Layout
//!
//! Atom rows, in column order:
//!
//! | Columns | Content |
//! |---|---|
//! | 11 | element one-hot over C, N, O, S, F, P, Cl, Br, I, B, Other |
//! | 5 | heavy-atom degree 0–4 (clamped) |
//! | 7 | formal charge −3…+3 (clamped) |
//! | 2 | ring flag, aromatic flag |
//! | 3 | scaled mass, van der Waals radius, covalent radius |
//! | 4 | stereo parity 0–3 (optional) |
//! | 5 | implicit hydrogens 0–4 (clamped, optional) |
//!
//! Bond rows: order 1/2/3/aromatic, conjugated flag, ring flag and
//! optionally stereo parity over the codes `[1, 2, 0, 3]`. See
//! [`schema`] for the column names.
//!
//! # Module Organization
//!
//! - [`io`]: SMILES and SDF readers, labeled lists, graph batch JSON
//! - [`featurize`]: Feature extractors, graph assembly and configuration
//! - [`batch`]: Parallel encoding of many molecules
//! - [`analysis`]: Aggregate statistics over graph batches
//!
//! # Data Types
//!
//! - [`Molecule`]: Atoms and bonds as written by the input
//! - [`Atom`], [`Bond`]: Single atom and bond of a [`Molecule`]
//! - [`Element`], [`BondOrder`]: Chemical element and bond order
//! - [`AtomParity`], [`BondParity`]: Stereo parity codes
//! - [`Topology`]: A perceived molecule, ready for encoding
//! - [`GraphRecord`]: The encoded graph
//! - [`FeatureConfig`]: Optional feature blocks and perception switches

mod error;
mod model;
mod perception;
mod structure;

pub mod analysis;
pub mod batch;
pub mod featurize;
pub mod io;

pub use error::Error;

pub use model::atom::Atom;
pub use model::graph::{GraphRecord, GraphShapeError};
pub use model::molecule::{Bond, Molecule};
pub use model::types::{AtomParity, BondOrder, BondParity, Element, ParseElementError};

pub use perception::{PerceivedAtom, PerceivedBond, PerceptionOptions, Topology};
pub use structure::MolecularStructure;

pub use featurize::schema;
pub use featurize::{
    AtomFeatureOptions, BondFeatureOptions, FeatureConfig, encode, encode_molecule,
    encode_smiles, encode_str,
};

pub use analysis::Summary;
