//! Core data structures for molecules and their encoded graphs.
//!
//! - [`types`] – Periodic table elements, bond orders and stereo parities.
//! - [`atom`] – Atoms as read from a structure notation.
//! - [`molecule`] – Atoms plus bonds, as written by the input.
//! - [`graph`] – The fixed-schema [`GraphRecord`] produced by encoding.
//!
//! A [`Molecule`] is the raw parsed form; perception (rings, aromaticity,
//! hydrogens) turns it into a [`crate::Topology`], which the encoder consumes.
//!
//! [`Molecule`]: molecule::Molecule
//! [`GraphRecord`]: graph::GraphRecord

pub mod atom;
pub mod graph;
pub mod molecule;
pub mod types;
