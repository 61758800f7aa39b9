//! Readers for structure notations and the graph batch interchange format.
//!
//! - [`ChemReader`] reads one molecule from SMILES or MDL SDF/MOL text.
//! - [`labeled`] reads `SMILES [label]` lists for batch encoding.
//! - [`graphs`] reads and writes `{ "graphs": [...] }` JSON batches.

use std::fmt;
use std::io::BufRead;

use crate::model::molecule::Molecule;

pub mod error;
pub mod graphs;
pub mod labeled;
pub mod util;

mod sdf {
    pub mod reader;
}

mod smiles {
    pub mod reader;
}

pub use error::{Error, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Smiles,
    Sdf,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Smiles => write!(f, "SMILES"),
            Format::Sdf => write!(f, "SDF"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

/// Reads a single molecule in a structure format.
pub struct ChemReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> ChemReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    /// Reads the first molecule of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedReadFormat`] for [`Format::Json`], which
    /// holds encoded graphs rather than structures, or a parse/I/O error.
    pub fn read(self) -> Result<Molecule, Error> {
        match self.format {
            Format::Smiles => smiles::reader::read(self.reader),
            Format::Sdf => sdf::reader::read(self.reader),
            Format::Json => Err(Error::UnsupportedReadFormat(self.format)),
        }
    }
}

/// Parses a single SMILES string.
pub fn read_smiles(smiles: &str) -> Result<Molecule, Error> {
    smiles::reader::parse(smiles)
}

/// Parses a molecule held in memory.
pub fn read_str(input: &str, format: Format) -> Result<Molecule, Error> {
    match format {
        Format::Smiles => read_smiles(input),
        _ => ChemReader::new(input.as_bytes(), format).read(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chem_reader_dispatches_on_format() {
        let mol = ChemReader::new("CCO\n".as_bytes(), Format::Smiles)
            .read()
            .unwrap();
        assert_eq!(mol.atom_count(), 3);

        let result = ChemReader::new("{}".as_bytes(), Format::Json).read();
        assert!(matches!(
            result,
            Err(Error::UnsupportedReadFormat(Format::Json))
        ));
    }

    #[test]
    fn read_str_parses_smiles_directly() {
        assert_eq!(read_str("C=O", Format::Smiles).unwrap().bond_count(), 1);
        assert!(read_str("", Format::Smiles).is_err());
    }

    #[test]
    fn format_display() {
        assert_eq!(Format::Smiles.to_string(), "SMILES");
        assert_eq!(Format::Sdf.to_string(), "SDF");
        assert_eq!(Format::Json.to_string(), "JSON");
    }
}
