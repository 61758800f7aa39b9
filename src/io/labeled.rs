//! Line-oriented lists of labeled SMILES.
//!
//! Each non-blank line holds a SMILES string and optionally a numeric
//! label separated by whitespace; further columns are ignored. Lines whose
//! first non-blank character is `#` are comments. A missing label is `0`.
//!
//! ```text
//! # name: solubility set
//! CCO        1
//! c1ccccc1   0
//! CC(=O)O
//! ```

use super::{Format, error::Error};
use std::io::BufRead;

/// One entry of a labeled list.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSmiles {
    pub smiles: String,
    pub label: f64,
    /// 1-based line the entry came from.
    pub line: usize,
}

/// Label used when a line carries none.
pub const DEFAULT_LABEL: f64 = 0.0;

pub fn read<R: BufRead>(reader: R) -> Result<Vec<LabeledSmiles>, Error> {
    let mut entries = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let ln = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(smiles) = tokens.next() else {
            continue;
        };
        let label = match tokens.next() {
            Some(token) => token
                .parse::<f64>()
                .ok()
                .filter(|label| label.is_finite())
                .ok_or_else(|| {
                    Error::parse(Format::Smiles, ln, format!("invalid label '{token}'"))
                })?,
            None => DEFAULT_LABEL,
        };

        entries.push(LabeledSmiles {
            smiles: smiles.to_owned(),
            label,
            line: ln,
        });
    }

    Ok(entries)
}
