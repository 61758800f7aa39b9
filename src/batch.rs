//! Parallel encoding of many labeled molecules.

use rayon::prelude::*;
use tracing::info;

use crate::error::Error;
use crate::featurize::{FeatureConfig, encode_smiles};
use crate::io::labeled::LabeledSmiles;
use crate::model::graph::GraphRecord;

/// Encodes every entry on the rayon pool.
///
/// Output order matches input order. Encodings are independent, so a
/// failure does not stop the others from running, but the first failing
/// entry in input order is the one reported.
pub fn encode_all(
    entries: &[LabeledSmiles],
    config: &FeatureConfig,
) -> Result<Vec<GraphRecord>, Error> {
    let results: Vec<Result<GraphRecord, Error>> = entries
        .par_iter()
        .map(|entry| encode_smiles(&entry.smiles, entry.label, config))
        .collect();

    let graphs = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    info!(graphs = graphs.len(), "encoded batch");
    Ok(graphs)
}

/// Encodes `(smiles, label)` pairs on the rayon pool.
pub fn encode_pairs<S>(pairs: &[(S, f64)], config: &FeatureConfig) -> Result<Vec<GraphRecord>, Error>
where
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(smiles, label)| encode_smiles(smiles.as_ref(), *label, config))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}
