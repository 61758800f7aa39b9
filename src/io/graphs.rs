//! JSON batches of encoded graphs, shaped `{ "graphs": [ ... ] }`.

use super::error::Error;
use crate::model::graph::GraphRecord;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphBatch {
    pub graphs: Vec<GraphRecord>,
}

impl GraphBatch {
    pub fn new(graphs: Vec<GraphRecord>) -> Self {
        Self { graphs }
    }
}

/// Reads a batch, validating the shape of every graph.
pub fn read<R: BufRead>(reader: R) -> Result<GraphBatch, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a batch followed by a newline.
pub fn write<W: Write>(mut writer: W, batch: &GraphBatch, pretty: bool) -> Result<(), Error> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, batch)?;
    } else {
        serde_json::to_writer(&mut writer, batch)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::featurize::{FeatureConfig, encode_smiles};

    #[test]
    fn writes_the_expected_envelope() {
        let mut config = FeatureConfig::default();
        config.perception.explicit_hydrogens = false;
        let graph = encode_smiles("CC", 1.0, &config).unwrap();

        let mut out = Vec::new();
        write(&mut out, &GraphBatch::new(vec![graph.clone()]), false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let first = &value["graphs"][0];
        assert_eq!(first["edge_index"], serde_json::json!([[0, 1], [1, 0]]));
        assert_eq!(first["y"], serde_json::json!(1.0));
        assert_eq!(first["x"].as_array().unwrap().len(), 2);
        assert_eq!(first["edge_attr"].as_array().unwrap().len(), 2);

        let back = read(out.as_slice()).unwrap();
        assert_eq!(back.graphs, vec![graph]);
    }

    #[test]
    fn pretty_output_is_equivalent() {
        let batch = GraphBatch::default();
        let mut out = Vec::new();
        write(&mut out, &batch, true).unwrap();
        assert_eq!(read(out.as_slice()).unwrap(), batch);
    }

    #[test]
    fn rejects_malformed_graphs() {
        let text = r#"{"graphs":[{"x":[[1.0]],"edge_index":[[0],[3]],"edge_attr":[[1.0]],"y":0}]}"#;
        assert!(matches!(read(text.as_bytes()), Err(Error::Json(_))));

        let text = r#"{"graphs":[{"x":[],"edge_index":[[0,1],[1]],"edge_attr":[],"y":0}]}"#;
        assert!(read(text.as_bytes()).is_err());
    }

    #[test]
    fn rejects_missing_envelope() {
        assert!(read("[]".as_bytes()).is_err());
    }
}
