use anyhow::{Context, Result, bail};
use tracing::debug;

use molgraph_forge::io::graphs::{self, GraphBatch};
use molgraph_forge::io::labeled;
use molgraph_forge::io::{ChemReader, Format};
use molgraph_forge::{FeatureConfig, GraphRecord, Summary, batch, encode_molecule};

use crate::cli::EncodeArgs;
use crate::config::build_feature_config;
use crate::display::{
    Context as DisplayContext, Progress, print_batch_summary, print_element_distribution,
};
use crate::io::{create_output, infer_input_format, open_input, stdin_is_tty, target_name};

const TOTAL_STEPS: u8 = 3;

pub fn run_encode(args: EncodeArgs, ctx: DisplayContext) -> Result<()> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: mgforge encode -i <INPUT> or pipe data via stdin."
        );
    }

    let format = resolve_input_format(&args)?;
    let config = build_feature_config(&args.features)?;
    debug!(?format, ?config, "resolved encode options");

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading input");
    let input = read_input(&args, format)?;
    progress.complete_step("Reading input", &[input.describe()]);

    progress.step("Encoding graphs");
    let graphs = encode_input(input, &config)?;
    progress.complete_step(
        "Encoding graphs",
        &[
            format!("{} atom columns", config.atom_feature_len()),
            format!("{} bond columns", config.bond_feature_len()),
        ],
    );

    if ctx.interactive {
        print_batch_summary(&Summary::from_graphs(&graphs), Some(&config));
        print_element_distribution(&graphs);
    }

    progress.step("Writing output");
    let output = args.io.output.as_deref();
    let count = graphs.len();
    let writer = create_output(output)?;
    graphs::write(writer, &GraphBatch::new(graphs), args.pretty)
        .context("Failed to write graph batch")?;
    progress.complete_step(
        "Writing output",
        &[format!("{} graphs → {}", count, target_name(output))],
    );

    progress.finish("Encoding complete");

    Ok(())
}

/// Structures read from the input, before encoding.
enum Input {
    Labeled(Vec<labeled::LabeledSmiles>),
    Structure(molgraph_forge::Molecule, f64),
}

impl Input {
    fn describe(&self) -> String {
        match self {
            Input::Labeled(entries) => format!("{} SMILES entries", entries.len()),
            Input::Structure(molecule, _) => format!(
                "SDF record: {} atoms, {} bonds",
                molecule.atom_count(),
                molecule.bond_count()
            ),
        }
    }
}

fn read_input(args: &EncodeArgs, format: Format) -> Result<Input> {
    let reader = open_input(args.io.input.as_deref())?;

    match format {
        Format::Sdf => {
            let molecule = ChemReader::new(reader, format)
                .read()
                .context("Failed to read SDF structure")?;
            let label = args.label.unwrap_or(labeled::DEFAULT_LABEL);
            Ok(Input::Structure(molecule, label))
        }
        _ => {
            let mut entries = labeled::read(reader).context("Failed to read SMILES list")?;
            if let Some(label) = args.label {
                for entry in &mut entries {
                    entry.label = label;
                }
            }
            Ok(Input::Labeled(entries))
        }
    }
}

fn encode_input(input: Input, config: &FeatureConfig) -> Result<Vec<GraphRecord>> {
    match input {
        Input::Labeled(entries) => {
            batch::encode_all(&entries, config).context("Failed to encode SMILES list")
        }
        Input::Structure(molecule, label) => {
            let graph =
                encode_molecule(&molecule, label, config).context("Failed to encode structure")?;
            Ok(vec![graph])
        }
    }
}

fn resolve_input_format(args: &EncodeArgs) -> Result<Format> {
    if let Some(fmt) = args.input_format {
        return Ok(fmt.into());
    }

    if let Some(path) = &args.io.input {
        if let Some(fmt) = infer_input_format(path) {
            return Ok(fmt.into());
        }
        bail!(
            "Cannot infer format from '{}'. Use --infmt to specify.",
            path.display()
        );
    }

    bail!("Reading from stdin requires --infmt");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{FeatureOptions, InputFormat, IoOptions};

    fn args(input: Option<&str>, input_format: Option<InputFormat>) -> EncodeArgs {
        EncodeArgs {
            io: IoOptions {
                input: input.map(Into::into),
                output: None,
            },
            input_format,
            label: None,
            pretty: false,
            features: FeatureOptions {
                config: None,
                no_atom_stereo: false,
                no_bond_stereo: false,
                no_implicit_h: false,
                implicit_hydrogens: false,
                no_aromaticity: false,
            },
        }
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let format =
            resolve_input_format(&args(Some("ligand.sdf"), Some(InputFormat::Smiles))).unwrap();
        assert_eq!(format, Format::Smiles);
    }

    #[test]
    fn format_is_inferred_from_extension() {
        let format = resolve_input_format(&args(Some("ligand.mol"), None)).unwrap();
        assert_eq!(format, Format::Sdf);
    }

    #[test]
    fn stdin_needs_a_format() {
        let err = resolve_input_format(&args(None, None)).unwrap_err();
        assert!(err.to_string().contains("--infmt"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = resolve_input_format(&args(Some("ligand.xyz"), None)).unwrap_err();
        assert!(err.to_string().contains("Cannot infer format"));
    }

    #[test]
    fn labeled_input_encodes_in_order() {
        let entries = labeled::read("CCO 1\nC 0\n".as_bytes()).unwrap();
        let graphs = encode_input(Input::Labeled(entries), &FeatureConfig::default()).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].label(), 1.0);
        assert_eq!(graphs[1].node_count(), 5);
    }
}
