use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "mgforge",
    about = "Molecular graph encoding for graph neural networks",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode molecules (SMILES list or SDF) into a graph batch
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Summarize an encoded graph batch
    #[command(visible_alias = "s")]
    Summarize(SummarizeArgs),

    /// List the feature columns for a configuration
    Schema(SchemaArgs),
}

/// Options accepted by every command.
#[derive(Args)]
pub struct GlobalOptions {
    /// Suppress banner, progress and tables (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// I/O options shared by commands that read and write files.
#[derive(Args)]
pub struct IoOptions {
    /// Input file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Feature layout and perception options.
#[derive(Args)]
#[command(next_help_heading = "Features")]
pub struct FeatureOptions {
    /// Feature configuration (TOML file); flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Drop the atom stereo parity columns
    #[arg(long)]
    pub no_atom_stereo: bool,

    /// Drop the bond stereo parity columns
    #[arg(long)]
    pub no_bond_stereo: bool,

    /// Drop the implicit hydrogen count columns
    #[arg(long = "no-implicit-h")]
    pub no_implicit_h: bool,

    /// Keep hydrogens implicit instead of adding them as nodes
    #[arg(long)]
    pub implicit_hydrogens: bool,

    /// Do not detect aromaticity of Kekulé rings
    #[arg(long)]
    pub no_aromaticity: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Label for every molecule, replacing labels in the input
    #[arg(short, long, value_name = "Y", allow_hyphen_values = true)]
    pub label: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub features: FeatureOptions,
}

#[derive(Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Print the columns as JSON instead of a listing
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub features: FeatureOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One `SMILES [label]` per line
    #[value(alias = "smi")]
    Smiles,
    /// MDL SDF/MOL (V2000), first record
    #[value(alias = "mol")]
    Sdf,
}

impl From<InputFormat> for molgraph_forge::io::Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Smiles => Self::Smiles,
            InputFormat::Sdf => Self::Sdf,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
