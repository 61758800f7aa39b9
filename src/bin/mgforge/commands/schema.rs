use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use molgraph_forge::{FeatureConfig, schema};

use crate::cli::SchemaArgs;
use crate::config::build_feature_config;
use crate::display::{Context as DisplayContext, print_feature_layout};

#[derive(Serialize)]
struct Columns {
    atom: Vec<String>,
    bond: Vec<String>,
}

impl Columns {
    fn for_config(config: &FeatureConfig) -> Self {
        Self {
            atom: schema::atom_columns(&config.atom),
            bond: schema::bond_columns(&config.bond),
        }
    }
}

pub fn run_schema(args: SchemaArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_feature_config(&args.features)?;
    let columns = Columns::for_config(&config);

    if ctx.interactive {
        print_feature_layout(&config);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &columns)?;
        writeln!(out)?;
    } else {
        write_listing(&mut out, &columns)?;
    }
    out.flush()?;

    Ok(())
}

fn write_listing(out: &mut impl Write, columns: &Columns) -> io::Result<()> {
    writeln!(out, "# atom ({} columns)", columns.atom.len())?;
    for (i, name) in columns.atom.iter().enumerate() {
        writeln!(out, "{:>3}  {}", i, name)?;
    }
    writeln!(out)?;
    writeln!(out, "# bond ({} columns)", columns.bond.len())?;
    for (i, name) in columns.bond.iter().enumerate() {
        writeln!(out, "{:>3}  {}", i, name)?;
    }
    Ok(())
}
