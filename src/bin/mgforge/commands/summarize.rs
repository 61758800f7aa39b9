use std::io::Write;

use anyhow::{Context, Result, bail};

use molgraph_forge::Summary;
use molgraph_forge::io::graphs;

use crate::cli::SummarizeArgs;
use crate::display::{Context as DisplayContext, print_batch_summary, print_element_distribution};
use crate::io::{create_output, open_input, stdin_is_tty};

pub fn run_summarize(args: SummarizeArgs, ctx: DisplayContext) -> Result<()> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: mgforge summarize -i <GRAPHS.json> or pipe data via stdin."
        );
    }

    let reader = open_input(args.io.input.as_deref())?;
    let batch = graphs::read(reader).context("Failed to read graph batch")?;
    let summary = Summary::from_graphs(&batch.graphs);

    if ctx.interactive {
        print_batch_summary(&summary, None);
        print_element_distribution(&batch.graphs);
    }

    let mut out = create_output(args.io.output.as_deref())?;
    write_summary(&mut out, &summary, args.pretty)?;

    Ok(())
}

fn write_summary(out: &mut impl Write, summary: &Summary, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, summary)?;
    } else {
        serde_json::to_writer(&mut *out, summary)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
