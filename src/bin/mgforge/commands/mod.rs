mod encode;
mod schema;
mod summarize;

use encode::run_encode;
use schema::run_schema;
use summarize::run_summarize;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Encode(args) => run_encode(args, ctx),
        Command::Summarize(args) => run_summarize(args, ctx),
        Command::Schema(args) => run_schema(args, ctx),
    }
}
