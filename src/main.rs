use anyhow::Context;
use argh::FromArgs;
use robot_commands::Interpreter;
use robot_commands::grid::Bounds;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Toy robot simulator. Drives a robot across a bounded grid from a command
/// file, or interactively when no file is given.
struct Args {
    /// input file with robot commands, one per line; interactive when omitted
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// grid width in cells, at least 1 (default 5)
    #[argh(option, default = "5")]
    width: i64,

    /// grid height in cells, at least 1 (default 5)
    #[argh(option, default = "5")]
    height: i64,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    let bounds = Bounds::new(args.width, args.height)?;
    let interpreter = Interpreter::new(bounds);

    match args.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            interpreter.run(BufReader::new(file), &mut io::stdout(), &mut io::stderr())?;
            Ok(())
        }
        None => interpreter.repl(),
    }
}
