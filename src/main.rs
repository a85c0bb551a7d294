use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;

use treecalc::{evaluate, parse};

mod repl;

/// Capacity of the single-shot input buffer; anything past it is ignored.
const INPUT_CAPACITY: usize = 100;

/// Expression-tree calculator for plain integer arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression instead of reading one line from stdin.
    expression: Option<String>,

    /// Print the parsed tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// Run an interactive session instead of a single evaluation.
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.interactive {
        return repl::run(args.tree);
    }

    let line = match args.expression {
        Some(expression) => expression,
        None => read_input_line()?,
    };

    let mut tree = parse(&line)?;
    if args.tree {
        println!("{tree}");
    }
    let result = evaluate(&tree)?;
    tree.free()?;
    println!("{result}");
    Ok(())
}

/// Reads one line; input past the buffer capacity is dropped.
fn read_input_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read an expression from stdin")?;
    if line.len() > INPUT_CAPACITY {
        let mut end = INPUT_CAPACITY;
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        line.truncate(end);
    }
    Ok(line)
}
