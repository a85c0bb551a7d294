use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use treecalc::{evaluate, parse};

/// Interactive line mode: every line is parsed, evaluated, and freed on its
/// own, and errors never end the session.
pub fn run(show_tree: bool) -> Result<()> {
    println!("treecalc interactive mode");
    println!("Operators: + - * /, parentheses, unary minus");
    println!("Commands: 'help', 'quit' (or 'exit', 'q')\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "Expression: ")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            // stdin closed
            println!();
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                return Ok(());
            }
            "help" => {
                print_help();
                continue;
            }
            _ => {}
        }

        match parse(input) {
            Ok(mut tree) => {
                if show_tree {
                    println!("  {tree}");
                }
                match evaluate(&tree) {
                    Ok(result) => println!("  {input} = {result}"),
                    Err(e) => println!("  {input} = Error: {e}"),
                }
                if let Err(e) = tree.free() {
                    println!("  Error: {e}");
                }
            }
            Err(e) => println!("  {input} = Error: {e}"),
        }
    }
}

fn print_help() {
    println!("Supported syntax:");
    println!("  integer literals    (e.g., 42)");
    println!("  +   addition");
    println!("  -   subtraction, or unary minus before a factor");
    println!("  *   multiplication");
    println!("  /   division (dividing by zero is an error)");
    println!("  ( ) grouping");
}
