use std::{
    fs,
    io::{BufRead, Write},
};

use clap::Parser;
use rill::{create_global_scope, execute};

/// rill is a small, easy to pick up scripting language with dynamic typing,
/// first-class functions, and built-in host functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rill to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last statement of the
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script to run, or a path to it with --file. Omit to start the
    /// interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let env = create_global_scope();
    match execute(&script, &env) {
        Ok(value) => {
            if args.pipe_mode {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Reads and evaluates statements interactively, one line at a time.
///
/// The environment persists across lines, so definitions accumulate. Errors
/// are printed and the prompt continues.
fn repl() {
    let env = create_global_scope();
    let stdin = std::io::stdin();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        if line.trim().is_empty() {
            continue;
        }

        match execute(&line, &env) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
