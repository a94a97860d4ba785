mod session;

use clap::Parser as ClapParser;
use session::{Outcome, Session};
use std::io::BufRead;
use std::path::{Path, PathBuf};

const BANNER: &str = "\
Welcome to the Numeric Expression Calculator!
--------------------------------------------------
[+] Supported operations: +, -, *, =, +=, ++ (prefix and postfix)
[+] Every line assigns: 'x = ...', 'x += ...', 'x++' or '++x'
[+] Separate all operands and operators with a single space
[+] An empty line prints the variables and starts over
--------------------------------------------------";

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluate assignment expressions over single-letter variables", long_about = None)]
struct Args {
    /// Expressions to evaluate in one session, e.g. "x = 1" "y = x + 2"
    expressions: Vec<String>,

    /// Read expressions from a file, one per line
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// History file for the interactive editor
    #[arg(long)]
    history: Option<PathBuf>,

    /// Only print the variables, not each result
    #[arg(short, long)]
    quiet: bool,
}

fn report(outcome: Outcome, quiet: bool) {
    match outcome {
        Outcome::Value(v) if !quiet => println!("{}", v),
        Outcome::Value(_) => (),
        Outcome::Dump(vars) => println!("{}", vars),
        Outcome::Failed(msg) => eprintln!("{}", msg),
    }
}

fn run_lines(lines: impl Iterator<Item = String>, quiet: bool) {
    let mut session = Session::new();
    for line in lines {
        report(session.feed(&line), quiet);
    }
    if !session.is_empty() {
        report(Outcome::Dump(session.dump()), quiet);
    }
}

fn run_file(path: &Path, quiet: bool) -> Result<(), String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("can't open {:?}: {}", path, e))?;
    let mut lines = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        lines.push(line.map_err(|e| format!("can't read {:?}: {}", path, e))?);
    }
    log::info!("read {} line(s) from {:?}", lines.len(), path);
    run_lines(lines.into_iter(), quiet);
    Ok(())
}

fn run_interactive(history: Option<PathBuf>, quiet: bool) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let history = history.or_else(|| dirs::home_dir().map(|h| h.join(".varcalc_history")));
    if let Some(path) = &history {
        if rl.load_history(path).is_err() {
            log::info!("no history at {:?}", path);
        }
    }

    println!("{}", BANNER);
    let mut session = Session::new();
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(&line);
                }
                report(session.feed(&line), quiet);
            }
        }
    }
    if !session.is_empty() {
        report(Outcome::Dump(session.dump()), quiet);
    }
    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            log::warn!("can't save history to {:?}: {}", path, e);
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.file {
        run_file(path, args.quiet)
    } else if !args.expressions.is_empty() {
        run_lines(args.expressions.into_iter(), args.quiet);
        Ok(())
    } else {
        run_interactive(args.history, args.quiet)
    }
}
