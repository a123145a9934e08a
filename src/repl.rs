//! Interactive REPL for shunt
//!
//! Each line is a complete expression; the calculator is cleared
//! between lines so a failed entry never poisons the next one.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shunt::{CalcError, Calculator};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> i32 {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("shunt: {}", err);
            return 1;
        }
    };

    println!("shunt {} - tokens separated by spaces, Ctrl-D to quit", VERSION);

    let mut calc = Calculator::new();
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                calc.clear();
                match evaluate(&mut calc, line) {
                    Ok(answer) => println!("= {}", answer),
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("shunt: {}", err);
                return 1;
            }
        }
    }

    0
}

fn evaluate(calc: &mut Calculator, line: &str) -> Result<f64, CalcError> {
    calc.entry_line(line)?;
    calc.get_answer()
}
