//! shunt - an incremental infix calculator
//!
//! Usage:
//!   shunt                 Start interactive REPL
//!   shunt -c "expr"       Evaluate a single expression
//!   shunt 1 + 2 '*' 3     Evaluate the arguments as one expression

use std::env;
use std::process::ExitCode;

mod repl;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!(
        r#"shunt-{} An incremental two-stack infix calculator

USAGE:
    shunt                   Start interactive REPL
    shunt -c <expr>         Evaluate a single expression
    shunt <tokens...>       Evaluate the arguments as one expression
    shunt --help            Show this help message
    shunt --version         Show version

TOKENS (separated by spaces, case-insensitive):
    numbers                 1  -2.5  1e3
    + -                     Additive operators
    * / %                   Multiplicative operators
    MAX MIN ^               Binary function keywords
    ( )                     Grouping
    SQRT( FLOOR( CEILING(   Unary functions; close with )
    ROUND( TRUNC( SIGN(
    ABS( SIN( COS( TAN(
    ASIN( ACOS( ATAN(
    HSIN( HCOS( HTAN(
    LOG( LOG10( EXP(
    D2R( R2D(
    PI E                    Named constants

EXAMPLES:
    shunt -c "1 + 2 * 3"              7
    shunt -c "( 1 + 2 ) * 3"          9
    shunt -c "SQRT( 2 * 8 )"          4
    shunt -c "R2D( PI )"              180
"#,
        VERSION
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return match repl::run() {
            0 => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    match args[0].as_str() {
        "--help" | "-h" => {
            print_help();
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("shunt {}", VERSION);
            ExitCode::SUCCESS
        }
        "-c" => eval_and_print(&args[1..].join(" ")),
        _ => eval_and_print(&args.join(" ")),
    }
}

fn eval_and_print(expr: &str) -> ExitCode {
    match shunt::eval(expr) {
        Ok(answer) => {
            println!("{}", answer);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("shunt: {}", err);
            ExitCode::FAILURE
        }
    }
}
