//! Birch CLI
//!
//! Front-end driver: lexes, parses and checks Birch source files.

use std::io::IsTerminal;

fn main() {
    birchc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let is_tty = std::io::stderr().is_terminal();
    let code = birchc::run(
        &args,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        is_tty,
    );
    std::process::exit(code);
}
