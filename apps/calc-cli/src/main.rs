//! # calc
//!
//! Entry point. The actual setup is in lib.rs for testability.

fn main() {
    if let Err(err) = calc_cli::run() {
        eprintln!("error: {}", err);
        std::process::exit(err.exit_code());
    }
}
