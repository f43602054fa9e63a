//! Entry point for the `wayfarer` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = wayfarer_cli::run() {
        eprintln!("wayfarer: {err}");
        std::process::exit(1);
    }
}
