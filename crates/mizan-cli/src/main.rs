#![forbid(unsafe_code)]
//! Thin entrypoint for the `mizan` administrative CLI.

fn main() {
    let exit_code = mizan_cli::run();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
