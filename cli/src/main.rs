//! Binary entrypoint for devfonts

fn main() {
    if let Err(err) = devfonts_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
