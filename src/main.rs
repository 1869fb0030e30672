use clap::Parser;

fn main() {
    let cli = raybind::cli::Cli::parse();
    if let Err(e) = raybind::core::Engine::run(&cli) {
        eprintln!("raybind failed: {}", e);
        std::process::exit(1);
    }
}
