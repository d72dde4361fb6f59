use colored::Colorize;

fn main() {
    if let Err(e) = hexagram_cli::run() {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}
