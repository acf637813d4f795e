mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("lottodraw failed: {err:#}");
        std::process::exit(1);
    }
}
