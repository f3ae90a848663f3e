use expense_report::cli::run_cli;

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
