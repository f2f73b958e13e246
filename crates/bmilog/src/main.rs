mod cli;

fn main() {
    if let Err(e) = cli::run() {
        // Input errors were already shown in the error slot
        if !e.is_input_error() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
