use std::process::ExitCode;

fn main() -> ExitCode {
    match ringfifo::cli::run() {
        Ok(()) => ExitCode::from(ringfifo::errors::EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(ringfifo::errors::get_exit_code(&e))
        }
    }
}
