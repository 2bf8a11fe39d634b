use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match page_to_alto::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
