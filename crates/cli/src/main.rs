use std::process::ExitCode;

fn main() -> ExitCode {
    growthdesk_cli::run()
}
