use std::process::ExitCode;

use json_tsj::cli::CommandLineInterface;

fn main() -> ExitCode {
    match CommandLineInterface::load() {
        Ok(command_line_interface) => command_line_interface.run(),
        Err(error) => CommandLineInterface::report_load_error(&error),
    }
}
