use std::process::ExitCode;

fn main() -> ExitCode {
    mercado_cli::run()
}
