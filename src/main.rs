use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(navigator::execute() as u8)
}
