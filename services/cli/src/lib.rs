mod cli;
mod render;
mod session;

use heartsafe::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
