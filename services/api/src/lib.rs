mod assess;
mod cli;
mod infra;
mod interview;
mod routes;
mod server;

use privacy_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
