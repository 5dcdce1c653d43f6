use cafe_api::{config::Config, logging, run_app};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    logging::init_logger(config.log_level);
    run_app(config).await
}
