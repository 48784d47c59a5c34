use color_eyre::eyre::Context;
use saaf_dashboard::{environment::Environment, riders::RiderDirectory, router};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let environment = Environment::from_env()?;
    let _sentry = saaf_dashboard::initialize(&environment)?;

    info!(riders = %environment.riders, "loading riders");
    let directory = RiderDirectory::new(environment.riders)
        .wrap_err("failed to set up the rider directory")?;

    router::serve(environment.http, directory).await
}
