use bookpromo::configuration::get_configuration;
use bookpromo::startup::Application;
use bookpromo::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // telemetry setup
    let subscriber = get_subscriber("bookpromo".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
