use lambda_http::{run, service_fn, tracing, Error};
mod config;
mod http_handler;
mod record;
mod render;
mod store;
use config::Config;
use http_handler::function_handler;
use render::Template;
use store::DynamoDbStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = Config::from_env();
    let template = Template::load(&config.template_path)?;
    tracing::info!(
        table = %config.table_name,
        template = %config.template_path,
        template_bytes = template.as_str().len(),
        "loaded configuration"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoDbStore::new(client, config.table_name);

    run(service_fn(|event| {
        function_handler(&store, &template, event)
    })).await
}
