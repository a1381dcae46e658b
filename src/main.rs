use std::env;

use config::Config;
use dotenvy::dotenv;

use travel_agency::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .set_default("address", "127.0.0.1")
        .and_then(|builder| builder.set_default("port", 8080))
        .and_then(|builder| builder.set_default("database_url", "app.db"))
        .map(|builder| {
            builder
                // Add `./config/settings.yaml`
                .add_source(config::File::with_name("config/settings").required(false))
                // Add environment-specific overrides
                .add_source(
                    config::File::with_name(&format!("config/{app_env}")).required(false),
                )
                // Add settings from the environment (with a prefix of APP)
                .add_source(config::Environment::with_prefix("APP"))
        })
        .and_then(|builder| builder.build());

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    travel_agency::run(server_config).await
}
