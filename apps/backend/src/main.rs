use actix_web::{web, HttpServer};
use todo_backend::app::build_app;
use todo_backend::config::Config;
use todo_backend::state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be provided by the runtime environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let Config {
        host,
        port,
        security,
        policy,
        cors_allowed_origins,
    } = config;

    tracing::info!(
        host = %host,
        port,
        rules = policy.rules().len(),
        "starting todo backend"
    );
    for rule in policy.rules() {
        tracing::debug!(pattern = %rule.pattern, requirement = ?rule.requirement, "path rule");
    }

    let data = web::Data::new(AppState::new(security, policy));

    HttpServer::new(move || build_app(data.clone(), &cors_allowed_origins))
        .bind((host.as_str(), port))?
        .run()
        .await
}
