use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use studio_api_kernel::assets::{AssetResolver, ObjectStorage};
use studio_api_kernel::config::Config;
use studio_api_kernel::events::EventBus;
use studio_api_kernel::kernel::{build_app, Plugin};
use studio_api_kernel::plugins::assets::AssetsPlugin;
use studio_api_kernel::plugins::classes::ClassesPlugin;
use studio_api_kernel::plugins::contacts::{repo::ContactRepo, ContactsPlugin};
use studio_api_kernel::plugins::health::HealthPlugin;
use studio_api_kernel::plugins::metrics::MetricsPlugin;
use studio_api_kernel::plugins::registrations::{repo::RegistrationRepo, RegistrationsPlugin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.storage_url.is_none() {
        tracing::warn!("STORAGE_URL not set; asset urls will fail to resolve");
    }

    let resolver = AssetResolver::new(Arc::new(ObjectStorage::new(config.storage_url.clone())));
    let events = EventBus::new();
    let metrics_plugin = MetricsPlugin::new()?;

    // log every domain event; admin clients subscribe through the same bus
    let mut event_rx = events.subscribe();
    tokio::spawn(async move {
        loop {
            match event_rx.recv().await {
                Ok(event) => tracing::info!(?event, "studio event"),
                Err(RecvError::Lagged(skipped)) => tracing::warn!("event log lagged, {} events skipped", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let plugins_vec: Vec<Box<dyn Plugin>> = vec![
        Box::new(HealthPlugin::new()),
        Box::new(AssetsPlugin::new(resolver.clone())),
        Box::new(ClassesPlugin::new(resolver, config.pagination)),
        Box::new(ContactsPlugin::new(ContactRepo::default(), events.clone(), config.pagination)),
        Box::new(RegistrationsPlugin::new(RegistrationRepo::default(), events.clone(), config.pagination)),
    ];

    let plugin_names: Vec<&'static str> = plugins_vec.iter().map(|p| p.name()).collect();
    tracing::info!("mounting plugins: {:?}", plugin_names);

    let mut app: Router = build_app(&plugins_vec, Some(metrics_plugin.clone())).await;

    // expose metrics at /metrics (not instrumented to avoid double-counting)
    app = app.nest("/metrics", metrics_plugin.router());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            for p in plugins_vec.iter() {
                p.on_shutdown().await;
            }
        })
        .await?;

    Ok(())
}
