#![allow(dead_code)]

use std::sync::Arc;
use tokio::net::TcpListener;

use studio_api_kernel::assets::{AssetResolver, ObjectStorage};
use studio_api_kernel::config::PaginationConfig;
use studio_api_kernel::events::EventBus;
use studio_api_kernel::kernel::{build_app, Plugin};
use studio_api_kernel::plugins::assets::AssetsPlugin;
use studio_api_kernel::plugins::classes::ClassesPlugin;
use studio_api_kernel::plugins::contacts::{repo::ContactRepo, ContactsPlugin};
use studio_api_kernel::plugins::health::HealthPlugin;
use studio_api_kernel::plugins::metrics::MetricsPlugin;
use studio_api_kernel::plugins::registrations::{repo::RegistrationRepo, RegistrationsPlugin};

pub const STORAGE_URL: &str = "https://cdn.test";

pub struct TestApp {
    pub base: String,
    pub events: EventBus,
    pub server_handle: tokio::task::JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn stop(self) {
        self.server_handle.abort();
        let _ = self.server_handle.await;
    }
}

/// Every studio plugin over in-memory tables, with metrics mounted at `/metrics`.
pub async fn spawn_studio(storage_url: Option<&str>) -> anyhow::Result<TestApp> {
    let resolver = AssetResolver::new(Arc::new(ObjectStorage::new(storage_url.map(str::to_string))));
    let events = EventBus::new();
    let pagination = PaginationConfig::default();
    let plugins: Vec<Box<dyn Plugin>> = vec![
        Box::new(HealthPlugin::new()),
        Box::new(AssetsPlugin::new(resolver.clone())),
        Box::new(ClassesPlugin::new(resolver, pagination)),
        Box::new(ContactsPlugin::new(ContactRepo::default(), events.clone(), pagination)),
        Box::new(RegistrationsPlugin::new(RegistrationRepo::default(), events.clone(), pagination)),
    ];
    let metrics = MetricsPlugin::new()?;
    let (base, server_handle) = spawn_app_with_plugins(plugins, Some(metrics)).await?;
    Ok(TestApp { base, events, server_handle })
}

pub async fn spawn_app_with_plugins(plugins: Vec<Box<dyn Plugin>>, metrics: Option<MetricsPlugin>) -> anyhow::Result<(String, tokio::task::JoinHandle<()>)> {
    let mut app = build_app(&plugins, metrics.clone()).await;
    if let Some(m) = metrics {
        app = app.nest("/metrics", m.router());
    }
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    Ok((format!("http://{}", addr), server_handle))
}
