use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use url::Url;

use crate::api::dispatcher::RequestDispatcher;
use crate::api::rest::routes;
use crate::config::{MailerConfig, MailerKind, UsersHandlerConfig};
use crate::contract::client::UsersHandlerApi;
use crate::domain::ports::MailerPort;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersHandlerLocalClient;
use crate::infra::mail::{HttpMailer, LogMailer};
use crate::infra::storage::migrations::Migrator;

const DEFAULT_MAX_CONNS: u32 = 10;

/// Wiring for the users handler: record store and mailer in, router and client out.
#[derive(Clone)]
pub struct UsersHandler {
    service: Arc<Service>,
    dispatcher: Arc<RequestDispatcher>,
}

impl UsersHandler {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        mailer: Arc<dyn MailerPort>,
        cfg: &UsersHandlerConfig,
    ) -> Self {
        info!("Initializing users_handler module");
        debug!(
            "Loaded users_handler config: sender_address={}, mailer={:?}",
            cfg.sender_address, cfg.mailer.kind
        );

        let service_config = ServiceConfig {
            sender_address: cfg.sender_address.clone(),
        };
        let service = Arc::new(Service::new(repo, mailer, service_config));
        let dispatcher = Arc::new(RequestDispatcher::new(service.clone()));

        Self {
            service,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> Arc<RequestDispatcher> {
        self.dispatcher.clone()
    }

    /// In-process client for callers that skip the HTTP surface.
    pub fn client(&self) -> Arc<dyn UsersHandlerApi> {
        Arc::new(UsersHandlerLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering users_handler REST routes");
        routes::register_routes(router, self.dispatcher())
    }
}

/// Open the SQL record store and bring the `Users` table up to date.
pub async fn connect_store(url: &str, max_conns: Option<u32>) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(max_conns.unwrap_or(DEFAULT_MAX_CONNS))
        .sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .with_context(|| "Failed to connect to record store")?;

    info!("Running users_handler database migrations");
    Migrator::up(&conn, None)
        .await
        .context("Users table migration failed")?;
    info!("Users database migrations completed successfully");

    Ok(conn)
}

/// Build the mailer adapter selected by configuration.
pub fn build_mailer(cfg: &MailerConfig) -> anyhow::Result<Arc<dyn MailerPort>> {
    match cfg.kind {
        MailerKind::Log => Ok(Arc::new(LogMailer)),
        MailerKind::Http => {
            let raw = cfg
                .base_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("mailer.base_url is required for kind 'http'"))?;
            let base_url =
                Url::parse(raw).with_context(|| format!("Invalid mailer.base_url '{raw}'"))?;
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(cfg.request_timeout_ms))
                .build()
                .context("Failed to build mail HTTP client")?;
            Ok(Arc::new(HttpMailer::new(client, base_url)))
        }
    }
}
