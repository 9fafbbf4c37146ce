//! InvestTracker core
//!
//! Backend for a role-based field inspection workflow: admins and branch
//! admins hand out inspection assignments, inspectors fill in survey
//! records against them, and dashboards aggregate the results. This crate
//! owns the data model, the authorization policy, and the service layer;
//! any transport sits on top of it.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod policy;
pub mod services;

pub use config::AppConfig;
pub use error::{CoreError, Result};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use infrastructure::database::Database;
use services::auth::{LoggingMailSender, MailSender, OpaqueTokenIssuer, TokenIssuer};
use services::{AssignmentService, AuthService, StatsService, SurveyService, UserService};

/// The main context for all core operations
pub struct Core {
    /// Application configuration
    pub config: AppConfig,

    /// Database handle
    pub db: Database,

    pub users: UserService,
    pub assignments: AssignmentService,
    pub surveys: SurveyService,
    pub stats: StatsService,
    pub auth: AuthService,
}

impl Core {
    /// Initialize a new Core instance with the default data directory
    pub async fn new() -> anyhow::Result<Self> {
        let data_dir = config::default_data_dir()?;
        Self::new_with_config(data_dir).await
    }

    /// Initialize a new Core instance with a custom data directory
    pub async fn new_with_config(data_dir: PathBuf) -> anyhow::Result<Self> {
        let config = AppConfig::load_or_create(&data_dir)?;
        Self::with_collaborators(
            config,
            Arc::new(OpaqueTokenIssuer),
            Arc::new(LoggingMailSender),
        )
        .await
    }

    /// Initialize with explicit token and mail collaborators.
    ///
    /// Transports that bring their own JWT issuer or SMTP delivery plug in
    /// here; everything else goes through `new`.
    pub async fn with_collaborators(
        config: AppConfig,
        issuer: Arc<dyn TokenIssuer>,
        mail: Arc<dyn MailSender>,
    ) -> anyhow::Result<Self> {
        info!("Initializing InvestTracker core at {:?}", config.data_dir);
        config.ensure_directories()?;

        let db_path = config.database_path();
        let db = if db_path.exists() {
            Database::open(&db_path).await?
        } else {
            Database::create(&db_path).await?
        };
        db.migrate().await?;

        let conn = db.conn().clone();
        let auth = AuthService::new(
            conn.clone(),
            issuer,
            mail,
            config.frontend_url.clone(),
            Duration::from_secs(config.reset_token_ttl_minutes * 60),
        );

        Ok(Self {
            users: UserService::new(conn.clone()),
            assignments: AssignmentService::new(conn.clone()),
            surveys: SurveyService::new(conn.clone()),
            stats: StatsService::new(conn),
            auth,
            db,
            config,
        })
    }
}
