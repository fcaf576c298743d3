use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use evl_audit::{AuditReader, AuditRecorder, ConfigIdentity};
use evl_config::EvlConfig;
use evl_db::EvlDb;

use crate::cli::GlobalFlags;

pub type DbRecorder = AuditRecorder<Arc<EvlDb>, ConfigIdentity>;
pub type DbReader = AuditReader<Arc<EvlDb>, Arc<EvlDb>, ConfigIdentity>;

/// Load layered config, then apply `--db` / `--as-user`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<EvlConfig> {
    let mut config = EvlConfig::load_with_dotenv().context("failed to load eventline config")?;
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    if let Some(user) = &flags.as_user {
        config.auth.user_id.clone_from(user);
    }
    Ok(config)
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: Arc<EvlDb>,
    pub config: EvlConfig,
}

impl AppContext {
    /// Open the configured database, creating its directory if needed.
    pub async fn init(config: EvlConfig) -> anyhow::Result<Self> {
        if !config.database.is_ephemeral() {
            if let Some(parent) = Path::new(&config.database.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        let db = EvlDb::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open audit database {}", config.database.path))?;

        Ok(Self {
            db: Arc::new(db),
            config,
        })
    }

    /// Recorder acting as the configured user.
    pub fn recorder(&self) -> DbRecorder {
        AuditRecorder::new(Arc::clone(&self.db), self.identity())
    }

    /// Reader acting as the configured user, with configured page limits.
    pub fn reader(&self) -> DbReader {
        AuditReader::with_limits(
            Arc::clone(&self.db),
            Arc::clone(&self.db),
            self.identity(),
            self.config.audit.clone(),
        )
    }

    fn identity(&self) -> ConfigIdentity {
        ConfigIdentity::new(self.config.auth.clone())
    }
}
