use std::sync::Arc;

use crate::config::AppConfig;
use crate::language_model::polish_service::{polisher_from_config, SharedPolisher};
use crate::session::session_store::SessionStore;

#[derive(Clone)]
pub struct AppService {
    pub polisher: SharedPolisher,
}

impl AppService {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            polisher: polisher_from_config(config)?,
        })
    }

    pub fn with_polisher(polisher: SharedPolisher) -> Self {
        Self { polisher }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub sessions: SessionStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self::with_service(AppService::new(&config)?, config))
    }

    pub fn with_service(service: AppService, config: AppConfig) -> Self {
        Self {
            service,
            sessions: SessionStore::new(config.session_idle_ttl),
            config: Arc::new(config),
        }
    }
}
