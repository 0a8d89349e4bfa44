use crate::config::Config;
use crate::error::Result;
use crate::local_storage::{
    CoreLocalStorage, contact::ContactLocalStorage, quotation::QuotationLocalStorage,
    quotation::QuotationSequence, rule::RuleLocalStorage, settings::SettingsLocalStorage,
    user::UserLocalStorage,
};
use crate::services::{AuthService, ContactService, QuotationService, RuleService};
use std::sync::Arc;

/// Entry point for a front end: one service per record kind, all sharing
/// the same database file.
pub struct Controller {
    pub auth_service: AuthService,
    pub contact_service: ContactService,
    pub quotation_service: QuotationService,
    pub rule_service: RuleService,
    config: Arc<Config>,
}

impl Controller {
    /// Creates missing tables, then wires the services.
    pub fn new(config: Config) -> Result<Self> {
        crate::initialize_database(&config.database_path)?;

        let config = Arc::new(config);
        let core_storage = Arc::new(CoreLocalStorage::new(&config.database_path));

        let auth_service = AuthService::new(
            UserLocalStorage::new(core_storage.clone()),
            SettingsLocalStorage::new(core_storage.clone()),
        );
        let contact_service = ContactService::new(ContactLocalStorage::new(core_storage.clone()));
        let quotation_service = QuotationService::new(
            QuotationLocalStorage::new(core_storage.clone()),
            QuotationSequence::new(core_storage.clone()),
            config.staff_members.clone(),
            config.payment_accounts.clone(),
        );
        let rule_service = RuleService::new(RuleLocalStorage::new(core_storage));

        tracing::info!(path = %config.database_path.display(), "database ready");

        Ok(Self {
            auth_service,
            contact_service,
            quotation_service,
            rule_service,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
