pub mod auth_service;
pub mod contact_service;
pub mod quotation_service;
pub mod rule_service;
pub mod search_service;
pub mod validation;

pub use auth_service::AuthService;
pub use contact_service::ContactService;
pub use quotation_service::QuotationService;
pub use rule_service::RuleService;
