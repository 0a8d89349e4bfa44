pub mod rule_local_storage;
pub mod rule_tables;

pub use rule_local_storage::RuleLocalStorage;
pub use rule_tables::RuleTable;
