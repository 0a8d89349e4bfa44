use crate::error::{Result, StoreError};
use crate::local_storage::rule::RuleLocalStorage;
use crate::models::{Outcome, Rule};
use crate::services::validation;

pub struct RuleService {
    storage: RuleLocalStorage,
}

impl RuleService {
    pub fn new(storage: RuleLocalStorage) -> Self {
        Self { storage }
    }

    pub fn create(&self, content: &str) -> Outcome {
        let result = checked_content(content).and_then(|c| self.storage.create_rule(c));
        Outcome::from_result(result, |_| "Rule saved successfully.".to_string())
    }

    pub fn get(&self, id: i64) -> Result<Option<Rule>> {
        self.storage.get_rule_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Rule>> {
        self.storage.get_all_rules()
    }

    pub fn update(&self, id: i64, content: &str) -> Outcome {
        let result = checked_content(content).and_then(|c| self.storage.update_rule(id, c));
        Outcome::from_result(result, |_| "Rule updated successfully.".to_string())
    }

    pub fn delete(&self, id: i64) -> Outcome {
        Outcome::from_result(self.storage.delete_rule(id), |_| {
            "Rule deleted successfully.".to_string()
        })
    }
}

fn checked_content(content: &str) -> std::result::Result<&str, StoreError> {
    let content = content.trim();
    validation::require(&[("content", content)])?;
    Ok(content)
}
