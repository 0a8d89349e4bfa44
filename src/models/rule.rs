use serde::{Deserialize, Serialize};

/// A text notice ("norma"). `updated_on` is stamped on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: i64,
    pub content: String,
    pub updated_on: String,
}
