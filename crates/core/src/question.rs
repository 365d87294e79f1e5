//! Immutable question value type. See `interview-catalog` for selection.

use serde::{Deserialize, Serialize};

use crate::domain::Difficulty;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub question_type: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub expected_keywords: Vec<String>,
    /// 1-based position within the generated set.
    pub order_number: u32,
}
