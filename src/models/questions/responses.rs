use serde::{Deserialize, Serialize};

use super::entities::QuestionStatus;

// 问题列表中的一项，提问者用户名已解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub status: QuestionStatus,
    pub user_id: i64,
    pub username: String,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
