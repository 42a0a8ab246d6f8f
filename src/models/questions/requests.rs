use serde::Deserialize;

use super::entities::QuestionStatus;

// 提交问题请求
#[derive(Debug, Deserialize)]
pub struct AddQuestionRequest {
    #[serde(default)]
    pub text: String,
    // 可选署名，缺省时使用提问者用户名
    pub author: Option<String>,
}

// 更新问题状态请求（状态在反序列化时已校验）
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionStatusRequest {
    pub status: QuestionStatus,
}
