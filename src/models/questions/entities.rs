use serde::{Deserialize, Serialize};

// 问题状态
//
// 在请求边界做显式校验：未知状态在反序列化时即被拒绝，
// 而不是依赖存储层的枚举约束兜底。
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Unanswered,
    Answered,
    Important,
}

impl QuestionStatus {
    pub const UNANSWERED: &'static str = "unanswered";
    pub const ANSWERED: &'static str = "answered";
    pub const IMPORTANT: &'static str = "important";
}

impl<'de> Deserialize<'de> for QuestionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            QuestionStatus::UNANSWERED => Ok(QuestionStatus::Unanswered),
            QuestionStatus::ANSWERED => Ok(QuestionStatus::Answered),
            QuestionStatus::IMPORTANT => Ok(QuestionStatus::Important),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid question status: '{s}'. Supported: unanswered, answered, important"
            ))),
        }
    }
}

impl std::fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionStatus::Unanswered => write!(f, "{}", QuestionStatus::UNANSWERED),
            QuestionStatus::Answered => write!(f, "{}", QuestionStatus::ANSWERED),
            QuestionStatus::Important => write!(f, "{}", QuestionStatus::IMPORTANT),
        }
    }
}

impl std::str::FromStr for QuestionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unanswered" => Ok(QuestionStatus::Unanswered),
            "answered" => Ok(QuestionStatus::Answered),
            "important" => Ok(QuestionStatus::Important),
            _ => Err(format!("Invalid question status: {s}")),
        }
    }
}

// 问题实体
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    // 展示署名，默认为提问者用户名
    pub author: String,
    pub status: QuestionStatus,
    pub user_id: i64,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialize_known_values() {
        assert_eq!(
            serde_json::from_str::<QuestionStatus>("\"answered\"").unwrap(),
            QuestionStatus::Answered
        );
        assert_eq!(
            serde_json::from_str::<QuestionStatus>("\"important\"").unwrap(),
            QuestionStatus::Important
        );
    }

    #[test]
    fn test_status_rejects_unknown_at_boundary() {
        let err = serde_json::from_str::<QuestionStatus>("\"resolved\"").unwrap_err();
        assert!(err.to_string().contains("Invalid question status"));
    }

    #[test]
    fn test_status_display_round_trip() {
        use std::str::FromStr;
        for status in [
            QuestionStatus::Unanswered,
            QuestionStatus::Answered,
            QuestionStatus::Important,
        ] {
            assert_eq!(
                QuestionStatus::from_str(&status.to_string()).unwrap(),
                status
            );
        }
    }
}
