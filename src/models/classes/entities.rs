use serde::{Deserialize, Serialize};

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 科目
    pub subject: String,
    // 6位加入码，创建时生成一次，此后不变
    pub class_code: String,
    // 教师ID
    pub teacher_id: i64,
    // 是否活跃（停用后不可恢复）
    pub is_active: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班级内成员角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Student,
    Ta,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Student => write!(f, "student"),
            MemberRole::Ta => write!(f, "ta"),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(MemberRole::Student),
            "ta" => Ok(MemberRole::Ta),
            _ => Err(format!("Invalid member role: {s}")),
        }
    }
}

// 班级成员记录（成员关系的唯一真实来源）
#[derive(Debug, Clone, Serialize)]
pub struct ClassMember {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    pub role: MemberRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 成员展示形式（id + 用户名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberInfo {
    pub id: i64,
    pub username: String,
}
