use serde::{Deserialize, Serialize};

use super::entities::{Class, MemberInfo};

// 创建/加入班级后返回的班级摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: i64,
    pub class_name: String,
    pub subject: String,
    pub class_code: String,
}

impl From<Class> for ClassSummary {
    fn from(class: Class) -> Self {
        Self {
            id: class.id,
            class_name: class.class_name,
            subject: class.subject,
            class_code: class.class_code,
        }
    }
}

// 当前班级详情（成员已解析为展示形式）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDetailResponse {
    pub id: i64,
    pub class_name: String,
    pub subject: String,
    pub class_code: String,
    pub teacher: MemberInfo,
    pub students: Vec<MemberInfo>,
    pub student_count: usize,
    pub teaching_assistants: Vec<MemberInfo>,
}

// 教师班级列表中的一项（含历史班级）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassOverview {
    pub id: i64,
    pub class_name: String,
    pub subject: String,
    pub class_code: String,
    pub student_count: i64,
    pub is_active: bool,
    pub teaching_assistants: Vec<MemberInfo>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 助教变更后返回的助教列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaListResponse {
    pub teaching_assistants: Vec<MemberInfo>,
}
