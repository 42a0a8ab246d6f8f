use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub class_name: String,
    pub subject: String,
}

// 通过加入码加入班级请求
#[derive(Debug, Deserialize)]
pub struct JoinClassRequest {
    #[serde(default)]
    pub class_code: String,
}

// 指派助教请求
#[derive(Debug, Deserialize)]
pub struct AssignTaRequest {
    #[serde(default)]
    pub username: String,
}
