pub mod auth;
pub mod classes;
pub mod common;
pub mod questions;
pub mod users;

pub use common::response::ApiResponse;

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 按 HTTP 状态族分段：40xxx 客户端错误（细分校验/认证/权限/未找到/冲突），
/// 50xxx 服务端错误。服务层负责把领域错误映射到这里。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 参数校验
    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserPasswordInvalid = 40002,
    ClassNameInvalid = 40003,
    SubjectInvalid = 40004,
    QuestionTextRequired = 40005,
    ClassCodeRequired = 40006,
    TaUsernameRequired = 40007,

    // 认证
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 角色 / 班级权限
    RoleDenied = 40300,
    ClassPermissionDenied = 40301,

    // 未找到（包括"存在但无权看见"）
    NotFound = 40400,
    UserNotFound = 40401,
    ClassNotFound = 40402,
    QuestionNotFound = 40403,
    ClassCodeInvalid = 40404,

    // 状态冲突
    UserNameAlreadyExists = 40900,
    ActiveClassExists = 40901,
    AlreadyInClass = 40902,
    NotInClass = 40903,
    NoActiveClass = 40904,
    TaAlreadyAssigned = 40905,
    QuestionDuplicate = 40906,

    // 服务端错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    ClassCreationFailed = 50002,
    QuestionCreationFailed = 50003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_families() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert!((40000..40100).contains(&(ErrorCode::QuestionTextRequired as i32)));
        assert!((40300..40400).contains(&(ErrorCode::ClassPermissionDenied as i32)));
        assert!((40900..41000).contains(&(ErrorCode::QuestionDuplicate as i32)));
        assert!((50000..51000).contains(&(ErrorCode::InternalServerError as i32)));
    }
}
