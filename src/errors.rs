//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classboard_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassboardError {
            $($variant(String),)*
        }

        impl ClassboardError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassboardError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassboardError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassboardError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassboardError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassboardError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classboard_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    StoragePluginNotFound("E009", "Storage Plugin Not Found"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    CodeGeneration("E012", "Class Code Generation Error"),
    UniqueViolation("E013", "Unique Constraint Violation"),
}

impl ClassboardError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一索引冲突（并发重复写入的兜底信号，
    /// 与后端数据库无关，服务层据此给出冲突响应而非 500）
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, ClassboardError::UniqueViolation(_))
    }
}

impl fmt::Display for ClassboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassboardError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassboardError {
    fn from(err: sea_orm::DbErr) -> Self {
        // SqlErr 对各数据库的唯一索引错误做了统一归类，
        // 不依赖具体后端的错误文案
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                ClassboardError::UniqueViolation(msg)
            }
            _ => ClassboardError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ClassboardError {
    fn from(err: std::io::Error) -> Self {
        ClassboardError::DatabaseConfig(err.to_string())
    }
}

impl From<serde_json::Error> for ClassboardError {
    fn from(err: serde_json::Error) -> Self {
        ClassboardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassboardError::cache_connection("test").code(), "E001");
        assert_eq!(ClassboardError::database_config("test").code(), "E003");
        assert_eq!(ClassboardError::validation("test").code(), "E006");
        assert_eq!(ClassboardError::code_generation("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassboardError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            ClassboardError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassboardError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_unique_violation_detection() {
        assert!(ClassboardError::unique_violation("duplicate").is_unique_violation());
        assert!(!ClassboardError::database_operation("other").is_unique_violation());
        assert_eq!(ClassboardError::unique_violation("duplicate").code(), "E013");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassboardError::code_generation("Exhausted attempts");
        let formatted = err.format_simple();
        assert!(formatted.contains("Class Code Generation Error"));
        assert!(formatted.contains("Exhausted attempts"));
    }
}
