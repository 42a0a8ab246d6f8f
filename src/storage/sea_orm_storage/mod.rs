//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod memberships;
mod questions;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{ClassboardError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 写入类错误映射
///
/// 唯一索引冲突单独归类为 `UniqueViolation`，SeaORM 的 `sql_err()`
/// 已对 SQLite/PostgreSQL/MySQL 的错误做统一识别，服务层据此
/// 区分并发重复写入与其他数据库故障。
pub(crate) fn map_write_err(context: &str, e: sea_orm::DbErr) -> ClassboardError {
    match e.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
            ClassboardError::unique_violation(msg)
        }
        _ => ClassboardError::database_operation(format!("{context}: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存 SQLite 实例，仅用于测试
    ///
    /// 连接池固定为 1，避免多个连接各自持有独立的内存数据库。
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| ClassboardError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassboardError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassboardError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassboardError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassboardError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    classes::entities::{Class, ClassMember, MemberInfo, MemberRole},
    questions::{
        entities::{Question, QuestionStatus},
        responses::QuestionItem,
    },
    users::entities::{User, UserRole},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User> {
        self.create_user_impl(username, password_hash, role).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    // 班级模块
    async fn create_class(
        &self,
        teacher_id: i64,
        class_name: &str,
        subject: &str,
    ) -> Result<Class> {
        self.create_class_impl(teacher_id, class_name, subject)
            .await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(class_code).await
    }

    async fn get_active_class_by_teacher(&self, teacher_id: i64) -> Result<Option<Class>> {
        self.get_active_class_by_teacher_impl(teacher_id).await
    }

    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_teacher_impl(teacher_id).await
    }

    async fn deactivate_class(&self, class_id: i64) -> Result<bool> {
        self.deactivate_class_impl(class_id).await
    }

    // 班级成员模块
    async fn join_class(
        &self,
        user_id: i64,
        class_id: i64,
        role: MemberRole,
    ) -> Result<ClassMember> {
        self.join_class_impl(user_id, class_id, role).await
    }

    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool> {
        self.leave_class_impl(user_id, class_id).await
    }

    async fn get_membership(&self, user_id: i64, class_id: i64) -> Result<Option<ClassMember>> {
        self.get_membership_impl(user_id, class_id).await
    }

    async fn list_members(
        &self,
        class_id: i64,
        role: Option<MemberRole>,
    ) -> Result<Vec<MemberInfo>> {
        self.list_members_impl(class_id, role).await
    }

    async fn count_students(&self, class_id: i64) -> Result<i64> {
        self.count_students_impl(class_id).await
    }

    // 问题模块
    async fn list_questions(&self, class_id: i64) -> Result<Vec<QuestionItem>> {
        self.list_questions_impl(class_id).await
    }

    async fn find_question_by_text(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
    ) -> Result<Option<Question>> {
        self.find_question_by_text_impl(class_id, user_id, text)
            .await
    }

    async fn create_question(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
        author: &str,
    ) -> Result<Question> {
        self.create_question_impl(class_id, user_id, text, author)
            .await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(question_id).await
    }

    async fn update_question_status(
        &self,
        question_id: i64,
        status: QuestionStatus,
    ) -> Result<Option<Question>> {
        self.update_question_status_impl(question_id, status).await
    }

    async fn delete_question(&self, question_id: i64) -> Result<bool> {
        self.delete_question_impl(question_id).await
    }
}
