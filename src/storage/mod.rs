use std::sync::Arc;

use crate::models::{
    classes::entities::{Class, ClassMember, MemberInfo, MemberRole},
    questions::{
        entities::{Question, QuestionStatus},
        responses::QuestionItem,
    },
    users::entities::{User, UserRole},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password_hash 已由服务层哈希）
    async fn create_user(&self, username: &str, password_hash: &str, role: UserRole)
    -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// 班级管理方法
    // 创建班级，生成唯一加入码，并在同一事务内更新教师的 class_id 回引
    async fn create_class(&self, teacher_id: i64, class_name: &str, subject: &str)
    -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过加入码获取班级信息
    async fn get_class_by_code(&self, class_code: &str) -> Result<Option<Class>>;
    // 获取教师当前活跃的班级
    async fn get_active_class_by_teacher(&self, teacher_id: i64) -> Result<Option<Class>>;
    // 列出教师的全部班级（含历史班级），按创建时间倒序
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 停用班级：置 is_active=false 并清除所有成员和教师的 class_id 回引
    async fn deactivate_class(&self, class_id: i64) -> Result<bool>;

    /// 班级成员管理方法
    // 加入班级（成员记录 + 用户 class_id 回引在同一事务内写入）
    async fn join_class(&self, user_id: i64, class_id: i64, role: MemberRole)
    -> Result<ClassMember>;
    // 离开班级（删除成员记录并清除 class_id 回引）
    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool>;
    // 获取用户在班级中的成员记录
    async fn get_membership(&self, user_id: i64, class_id: i64) -> Result<Option<ClassMember>>;
    // 列出班级成员（可按成员角色过滤），已解析用户名
    async fn list_members(
        &self,
        class_id: i64,
        role: Option<MemberRole>,
    ) -> Result<Vec<MemberInfo>>;
    // 统计班级学生数
    async fn count_students(&self, class_id: i64) -> Result<i64>;

    /// 问题管理方法
    // 列出班级问题（最新在前），已解析提问者用户名
    async fn list_questions(&self, class_id: i64) -> Result<Vec<QuestionItem>>;
    // 查找同一用户在同一班级的同文本问题（重复提问预检）
    async fn find_question_by_text(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
    ) -> Result<Option<Question>>;
    // 创建问题
    async fn create_question(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
        author: &str,
    ) -> Result<Question>;
    // 通过ID获取问题
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;
    // 更新问题状态
    async fn update_question_status(
        &self,
        question_id: i64,
        status: QuestionStatus,
    ) -> Result<Option<Question>>;
    // 删除问题
    async fn delete_question(&self, question_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
