//! 问题存储操作

use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::entity::users::Entity as Users;
use crate::errors::{ClassboardError, Result};
use crate::models::questions::{
    entities::{Question, QuestionStatus},
    responses::QuestionItem,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 列出班级问题，最新在前，提问者用户名已解析
    pub async fn list_questions_impl(&self, class_id: i64) -> Result<Vec<QuestionItem>> {
        let rows = Questions::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询问题列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(q, user)| {
                let username = user.map(|u| u.username).unwrap_or_default();
                let question = q.into_question();
                QuestionItem {
                    id: question.id,
                    text: question.text,
                    author: question.author,
                    status: question.status,
                    user_id: question.user_id,
                    username,
                    class_id: question.class_id,
                    created_at: question.created_at,
                    updated_at: question.updated_at,
                }
            })
            .collect())
    }

    /// 查找同一用户在同一班级的同文本问题
    pub async fn find_question_by_text_impl(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
    ) -> Result<Option<Question>> {
        let result = Questions::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::UserId.eq(user_id))
                    .add(Column::Text.eq(text)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询问题失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 创建问题，初始状态为 unanswered
    pub async fn create_question_impl(
        &self,
        class_id: i64,
        user_id: i64,
        text: &str,
        author: &str,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            text: Set(text.to_string()),
            author: Set(author.to_string()),
            status: Set(QuestionStatus::Unanswered.to_string()),
            user_id: Set(user_id),
            class_id: Set(class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| super::map_write_err("创建问题失败", e))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取问题
    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询问题失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 更新问题状态
    ///
    /// 以受影响行数判断问题是否存在，问题在检查与更新之间被并发
    /// 删除时同样返回 None。
    pub async fn update_question_status_impl(
        &self,
        question_id: i64,
        status: QuestionStatus,
    ) -> Result<Option<Question>> {
        let now = chrono::Utc::now().timestamp();

        let result = Questions::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(question_id))
            .exec(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("更新问题状态失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_question_by_id_impl(question_id).await
    }

    /// 删除问题
    pub async fn delete_question_impl(&self, question_id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(question_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("删除问题失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
