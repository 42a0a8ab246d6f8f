//! 班级成员存储操作

use super::SeaOrmStorage;
use crate::entity::class_members::{ActiveModel, Column, Entity as ClassMembers};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{ClassboardError, Result};
use crate::models::classes::entities::{ClassMember, MemberInfo, MemberRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 加入班级
    ///
    /// 成员记录与用户的 class_id 回引在同一事务内写入。
    /// (class_id, user_id) 唯一索引兜底并发重复加入。
    pub async fn join_class_impl(
        &self,
        user_id: i64,
        class_id: i64,
        role: MemberRole,
    ) -> Result<ClassMember> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| super::map_write_err("加入班级失败", e))?;

        let user_update = UserActiveModel {
            id: Set(user_id),
            class_id: Set(Some(class_id)),
            updated_at: Set(now),
            ..Default::default()
        };
        user_update
            .update(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("更新用户班级回引失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_class_member())
    }

    /// 离开班级
    ///
    /// 删除成员记录并清除 class_id 回引。没有成员记录时返回 false，
    /// 不视为错误（幂等）。
    pub async fn leave_class_impl(&self, user_id: i64, class_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("开启事务失败: {e}")))?;

        let result = ClassMembers::delete_many()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("离开班级失败: {e}")))?;

        if result.rows_affected > 0 {
            // 仅当回引仍指向本班级时才清除，避免误伤已加入其他班级的用户
            let user = Users::find_by_id(user_id)
                .one(&txn)
                .await
                .map_err(|e| ClassboardError::database_operation(format!("查询用户失败: {e}")))?;
            if let Some(user) = user
                && user.class_id == Some(class_id)
            {
                let user_update = UserActiveModel {
                    id: Set(user_id),
                    class_id: Set(None),
                    updated_at: Set(now),
                    ..Default::default()
                };
                user_update.update(&txn).await.map_err(|e| {
                    ClassboardError::database_operation(format!("清除用户班级回引失败: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取用户在班级中的成员记录
    pub async fn get_membership_impl(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassMember>> {
        let result = ClassMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.map(|m| m.into_class_member()))
    }

    /// 列出班级成员（可按成员角色过滤），按加入时间排序
    pub async fn list_members_impl(
        &self,
        class_id: i64,
        role: Option<MemberRole>,
    ) -> Result<Vec<MemberInfo>> {
        let mut select = ClassMembers::find().filter(Column::ClassId.eq(class_id));

        if let Some(role) = role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        let rows = select
            .order_by_asc(Column::JoinedAt)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                user.map(|u| MemberInfo {
                    id: member.user_id,
                    username: u.username,
                })
            })
            .collect())
    }

    /// 统计班级学生数
    pub async fn count_students_impl(&self, class_id: i64) -> Result<i64> {
        let count = ClassMembers::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Role.eq(MemberRole::Student.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("统计班级学生数失败: {e}")))?;

        Ok(count as i64)
    }
}
