//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::class_members::{Column as MemberColumn, Entity as ClassMembers};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as Users,
};
use crate::errors::{ClassboardError, Result};
use crate::models::classes::entities::Class;
use crate::utils::class_code::{CLASS_CODE_MAX_ATTEMPTS, generate_class_code};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建班级
    ///
    /// 加入码随机生成并带上限重试直至未被占用；班级记录与教师的
    /// class_id 回引在同一事务内写入。
    pub async fn create_class_impl(
        &self,
        teacher_id: i64,
        class_name: &str,
        subject: &str,
    ) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("开启事务失败: {e}")))?;

        // 生成未被占用的加入码。理论上首次命中的概率极高，
        // 连续打满重试上限说明随机源异常，直接报错。
        let mut class_code = None;
        for _ in 0..CLASS_CODE_MAX_ATTEMPTS {
            let candidate = generate_class_code();
            let taken = Classes::find()
                .filter(Column::ClassCode.eq(&candidate))
                .one(&txn)
                .await
                .map_err(|e| {
                    ClassboardError::database_operation(format!("查询加入码占用失败: {e}"))
                })?;
            if taken.is_none() {
                class_code = Some(candidate);
                break;
            }
        }
        let class_code = class_code.ok_or_else(|| {
            ClassboardError::code_generation(format!(
                "连续 {CLASS_CODE_MAX_ATTEMPTS} 次未能生成唯一加入码"
            ))
        })?;

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            class_name: Set(class_name.to_string()),
            subject: Set(subject.to_string()),
            class_code: Set(class_code),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| super::map_write_err("创建班级失败", e))?;

        // 教师的 class_id 回引指向新班级
        let teacher_update = UserActiveModel {
            id: Set(teacher_id),
            class_id: Set(Some(result.id)),
            updated_at: Set(now),
            ..Default::default()
        };
        teacher_update
            .update(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("更新教师班级回引失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过加入码获取班级
    pub async fn get_class_by_code_impl(&self, class_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::ClassCode.eq(class_code))
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 获取教师当前活跃班级
    pub async fn get_active_class_by_teacher_impl(&self, teacher_id: i64) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询活跃班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出教师的全部班级（含历史班级），最新在前
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let result = Classes::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_class()).collect())
    }

    /// 停用班级
    ///
    /// 置 is_active=false，并在同一事务内清除教师与所有成员的 class_id
    /// 回引。成员记录与历史问题保留，供教师回看。
    pub async fn deactivate_class_impl(&self, class_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(class) = Classes::find_by_id(class_id)
            .one(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(false);
        };

        let model = ActiveModel {
            id: Set(class_id),
            is_active: Set(false),
            updated_at: Set(now),
            ..Default::default()
        };
        model
            .update(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("停用班级失败: {e}")))?;

        // 清除所有成员的 class_id 回引
        let member_ids: Vec<i64> = ClassMembers::find()
            .filter(MemberColumn::ClassId.eq(class_id))
            .all(&txn)
            .await
            .map_err(|e| ClassboardError::database_operation(format!("查询班级成员失败: {e}")))?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        let mut affected_users = member_ids;
        affected_users.push(class.teacher_id);

        Users::update_many()
            .col_expr(UserColumn::ClassId, sea_orm::sea_query::Expr::value(None::<i64>))
            .col_expr(UserColumn::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(UserColumn::Id.is_in(affected_users))
            .filter(UserColumn::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                ClassboardError::database_operation(format!("清除成员班级回引失败: {e}"))
            })?;

        txn.commit()
            .await
            .map_err(|e| ClassboardError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
