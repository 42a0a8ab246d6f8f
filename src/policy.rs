//! 集中式权限策略
//!
//! 路由层只负责认证与粗粒度角色过滤，真正的"谁能做什么"都收敛到这里，
//! 服务层在执行业务前调用 `authorize` 做最终裁决。

use crate::models::users::entities::UserRole;

/// 需要授权的业务动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateClass,
    ListClasses,
    JoinClass,
    LeaveClass,
    ManageTa,
    DeactivateClass,
    PostQuestion,
    TriageQuestion,
    ViewQuestions,
}

/// 判断指定角色能否执行指定动作
pub fn authorize(role: &UserRole, action: Action) -> bool {
    match action {
        // 仅教师：建班、查看名下班级、任免助教、停用班级
        Action::CreateClass | Action::ListClasses | Action::ManageTa | Action::DeactivateClass => {
            matches!(role, UserRole::Teacher)
        }
        // 仅学生：通过加入码进班、退班
        Action::JoinClass | Action::LeaveClass => matches!(role, UserRole::Student),
        // 教师与助教：问题状态流转
        Action::TriageQuestion => matches!(role, UserRole::Teacher | UserRole::Ta),
        // 所有已登录角色
        Action::PostQuestion | Action::ViewQuestions => true,
    }
}

/// 判断用户是否属于指定班级（提问、浏览问题等班级内操作的前置条件）
pub fn same_class(user_class_id: Option<i64>, class_id: i64) -> bool {
    user_class_id == Some(class_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_only_actions() {
        for action in [
            Action::CreateClass,
            Action::ListClasses,
            Action::ManageTa,
            Action::DeactivateClass,
        ] {
            assert!(authorize(&UserRole::Teacher, action));
            assert!(!authorize(&UserRole::Student, action));
            assert!(!authorize(&UserRole::Ta, action));
        }
    }

    #[test]
    fn test_student_only_actions() {
        for action in [Action::JoinClass, Action::LeaveClass] {
            assert!(authorize(&UserRole::Student, action));
            assert!(!authorize(&UserRole::Teacher, action));
            assert!(!authorize(&UserRole::Ta, action));
        }
    }

    #[test]
    fn test_triage_actions() {
        assert!(authorize(&UserRole::Teacher, Action::TriageQuestion));
        assert!(authorize(&UserRole::Ta, Action::TriageQuestion));
        assert!(!authorize(&UserRole::Student, Action::TriageQuestion));
    }

    #[test]
    fn test_shared_actions() {
        for role in [UserRole::Student, UserRole::Teacher, UserRole::Ta] {
            assert!(authorize(&role, Action::PostQuestion));
            assert!(authorize(&role, Action::ViewQuestions));
        }
    }

    #[test]
    fn test_same_class() {
        assert!(same_class(Some(3), 3));
        assert!(!same_class(Some(3), 4));
        assert!(!same_class(None, 3));
    }
}
