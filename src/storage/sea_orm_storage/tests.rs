//! 存储层集成测试
//!
//! 使用内存 SQLite 跑完整迁移，覆盖进班/停用/问题等跨表流程。

use super::SeaOrmStorage;
use crate::models::classes::entities::MemberRole;
use crate::models::questions::entities::QuestionStatus;
use crate::models::users::entities::{User, UserRole};

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::new_in_memory()
        .await
        .expect("in-memory storage")
}

async fn create_user(s: &SeaOrmStorage, username: &str, role: UserRole) -> User {
    s.create_user_impl(username, "hash", role)
        .await
        .expect("create user")
}

#[tokio::test]
async fn test_class_code_lookup_after_uppercasing() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher1", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "算法一班", "算法")
        .await
        .unwrap();

    // 加入码以大写存储，进班前把用户输入统一转大写即可大小写不敏感匹配
    let typed = format!("  {}  ", class.class_code.to_lowercase());
    let found = s
        .get_class_by_code_impl(&typed.trim().to_uppercase())
        .await
        .unwrap();
    assert_eq!(found.map(|c| c.id), Some(class.id));

    // 教师的 class_id 回引在建班事务内写入
    let teacher = s.get_user_by_id_impl(teacher.id).await.unwrap().unwrap();
    assert_eq!(teacher.class_id, Some(class.id));
}

#[tokio::test]
async fn test_duplicate_username_hits_unique_index() {
    let s = storage().await;
    create_user(&s, "alice", UserRole::Student).await;

    let err = s
        .create_user_impl("alice", "hash", UserRole::Student)
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_duplicate_join_hits_unique_index() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher2", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "物理二班", "物理")
        .await
        .unwrap();
    let student = create_user(&s, "student1", UserRole::Student).await;

    s.join_class_impl(student.id, class.id, MemberRole::Student)
        .await
        .unwrap();
    let err = s
        .join_class_impl(student.id, class.id, MemberRole::Student)
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_duplicate_question_hits_unique_index() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher3", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "化学三班", "化学")
        .await
        .unwrap();
    let student = create_user(&s, "student2", UserRole::Student).await;
    s.join_class_impl(student.id, class.id, MemberRole::Student)
        .await
        .unwrap();

    s.create_question_impl(class.id, student.id, "什么是共价键", "匿名")
        .await
        .unwrap();
    let err = s
        .create_question_impl(class.id, student.id, "什么是共价键", "匿名")
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());

    // 其他学生发同样的问题不受影响
    let other = create_user(&s, "student3", UserRole::Student).await;
    s.join_class_impl(other.id, class.id, MemberRole::Student)
        .await
        .unwrap();
    s.create_question_impl(class.id, other.id, "什么是共价键", "匿名")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deactivate_clears_all_back_references() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher4", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "生物四班", "生物")
        .await
        .unwrap();
    let s1 = create_user(&s, "student4", UserRole::Student).await;
    let s2 = create_user(&s, "student5", UserRole::Student).await;
    let ta = create_user(&s, "ta1", UserRole::Ta).await;
    for (id, role) in [
        (s1.id, MemberRole::Student),
        (s2.id, MemberRole::Student),
        (ta.id, MemberRole::Ta),
    ] {
        s.join_class_impl(id, class.id, role).await.unwrap();
    }

    assert!(s.deactivate_class_impl(class.id).await.unwrap());

    let class = s.get_class_by_id_impl(class.id).await.unwrap().unwrap();
    assert!(!class.is_active);
    for id in [teacher.id, s1.id, s2.id, ta.id] {
        let user = s.get_user_by_id_impl(id).await.unwrap().unwrap();
        assert_eq!(user.class_id, None);
    }

    // 成员记录保留，供教师回看
    assert_eq!(s.count_students_impl(class.id).await.unwrap(), 2);

    // 不存在的班级
    assert!(!s.deactivate_class_impl(99_999).await.unwrap());
}

#[tokio::test]
async fn test_leave_class_is_idempotent() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher5", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "历史五班", "历史")
        .await
        .unwrap();
    let ta = create_user(&s, "ta2", UserRole::Ta).await;
    s.join_class_impl(ta.id, class.id, MemberRole::Ta)
        .await
        .unwrap();

    assert!(s.leave_class_impl(ta.id, class.id).await.unwrap());
    let ta_after = s.get_user_by_id_impl(ta.id).await.unwrap().unwrap();
    assert_eq!(ta_after.class_id, None);

    // 第二次移除是无副作用的空操作
    assert!(!s.leave_class_impl(ta.id, class.id).await.unwrap());
    assert!(
        s.list_members_impl(class.id, Some(MemberRole::Ta))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_update_status_reports_missing_question_as_none() {
    let s = storage().await;
    let teacher = create_user(&s, "teacher6", UserRole::Teacher).await;
    let class = s
        .create_class_impl(teacher.id, "地理六班", "地理")
        .await
        .unwrap();
    let student = create_user(&s, "student6", UserRole::Student).await;
    s.join_class_impl(student.id, class.id, MemberRole::Student)
        .await
        .unwrap();
    let question = s
        .create_question_impl(class.id, student.id, "季风怎么形成", "匿名")
        .await
        .unwrap();

    let updated = s
        .update_question_status_impl(question.id, QuestionStatus::Answered)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, QuestionStatus::Answered);

    // 已删除（或从未存在）的问题返回 None 而非错误
    assert!(s.delete_question_impl(question.id).await.unwrap());
    let missing = s
        .update_question_status_impl(question.id, QuestionStatus::Important)
        .await
        .unwrap();
    assert!(missing.is_none());
}
