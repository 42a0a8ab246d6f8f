pub use super::class_members::Entity as ClassMembers;
pub use super::classes::Entity as Classes;
pub use super::questions::Entity as Questions;
pub use super::users::Entity as Users;
