pub mod auth;

pub mod classes;

pub mod questions;

pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use questions::configure_questions_routes;
