pub mod auth;
pub mod courses;
pub mod health;
pub mod home;
pub mod lessons;
pub mod quizzes;

pub use auth::{create_account, login, logout, show_login, show_register};
pub use courses::{enroll, view_lessons, view_quizzes};
pub use health::health_check;
pub use home::{dashboard, home};
pub use lessons::complete_lesson;
pub use quizzes::{show_quiz, submit_quiz};
