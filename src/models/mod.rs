pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod user;

pub use course::Course;
pub use enrollment::Enrollment;
pub use lesson::Lesson;
pub use progress::Progress;
pub use quiz::Quiz;
pub use user::User;
