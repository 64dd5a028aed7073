use maud::{html, Markup};

use crate::flash::Flash;
use crate::models::{Course, User};
use crate::views::layout;

/// Public course catalog
pub fn home(user: Option<&User>, flash: Option<Flash>, courses: &[Course]) -> Markup {
    let content = html! {
        h1 { "All courses" }
        @if courses.is_empty() {
            p { "No courses available yet." }
        } @else {
            ul {
                @for course in courses {
                    li {
                        strong { (course.title) }
                        " - " (course.description)
                    }
                }
            }
        }
    };
    layout("Courses", user, flash, content)
}

/// Per-user dashboard: full catalog plus the user's memberships
pub fn dashboard(
    user: &User,
    flash: Option<Flash>,
    all_courses: &[Course],
    enrolled: &[Course],
) -> Markup {
    let content = html! {
        h1 { "Dashboard" }

        h2 { "My courses" }
        @if enrolled.is_empty() {
            p { "You are not enrolled in any courses yet." }
        } @else {
            ul {
                @for course in enrolled {
                    li {
                        strong { (course.title) }
                        " - "
                        a href=(format!("/courses/{}/lessons", course.id)) { "Lessons" }
                        " | "
                        a href=(format!("/courses/{}/quizzes", course.id)) { "Quizzes" }
                    }
                }
            }
        }

        h2 { "All courses" }
        ul {
            @for course in all_courses {
                li {
                    strong { (course.title) }
                    " - " (course.description)
                    " "
                    a href=(format!("/courses/{}/enroll", course.id)) { "Enroll" }
                }
            }
        }
    };
    layout("Dashboard", Some(user), flash, content)
}
