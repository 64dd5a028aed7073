//! Server-rendered pages (maud markup)

pub mod auth;
pub mod courses;
pub mod pages;

use maud::{html, Markup, DOCTYPE};

use crate::flash::Flash;
use crate::models::User;

/// Shared page chrome: navigation and the pending flash notice
pub fn layout(title: &str, user: Option<&User>, flash: Option<Flash>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) " - CourseHub" }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    " | "
                    @if let Some(user) = user {
                        a href="/dashboard" { "Dashboard" }
                        " | "
                        span { "Signed in as " (user.username) }
                        " | "
                        a href="/logout" { "Log out" }
                    } @else {
                        a href="/login" { "Log in" }
                        " | "
                        a href="/register" { "Register" }
                    }
                }
                @if let Some(flash) = flash {
                    p class=(format!("notice notice-{}", flash.level.as_str())) {
                        (flash.message)
                    }
                }
                main { (content) }
            }
        }
    }
}
