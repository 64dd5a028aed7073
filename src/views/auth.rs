use maud::{html, Markup};

use crate::flash::Flash;
use crate::views::layout;

/// Registration form; `error` re-displays a validation or conflict message
pub fn register(flash: Option<Flash>, error: Option<&str>) -> Markup {
    let content = html! {
        h1 { "Register" }
        @if let Some(error) = error {
            p class="notice notice-danger" { (error) }
        }
        form method="POST" action="/register" {
            p { input name="username" type="text" placeholder="Username" required; }
            p { input name="email" type="email" placeholder="Email" required; }
            p { input name="password" type="password" placeholder="Password" required; }
            p { input name="confirm_password" type="password" placeholder="Confirm password" required; }
            button type="submit" { "Register" }
        }
        p { "Already have an account? " a href="/login" { "Log in" } }
    };
    layout("Register", None, flash, content)
}

/// Login form; `error` re-displays an invalid-credentials message
pub fn login(flash: Option<Flash>, error: Option<&str>) -> Markup {
    let content = html! {
        h1 { "Log in" }
        @if let Some(error) = error {
            p class="notice notice-danger" { (error) }
        }
        form method="POST" action="/login" {
            p { input name="email" type="email" placeholder="Email" required; }
            p { input name="password" type="password" placeholder="Password" required; }
            button type="submit" { "Log in" }
        }
        p { "New here? " a href="/register" { "Register" } }
    };
    layout("Log in", None, flash, content)
}
