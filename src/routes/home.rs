use axum::extract::State;
use maud::Markup;
use tower_cookies::Cookies;

use crate::db::{courses, enrollments};
use crate::error::Result;
use crate::{flash, session, views, AppState};

/// GET / — public course catalog
///
/// The only personalization is the navigation bar; the listing itself is
/// identical for visitors and logged-in users.
pub async fn home(State(state): State<AppState>, cookies: Cookies) -> Result<Markup> {
    let user = session::current_user(&state.pool, &cookies).await?;
    let all = courses::all(&state.pool).await?;
    let notice = flash::take(&cookies);
    Ok(views::pages::home(user.as_ref(), notice, &all))
}

/// GET /dashboard — full catalog plus the user's enrolled courses
pub async fn dashboard(State(state): State<AppState>, cookies: Cookies) -> Result<Markup> {
    let user = session::require_user(&state.pool, &cookies).await?;
    let all = courses::all(&state.pool).await?;
    let enrolled = enrollments::courses_for_user(&state.pool, user.id).await?;
    let notice = flash::take(&cookies);
    Ok(views::pages::dashboard(&user, notice, &all, &enrolled))
}
