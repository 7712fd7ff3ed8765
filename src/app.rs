use axum::{routing::get, Router};

use crate::handlers::{correction_page, quiz_page, submit_answer};
use crate::states::app_state::AppState;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        // any non-POST method on / renders the quiz page
        .route("/", get(quiz_page).post(submit_answer).fallback(quiz_page))
        .route("/correction", get(correction_page))
        .with_state(state)
}
