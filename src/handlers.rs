use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::pages;
use crate::states::app_state::AppState;

const NO_QUESTIONS: &str = "No questions are available right now. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub choice: String,
}

/// Serves one random question with its choices as a radio form. Routed for
/// every method on `/` except POST.
pub async fn quiz_page(State(state): State<AppState>) -> Response {
    match state.pick_question() {
        Some(question) => Html(pages::question_page(question)).into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, NO_QUESTIONS).into_response(),
    }
}

/// Handles an answer submission. The check intentionally draws a fresh
/// question instead of reusing the one the client was shown.
pub async fn submit_answer(
    State(state): State<AppState>,
    Form(form): Form<AnswerForm>,
) -> Response {
    let Some(question) = state.pick_question() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, NO_QUESTIONS).into_response();
    };

    if question.correct_answer == form.choice {
        return Redirect::to("/").into_response();
    }

    {
        let mut slot = state.correction.lock().unwrap();
        slot.question_text = question.text.clone();
        slot.correct_answer = question.correct_answer.clone();
    }
    Redirect::to("/correction").into_response()
}

/// Shows the last wrong answer's question and the right answer. The page
/// itself sends the client back to `/` after 3 seconds.
pub async fn correction_page(State(state): State<AppState>) -> Html<String> {
    let slot = state.correction.lock().unwrap();
    Html(pages::correction_page(&slot))
}
