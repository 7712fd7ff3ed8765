use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod app;
mod error;
mod handlers;
mod pages;
mod picker;
mod questions;
mod states;

use crate::app::build_app;
use crate::picker::RandomPicker;
use crate::states::app_state::AppState;

const QUESTIONS_FILE: &str = "questions.txt";
const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_server=info")),
        )
        .init();

    let questions = match questions::load(QUESTIONS_FILE) {
        Ok(questions) => questions,
        Err(err) => {
            tracing::error!("could not load {QUESTIONS_FILE}: {err}");
            process::exit(1);
        }
    };
    tracing::info!("loaded {} questions from {QUESTIONS_FILE}", questions.len());

    let state = AppState::new(questions, Arc::new(RandomPicker));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
