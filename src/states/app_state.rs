use std::sync::{Arc, Mutex};

use crate::picker::QuestionPicker;
use crate::questions::Question;
use crate::states::correction::CorrectionState;

#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only for the server's lifetime.
    pub questions: Arc<Vec<Question>>,
    pub correction: Arc<Mutex<CorrectionState>>,
    pub picker: Arc<dyn QuestionPicker>,
}

impl AppState {
    pub fn new(questions: Vec<Question>, picker: Arc<dyn QuestionPicker>) -> Self {
        Self {
            questions: Arc::new(questions),
            correction: Arc::new(Mutex::new(CorrectionState::default())),
            picker,
        }
    }

    /// Draws one question uniformly at random, or `None` if the set is empty.
    pub fn pick_question(&self) -> Option<&Question> {
        if self.questions.is_empty() {
            return None;
        }
        let index = self.picker.pick_index(self.questions.len());
        self.questions.get(index)
    }
}
