/// The single shared slot holding the most recent wrong answer's details.
/// Overwritten on every incorrect submission; last writer wins, and the slot
/// is not scoped per client.
#[derive(Debug, Default)]
pub struct CorrectionState {
    pub question_text: String,
    pub correct_answer: String,
}
