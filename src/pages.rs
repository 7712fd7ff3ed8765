use std::fmt::Write;

use crate::questions::Question;
use crate::states::correction::CorrectionState;

/// Seconds the correction page stays up before sending the client back.
pub const CORRECTION_DELAY_SECS: u32 = 3;

fn page_head(title: &str, extra: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         {extra}<title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/style.css\">\n\
         </head>\n<body>\n"
    )
}

pub fn question_page(question: &Question) -> String {
    let mut html = page_head("Quiz Game", "");
    let _ = write!(
        html,
        "<h1>Quiz Game</h1>\n<div id=\"question-container\">\n\
         <p id=\"question-text\">{}</p>\n\
         <form id=\"choices-form\" method=\"post\">\n<div id=\"choices\">\n",
        question.text
    );
    for choice in &question.choices {
        let _ = writeln!(
            html,
            "<input type=\"radio\" name=\"choice\" value=\"{choice}\">{choice}<br>"
        );
    }
    html.push_str(
        "</div>\n<button type=\"submit\">Submit</button>\n</form>\n</div>\n</body>\n</html>",
    );
    html
}

/// The meta refresh sends the client back to the quiz after the delay, so the
/// serving task never sleeps.
pub fn correction_page(correction: &CorrectionState) -> String {
    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{CORRECTION_DELAY_SECS};url=/\">\n"
    );
    let mut html = page_head("Correction", &refresh);
    let _ = write!(
        html,
        "<h1>Correction</h1>\n<div id=\"correction-container\">\n\
         <p>Incorrect question: {}</p>\n<p>Correct answer: {}</p>\n\
         </div>\n</body>\n</html>",
        correction.question_text, correction.correct_answer
    );
    html
}
