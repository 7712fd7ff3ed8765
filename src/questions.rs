use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;

/// One quiz item. Immutable after load; `choices` may be empty if the source
/// file omits `C:` lines for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            choices: Vec::new(),
            correct_answer: String::new(),
        }
    }
}

/// Loads the question file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Question>, LoadError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Line-oriented scan:
/// - `Q:` flushes the question being accumulated (if it has text) and starts
///   a fresh one with the trimmed remainder as its text
/// - `A:` sets the current question's answer; last one before the next `Q:` wins
/// - `C:` appends a choice, in order
/// - anything else is ignored, including `A:`/`C:` lines before the first `Q:`
fn parse(reader: impl BufRead) -> Result<Vec<Question>, LoadError> {
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for line in reader.lines() {
        let line = line?;
        if let Some(rest) = line.strip_prefix("Q:") {
            if let Some(prev) = current.take() {
                if !prev.text.is_empty() {
                    questions.push(prev);
                }
            }
            current = Some(Question::new(rest));
        } else if let Some(rest) = line.strip_prefix("A:") {
            if let Some(q) = current.as_mut() {
                q.correct_answer = rest.trim().to_string();
            }
        } else if let Some(rest) = line.strip_prefix("C:") {
            if let Some(q) = current.as_mut() {
                q.choices.push(rest.trim().to_string());
            }
        }
    }

    if let Some(last) = current {
        if !last.text.is_empty() {
            questions.push(last);
        }
    }

    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::*;

    fn parse_str(input: &str) -> Result<Vec<Question>, LoadError> {
        parse(Cursor::new(input))
    }

    #[test]
    fn single_block() {
        let questions = parse_str("Q: 2+2?\nC: 3\nC: 4\nA: 4\n").unwrap();
        assert_eq!(
            questions,
            vec![Question {
                text: "2+2?".to_string(),
                choices: vec!["3".to_string(), "4".to_string()],
                correct_answer: "4".to_string(),
            }]
        );
    }

    #[test]
    fn blocks_keep_file_order() {
        let questions = parse_str(
            "Q: first\nA: a\nQ: second\nA: b\nQ: third\nA: c\n",
        )
        .unwrap();
        let texts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn choices_keep_line_order() {
        let questions = parse_str("Q: pick\nC:  b \nC: a\nC: c\n").unwrap();
        assert_eq!(questions[0].choices, vec!["b", "a", "c"]);
    }

    #[test]
    fn last_answer_line_wins() {
        let questions = parse_str("Q: q1\nA: wrong\nA: right\nQ: q2\nA: other\n").unwrap();
        assert_eq!(questions[0].correct_answer, "right");
        assert_eq!(questions[1].correct_answer, "other");
    }

    #[test]
    fn lines_before_first_question_are_dropped() {
        let questions = parse_str("C: stray\nA: stray\nQ: real\nC: yes\nA: yes\n").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].choices, vec!["yes"]);
        assert_eq!(questions[0].correct_answer, "yes");
    }

    #[test]
    fn untagged_lines_are_ignored() {
        let questions = parse_str("# comment\nQ: q\nsome note\nC: x\n\nA: x\n").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].choices, vec!["x"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_str(""), Err(LoadError::Empty)));
        assert!(matches!(
            parse_str("no tags here\njust prose\n"),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn question_without_text_is_dropped() {
        let questions = parse_str("Q:\nC: orphan\nQ: kept\nA: k\n").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "kept");
        assert!(questions[0].choices.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("does-not-exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Q: capital of France?\nC: Paris\nC: Lyon\nA: Paris\n").unwrap();
        let questions = load(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "Paris");
    }
}
