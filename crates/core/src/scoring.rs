//! Local quiz grading.
//!
//! The backend accepts a raw score, so the client grades the attempt before
//! submitting it. Grading compares the selected option text against the
//! option flagged `is_correct`.

use std::collections::BTreeMap;

use crate::model::Question;

/// Selected option text per question position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selections: BTreeMap<usize, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice, replacing any earlier choice for the same question.
    pub fn select(&mut self, position: usize, option_text: impl Into<String>) {
        self.selections.insert(position, option_text.into());
    }

    #[must_use]
    pub fn selected(&self, position: usize) -> Option<&str> {
        self.selections.get(&position).map(String::as_str)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }
}

/// Counts questions whose selected text matches the correct option's text.
///
/// Unanswered questions, and questions with no option flagged correct,
/// count as incorrect.
#[must_use]
pub fn score_answers(questions: &[Question], sheet: &AnswerSheet) -> u32 {
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(position, question)| {
            match (sheet.selected(*position), question.correct_option()) {
                (Some(selected), Some(correct)) => selected == correct.text,
                _ => false,
            }
        })
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}
