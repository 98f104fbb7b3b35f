use quiz_core::model::Score;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub id: String,
    pub user_id: String,
    pub score: u32,
    pub submitted_at_str: String,
}

#[must_use]
pub fn map_score_rows(scores: &[Score]) -> Vec<ScoreRowVm> {
    scores
        .iter()
        .map(|score| ScoreRowVm {
            id: score.id.clone(),
            user_id: score.user_id.clone(),
            score: score.score,
            submitted_at_str: format_datetime(score.submitted_at),
        })
        .collect()
}
