use quiz_core::model::{Quiz, QuizId, QuizListItem, QuizStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub id: QuizId,
    pub topic: String,
    pub taken: bool,
    pub status_label: &'static str,
    pub percentage_label: Option<String>,
}

impl From<&QuizListItem> for QuizRowVm {
    fn from(item: &QuizListItem) -> Self {
        let (taken, status_label, percentage_label) = match item.status() {
            QuizStatus::NotTaken => (false, "Not taken yet", None),
            QuizStatus::Completed { percentage } => {
                (true, "Quiz completed", Some(format!("{percentage:.0}%")))
            }
        };
        Self {
            id: item.id.clone(),
            topic: item.topic.clone(),
            taken,
            status_label,
            percentage_label,
        }
    }
}

#[must_use]
pub fn map_quiz_rows(items: &[QuizListItem]) -> Vec<QuizRowVm> {
    items.iter().map(QuizRowVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub position: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSectionVm {
    pub title: String,
    pub questions: Vec<QuestionVm>,
}

/// Every section with answers marked, for review.
#[must_use]
pub fn map_quiz_sections(quiz: &Quiz) -> Vec<QuizSectionVm> {
    quiz.sections
        .iter()
        .map(|section| QuizSectionVm {
            title: section.title.clone(),
            questions: map_questions(&section.questions),
        })
        .collect()
}

/// Questions offered when taking the quiz. Only the graded set is shown.
#[must_use]
pub fn map_attempt_questions(quiz: &Quiz) -> Vec<QuestionVm> {
    map_questions(quiz.gradable_questions())
}

fn map_questions(questions: &[quiz_core::model::Question]) -> Vec<QuestionVm> {
    questions
        .iter()
        .enumerate()
        .map(|(position, question)| QuestionVm {
            position,
            prompt: question.question.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionVm {
                    text: option.text.clone(),
                    correct: option.is_correct,
                })
                .collect(),
        })
        .collect()
}
