use quiz_core::model::{CourseDetails, CourseId, CourseQuizRef};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq)]
pub struct CourseDetailsVm {
    pub id: CourseId,
    pub name: String,
    pub created_at_str: String,
    pub quiz_count_label: String,
    pub average_score_label: String,
    pub quizzes: Vec<CourseQuizRef>,
}

#[must_use]
pub fn map_course_details(details: &CourseDetails) -> CourseDetailsVm {
    let quiz_count_label = match details.number_of_quizzes {
        1 => "1 quiz".to_string(),
        n => format!("{n} quizzes"),
    };
    CourseDetailsVm {
        id: details.id.clone(),
        name: details.name.clone(),
        created_at_str: format_date(details.created_at),
        quiz_count_label,
        average_score_label: format!("{:.2}", details.average_score),
        quizzes: details.quizzes.clone(),
    }
}
