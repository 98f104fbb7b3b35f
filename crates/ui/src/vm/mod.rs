mod course_vm;
mod flashcard_vm;
mod generation_vm;
mod quiz_vm;
mod score_vm;
mod time_fmt;

pub use course_vm::{CourseDetailsVm, map_course_details};
pub use flashcard_vm::{FlipState, card_face};
pub use generation_vm::{GenerationForm, GenerationKind, MISSING_FILE_MESSAGE};
pub use quiz_vm::{
    OptionVm, QuestionVm, QuizRowVm, QuizSectionVm, map_attempt_questions, map_quiz_rows,
    map_quiz_sections,
};
pub use score_vm::{ScoreRowVm, map_score_rows};
pub use time_fmt::{format_date, format_datetime};
