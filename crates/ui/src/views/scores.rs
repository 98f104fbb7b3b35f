use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::{CourseId, QuizId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_score_rows;

const SCORES_FAILED: &str = "Scores not found";

#[component]
pub fn ScoresView(course_id: CourseId, quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quizzes();

    let id_for_resource = quiz_id.clone();
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let quiz_id = id_for_resource.clone();
        async move {
            let scores = quizzes
                .list_scores(&quiz_id)
                .await
                .map_err(|err| ViewError::from_load(&err, SCORES_FAILED))?;
            Ok::<_, ViewError>(map_score_rows(&scores))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page scores-page",
            h1 { class: "view-title", "Quiz Scores" }
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { "No scores found." }
                    } else {
                        ul { class: "score-list",
                            for row in rows {
                                li { key: "{row.id}", class: "score-row",
                                    p { "User ID: {row.user_id}" }
                                    p { "Score: {row.score}" }
                                    p { "Submitted At: {row.submitted_at_str}" }
                                }
                            }
                        }
                    }
                },
            }
            Link { class: "btn btn-secondary", to: Route::Quizzes { course_id }, "Back to Quizzes" }
        }
    }
}
