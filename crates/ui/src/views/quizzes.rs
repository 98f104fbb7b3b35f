use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{CourseId, QuizId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SubmitState, ViewError, ViewState, actions, view_state_from_resource};
use crate::vm::{QuizRowVm, QuizSectionVm, map_quiz_rows, map_quiz_sections};

const QUIZZES_FAILED: &str = "Failed to fetch quizzes";
pub(crate) const QUIZ_NOT_FOUND: &str = "Quiz not found";

#[component]
pub fn QuizListView(course_id: CourseId) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quizzes();

    let id_for_resource = course_id.clone();
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let course_id = id_for_resource.clone();
        async move {
            let items = quizzes
                .list_for_course(&course_id)
                .await
                .map_err(|err| ViewError::from_load(&err, QUIZZES_FAILED))?;
            Ok::<_, ViewError>(map_quiz_rows(&items))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quizzes-page",
            header { class: "view-header",
                h1 { class: "view-title", "Quizzes" }
                Link {
                    class: "btn btn-primary",
                    to: Route::GenerateQuiz { course_id: course_id.clone() },
                    "Generate New Quiz"
                }
            }
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
                        p { "No quizzes yet." }
                    } else {
                        ul { class: "quiz-list",
                            for row in rows {
                                QuizRow { course_id: course_id.clone(), row }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn QuizRow(course_id: CourseId, row: QuizRowVm) -> Element {
    // Untaken quizzes open straight into an attempt.
    let target = if row.taken {
        Route::QuizDetails {
            course_id: course_id.clone(),
            quiz_id: row.id.clone(),
        }
    } else {
        Route::TakeQuiz {
            course_id: course_id.clone(),
            quiz_id: row.id.clone(),
        }
    };
    rsx! {
        li { class: "quiz-row",
            Link { class: "quiz-topic", to: target, "{row.topic}" }
            p { class: "quiz-status", "{row.status_label}" }
            if let Some(percentage) = row.percentage_label.as_ref() {
                p { class: "quiz-percentage", "Score: {percentage}" }
            }
            div { class: "quiz-links",
                Link {
                    to: Route::Scores {
                        course_id: course_id.clone(),
                        quiz_id: row.id.clone(),
                    },
                    "Scores"
                }
                Link {
                    to: Route::DeleteQuiz {
                        course_id: course_id.clone(),
                        quiz_id: row.id.clone(),
                    },
                    "Delete"
                }
            }
        }
    }
}

#[component]
pub fn QuizDetailsView(course_id: CourseId, quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = ctx.quizzes();

    let id_for_resource = quiz_id.clone();
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let quiz_id = id_for_resource.clone();
        async move {
            let quiz = quizzes
                .get(&quiz_id)
                .await
                .map_err(|err| ViewError::from_load(&err, QUIZ_NOT_FOUND))?;
            Ok::<_, ViewError>((quiz.topic.clone(), map_quiz_sections(&quiz)))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz-details-page",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready((topic, sections)) => rsx! {
                    h1 { class: "view-title", "{topic}" }
                    for section in sections {
                        SectionReview { section }
                    }
                    div { class: "quiz-actions",
                        Link {
                            class: "btn btn-primary",
                            to: Route::TakeQuiz {
                                course_id: course_id.clone(),
                                quiz_id: quiz_id.clone(),
                            },
                            "Retake Quiz"
                        }
                        Link {
                            class: "btn btn-secondary",
                            to: Route::Scores {
                                course_id: course_id.clone(),
                                quiz_id: quiz_id.clone(),
                            },
                            "View Scores"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn SectionReview(section: QuizSectionVm) -> Element {
    rsx! {
        section { class: "quiz-section",
            h2 { "{section.title}" }
            ol {
                for question in section.questions.iter() {
                    li { key: "{question.position}",
                        p { class: "question-prompt", "{question.prompt}" }
                        ul { class: "question-options",
                            for option in question.options.iter() {
                                li {
                                    class: if option.correct { "option option--correct" } else { "option" },
                                    "{option.text}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteQuizView(course_id: CourseId, quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut delete_state = use_signal(|| SubmitState::Idle);

    let on_delete = {
        let course_id = course_id.clone();
        move |_: MouseEvent| {
            if delete_state().is_submitting() {
                return;
            }
            let quizzes = ctx.quizzes();
            let course_id = course_id.clone();
            let quiz_id = quiz_id.clone();
            spawn(async move {
                delete_state.set(SubmitState::Submitting);
                match actions::delete_quiz(&quizzes, &course_id, &quiz_id).await {
                    Ok(route) => {
                        delete_state.set(SubmitState::Idle);
                        let _ = navigator.push(route);
                    }
                    Err(err) => delete_state.set(SubmitState::Failed(err)),
                }
            });
        }
    };

    let state = delete_state();
    rsx! {
        div { class: "page delete-quiz-page",
            h1 { class: "view-title", "Delete Quiz" }
            p { "This removes the quiz and cannot be undone." }
            if let Some(message) = state.error_message() {
                p { class: "form-error", "{message}" }
            }
            div { class: "quiz-actions",
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: state.is_submitting(),
                    onclick: on_delete,
                    "Delete Quiz"
                }
                Link {
                    class: "btn btn-secondary",
                    to: Route::Quizzes { course_id },
                    "Cancel"
                }
            }
        }
    }
}
