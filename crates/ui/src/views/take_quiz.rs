use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::{CourseId, Quiz, QuizId};
use quiz_core::scoring::AnswerSheet;

use crate::context::AppContext;
use crate::views::quizzes::QUIZ_NOT_FOUND;
use crate::views::{SubmitState, ViewError, ViewState, actions, view_state_from_resource};
use crate::vm::{QuestionVm, map_attempt_questions};

#[derive(Clone, Debug, PartialEq)]
struct AttemptData {
    quiz: Quiz,
    questions: Vec<QuestionVm>,
}

#[component]
pub fn TakeQuizView(course_id: CourseId, quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quizzes = ctx.quizzes();
    let answers = use_signal(AnswerSheet::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let id_for_resource = quiz_id.clone();
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let quiz_id = id_for_resource.clone();
        async move {
            let quiz = quizzes
                .get(&quiz_id)
                .await
                .map_err(|err| ViewError::from_load(&err, QUIZ_NOT_FOUND))?;
            let questions = map_attempt_questions(&quiz);
            Ok::<_, ViewError>(AttemptData { quiz, questions })
        }
    });
    let state = view_state_from_resource(&resource);
    let submit = submit_state();

    rsx! {
        div { class: "page take-quiz-page",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(data) => {
                    let AttemptData { quiz, questions } = data;
                    let title = attempt_title(&questions, &quiz);
                    let on_submit = {
                        let course_id = course_id.clone();
                        let quiz_id = quiz_id.clone();
                        move |_: MouseEvent| {
                            if submit_state().is_submitting() {
                                return;
                            }
                            let quizzes = ctx.quizzes();
                            let course_id = course_id.clone();
                            let quiz_id = quiz_id.clone();
                            let quiz = quiz.clone();
                            let sheet = answers();
                            spawn(async move {
                                submit_state.set(SubmitState::Submitting);
                                match actions::submit_quiz(&quizzes, &course_id, &quiz_id, &quiz, &sheet)
                                    .await
                                {
                                    Ok(route) => {
                                        submit_state.set(SubmitState::Idle);
                                        let _ = navigator.push(route);
                                    }
                                    Err(err) => submit_state.set(SubmitState::Failed(err)),
                                }
                            });
                        }
                    };
                    rsx! {
                        h1 { class: "view-title", "{title}" }
                        form { class: "quiz-form",
                            for question in questions {
                                QuestionField { question, answers }
                            }
                            if let Some(message) = submit.error_message() {
                                p { class: "form-error", "{message}" }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: submit.is_submitting(),
                                onclick: on_submit,
                                "Submit Quiz"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn attempt_title(questions: &[QuestionVm], quiz: &Quiz) -> String {
    if questions.is_empty() {
        format!("{} (no questions)", quiz.topic)
    } else {
        quiz.topic.clone()
    }
}

#[component]
fn QuestionField(question: QuestionVm, answers: Signal<AnswerSheet>) -> Element {
    let position = question.position;
    let selected = answers.read().selected(position).map(str::to_owned);
    rsx! {
        fieldset { class: "question",
            legend { "{question.prompt}" }
            for option in question.options.iter() {
                label { class: "question-option",
                    input {
                        r#type: "radio",
                        name: "question-{position}",
                        value: "{option.text}",
                        checked: selected.as_deref() == Some(option.text.as_str()),
                        onchange: {
                            let text = option.text.clone();
                            move |_| {
                                let mut answers = answers;
                                answers.write().select(position, text.clone());
                            }
                        },
                    }
                    "{option.text}"
                }
            }
        }
    }
}
