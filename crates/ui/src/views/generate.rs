use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::CourseId;

use crate::context::AppContext;
use crate::views::{SubmitState, actions};
use crate::vm::{GenerationForm, GenerationKind};

#[component]
pub fn GenerateQuizView(course_id: CourseId) -> Element {
    rsx! { GenerationPage { course_id, kind: GenerationKind::Quiz } }
}

#[component]
pub fn GenerateFlashcardsView(course_id: CourseId) -> Element {
    rsx! { GenerationPage { course_id, kind: GenerationKind::Flashcards } }
}

/// Upload form shared by quiz and flashcard generation.
///
/// The document is picked by path and read when the form is submitted.
#[component]
fn GenerationPage(course_id: CourseId, kind: GenerationKind) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut form = use_signal(|| GenerationForm::new(kind));
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submit_state().is_submitting() {
            return;
        }
        let ctx = ctx.clone();
        let course_id = course_id.clone();
        let form_value = form();
        spawn(async move {
            submit_state.set(SubmitState::Submitting);
            match actions::generate(&ctx, kind, &course_id, &form_value).await {
                Ok(route) => {
                    submit_state.set(SubmitState::Idle);
                    let _ = navigator.push(route);
                }
                Err(err) => submit_state.set(SubmitState::Failed(err)),
            }
        });
    };

    let state = submit_state();
    let current = form();
    rsx! {
        div { class: "page generate-page",
            h1 { class: "view-title", "{kind.title()}" }
            if let Some(message) = state.error_message() {
                p { class: "form-error", "{message}" }
            }
            form { class: "form", onsubmit: on_submit,
                input {
                    r#type: "text",
                    placeholder: "Path to document",
                    value: "{current.file_path}",
                    oninput: move |evt| form.write().file_path = evt.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "{kind.topic_placeholder()}",
                    required: true,
                    value: "{current.topic}",
                    oninput: move |evt| form.write().topic = evt.value(),
                }
                input {
                    r#type: "number",
                    min: "1",
                    placeholder: "{kind.count_placeholder()}",
                    required: true,
                    value: "{current.count}",
                    oninput: move |evt| form.write().count = evt.value(),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    if state.is_submitting() { "Generating..." } else { "{kind.title()}" }
                }
            }
        }
    }
}
