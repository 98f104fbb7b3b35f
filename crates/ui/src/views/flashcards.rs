use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::{CourseId, Flashcard, FlashcardTopic};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FlipState, card_face};

const TOPICS_FAILED: &str = "Failed to fetch flashcard topics";
const FLASHCARDS_FAILED: &str = "Flashcards not found for the given topic";

#[component]
pub fn FlashcardTopicsView(course_id: CourseId) -> Element {
    let ctx = use_context::<AppContext>();
    let flashcards = ctx.flashcards();

    let id_for_resource = course_id.clone();
    let resource = use_resource(move || {
        let flashcards = flashcards.clone();
        let course_id = id_for_resource.clone();
        async move {
            flashcards
                .list_topics(&course_id)
                .await
                .map_err(|err| ViewError::from_load(&err, TOPICS_FAILED))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page flashcard-topics-page",
            header { class: "view-header",
                h1 { class: "view-title", "Flashcard Topics" }
                Link {
                    class: "btn btn-primary",
                    to: Route::GenerateFlashcards { course_id: course_id.clone() },
                    "Generate New Flashcards"
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
                ViewState::Ready(topics) => rsx! {
                    if topics.is_empty() {
                        p { "No flashcard topics found." }
                    } else {
                        ul { class: "topic-list",
                            for topic in topics {
                                TopicLink { course_id: course_id.clone(), topic }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn TopicLink(course_id: CourseId, topic: FlashcardTopic) -> Element {
    rsx! {
        li { class: "topic-row",
            Link {
                to: Route::Flashcards {
                    course_id,
                    topic: topic.as_str().to_string(),
                },
                "{topic}"
            }
        }
    }
}

#[component]
pub fn FlashcardsView(course_id: CourseId, topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let flashcards = ctx.flashcards();
    let flip_state = use_signal(FlipState::default);

    let topic_for_resource = FlashcardTopic::new(topic.clone());
    let resource = use_resource(move || {
        let flashcards = flashcards.clone();
        let course_id = course_id.clone();
        let topic = topic_for_resource.clone();
        async move {
            flashcards
                .list_by_topic(&course_id, &topic)
                .await
                .map_err(|err| ViewError::from_load(&err, FLASHCARDS_FAILED))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page flashcards-page",
            h1 { class: "view-title", "Flashcards: {topic}" }
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No flashcards found." }
                    } else {
                        div { class: "flashcard-grid",
                            for (index, card) in cards.into_iter().enumerate() {
                                FlashcardTile { index, card, flip_state }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn FlashcardTile(index: usize, card: Flashcard, flip_state: Signal<FlipState>) -> Element {
    let flipped = flip_state.read().is_flipped(index);
    let face = card_face(&card, flipped).to_string();
    rsx! {
        div {
            class: if flipped { "flashcard flashcard--back" } else { "flashcard" },
            onclick: move |_| {
                let mut flip_state = flip_state;
                flip_state.write().toggle(index);
            },
            p { "{face}" }
        }
    }
}
