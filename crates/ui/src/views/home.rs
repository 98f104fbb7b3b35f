use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            h1 { class: "view-title", "Welcome to Quiz App" }
            p { class: "view-subtitle",
                "Generate AI-powered quizzes and track your learning progress."
            }
            div { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::Register {}, "Get Started" }
                Link { class: "btn btn-secondary", to: Route::Courses {}, "View Courses" }
            }
        }
    }
}
