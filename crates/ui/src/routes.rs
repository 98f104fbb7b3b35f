use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::{CourseId, QuizId};

use crate::views::{
    CourseDetailsView, CoursesView, DeleteQuizView, EditCourseView, FlashcardTopicsView,
    FlashcardsView, GenerateFlashcardsView, GenerateQuizView, HomeView, LoginView, NewCourseView,
    QuizDetailsView, QuizListView, RegisterView, ScoresView, TakeQuizView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/new", NewCourseView)] NewCourse {},
        #[route("/courses/:course_id", CourseDetailsView)] CourseDetails { course_id: CourseId },
        #[route("/courses/:course_id/edit", EditCourseView)] EditCourse { course_id: CourseId },
        #[route("/courses/:course_id/quizzes", QuizListView)] Quizzes { course_id: CourseId },
        #[route("/courses/:course_id/quizzes/new", GenerateQuizView)] GenerateQuiz { course_id: CourseId },
        #[route("/courses/:course_id/quizzes/:quiz_id", QuizDetailsView)] QuizDetails { course_id: CourseId, quiz_id: QuizId },
        #[route("/courses/:course_id/quizzes/:quiz_id/start", TakeQuizView)] TakeQuiz { course_id: CourseId, quiz_id: QuizId },
        #[route("/courses/:course_id/quizzes/:quiz_id/delete", DeleteQuizView)] DeleteQuiz { course_id: CourseId, quiz_id: QuizId },
        #[route("/courses/:course_id/quizzes/:quiz_id/scores", ScoresView)] Scores { course_id: CourseId, quiz_id: QuizId },
        #[route("/courses/:course_id/flashcards", FlashcardTopicsView)] FlashcardTopics { course_id: CourseId },
        #[route("/courses/:course_id/flashcards/new", GenerateFlashcardsView)] GenerateFlashcards { course_id: CourseId },
        #[route("/courses/:course_id/flashcards/:topic", FlashcardsView)] Flashcards { course_id: CourseId, topic: String },
}

#[component]
fn Layout() -> Element {
    let year = Utc::now().year();
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer", "© {year} Quiz App. All rights reserved." }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Quiz App" }
            div { class: "navbar-links",
                Link { to: Route::Courses {}, "Courses" }
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
