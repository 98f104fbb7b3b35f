use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{CourseId, CourseSummary};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SubmitState, ViewError, ViewState, actions, view_state_from_resource};
use crate::vm::{CourseDetailsVm, map_course_details};

const COURSES_LOGIN_MESSAGE: &str = "Please login to view courses.";
const COURSES_FAILED: &str = "Failed to fetch courses";
const COURSE_NOT_FOUND: &str = "Course not found";

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.courses();

    let resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            courses
                .list()
                .await
                .map_err(|err| ViewError::from_load(&err, COURSES_FAILED))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h1 { class: "view-title", "Courses" }
                Link { class: "btn btn-primary", to: Route::NewCourse {}, "Add New Course" }
            }
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(ViewError::LoginRequired) => rsx! {
                    p { class: "form-error", "{COURSES_LOGIN_MESSAGE}" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { "No courses yet." }
                    } else {
                        div { class: "course-grid",
                            for course in items {
                                CourseCard { course }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(course: CourseSummary) -> Element {
    rsx! {
        Link {
            class: "course-card",
            to: Route::CourseDetails { course_id: course.id.clone() },
            h2 { "{course.name}" }
        }
    }
}

#[component]
pub fn NewCourseView() -> Element {
    let form = use_course_name_form(CourseFormTarget::Create);
    rsx! {
        CourseNameFields { form, target: CourseFormTarget::Create }
    }
}

#[component]
pub fn CourseDetailsView(course_id: CourseId) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let courses = ctx.courses();
    let mut delete_state = use_signal(|| SubmitState::Idle);

    let id_for_resource = course_id.clone();
    let resource = use_resource(move || {
        let courses = courses.clone();
        let course_id = id_for_resource.clone();
        async move {
            let details = courses
                .get(&course_id)
                .await
                .map_err(|err| ViewError::from_load(&err, COURSE_NOT_FOUND))?;
            Ok::<_, ViewError>(map_course_details(&details))
        }
    });
    let state = view_state_from_resource(&resource);

    let on_delete = {
        let course_id = course_id.clone();
        move |_: MouseEvent| {
            if delete_state().is_submitting() {
                return;
            }
            let courses = ctx.courses();
            let course_id = course_id.clone();
            spawn(async move {
                delete_state.set(SubmitState::Submitting);
                match actions::delete_course(&courses, &course_id).await {
                    Ok(route) => {
                        delete_state.set(SubmitState::Idle);
                        let _ = navigator.push(route);
                    }
                    Err(err) => delete_state.set(SubmitState::Failed(err)),
                }
            });
        }
    };

    let delete = delete_state();
    rsx! {
        div { class: "page course-details-page",
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                },
                ViewState::Ready(course) => rsx! {
                    CourseSummaryPanel { course }
                    div { class: "course-actions",
                        Link {
                            class: "btn btn-primary",
                            to: Route::Quizzes { course_id: course_id.clone() },
                            "View Quizzes"
                        }
                        Link {
                            class: "btn btn-primary",
                            to: Route::FlashcardTopics { course_id: course_id.clone() },
                            "View Flashcards"
                        }
                        Link {
                            class: "btn btn-secondary",
                            to: Route::EditCourse { course_id: course_id.clone() },
                            "Edit Course"
                        }
                        button {
                            class: "btn btn-danger",
                            r#type: "button",
                            disabled: delete.is_submitting(),
                            onclick: on_delete,
                            "Delete Course"
                        }
                    }
                    if let Some(message) = delete.error_message() {
                        p { class: "form-error", "{message}" }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseSummaryPanel(course: CourseDetailsVm) -> Element {
    rsx! {
        h1 { class: "view-title", "{course.name}" }
        div { class: "course-stats",
            p { "Created: {course.created_at_str}" }
            p { "Quizzes: {course.quiz_count_label}" }
            p { "Average score: {course.average_score_label}" }
        }
        if !course.quizzes.is_empty() {
            ul { class: "course-quizzes",
                for quiz in course.quizzes.iter() {
                    li { key: "{quiz.id}",
                        Link {
                            to: Route::QuizDetails {
                                course_id: course.id.clone(),
                                quiz_id: quiz.id.clone(),
                            },
                            "{quiz.topic}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EditCourseView(course_id: CourseId) -> Element {
    let target = CourseFormTarget::Rename(course_id);
    let form = use_course_name_form(target.clone());
    rsx! {
        CourseNameFields { form, target }
    }
}

/// Which request a course name form sends.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CourseFormTarget {
    Create,
    Rename(CourseId),
}

impl CourseFormTarget {
    fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create New Course",
            Self::Rename(_) => "Edit Course",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Self::Create => "Course Name",
            Self::Rename(_) => "New Course Name",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create Course",
            Self::Rename(_) => "Update Course",
        }
    }
}

/// Signals behind a course name form. A failed submit leaves `name` as typed.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct CourseNameForm {
    pub name: Signal<String>,
    pub submit_state: Signal<SubmitState>,
    pub submit: Callback<()>,
}

pub(crate) fn use_course_name_form(target: CourseFormTarget) -> CourseNameForm {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let name = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let submit = use_callback(move |()| {
        if submit_state().is_submitting() {
            return;
        }
        let courses = ctx.courses();
        let target = target.clone();
        let name = name();
        spawn(async move {
            submit_state.set(SubmitState::Submitting);
            let outcome = match &target {
                CourseFormTarget::Create => actions::create_course(&courses, &name).await,
                CourseFormTarget::Rename(course_id) => {
                    actions::rename_course(&courses, course_id, &name).await
                }
            };
            match outcome {
                Ok(route) => {
                    submit_state.set(SubmitState::Idle);
                    let _ = navigator.push(route);
                }
                Err(err) => submit_state.set(SubmitState::Failed(err)),
            }
        });
    });

    CourseNameForm {
        name,
        submit_state,
        submit,
    }
}

#[component]
pub(crate) fn CourseNameFields(form: CourseNameForm, target: CourseFormTarget) -> Element {
    let mut name = form.name;
    let state = form.submit_state.cloned();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        form.submit.call(());
    };

    rsx! {
        div { class: "page course-form-page",
            h1 { class: "view-title", "{target.title()}" }
            if let Some(message) = state.error_message() {
                p { class: "form-error", "{message}" }
            }
            form { class: "form", onsubmit: on_submit,
                input {
                    r#type: "text",
                    placeholder: target.placeholder(),
                    required: true,
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    "{target.submit_label()}"
                }
            }
        }
    }
}
