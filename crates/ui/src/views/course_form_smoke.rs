use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::context::AppContext;

use super::courses::{CourseFormTarget, CourseNameFields, CourseNameForm, use_course_name_form};
use super::test_harness::{Session, StubBackend, drive_dom, spawn_backend, test_context};

#[derive(Clone, Default)]
struct HarnessHandles {
    form: Rc<RefCell<Option<CourseNameForm>>>,
}

impl HarnessHandles {
    fn form(&self) -> CourseNameForm {
        (*self.form.borrow()).expect("form registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    ctx: AppContext,
    target: CourseFormTarget,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn CourseFormRouterHarness(props: HarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let props = use_context::<HarnessProps>();
    let form = use_course_name_form(props.target.clone());
    if props.handles.form.borrow().is_none() {
        *props.handles.form.borrow_mut() = Some(form);
    }
    rsx! {
        CourseNameFields { form, target: props.target }
    }
}

struct FormHarness {
    dom: VirtualDom,
    backend: StubBackend,
    form: CourseNameForm,
}

impl FormHarness {
    async fn new(target: CourseFormTarget, session: Session) -> Self {
        let backend = spawn_backend().await;
        let ctx = test_context(&backend, session).await;
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            CourseFormRouterHarness,
            HarnessProps {
                ctx,
                target,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        let form = handles.form();
        Self { dom, backend, form }
    }

    fn submit(&mut self, name: &str) {
        let mut field = self.form.name;
        let submit = self.form.submit;
        self.dom.in_runtime(|| {
            field.set(name.to_string());
            submit.call(());
        });
        drive_dom(&mut self.dom);
    }

    /// Polls until the submit has finished, then renders.
    async fn render_after_submit(&mut self) -> String {
        for _ in 0..50 {
            let _ = tokio::time::timeout(Duration::from_millis(100), self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
            let finished = self
                .dom
                .in_runtime(|| !self.form.submit_state.peek().is_submitting());
            if finished && self.backend.recorder.count() > 0 {
                break;
            }
        }
        dioxus_ssr::render(&self.dom)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_create_keeps_typed_name_and_shows_detail() {
    let mut harness = FormHarness::new(CourseFormTarget::Create, Session::Stale).await;

    harness.submit("Algebra");
    let html = harness.render_after_submit().await;

    assert_eq!(
        harness.backend.recorder.requests(),
        vec!["POST /courses/?course_name=Algebra"]
    );
    assert!(html.contains("value=\"Algebra\""), "name cleared in {html}");
    assert!(
        html.contains("Could not validate credentials"),
        "missing detail in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn logged_out_create_asks_for_login_and_keeps_name() {
    let mut harness = FormHarness::new(CourseFormTarget::Create, Session::LoggedOut).await;

    harness.submit("Algebra");
    for _ in 0..10 {
        let _ = tokio::time::timeout(Duration::from_millis(50), harness.dom.wait_for_work()).await;
        drive_dom(&mut harness.dom);
    }
    let html = dioxus_ssr::render(&harness.dom);

    assert!(html.contains("Please login first."), "missing login in {html}");
    assert!(html.contains("value=\"Algebra\""), "name cleared in {html}");
    assert_eq!(harness.backend.recorder.count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn rename_form_renders_edit_labels() {
    let harness = FormHarness::new(
        CourseFormTarget::Rename(quiz_core::model::CourseId::new("c1")),
        Session::LoggedIn,
    )
    .await;
    let html = dioxus_ssr::render(&harness.dom);

    assert!(html.contains("Edit Course"), "missing title in {html}");
    assert!(html.contains("New Course Name"), "missing placeholder in {html}");
    assert!(html.contains("Update Course"), "missing submit in {html}");
}
