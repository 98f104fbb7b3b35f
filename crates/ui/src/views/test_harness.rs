use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router as AxumRouter};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{AuthToken, CourseId, QuizId};
use serde_json::{Value, json};
use services::{
    ApiConfig, AppServices, AuthService, CourseService, FlashcardService, QuizService,
    SessionService,
};
use storage::repository::{SessionRepository, Storage};
use tokio::net::TcpListener;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{
    CourseDetailsView, CoursesView, DeleteQuizView, EditCourseView, FlashcardTopicsView,
    FlashcardsView, GenerateFlashcardsView, GenerateQuizView, HomeView, LoginView, NewCourseView,
    QuizDetailsView, QuizListView, RegisterView, ScoresView, TakeQuizView,
};

pub const GOOD_TOKEN: &str = "good-token";
pub const STALE_TOKEN: &str = "stale-token";

// ─── Stub backend ──────────────────────────────────────────────────────────────
//
// Serves only what the views and actions request. A middleware layer records
// every request as `"<METHOD> <path-and-query>"` before it is answered.

#[derive(Default)]
pub struct Recorder {
    requests: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub struct StubBackend {
    pub base_url: String,
    pub recorder: Arc<Recorder>,
}

pub async fn spawn_backend() -> StubBackend {
    let recorder = Arc::new(Recorder::default());
    let app = AxumRouter::new()
        .fallback(respond)
        .layer(middleware::from_fn_with_state(Arc::clone(&recorder), record));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    StubBackend {
        base_url: format!("http://{addr}"),
        recorder,
    }
}

async fn record(State(recorder): State<Arc<Recorder>>, request: Request, next: Next) -> Response {
    let uri = request.uri();
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string);
    recorder
        .requests
        .lock()
        .unwrap()
        .push(format!("{} {target}", request.method()));
    next.run(request).await
}

async fn respond(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path();
    let query = uri.query().unwrap_or("");
    let bearer_ok = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {GOOD_TOKEN}"));

    match (method.as_str(), path) {
        ("POST", "/token") if String::from_utf8_lossy(&body).contains("password=secret") => {
            ok(json!({"access_token": GOOD_TOKEN}))
        }
        ("POST", "/token") => failure(StatusCode::UNAUTHORIZED, "Incorrect username or password"),
        ("POST", "/register/") if has_params(query, &["username", "password"]) => {
            ok(json!({"msg": "User created successfully"}))
        }
        ("POST", "/register/") => field_required(),
        _ if !bearer_ok => failure(StatusCode::UNAUTHORIZED, "Could not validate credentials"),
        ("PUT", "/courses/c1") if has_params(query, &["new_name"]) => {
            ok(json!({"msg": "Course updated successfully"}))
        }
        ("PUT", "/courses/c1") => field_required(),
        ("POST", "/courses/") if query.contains("course_name=Dup") => {
            ok(json!({"error": "Course already exists"}))
        }
        _ => fixture(method.as_str(), path)
            .map_or_else(|| failure(StatusCode::NOT_FOUND, "Not Found"), ok),
    }
}

/// Canned success bodies for authorized requests.
fn fixture(method: &str, path: &str) -> Option<Value> {
    let body = match (method, path) {
        ("GET", "/courses/") => {
            json!([{"_id": "c1", "name": "Algebra"}, {"_id": "c2", "name": "History"}])
        }
        ("POST", "/courses/") => json!({"course_id": "c9"}),
        ("GET", "/courses/c1") => json!({
            "_id": "c1",
            "name": "Algebra",
            "created_at": "2024-05-01T10:00:00.123000",
            "quizzes": [{"_id": "q1", "topic": "Groups"}],
            "number_of_quizzes": 2,
            "average_score": 1.5
        }),
        ("GET", "/courses/c1/quizzes/") => json!({"quizzes": [
            {"_id": "q1", "course_id": "c1", "topic": "Groups", "percentage_score": null},
            {"_id": "q2", "course_id": "c1", "topic": "Rings", "percentage_score": 50.0}
        ]}),
        ("POST", "/courses/c1/generate-quiz/") => json!({"quiz": quiz_body()["questions"].clone()}),
        ("DELETE", "/courses/c1/quizzes/q1/") => json!({"msg": "Quiz deleted successfully"}),
        ("GET", "/quizzes/q1") => json!({"quiz": quiz_body()}),
        ("POST", "/quizzes/q1/scores/") => json!({"msg": "Score submitted successfully"}),
        ("GET", "/quizzes/q1/scores/") => json!({"scores": [{
            "_id": "s1",
            "quiz_id": "q1",
            "user_id": "u1",
            "score": 2,
            "submitted_at": "2024-05-02T08:30:00"
        }]}),
        ("GET", "/quizzes/q2/scores/") => json!({"scores": []}),
        ("GET", "/courses/c1/flashcards/topics/") => {
            json!({"topics": ["Linear algebra", "Groups"]})
        }
        ("GET", "/courses/c2/flashcards/topics/") => json!({"topics": []}),
        ("GET", "/courses/c1/flashcards/Linear%20algebra/") => json!({"flashcards": [
            {"front": "Vector space", "back": "A set closed under addition and scaling"},
            {"front": "Rank", "back": "Dimension of the column space"}
        ]}),
        _ => return None,
    };
    Some(body)
}

fn ok(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn failure(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({"detail": detail}))).into_response()
}

fn has_params(query: &str, names: &[&str]) -> bool {
    names.iter().all(|name| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, _)| key == *name)
    })
}

fn field_required() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"detail": [{"loc": ["query"], "msg": "field required"}]})),
    )
        .into_response()
}

/// Two sections; only "Basics" is gradable.
fn quiz_body() -> Value {
    let question = |text: &str, options: &[(&str, bool)]| {
        json!({
            "question": text,
            "options": options
                .iter()
                .map(|(option, correct)| json!({"text": option, "is_correct": correct}))
                .collect::<Vec<_>>()
        })
    };
    json!({
        "topic": "Groups",
        "questions": [
            {
                "title": "Basics",
                "questions": [
                    question("Identity of addition?", &[("0", true), ("1", false)]),
                    question("Identity of multiplication?", &[("0", false), ("1", true)])
                ]
            },
            {
                "title": "Bonus",
                "questions": [question("Is every group abelian?", &[("Yes", false), ("No", true)])]
            }
        ]
    })
}

// ─── App wiring ────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn courses(&self) -> Arc<CourseService> {
        self.services.courses()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn flashcards(&self) -> Arc<FlashcardService> {
        self.services.flashcards()
    }
}

fn test_app(backend: &StubBackend, storage: &Storage) -> Arc<dyn UiApp> {
    let config = ApiConfig::new(&backend.base_url).unwrap();
    Arc::new(TestApp {
        services: AppServices::from_storage(storage, config),
    })
}

async fn store_token(storage: &Storage, token: &str) {
    storage
        .session
        .save_token(&AuthToken::new(token).unwrap())
        .await
        .unwrap();
}

async fn session_storage(session: Session) -> Storage {
    let storage = Storage::in_memory();
    match session {
        Session::LoggedOut => {}
        Session::LoggedIn => store_token(&storage, GOOD_TOKEN).await,
        Session::Stale => store_token(&storage, STALE_TOKEN).await,
    }
    storage
}

/// Context for calling actions or hooks directly.
pub async fn test_context(backend: &StubBackend, session: Session) -> AppContext {
    let storage = session_storage(session).await;
    build_app_context(&test_app(backend, &storage))
}

// ─── View rendering ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Login,
    Register,
    Courses,
    NewCourse,
    CourseDetails(&'static str),
    EditCourse(&'static str),
    Quizzes(&'static str),
    GenerateQuiz(&'static str),
    QuizDetails(&'static str, &'static str),
    TakeQuiz(&'static str, &'static str),
    DeleteQuiz(&'static str, &'static str),
    Scores(&'static str, &'static str),
    FlashcardTopics(&'static str),
    GenerateFlashcards(&'static str),
    Flashcards(&'static str, &'static str),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn,
    Stale,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app = Arc::clone(&props.app);
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
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
    let view = use_context::<ViewKind>();
    let course = |id: &str| CourseId::new(id);
    let quiz = |id: &str| QuizId::new(id);
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::NewCourse => rsx! { NewCourseView {} },
        ViewKind::CourseDetails(c) => rsx! { CourseDetailsView { course_id: course(c) } },
        ViewKind::EditCourse(c) => rsx! { EditCourseView { course_id: course(c) } },
        ViewKind::Quizzes(c) => rsx! { QuizListView { course_id: course(c) } },
        ViewKind::GenerateQuiz(c) => rsx! { GenerateQuizView { course_id: course(c) } },
        ViewKind::QuizDetails(c, q) => {
            rsx! { QuizDetailsView { course_id: course(c), quiz_id: quiz(q) } }
        }
        ViewKind::TakeQuiz(c, q) => rsx! { TakeQuizView { course_id: course(c), quiz_id: quiz(q) } },
        ViewKind::DeleteQuiz(c, q) => {
            rsx! { DeleteQuizView { course_id: course(c), quiz_id: quiz(q) } }
        }
        ViewKind::Scores(c, q) => rsx! { ScoresView { course_id: course(c), quiz_id: quiz(q) } },
        ViewKind::FlashcardTopics(c) => rsx! { FlashcardTopicsView { course_id: course(c) } },
        ViewKind::GenerateFlashcards(c) => {
            rsx! { GenerateFlashcardsView { course_id: course(c) } }
        }
        ViewKind::Flashcards(c, t) => {
            rsx! { FlashcardsView { course_id: course(c), topic: t.to_string() } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: StubBackend,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Polls pending tasks until no view is loading, then renders.
    pub async fn render_settled(&mut self) -> String {
        for _ in 0..50 {
            let _ = tokio::time::timeout(Duration::from_millis(100), self.dom.wait_for_work()).await;
            drive_dom(&mut self.dom);
            let html = self.render();
            if !html.contains("Loading...") {
                return html;
            }
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, session: Session) -> ViewHarness {
    let storage = session_storage(session).await;
    setup_view_harness_with_storage(view, &storage).await
}

pub async fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let backend = spawn_backend().await;
    let app = test_app(&backend, storage);
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    let mut harness = ViewHarness { dom, backend };
    harness.rebuild();
    harness
}
