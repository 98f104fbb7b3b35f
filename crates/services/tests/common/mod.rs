//! Minimal stand-in for the quiz backend.
//!
//! Every request is recorded as `"<METHOD> <path-and-query>"` so tests can
//! assert on exactly what went over the wire.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const GOOD_TOKEN: &str = "good-token";

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
    let app = Router::new()
        .fallback(handle)
        .with_state(Arc::clone(&recorder));
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

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

/// Undecoded value of `name` in a query string.
fn query_value<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
}

/// Plain query parameters are required, as the backend's validation reports.
fn field_required() -> Response {
    reply(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({"detail": [{"loc": ["query"], "msg": "field required", "type": "value_error.missing"}]}),
    )
}

fn quiz_body() -> Value {
    json!({
        "topic": "Groups",
        "questions": [{
            "title": "Basics",
            "questions": [
                {
                    "question": "Identity of addition?",
                    "options": [
                        {"text": "0", "is_correct": true},
                        {"text": "1", "is_correct": false}
                    ]
                },
                {
                    "question": "Identity of multiplication?",
                    "options": [
                        {"text": "0", "is_correct": false},
                        {"text": "1", "is_correct": true}
                    ]
                }
            ]
        }]
    })
}

async fn handle(
    State(recorder): State<Arc<Recorder>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_owned(), ToString::to_string);
    recorder
        .requests
        .lock()
        .unwrap()
        .push(format!("{method} {target}"));

    let path = uri.path();
    let query = uri.query().unwrap_or("");

    if method == Method::POST && path == "/token" {
        let form = String::from_utf8_lossy(&body);
        return if form.contains("password=secret") {
            reply(
                StatusCode::OK,
                json!({"access_token": GOOD_TOKEN, "token_type": "bearer"}),
            )
        } else {
            reply(
                StatusCode::UNAUTHORIZED,
                json!({"detail": "Incorrect username or password"}),
            )
        };
    }

    if method == Method::POST && path == "/register/" {
        let Some(username) = query_value(query, "username") else {
            return field_required();
        };
        if query_value(query, "password").is_none() {
            return field_required();
        }
        return if username == "taken" {
            reply(
                StatusCode::BAD_REQUEST,
                json!({"detail": "Username already registered"}),
            )
        } else {
            reply(StatusCode::OK, json!({"msg": "User created successfully"}))
        };
    }

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {GOOD_TOKEN}"));
    if !authorized {
        return reply(
            StatusCode::UNAUTHORIZED,
            json!({"detail": "Could not validate credentials"}),
        );
    }

    match (method.as_str(), path) {
        ("GET", "/courses/") => reply(
            StatusCode::OK,
            json!([{"_id": "c1", "name": "Algebra"}, {"_id": "c2", "name": "History"}]),
        ),
        ("POST", "/courses/") if query.contains("course_name=Dup") => {
            reply(StatusCode::OK, json!({"error": "Course already exists"}))
        }
        ("POST", "/courses/") => reply(StatusCode::OK, json!({"course_id": "c9"})),
        ("GET", "/courses/c1") => reply(
            StatusCode::OK,
            json!({
                "_id": "c1",
                "name": "Algebra",
                "created_at": "2024-05-01T10:00:00.123000",
                "quizzes": [{"_id": "q1", "topic": "Groups"}],
                "number_of_quizzes": 1,
                "average_score": 1.5
            }),
        ),
        ("GET", "/courses/broken") => reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"detail": "database unavailable"}),
        ),
        ("PUT", "/courses/c1") if query_value(query, "new_name").is_none() => field_required(),
        ("PUT", "/courses/c1") | ("DELETE", "/courses/c1") => {
            reply(StatusCode::OK, json!({"msg": "ok"}))
        }
        ("GET", "/courses/c1/quizzes/") => reply(
            StatusCode::OK,
            json!({"quizzes": [
                {"_id": "q1", "course_id": "c1", "topic": "Groups", "percentage_score": null},
                {"_id": "q2", "course_id": "c1", "topic": "Rings", "percentage_score": 50.0}
            ]}),
        ),
        ("POST", "/courses/c1/generate-quiz/") => {
            let multipart = headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("multipart/form-data"));
            if multipart {
                let quiz = quiz_body();
                reply(StatusCode::OK, json!({"quiz": quiz["questions"].clone()}))
            } else {
                reply(StatusCode::BAD_REQUEST, json!({"detail": "file required"}))
            }
        }
        ("DELETE", "/courses/c1/quizzes/q1/") => {
            reply(StatusCode::OK, json!({"msg": "Quiz deleted successfully"}))
        }
        ("GET", "/quizzes/q1") => reply(StatusCode::OK, json!({"quiz": quiz_body()})),
        ("POST", "/quizzes/q1/scores/") => {
            reply(StatusCode::OK, json!({"msg": "Score submitted successfully"}))
        }
        ("GET", "/quizzes/q1/scores/") => reply(
            StatusCode::OK,
            json!({"scores": [{
                "_id": "s1",
                "quiz_id": "q1",
                "user_id": "u1",
                "score": 2,
                "submitted_at": "2024-05-02T08:30:00"
            }]}),
        ),
        ("GET", "/courses/c1/flashcards/topics/") => {
            reply(StatusCode::OK, json!({"topics": ["Linear algebra", "Groups"]}))
        }
        ("GET", "/courses/c1/flashcards/Linear%20algebra/") => reply(
            StatusCode::OK,
            json!({"flashcards": [
                {"front": "Vector space", "back": "A set closed under addition and scaling"}
            ]}),
        ),
        ("POST", "/courses/c1/generate-flashcards/") => reply(
            StatusCode::OK,
            json!({"flashcards": [{"front": "Rank", "back": "Dimension of the column space"}]}),
        ),
        _ => reply(StatusCode::NOT_FOUND, json!({"detail": "Not Found"})),
    }
}
