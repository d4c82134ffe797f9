use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use mergington_activities::api::{create_router, AppState};
use tower::ServiceExt; // for oneshot
use tracing::{level_filters::LevelFilter, Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the target of every event that passes the filter
#[derive(Clone, Default)]
struct TargetRecorder(Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for TargetRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0
            .lock()
            .unwrap()
            .push(event.metadata().target().to_string());
    }
}

#[tokio::test]
async fn responses_are_logged_at_info() {
    let recorder = TargetRecorder::default();
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(recorder.clone());
    let _guard = tracing::subscriber::set_default(subscriber);

    let response = create_router(AppState::seeded())
        .oneshot(
            Request::builder()
                .uri("/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let targets = recorder.0.lock().unwrap().clone();
    assert!(
        targets.iter().any(|t| t.starts_with("tower_http::trace")),
        "no request log at info level, saw {targets:?}"
    );
}
