use std::sync::Arc;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{json, Value};

use crate::handlers::email_dtos::{SendEmailRequest, MISSING_FIELDS_MESSAGE};
use crate::utils::mailer::send_update_email;
use crate::AppState;

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Unparseable bodies get the same answer as bodies with missing fields.
    let request = match body {
        Ok(Json(body)) => SendEmailRequest::from_json(&body),
        Err(rejection) => {
            tracing::warn!("Rejected send-email body: {}", rejection.body_text());
            Err(crate::handlers::email_dtos::ValidationError)
        }
    }
    .map_err(|_| (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": MISSING_FIELDS_MESSAGE}))
    ))?;

    send_update_email(state.mailer.as_ref(), &request).await.map_err(|e| (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to send email.",
            "details": e.to_string()
        }))
    ))?;

    Ok(Json(json!({
        "message": "Email sent successfully!"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mailer::{MailError, MockMailer};
    use axum::body::Body;
    use axum::http::{header, Request};
    use futures::FutureExt;
    use tower::ServiceExt;

    fn app(mailer: MockMailer) -> axum::Router {
        crate::build_router(Arc::new(AppState {
            mailer: Arc::new(mailer),
        }))
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/send-email")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "to": "alice@example.com",
            "subject": "Your Latest Trivex Update!",
            "data": {
                "recipientName": "Alice Johnson",
                "updatesLink": "https://www.trivex.com/latest-news"
            }
        })
    }

    #[tokio::test]
    async fn well_formed_request_sends_and_returns_ok() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.to == "alice@example.com"
                    && email.subject == "Your Latest Trivex Update!"
                    && email.html.contains("Alice Johnson")
                    && email.html.contains("https://www.trivex.com/latest-news")
                    && email.html.contains("important updates from Trivex.")
            })
            .times(1)
            .returning(|_| async { Ok(()) }.boxed());

        let response = app(mailer).oneshot(post(valid_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({"message": "Email sent successfully!"})
        );
    }

    #[tokio::test]
    async fn missing_updates_link_is_rejected_without_sending() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let mut body = valid_body();
        body["data"].as_object_mut().unwrap().remove("updatesLink");
        let response = app(mailer).oneshot(post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": MISSING_FIELDS_MESSAGE})
        );
    }

    #[tokio::test]
    async fn non_object_data_is_rejected_without_sending() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let mut body = valid_body();
        body["data"] = json!("Alice Johnson");
        let response = app(mailer).oneshot(post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_without_sending() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let request = Request::builder()
            .method("POST")
            .uri("/api/send-email")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"to\": "))
            .unwrap();
        let response = app(mailer).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn transport_failure_becomes_server_error_with_details() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(1).returning(|_| {
            async { Err(MailError::Transport("535 authentication failed".to_string())) }.boxed()
        });

        let response = app(mailer).oneshot(post(valid_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            read_json(response).await,
            json!({
                "error": "Failed to send email.",
                "details": "transport error: 535 authentication failed"
            })
        );
    }

    #[tokio::test]
    async fn custom_content_is_forwarded() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.html.contains("Pulse now supports BLE 5.3.")
                    && !email.html.contains("important updates from Trivex.")
            })
            .times(1)
            .returning(|_| async { Ok(()) }.boxed());

        let mut body = valid_body();
        body["data"]["content"] = json!("Pulse now supports BLE 5.3.");
        let response = app(mailer).oneshot(post(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_answers() {
        let response = app(MockMailer::new())
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
