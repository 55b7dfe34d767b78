use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Contact};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

const JOHN: &str = r#"{"name":"John Doe","phone":"123-456-7890","email":"john.doe@example.com"}"#;

// --- create ---

#[tokio::test]
async fn create_contact_returns_201_with_bare_id() {
    let resp = app().oneshot(json_request("POST", "/contact", JOHN)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"1");
}

#[tokio::test]
async fn create_contact_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/contact", r#"{"name":"John"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_contact_without_content_type_returns_415() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .body(JOHN.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(json_request("POST", "/contacts", JOHN)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- list ---

#[tokio::test]
async fn list_contacts_empty() {
    let resp = app()
        .oneshot(Request::builder().uri("/contact").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert!(contacts.is_empty());
}

// --- ids are assigned in order and stored ---

#[tokio::test]
async fn create_then_list() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/contact", JOHN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: i64 = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/contact",
            r#"{"name":"Ana","phone":"555","email":"ana@example.com"}"#,
        ))
        .await
        .unwrap();
    let second: i64 = body_json(resp).await;
    assert_eq!((first, second), (1, 2));

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/contact").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert_eq!(
        contacts,
        vec![
            Contact {
                id: 1,
                name: "John Doe".to_string(),
                phone: "123-456-7890".to_string(),
                email: "john.doe@example.com".to_string(),
            },
            Contact {
                id: 2,
                name: "Ana".to_string(),
                phone: "555".to_string(),
                email: "ana@example.com".to_string(),
            },
        ]
    );
}
