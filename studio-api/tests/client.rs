use secrecy::SecretString;
use serde_json::json;
use studio_api::endpoints::contact::ContactSubmission;
use studio_api::endpoints::projects::SaveProject;
use studio_api::{Acknowledgement, ApiEnvelope, Client, Request, StatusCode, StudioApiError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "client": "Nebula Films",
        "category": {"_id": "c1", "name": "CG"},
        "year": 2024,
        "thumbnail": "t.jpg",
        "videoUrl": "https://vimeo.com/76979871",
        "description": "",
        "tags": []
    })
}

#[tokio::test]
async fn test_lists_enveloped_projects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [project("p1", "Night Chase"), project("p2", "Deep Blue")]
        })))
        .mount(&server)
        .await;

    let client = Client::new(&format!("{}/api", server.uri()));
    let response = client.send(Request::projects().list()).await.unwrap();

    assert!(matches!(response, ApiEnvelope::Enveloped(_)));
    let titles: Vec<_> = response.into_items().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Night Chase", "Deep Blue"]);
}

#[tokio::test]
async fn test_lists_bare_array_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"_id": "c1", "name": "CG"}])),
        )
        .mount(&server)
        .await;

    let client = Client::new(&format!("{}/api", server.uri()));
    let response = client.send(Request::categories().list()).await.unwrap();

    assert!(matches!(response, ApiEnvelope::Bare(_)));
    assert_eq!(response.into_items()[0].name, "CG");
}

#[tokio::test]
async fn test_unexpected_body_is_malformed_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let response = client.send(Request::reels().list()).await.unwrap();

    assert!(response.is_malformed());
    assert!(response.into_items().is_empty());
}

#[tokio::test]
async fn test_token_client_sends_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer mock-jwt-token-1"))
        .and(body_json(json!({
            "title": "Night Chase",
            "client": "Nebula Films",
            "category": "c1",
            "year": 2024,
            "thumbnail": "",
            "videoUrl": "",
            "description": "",
            "tags": ["cg"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": project("p3", "Night Chase")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = SecretString::from("mock-jwt-token-1".to_string());
    let client = Client::with_token(&server.uri(), &token);
    let payload = SaveProject {
        title: "Night Chase".to_string(),
        client: "Nebula Films".to_string(),
        category: "c1".into(),
        year: 2024,
        tags: vec!["cg".to_string()],
        ..Default::default()
    };

    let created = client
        .send(Request::projects().create(payload))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(created.id, "p3");
}

#[tokio::test]
async fn test_public_client_sends_no_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    client
        .send(Request::contact().submit(ContactSubmission::default()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_delete_accepts_a_json_acknowledgement() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/projects/p1"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Project deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = SecretString::from("secret-token".to_string());
    let client = Client::with_token(&server.uri(), &token);
    let ack = client.send(Request::projects().delete("p1")).await.unwrap();

    assert_eq!(ack, Acknowledgement);
}

#[tokio::test]
async fn test_delete_accepts_an_empty_no_content_response() {
    let server = MockServer::start().await;
    for route in ["/categories/c1", "/reels/r1"] {
        Mock::given(method("DELETE"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let token = SecretString::from("secret-token".to_string());
    let client = Client::with_token(&server.uri(), &token);

    client.send(Request::categories().delete("c1")).await.unwrap();
    client.send(Request::reels().delete("r1")).await.unwrap();
}

#[tokio::test]
async fn test_unauthorized_maps_to_its_own_variant() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reels/r1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Invalid token"})),
        )
        .mount(&server)
        .await;

    let token = SecretString::from("stale".to_string());
    let client = Client::with_token(&server.uri(), &token);
    let err = client.send(Request::reels().delete("r1")).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(matches!(err, StudioApiError::Unauthorized(ref m) if m == "Invalid token"));
}

#[tokio::test]
async fn test_server_message_is_kept_for_other_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"success": false, "message": "Project not found"})),
        )
        .mount(&server)
        .await;

    let client = Client::new(&server.uri());
    let err = client.send(Request::projects().get("missing")).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "(404 Not Found) Project not found");
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1
    let client = Client::new("http://127.0.0.1:1");
    let err = client.send(Request::projects().list()).await.unwrap_err();
    assert!(matches!(err, StudioApiError::Transport(_)));
}
