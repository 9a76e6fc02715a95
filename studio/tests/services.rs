use serde_json::json;
use studio::dashboard::Dashboard;
use studio::site::{Site, CONTACT_SENT};
use studio::testing::{anonymous_gate, signed_in_gate, TEST_TOKEN};
use studio::validators::ProjectForm;
use studio::StudioError;
use studio_api::endpoints::{categories::Category, contact::ContactSubmission, ObjectId};
use studio_auth::{AuthError, Route, SessionStatus};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server() -> (MockServer, String) {
    let server = MockServer::start().await;
    let api_url = format!("{}/api", server.uri());
    (server, api_url)
}

fn categories() -> Vec<Category> {
    serde_json::from_value(json!([{"_id": "c1", "name": "CG"}])).unwrap()
}

#[tokio::test]
async fn test_dashboard_lists_with_bearer_token() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"_id": "p1", "title": "Night Chase", "category": "c1", "year": 2024}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dashboard = Dashboard::new(signed_in_gate(&api_url));
    let projects = dashboard.projects().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Night Chase");
}

#[tokio::test]
async fn test_dashboard_treats_malformed_list_as_empty() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/reels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": false, "error": "?"})),
        )
        .mount(&server)
        .await;

    let dashboard = Dashboard::new(signed_in_gate(&api_url));
    assert!(dashboard.reels().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_overview_loads_everything() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"_id": "c1", "name": "CG"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
        .mount(&server)
        .await;

    let overview = Dashboard::new(signed_in_gate(&api_url))
        .overview()
        .await
        .unwrap();

    assert!(overview.projects.is_empty());
    assert_eq!(overview.categories.len(), 1);
    assert!(overview.reels.is_empty());
}

#[tokio::test]
async fn test_dashboard_creates_normalized_project() {
    let (server, api_url) = server().await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(body_json(json!({
            "title": "Night Chase",
            "client": "Nebula Films",
            "category": "c1",
            "year": 2024,
            "thumbnail": "t.jpg",
            "videoUrl": "https://vimeo.com/76979871",
            "description": "Chase.",
            "tags": ["cg", "chase"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "message": "Project created"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let form = ProjectForm {
        title: " Night Chase ".to_string(),
        client: "Nebula Films".to_string(),
        category: "c1".to_string(),
        year: "2024".to_string(),
        thumbnail: "t.jpg".to_string(),
        video_url: "https://vimeo.com/76979871".to_string(),
        description: "Chase.".to_string(),
        tags: "cg, chase,".to_string(),
    };

    let dashboard = Dashboard::new(signed_in_gate(&api_url));
    let saved = dashboard
        .save_project(None, &form, &categories())
        .await
        .unwrap();

    // No record in the body
    assert_eq!(saved, None);
}

#[tokio::test]
async fn test_invalid_project_form_sends_nothing() {
    let (server, api_url) = server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let dashboard = Dashboard::new(signed_in_gate(&api_url));
    let err = dashboard
        .save_project(None, &ProjectForm::default(), &[])
        .await
        .unwrap_err();

    match err {
        StudioError::Form(errors) => assert_eq!(
            errors.get("category"),
            Some("Please create at least one category first")
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_dashboard_updates_category() {
    let (server, api_url) = server().await;
    Mock::given(method("PUT"))
        .and(path("/api/categories/c1"))
        .and(body_json(json!({"name": "Compositing"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"_id": "c1", "name": "Compositing"}
        })))
        .mount(&server)
        .await;

    let dashboard = Dashboard::new(signed_in_gate(&api_url));
    let category = dashboard
        .save_category(Some(&ObjectId::new("c1")), " Compositing ", "")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(category.name, "Compositing");
}

#[tokio::test]
async fn test_dashboard_deletes_with_acknowledged_body() {
    let (server, api_url) = server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Project deleted"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gate = signed_in_gate(&api_url);
    Dashboard::new(gate.clone())
        .delete_project("p1")
        .await
        .unwrap();

    assert_eq!(gate.status(), SessionStatus::Authenticated);
    assert_eq!(gate.storage().clears(), 0);
}

#[tokio::test]
async fn test_expired_session_surfaces_and_signs_out() {
    let (server, api_url) = server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/p1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid token"
        })))
        .mount(&server)
        .await;

    let gate = signed_in_gate(&api_url);
    let dashboard = Dashboard::new(gate.clone());
    let err = dashboard.delete_project("p1").await.unwrap_err();

    assert!(matches!(err, StudioError::Auth(AuthError::SessionExpired)));
    assert!(err.needs_login());
    assert_eq!(gate.status(), SessionStatus::Unauthenticated);
    assert_eq!(gate.storage().clears(), 1);
    assert_eq!(gate.navigator().last(), Some(Route::Login));
}

#[tokio::test]
async fn test_dashboard_without_session_never_calls_api() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dashboard = Dashboard::new(anonymous_gate(&api_url));
    let err = dashboard.categories().await.unwrap_err();

    assert!(err.needs_login());
}

#[tokio::test]
async fn test_site_gallery_is_public() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "p1", "title": "Old", "category": "c1", "year": 2019},
            {"_id": "p2", "title": "New", "category": {"_id": "c1", "name": "CG"}, "year": 2025}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"_id": "c1", "name": "CG"}, {"_id": "c2", "name": "Empty"}]
        })))
        .mount(&server)
        .await;

    let gallery = Site::new(anonymous_gate(&api_url)).gallery().await.unwrap();

    let labels: Vec<_> = gallery.tabs().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["ALL WORK", "CG"]);
    let titles: Vec<_> = gallery
        .projects(None)
        .into_iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["New", "Old"]);

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| r.headers.get("authorization").is_none()));
}

#[tokio::test]
async fn test_site_gallery_fails_when_either_request_fails() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = Site::new(anonymous_gate(&api_url))
        .gallery()
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Api(_)));
}

#[tokio::test]
async fn test_site_lists_only_playable_reels() {
    let (server, api_url) = server().await;
    Mock::given(method("GET"))
        .and(path("/api/reels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "r1", "title": "Showreel", "videoLink": "https://youtu.be/dQw4w9WgXcQ"},
            {"_id": "r2", "title": "Broken", "videoLink": "https://www.youtube.com/watch?v=abc"},
            {"_id": "r3", "title": "Elsewhere", "videoLink": "https://example.com/video.mp4"},
            {"_id": "r4", "title": "Vimeo", "videoLink": "https://vimeo.com/channels/staffpicks/123456"}
        ])))
        .mount(&server)
        .await;

    let reels = Site::new(anonymous_gate(&api_url)).reels().await.unwrap();

    let titles: Vec<_> = reels.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Showreel", "Vimeo"]);
}

#[tokio::test]
async fn test_site_submits_valid_contact() {
    let (server, api_url) = server().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "+1 555 123 4567",
            "enquiryFor": "VFX",
            "message": "We need a title sequence."
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let submission = ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+1 555 123 4567".to_string(),
        enquiry_for: "VFX".to_string(),
        message: "We need a title sequence.".to_string(),
    };

    let message = Site::new(anonymous_gate(&api_url))
        .submit_contact(submission)
        .await
        .unwrap();

    assert_eq!(message, CONTACT_SENT);
}

#[tokio::test]
async fn test_site_rejects_invalid_contact_locally() {
    let (server, api_url) = server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let submission = ContactSubmission {
        name: "J".to_string(),
        ..ContactSubmission::default()
    };
    let err = Site::new(anonymous_gate(&api_url))
        .submit_contact(submission)
        .await
        .unwrap_err();

    match err {
        StudioError::Form(errors) => {
            assert_eq!(errors.len(), 5);
            assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
