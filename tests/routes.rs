use actix_web::{
    App,
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use chrono::Utc;
use serde_json::{Value, json};

use lead_manager::repository::DieselRepository;
use lead_manager::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new(
                    $test_db.pool().clone(),
                )))
                .app_data(routes::json_config())
                .app_data(routes::path_config())
                .configure(routes::configure)
                .default_service(web::to(routes::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_lead_lifecycle() {
    let test_db = common::TestDb::new("test_lead_lifecycle.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({"name": "Ada", "email": "ada@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["status"], "new");
    assert_eq!(created["source"], "Website");
    assert_eq!(
        created["lastContacted"],
        Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
    let id = created["id"].as_str().expect("string id").to_string();

    let req = TestRequest::get()
        .uri(&format!("/api/leads/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = TestRequest::delete()
        .uri(&format!("/api/leads/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = TestRequest::get()
        .uri(&format!("/api/leads/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Lead not found");
}

#[actix_web::test]
async fn test_last_contacted_matches_creation_date() {
    let test_db = common::TestDb::new("test_last_contacted_matches_creation_date.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({"name": "Ada", "email": "ada@x.com"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let created_at = created["createdAt"].as_str().unwrap();
    assert_eq!(&created_at[..10], created["lastContacted"].as_str().unwrap());
}

#[actix_web::test]
async fn test_create_requires_name_and_email() {
    let test_db = common::TestDb::new("test_create_requires_name_and_email.db");
    let app = init_app!(test_db);

    for payload in [
        json!({"email": "ada@x.com"}),
        json!({"name": "Ada"}),
        json!({"name": "  ", "email": "ada@x.com"}),
    ] {
        let req = TestRequest::post()
            .uri("/api/leads")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Name and email are required");
    }

    let req = TestRequest::get().uri("/api/leads").to_request();
    let leads: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(leads, json!([]));
}

#[actix_web::test]
async fn test_unknown_status_is_rejected() {
    let test_db = common::TestDb::new("test_unknown_status_is_rejected.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({"name": "Ada", "email": "ada@x.com", "status": "lost"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_rereads_and_reports_missing() {
    let test_db = common::TestDb::new("test_update_rereads_and_reports_missing.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({"name": "Ada", "email": "ada@x.com", "phone": "555"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = TestRequest::put()
        .uri(&format!("/api/leads/{id}"))
        .set_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@x.com",
            "status": "Contacted",
            "source": "Referral"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Ada Lovelace");
    assert_eq!(updated["status"], "contacted");
    assert_eq!(updated["source"], "Referral");
    assert_eq!(updated["phone"], Value::Null);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["lastContacted"], created["lastContacted"]);

    let req = TestRequest::put()
        .uri("/api/leads/4242")
        .set_json(json!({"name": "Ghost", "email": "ghost@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::put()
        .uri(&format!("/api/leads/{id}"))
        .set_json(json!({"name": "Ada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_ids_are_not_found() {
    let test_db = common::TestDb::new("test_unknown_ids_are_not_found.db");
    let app = init_app!(test_db);

    for uri in ["/api/leads/99", "/api/leads/0", "/api/leads/abc"] {
        let req = TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");

        let req = TestRequest::delete().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
    }
}

#[actix_web::test]
async fn test_list_reflects_creates_and_deletes() {
    let test_db = common::TestDb::new("test_list_reflects_creates_and_deletes.db");
    let app = init_app!(test_db);

    let mut ids = Vec::new();
    for i in 0..4 {
        let req = TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({"name": format!("Lead {i}"), "email": format!("l{i}@x.com")}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }
    for id in &ids[..2] {
        let req = TestRequest::delete()
            .uri(&format!("/api/leads/{id}"))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = TestRequest::get().uri("/api/leads").to_request();
    let leads: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(leads.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_notes_flow() {
    let test_db = common::TestDb::new("test_notes_flow.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/leads")
        .set_json(json!({"name": "Ada", "email": "ada@x.com", "notes": "  Met at expo  "}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = TestRequest::post()
        .uri(&format!("/api/leads/{id}/notes"))
        .set_json(json!({"content": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Note content is required");

    let req = TestRequest::post()
        .uri("/api/leads/0/notes")
        .set_json(json!({"content": "  "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri(&format!("/api/leads/{id}/notes"))
        .set_json(json!({"content": "Sent pricing", "author": "Grace"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let note: Value = test::read_body_json(resp).await;
    assert_eq!(note["leadId"], id.as_str());
    assert_eq!(note["author"], "Grace");
    assert!(note["timestamp"].as_str().unwrap().contains(", "));

    let req = TestRequest::get()
        .uri(&format!("/api/leads/{id}/notes"))
        .to_request();
    let notes: Value = test::call_and_read_body_json(&app, req).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["content"], "Sent pricing");
    assert_eq!(notes[1]["content"], "Met at expo");
    assert_eq!(notes[1]["author"], "User");

    let req = TestRequest::get().uri("/api/leads/777/notes").to_request();
    let notes: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(notes, json!([]));
}

#[actix_web::test]
async fn test_clients_flow() {
    let test_db = common::TestDb::new("test_clients_flow.db");
    let app = init_app!(test_db);

    let req = TestRequest::post()
        .uri("/api/clients")
        .set_json(json!({"email": "nobody@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/api/clients")
        .set_json(json!({"name": "Globex", "company": "Globex Corp"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let client: Value = test::read_body_json(resp).await;
    assert_eq!(client["name"], "Globex");
    assert_eq!(client["email"], Value::Null);
    let id = client["id"].as_str().unwrap().to_string();

    let req = TestRequest::get().uri("/api/clients").to_request();
    let clients: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(clients.as_array().unwrap().len(), 1);

    for _ in 0..2 {
        let req = TestRequest::delete()
            .uri(&format!("/api/clients/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Client Deleted");
    }
}

#[actix_web::test]
async fn test_dashboard_summary() {
    let test_db = common::TestDb::new("test_dashboard_summary.db");
    let app = init_app!(test_db);

    let req = TestRequest::get().uri("/api/dashboard").to_request();
    let empty: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        empty,
        json!({"total": 0, "newLeads": 0, "contacted": 0, "converted": 0, "sources": []})
    );

    for (name, source, status) in [
        ("Ada", "Website", "new"),
        ("Bob", "Google Ads", "contacted"),
        ("Cid", "Website", "converted"),
    ] {
        let req = TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({
                "name": name,
                "email": format!("{name}@x.com"),
                "source": source,
                "status": status
            }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = TestRequest::get().uri("/api/dashboard").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["newLeads"], 1);
    assert_eq!(summary["contacted"], 1);
    assert_eq!(summary["converted"], 1);
    assert_eq!(
        summary["sources"],
        json!([
            {"source": "Google Ads", "count": 1},
            {"source": "Website", "count": 2}
        ])
    );
}

#[actix_web::test]
async fn test_health_and_malformed_body() {
    let test_db = common::TestDb::new("test_health_and_malformed_body.db");
    let app = init_app!(test_db);

    let req = TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["ok"], true);

    let req = TestRequest::post()
        .uri("/api/leads")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));

    let req = TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
