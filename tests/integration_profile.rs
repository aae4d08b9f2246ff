mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use common::*;
use unirecords_models::{AdminRecordId, DepartmentId, UserId};

#[tokio::test]
async fn test_student_profile() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_STUDENT);
    let app = setup_test_app(repo);

    let response = send(app, get("/api/user/profile", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(
        body_json(response).await,
        json!({
            "role": "STUDENT",
            "joinedAt": "2022-09-05T08:30:00Z",
            "department": { "name": "Computer Science", "code": "CSC" },
            "school": { "name": "School of Engineering", "code": "SOE" },
            "matricNumber": "CSC/2022/0001",
            "level": 200
        })
    );
}

#[tokio::test]
async fn test_lecturer_profile() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_LECTURER);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile", Some(&token))).await).await;

    assert_eq!(body["role"], "LECTURER");
    assert_eq!(body["staffId"], "STF-042");
    assert_eq!(body["department"]["code"], "CSC");
    assert_eq!(body["school"]["code"], "SOE");
    assert!(body.get("matricNumber").is_none());
    assert!(body.get("level").is_none());
}

#[tokio::test]
async fn test_school_admin_profile_has_school_only() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_SCHOOL_ADMIN);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile", Some(&token))).await).await;

    assert_eq!(body["role"], "SCHOOL_ADMIN");
    assert_eq!(body["adminId"], "ADM-007");
    assert_eq!(body["school"], json!({ "name": "School of Engineering", "code": "SOE" }));
    assert!(body.get("department").is_none());
}

#[tokio::test]
async fn test_department_admin_profile_includes_owning_school() {
    let mut repo = InMemoryRepository::seeded();
    let admin_user = UserId::from_u128(0x45);
    repo.users.push(unirecords_models::User {
        id: admin_user,
        name: "Dee Admin".into(),
        email: "dee@uni.edu".into(),
        role: unirecords_models::UserRole::DepartmentAdmin,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    });
    repo.admins.push(unirecords_models::Admin {
        id: AdminRecordId::from_u128(0x71),
        user_id: admin_user,
        admin_id: "ADM-008".into(),
        department_id: Some(DEPT_GST),
        school_id: None,
    });
    let repo = Arc::new(repo);
    let token = token_for(&repo, admin_user);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile", Some(&token))).await).await;

    assert_eq!(body["department"]["code"], "GST");
    assert_eq!(body["school"]["code"], "SGS");
}

#[tokio::test]
async fn test_missing_role_record_yields_bare_profile() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_SENATE_ADMIN);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile", Some(&token))).await).await;

    assert_eq!(
        body,
        json!({ "role": "SENATE_ADMIN", "joinedAt": "2022-09-05T08:30:00Z" })
    );
}

#[tokio::test]
async fn test_dangling_department_is_omitted() {
    let mut repo = InMemoryRepository::seeded();
    repo.students[0].department_id = DepartmentId::from_u128(0xdead);
    let repo = Arc::new(repo);
    let token = token_for(&repo, USER_STUDENT);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile", Some(&token))).await).await;

    assert_eq!(body["matricNumber"], "CSC/2022/0001");
    assert!(body.get("department").is_none());
    assert!(body.get("school").is_none());
}

#[tokio::test]
async fn test_deleted_user_is_not_found() {
    let mut repo = InMemoryRepository::seeded();
    let token = token_for(&repo, USER_LECTURER);
    repo.users.retain(|u| u.id != USER_LECTURER);
    let app = setup_test_app(Arc::new(repo));

    let response = send(app, get("/api/user/profile", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "message": "User not found" }));
}

#[tokio::test]
async fn test_profile_requires_authentication() {
    let app = setup_test_app(Arc::new(InMemoryRepository::seeded()));

    for uri in ["/api/user/profile", "/api/user/profile/view"] {
        let response = send(app.clone(), get(uri, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_profile_routes_reject_other_methods() {
    let app = setup_test_app(Arc::new(InMemoryRepository::seeded()));

    for uri in ["/api/user/profile", "/api/user/profile/view"] {
        let request = Request::builder()
            .method("PATCH")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = send(app.clone(), request).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }
}

#[tokio::test]
async fn test_profile_view_for_student() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_STUDENT);
    let app = setup_test_app(repo);

    let response = send(app, get("/api/user/profile/view", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["dataStatus"], "loaded");

    let header = &body["header"];
    assert_eq!(header["name"], "Ada Obi");
    assert_eq!(header["initials"], "AO");
    assert_eq!(header["email"], "ada@uni.edu");
    assert_eq!(header["role"], "STUDENT");
    assert_eq!(
        header["avatarUrl"],
        "https://api.dicebear.com/7.x/initials/svg?seed=Ada%20Obi"
    );
    assert_eq!(
        header["subtitle"],
        "View your profile information and achievements."
    );
    assert_eq!(header["location"], "Computer Science (CSC)");
    assert_eq!(header["joined"], "2022-09-05");
    assert_eq!(
        header["identifiers"],
        json!(["Student", "Matric No: CSC/2022/0001"])
    );

    assert_eq!(body["achievements"].as_array().unwrap().len(), 3);
    assert_eq!(body["statistics"][0], json!({ "label": "GPA", "value": "3.85" }));
    assert_eq!(
        body["contact"][2],
        json!({
            "key": "emergencyContact",
            "label": "Emergency Contact",
            "value": "Jane Johnson - +1 (555) 987-6543"
        })
    );
    assert_eq!(body["profile"]["matricNumber"], "CSC/2022/0001");
}

#[tokio::test]
async fn test_profile_view_for_admin_uses_school_location() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_SCHOOL_ADMIN);
    let app = setup_test_app(repo);

    let body = body_json(send(app, get("/api/user/profile/view", Some(&token))).await).await;

    assert_eq!(body["header"]["location"], "School of Engineering (SOE)");
    assert_eq!(body["header"]["identifiers"], json!(["Admin ID: ADM-007"]));
    assert_eq!(
        body["header"]["subtitle"],
        "Manage your profile information and view your achievements."
    );
    assert_eq!(body["statistics"][0]["label"], "Years at University");
}

#[tokio::test]
async fn test_profile_view_renders_when_profile_unavailable() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_LECTURER);
    repo.fail_queries();
    let app = setup_test_app(repo);

    let response = send(app, get("/api/user/profile/view", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["dataStatus"], "unavailable");
    assert_eq!(body["profile"], json!({}));
    assert_eq!(body["header"]["name"], "Grace Hopper");
    assert_eq!(body["header"]["location"], "Department");
    assert_eq!(body["header"]["identifiers"], json!(["Staff ID: —"]));
    assert_eq!(body["statistics"].as_array().unwrap().len(), 4);
    assert_eq!(body["contact"][2]["label"], "Office Hours");
}

#[tokio::test]
async fn test_role_profile_failure_is_generic_server_error() {
    let repo = Arc::new(InMemoryRepository::seeded());
    let token = token_for(&repo, USER_STUDENT);
    repo.fail_queries();
    let app = setup_test_app(repo);

    let response = send(app, get("/api/user/profile", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Internal Server Error" })
    );
}
