//! Integration tests per gli endpoints dei registi
//!
//! Test per:
//! - GET /directors/
//! - POST /directors/
//! - GET /directors/{director_id}

mod common;

#[cfg(test)]
mod director_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_list_directors() {
        let server = seeded_server().await;

        let response = server.get("/directors/").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!([
                { "id": 1, "name": "Christopher Nolan" },
                { "id": 2, "name": "Sofia Coppola" },
                { "id": 3, "name": "Agnes Varda" }
            ])
        );
    }

    #[tokio::test]
    async fn test_list_directors_empty() {
        let server = empty_server().await;

        let response = server.get("/directors").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_create_director_then_get() {
        let server = empty_server().await;

        let response = server
            .post("/directors/")
            .json(&json!({ "name": "Greta Gerwig" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert!(response.text().is_empty());
        let id = location_id(&response);

        let fetched = server.get(&format!("/directors/{id}")).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), json!({ "id": id, "name": "Greta Gerwig" }));
    }

    #[tokio::test]
    async fn test_create_director_without_name_stores_null() {
        let server = empty_server().await;

        let response = server.post("/directors/").json(&json!({})).await;

        response.assert_status(StatusCode::CREATED);
        let director: Value = server
            .get(&format!("/directors/{}", location_id(&response)))
            .await
            .json();
        assert_eq!(director["name"], Value::Null);
    }

    #[tokio::test]
    async fn test_create_director_invalid_body() {
        let server = empty_server().await;

        let response = server
            .post("/directors/")
            .json(&json!({ "name": 12 }))
            .await;

        response.assert_status_bad_request();
        server.get("/directors/").await.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_get_director_not_found() {
        let server = seeded_server().await;

        let response = server.get("/directors/77").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "not found");
        assert_eq!(body["details"], "Director 77 does not exist");
    }

    #[tokio::test]
    async fn test_get_director_non_numeric_id() {
        let server = seeded_server().await;

        server.get("/directors/nolan").await.assert_status_bad_request();
    }
}
