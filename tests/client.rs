//
//  crowdin-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests of the request funnel against a mock HTTP server.

use crowdin_client::api::common::{ErrorResponse, ListOptions, Pagination, UpdateRequest};
use crowdin_client::api::services::{AddBranchRequest, AddProjectRequest, ProjectListOptions};
use crowdin_client::api::with_header;
use crowdin_client::{CrowdinClient, Error};
use mockito::{Matcher, Server};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

const PROJECT: &str = r#"{
    "id": 1,
    "userId": 6,
    "name": "Website",
    "identifier": "website",
    "sourceLanguageId": "en",
    "targetLanguageIds": ["de", "uk"],
    "createdAt": "2023-09-20T11:34:40+00:00",
    "updatedAt": "2023-09-20T11:34:40+00:00"
}"#;

fn client(server: &Server) -> CrowdinClient {
    CrowdinClient::builder("token")
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_unwraps_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/projects/1")
        .match_header("authorization", "Bearer token")
        .match_header(
            "user-agent",
            format!("crowdin-client/{}", env!("CARGO_PKG_VERSION")).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"data": {}}}"#, PROJECT))
        .create_async()
        .await;

    let (project, response) = client(&server).projects().get(1).await.unwrap();

    mock.assert_async().await;
    assert_eq!(project.id, 1);
    assert_eq!(project.name, "Website");
    assert_eq!(project.target_language_ids, vec!["de", "uk"]);
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.pagination, None);
}

#[tokio::test]
async fn test_list_preserves_order_and_reads_pagination() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/storages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "25".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "data": [
                    {"data": {"id": 2, "fileName": "a.json"}},
                    {"data": {"id": 4, "fileName": "b.json"}}
                ],
                "pagination": {"offset": 10, "limit": 25}
            }"#,
        )
        .create_async()
        .await;

    let options = ListOptions {
        offset: Some(10),
        limit: Some(25),
        ..Default::default()
    };
    let (storages, response) = client(&server)
        .storages()
        .list(Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<u64> = storages.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 4]);
    assert_eq!(response.pagination, Some(Pagination { offset: 10, limit: 25 }));
}

#[tokio::test]
async fn test_list_with_invalid_limit_is_not_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut options = ProjectListOptions::default();
    options.list.limit = Some(501);
    let err = client(&server)
        .projects()
        .list(Some(&options))
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_no_content_yields_absent_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/ping")
        .with_status(204)
        .create_async()
        .await;

    let client = client(&server);
    let request = client
        .new_request::<()>(Method::GET, "/api/v2/ping", None, &[])
        .unwrap();
    let (value, response) = client.execute::<Value>(request).await.unwrap();

    mock.assert_async().await;
    assert!(value.is_none());
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.pagination, None);
}

#[tokio::test]
async fn test_delete_returns_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2/projects/1/branches/34")
        .with_status(204)
        .create_async()
        .await;

    let response = client(&server).branches().delete(1, 34).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_no_content_where_resource_expected() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/storages/9")
        .with_status(204)
        .create_async()
        .await;

    let err = client(&server).storages().get(9).await.unwrap_err();

    assert!(matches!(err, Error::MissingBody { .. }));
    assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn test_not_found_maps_to_simple_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/404")
        .with_status(404)
        .with_header("x-request-id", "abc")
        .with_body(r#"{"error":{"code":404,"message":"Project Not Found"}}"#)
        .create_async()
        .await;

    let err = client(&server).projects().get(404).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "404 Project Not Found");
    let response = err.response().unwrap();
    assert_eq!(response.headers["x-request-id"], "abc");
}

#[tokio::test]
async fn test_rest_validation_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/v2/projects/1/branches")
        .with_status(400)
        .with_body(
            r#"{"errors":[{"error":{"key":"name","errors":[{"code":"notUnique","message":"Branch already exists"}]}}]}"#,
        )
        .create_async()
        .await;

    let request = AddBranchRequest {
        name: "develop".to_string(),
        ..Default::default()
    };
    let err = client(&server).branches().add(1, &request).await.unwrap_err();

    assert!(matches!(
        err.error_response(),
        Some(ErrorResponse::Validation(_))
    ));
    assert_eq!(
        err.to_string(),
        "400 Validation failed: name: Branch already exists (notUnique)"
    );
}

#[tokio::test]
async fn test_graphql_error_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/graphql")
        .with_status(400)
        .with_body(r#"{"errors":[{"message":"m","locations":[{"line":7,"column":8}]}]}"#)
        .create_async()
        .await;

    let client = client(&server);
    let body = json!({"query": "{ viewer { id } }"});
    let err = client
        .post::<Value, _>("/api/graphql", Some(&body))
        .await
        .unwrap_err();

    assert!(matches!(err.error_response(), Some(ErrorResponse::GraphQL(_))));
    assert_eq!(err.to_string(), "m, Locations: [{Line:7 Column:8}]");
}

#[tokio::test]
async fn test_graphql_error_shape_with_trailing_slash() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/graphql/")
        .with_status(400)
        .with_body(r#"{"errors":[{"message":"m","locations":[{"line":1,"column":3}]}]}"#)
        .create_async()
        .await;

    let body = json!({"query": "{ viewer { id } }"});
    let err = client(&server)
        .post::<Value, _>("/api/graphql/", Some(&body))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "m, Locations: [{Line:1 Column:3}]");
}

#[tokio::test]
async fn test_unparseable_error_body_keeps_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/1")
        .with_status(503)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client(&server).projects().get(1).await.unwrap_err();

    assert_eq!(err.to_string(), "server returned status 503");
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects/1")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server).projects().get(1).await.unwrap_err();

    match err {
        Error::Decode { response, .. } => assert_eq!(response.status, StatusCode::OK),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_list_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2/projects")
        .with_status(200)
        .with_body("<html>not a list</html>")
        .create_async()
        .await;

    let result = client(&server).projects().list(None).await;

    match result {
        Err(Error::Decode { response, .. }) => assert_eq!(response.status, StatusCode::OK),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_post_without_body_is_rejected_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .post::<Value, Value>("/api/v2/projects", None)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "body cannot be nil");
}

#[tokio::test]
async fn test_put_without_body_sends_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v2/projects/1/strings/exports")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"data": 1}"#)
        .expect(1)
        .create_async()
        .await;

    let (value, response) = client(&server)
        .put::<Value, Value>("/api/v2/projects/1/strings/exports", None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(value, Some(json!({"data": 1})));
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_patch_object_validates_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let invalid = AddProjectRequest::default();
    let err = client(&server)
        .patch_object::<Value, _>("/api/v2/projects/1", &invalid)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "name is required");
}

#[tokio::test]
async fn test_empty_edit_is_rejected_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server).projects().edit(1, &[]).await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "body cannot be empty or nil");
}

#[tokio::test]
async fn test_edit_sends_update_operations() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/v2/projects/1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!([
            {"op": "replace", "path": "/name", "value": "Docs"}
        ])))
        .with_status(200)
        .with_body(format!(r#"{{"data": {}}}"#, PROJECT))
        .create_async()
        .await;

    let ops = [UpdateRequest::replace("/name", "Docs")];
    let (project, _) = client(&server).projects().edit(1, &ops).await.unwrap();

    mock.assert_async().await;
    assert_eq!(project.id, 1);
}

#[tokio::test]
async fn test_add_validates_body_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let request = AddProjectRequest {
        name: "Website".to_string(),
        ..Default::default()
    };
    let err = client(&server).projects().add(&request).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.to_string(), "sourceLanguageId is required");
}

#[tokio::test]
async fn test_header_overrides_apply_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/projects")
        .match_header("x-trace", "second")
        .match_header("user-agent", "custom-agent")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let client = client(&server);
    let request = client
        .new_request::<()>(
            Method::GET,
            "/api/v2/projects",
            None,
            &[
                with_header("X-Trace", "first"),
                with_header("X-Trace", "second"),
                with_header("User-Agent", "custom-agent"),
            ],
        )
        .unwrap();
    let (value, _) = client.execute::<Value>(request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(value, Some(json!({"data": []})));
}

#[tokio::test]
async fn test_storage_upload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/storages")
        .match_header("crowdin-api-filename", "r%C3%A9sum%C3%A9+final.json")
        .match_header("content-type", "application/octet-stream")
        .match_body(r#"{"hello":"world"}"#)
        .with_status(201)
        .with_body(r#"{"data": {"id": 61, "fileName": "résumé final.json"}}"#)
        .create_async()
        .await;

    let (storage, response) = client(&server)
        .storages()
        .add("résumé final.json", r#"{"hello":"world"}"#.as_bytes().to_vec())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(storage.id, 61);
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_transport_failure_is_passed_through() {
    let client = CrowdinClient::builder("token")
        .base_url("http://127.0.0.1:1/")
        .build()
        .unwrap();

    let err = client.projects().get(1).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.response().is_none());
}
