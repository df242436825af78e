//! Shared GitHub API mocks for integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::time::Duration as StdDuration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const OWNER: &str = "octo";
pub const REPO: &str = "demo";
pub const REPO_URL: &str = "https://github.com/octo/demo";

pub fn repo_path(suffix: &str) -> String {
    format!("/repos/{OWNER}/{REPO}{suffix}")
}

pub fn content_file(body: &str) -> Value {
    json!({
        "type": "file",
        "encoding": "base64",
        "content": STANDARD.encode(body),
    })
}

pub fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest",
    }))
}

pub fn repository_body(pushed_at: DateTime<Utc>) -> Value {
    json!({
        "full_name": format!("{OWNER}/{REPO}"),
        "stargazers_count": 42,
        "forks_count": 7,
        "open_issues_count": 3,
        "pushed_at": pushed_at.to_rfc3339(),
        "updated_at": pushed_at.to_rfc3339(),
    })
}

pub async fn mount_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mounts every lookup for a repository that earns full marks.
pub async fn mount_healthy_repository(server: &MockServer, now: DateTime<Utc>) {
    let commits: Vec<Value> = (0..12).map(|i| json!({ "sha": format!("{i:040}") })).collect();
    let contributors: Vec<Value> = (0..3).map(|i| json!({ "login": format!("dev{i}") })).collect();

    mount_get(
        server,
        &repo_path(""),
        ResponseTemplate::new(200).set_body_json(repository_body(now - Duration::days(1))),
    )
    .await;
    mount_get(
        server,
        &repo_path("/languages"),
        ResponseTemplate::new(200).set_body_json(json!({ "Rust": 9000, "Shell": 1000 })),
    )
    .await;
    mount_get(
        server,
        &repo_path("/readme"),
        ResponseTemplate::new(200).set_body_json(content_file("# Demo\n\nDoes demo things.\n")),
    )
    .await;
    mount_get(
        server,
        &repo_path("/license"),
        ResponseTemplate::new(200).set_body_json(json!({ "license": { "spdx_id": "MIT" } })),
    )
    .await;
    mount_get(
        server,
        &repo_path("/contents/.github/workflows"),
        ResponseTemplate::new(200).set_body_json(json!([{ "name": "ci.yml", "type": "file" }])),
    )
    .await;
    mount_get(
        server,
        &repo_path("/commits"),
        ResponseTemplate::new(200).set_body_json(commits),
    )
    .await;
    mount_get(
        server,
        &repo_path("/contributors"),
        ResponseTemplate::new(200).set_body_json(contributors),
    )
    .await;
    mount_get(
        server,
        &repo_path("/contents/package.json"),
        ResponseTemplate::new(200)
            .set_body_json(content_file(r#"{"scripts":{"test":"vitest"}}"#)),
    )
    .await;
}

pub fn delayed(response: ResponseTemplate, secs: u64) -> ResponseTemplate {
    response.set_delay(StdDuration::from_secs(secs))
}
