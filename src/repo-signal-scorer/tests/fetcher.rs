mod support;

use chrono::{Duration, TimeZone, Utc};
use repo_signal_scorer::{
    score_repo_signals_at, FetchError, RepoMetadataFetcher, ScorerConfig,
};
use serde_json::json;
use std::time::Duration as StdDuration;
use support::*;
use wiremock::matchers::{any, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> RepoMetadataFetcher {
    let config = ScorerConfig::new()
        .with_api_base_url(server.uri())
        .with_request_timeout(StdDuration::from_secs(1));
    RepoMetadataFetcher::new(&config).unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn healthy_repository_collects_every_signal() {
    let server = MockServer::start().await;
    mount_healthy_repository(&server, now()).await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    let facts = &fetched.facts;

    assert_eq!(fetched.identifier.full_name(), "octo/demo");
    assert!(facts.has_readme);
    assert!(facts.has_license);
    assert!(facts.has_ci);
    assert!(facts.has_package_scripts);
    assert_eq!(facts.commits_last_30, 12);
    assert_eq!(facts.contributors_count, 3);
    assert_eq!(facts.languages_count, 2);
    assert_eq!(facts.open_issues, 3);
    assert_eq!(facts.pushed_at, now() - Duration::days(1));

    assert_eq!(fetched.summary.stars, 42);
    assert_eq!(fetched.summary.forks, 7);
    assert_eq!(
        fetched.summary.readme_excerpt.as_deref(),
        Some("# Demo\n\nDoes demo things.\n")
    );

    let score = score_repo_signals_at(facts, now());
    assert_eq!(score.score10, 10);
    assert!(score.is_clean());
}

#[tokio::test]
async fn commits_are_requested_for_the_trailing_window() {
    let server = MockServer::start().await;
    mount_healthy_repository(&server, now()).await;

    Mock::given(method("GET"))
        .and(path(repo_path("/commits")))
        .and(query_param("since", "2026-09-19T12:00:00.000Z"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    assert_eq!(fetched.facts.commits_last_30, 0);
}

#[tokio::test]
async fn missing_repository_is_not_found() {
    let server = MockServer::start().await;
    mount_get(&server, &repo_path(""), not_found()).await;

    let err = fetcher_for(&server)
        .fetch_at(REPO_URL, now())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::RepoNotFound { .. }));
    assert_eq!(err.status_code(), 404);
    assert!(err.to_error_body().error.starts_with("Repo not found"));
}

#[tokio::test]
async fn repository_server_error_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "message": "Service Unavailable" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_at(REPO_URL, now())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn failed_probe_is_not_retried() {
    let server = MockServer::start().await;
    mount_healthy_repository(&server, now()).await;

    Mock::given(method("GET"))
        .and(path(repo_path("/contributors")))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({ "message": "Bad Gateway" })))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    assert_eq!(fetched.facts.contributors_count, 1);

    let contributor_requests = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.url.path() == repo_path("/contributors"))
        .count();
    assert_eq!(contributor_requests, 1);
}

#[tokio::test]
async fn invalid_url_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_at("https://github.com/only-owner", now())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidUrl(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn failed_probes_fall_back_to_defaults() {
    let server = MockServer::start().await;
    let updated_at = now() - Duration::days(3);
    mount_get(
        &server,
        &repo_path(""),
        ResponseTemplate::new(200).set_body_json(json!({
            "full_name": "octo/demo",
            "pushed_at": null,
            "updated_at": updated_at.to_rfc3339(),
        })),
    )
    .await;
    mount_get(&server, &repo_path("/readme"), not_found()).await;
    mount_get(
        &server,
        &repo_path("/contributors"),
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    let facts = &fetched.facts;

    assert!(!facts.has_readme);
    assert!(!facts.has_license);
    assert!(!facts.has_ci);
    assert!(!facts.has_package_scripts);
    assert_eq!(facts.commits_last_30, 0);
    assert_eq!(facts.contributors_count, 1);
    assert_eq!(facts.languages_count, 0);
    assert_eq!(facts.open_issues, 0);
    assert_eq!(facts.pushed_at, updated_at);
    assert_eq!(fetched.summary.readme_excerpt, None);
}

#[tokio::test]
async fn empty_workflows_directory_is_not_ci() {
    let server = MockServer::start().await;
    mount_healthy_repository(&server, now()).await;

    Mock::given(method("GET"))
        .and(path(repo_path("/contents/.github/workflows")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .with_priority(1)
        .mount(&server)
        .await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    assert!(!fetched.facts.has_ci);
}

#[tokio::test]
async fn slow_probe_times_out_to_default() {
    let server = MockServer::start().await;
    mount_healthy_repository(&server, now()).await;

    Mock::given(method("GET"))
        .and(path(repo_path("/readme")))
        .respond_with(delayed(
            ResponseTemplate::new(200).set_body_json(content_file("# Slow")),
            3,
        ))
        .with_priority(1)
        .mount(&server)
        .await;

    let fetched = fetcher_for(&server).fetch_at(REPO_URL, now()).await.unwrap();
    assert!(!fetched.facts.has_readme);
    assert!(fetched.facts.has_license);
}

#[tokio::test]
async fn slow_repository_lookup_is_fatal() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        &repo_path(""),
        delayed(
            ResponseTemplate::new(200).set_body_json(repository_body(now())),
            3,
        ),
    )
    .await;

    let err = fetcher_for(&server)
        .fetch_at(REPO_URL, now())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn missing_timestamps_are_fatal() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        &repo_path(""),
        ResponseTemplate::new(200).set_body_json(json!({ "full_name": "octo/demo" })),
    )
    .await;

    let err = fetcher_for(&server)
        .fetch_at(REPO_URL, now())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MissingPushTimestamp { .. }));
}

#[tokio::test]
async fn token_is_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path("")))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repository_body(now())))
        .expect(1)
        .mount(&server)
        .await;

    let config = ScorerConfig::new()
        .with_api_base_url(server.uri())
        .with_token("test-token")
        .with_request_timeout(StdDuration::from_secs(1));
    let fetcher = RepoMetadataFetcher::new(&config).unwrap();

    let fetched = fetcher.fetch_at(REPO_URL, now()).await.unwrap();
    assert_eq!(fetched.summary.full_name, "octo/demo");
}
