//! Integration tests for the hosting API fetcher against a local mock server.

use fork_pulse::config::{Config, RepoId};
use fork_pulse::facts::{GitHubClient, ProgressReporter, RepoActivity};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::new("test-token", Some(&server.uri()), ProgressReporter::hidden()).unwrap()
}

fn issue(number: u64, created: &str, is_pull: bool) -> Value {
    let mut value = json!({
        "number": number,
        "title": format!("issue {number}"),
        "body": null,
        "user": { "login": "octocat", "id": 1 },
        "state": "open",
        "created_at": created,
        "updated_at": created,
        "closed_at": null,
    });

    if is_pull {
        value["pull_request"] = json!({ "url": "http://example.invalid/pulls/1" });
    }

    value
}

fn release(tag: &str, created: &str) -> Value {
    json!({
        "tag_name": tag,
        "name": tag,
        "draft": false,
        "prerelease": false,
        "created_at": created,
        "published_at": created,
    })
}

#[tokio::test]
async fn test_issues_exclude_pull_requests_and_are_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/up/proj/issues"))
        .and(query_param("state", "all"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            issue(1, "2025-03-01T10:00:00Z", false),
            issue(2, "2025-03-02T10:00:00Z", true),
            issue(3, "2025-03-03T10:00:00Z", false),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let issues = client(&server).fetch_issues(&RepoId::new("up", "proj"), None).await.unwrap();

    let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![3, 1]);
    assert_eq!(issues[0].author(), Some("octocat"));
}

#[tokio::test]
async fn test_sync_tasks_are_filtered_by_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/me/proj/issues"))
        .and(query_param("labels", "upstream-sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue(7, "2025-03-01T10:00:00Z", false)])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client(&server)
        .fetch_issues(&RepoId::new("me", "proj"), Some("upstream-sync"))
        .await
        .unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].number, 7);
}

#[tokio::test]
async fn test_releases_follow_pagination() {
    let server = MockServer::start().await;
    let next = format!("<{}/repos/up/proj/releases?per_page=100&page=2>; rel=\"next\"", server.uri());

    Mock::given(method("GET"))
        .and(path("/repos/up/proj/releases"))
        .and(query_param_is_missing("page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next.as_str())
                .set_body_json(json!([release("v2.0.0", "2025-02-01T00:00:00Z")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/up/proj/releases"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            release("v1.0.0", "2025-01-01T00:00:00Z"),
            release("v3.0.0", "2025-03-01T00:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let releases = client(&server).fetch_releases(&RepoId::new("up", "proj")).await.unwrap();

    let tags: Vec<&str> = releases.iter().map(|r| r.tag_name.as_str()).collect();
    assert_eq!(tags, vec!["v3.0.0", "v2.0.0", "v1.0.0"]);
}

#[tokio::test]
async fn test_server_error_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/up/proj/pulls"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client(&server).fetch_pull_requests(&RepoId::new("up", "proj")).await.unwrap_err();
    assert!(format!("{err:#}").contains("pull requests for 'up/proj'"));
}

#[tokio::test]
async fn test_collect_gathers_every_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/up/proj/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue(1, "2025-03-01T10:00:00Z", false)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/up/proj/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "number": 10,
            "title": "fix: crash",
            "body": null,
            "user": { "login": "alice" },
            "created_at": "2025-03-01T11:00:00Z",
            "closed_at": "2025-03-02T11:00:00Z",
            "merged_at": "2025-03-02T11:00:00Z",
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/up/proj/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([release("v1.0.0", "2025-03-01T00:00:00Z")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/me/proj/issues"))
        .and(query_param("labels", "upstream-sync"))
        .and(query_param("sort", "created"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue(5, "2025-03-01T12:00:00Z", false)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/me/proj/issues"))
        .and(query_param("sort", "updated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue(6, "2025-03-02T12:00:00Z", false)])))
        .expect(3)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.upstream = Some(RepoId::new("up", "proj"));
    config.downstream = Some(RepoId::new("me", "proj"));

    let activity = RepoActivity::collect(&client(&server), &config).await.unwrap();
    assert_eq!(activity.upstream_issues.len(), 1);
    assert_eq!(activity.upstream_pulls.len(), 1);
    assert!(activity.upstream_pulls[0].merged_at.is_some());
    assert_eq!(activity.upstream_releases.len(), 1);
    assert_eq!(activity.sync_tasks.len(), 1);
    assert_eq!(activity.sync_tasks[0].number, 5);

    let labels: Vec<&str> = activity.labeled_updates.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["upstream-sync", "upstream-pr", "upstream-release"]);
    assert!(activity.labeled_updates.iter().all(|l| l.issues.len() == 1 && l.issues[0].number == 6));
}

#[tokio::test]
async fn test_recently_updated_sorts_by_update_time() {
    let server = MockServer::start().await;
    let mut stale = issue(1, "2025-03-05T10:00:00Z", false);
    stale["updated_at"] = json!("2025-03-06T10:00:00Z");
    let mut fresh = issue(2, "2025-03-01T10:00:00Z", false);
    fresh["updated_at"] = json!("2025-03-09T10:00:00Z");

    Mock::given(method("GET"))
        .and(path("/repos/me/proj/issues"))
        .and(query_param("labels", "upstream-pr"))
        .and(query_param("sort", "updated"))
        .and(query_param("direction", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stale,
            fresh,
            issue(3, "2025-03-09T10:00:00Z", true),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let issues = client(&server)
        .fetch_recently_updated(&RepoId::new("me", "proj"), "upstream-pr")
        .await
        .unwrap();

    let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![2, 1]);
}
