use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;

fn repo_json(
    id: u64,
    name: &str,
    stars: u64,
    updated_at: &str,
    fork: bool,
    archived: bool,
) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "{name}",
            "description": "about {name}",
            "html_url": "https://github.com/octocat/{name}",
            "stargazers_count": {stars},
            "updated_at": "{updated_at}",
            "fork": {fork},
            "archived": {archived},
            "language": "Rust"
        }}"#
    )
}

fn toprepos(api_url: &str) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("toprepos"));
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("TOPREPOS_API_URL")
        .env("NO_COLOR", "1")
        .arg("--api-url")
        .arg(api_url);
    cmd
}

fn catalogue() -> String {
    format!(
        "[{}]",
        [
            repo_json(1, "old-but-popular", 50, "2021-05-01T00:00:00Z", false, false),
            repo_json(2, "forked", 500, "2024-05-01T00:00:00Z", true, false),
            repo_json(3, "fresh", 5, "2023-05-01T00:00:00Z", false, false),
            repo_json(4, "frozen", 900, "2024-06-01T00:00:00Z", false, true),
            repo_json(5, "middle", 5, "2022-05-01T00:00:00Z", false, false),
        ]
        .join(",")
    )
}

#[test]
fn test_top_by_stars_json() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(catalogue())
        .expect(1)
        .create();

    let output = toprepos(&url)
        .args(["octocat", "--json"])
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ready");
    assert_eq!(value["policy"], "stars");
    let names: Vec<&str> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["old-but-popular", "fresh", "middle"]);
}

#[test]
fn test_top_by_recency_with_limit() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_body(catalogue())
        .create();

    toprepos(&url)
        .args(["octocat", "--sort", "recent", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh"))
        .stdout(predicate::str::contains("middle"))
        .stdout(predicate::str::contains("old-but-popular").not())
        .stdout(predicate::str::contains("forked").not())
        .stdout(predicate::str::contains("frozen").not());
}

#[test]
fn test_top_empty_catalogue() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/users/nobody/repos?per_page=100")
        .with_status(200)
        .with_body("[]")
        .create();

    toprepos(&url)
        .arg("nobody")
        .assert()
        .success()
        .stdout(predicate::str::contains("No public repositories"));
}

#[test]
fn test_top_server_error_fails() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(500)
        .create();

    toprepos(&url)
        .arg("octocat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}

#[test]
fn test_top_sends_token_when_set() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .match_header("authorization", "Bearer secret_token_value")
        .with_status(200)
        .with_body("[]")
        .create();

    toprepos(&url)
        .env("GITHUB_TOKEN", "secret_token_value")
        .arg("octocat")
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_invalid_username_fails() {
    Command::new(cargo::cargo_bin!("toprepos"))
        .arg("owner/repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username"));
}
