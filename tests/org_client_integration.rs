use ghorg::github::config::GITHUB_API_BASE;
use ghorg::{
    ClientConfig, Fixture, GhOrgError, GithubOrgClient, ReplayTransport, has_license, init_logging,
};
use httpmock::prelude::*;
use serde_json::json;

const FIXTURES: &str = include_str!("fixtures/orgs.json");

fn fixtures() -> Vec<Fixture> {
    Fixture::parse(FIXTURES).expect("fixtures parse")
}

fn replay_client(fixture: &Fixture) -> GithubOrgClient<ReplayTransport> {
    let transport = ReplayTransport::from_fixture(GITHUB_API_BASE, fixture).unwrap();
    GithubOrgClient::with_transport(fixture.org.clone(), transport)
}

#[tokio::test]
async fn test_public_repos_replay() {
    init_logging();

    for fixture in fixtures() {
        let client = replay_client(&fixture);

        let repos = client.public_repos(None).await.unwrap();
        assert_eq!(repos, fixture.expected_repos, "org {}", fixture.org);
    }
}

#[tokio::test]
async fn test_public_repos_with_license_replay() {
    for fixture in fixtures() {
        let client = replay_client(&fixture);

        let repos = client.public_repos(Some("apache-2.0")).await.unwrap();
        assert_eq!(repos, fixture.apache2_repos, "org {}", fixture.org);
    }
}

#[tokio::test]
async fn test_small_org_scenario() {
    let fixture = fixtures().into_iter().find(|f| f.org == "x").unwrap();
    let client = replay_client(&fixture);

    assert_eq!(
        client.public_repos_url().await.unwrap(),
        "https://api/orgs/x/repos"
    );
    assert_eq!(client.public_repos(None).await.unwrap().len(), 3);
    assert_eq!(
        client.public_repos(Some("apache-2.0")).await.unwrap(),
        vec!["truth"]
    );

    let transport = client.transport();
    assert_eq!(transport.calls("https://api.github.com/orgs/x"), 1);
    assert_eq!(transport.calls("https://api/orgs/x/repos"), 1);
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_http_client_end_to_end() {
    let server = MockServer::start_async().await;
    let repos_url = server.url("/orgs/acme/repos");

    let org_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/orgs/acme");
            then.status(200)
                .json_body(json!({"login": "acme", "repos_url": repos_url}));
        })
        .await;
    let repos_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/orgs/acme/repos");
            then.status(200).json_body(json!([
                {"name": "anvil", "license": {"key": "apache-2.0"}},
                {"name": "rocket-skates", "license": {"key": "mit"}}
            ]));
        })
        .await;

    let config = ClientConfig::default().with_api_base(server.base_url());
    let client = GithubOrgClient::with_config("acme", &config).unwrap();

    assert_eq!(
        client.public_repos(None).await.unwrap(),
        vec!["anvil", "rocket-skates"]
    );
    assert_eq!(
        client.public_repos(Some("mit")).await.unwrap(),
        vec!["rocket-skates"]
    );

    org_mock.assert_hits_async(1).await;
    repos_mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_http_failure_aborts_listing() {
    // Reserve a free port, then release it so connections are refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::default().with_api_base(format!("http://127.0.0.1:{}", port));
    let client = GithubOrgClient::with_config("acme", &config).unwrap();

    let err = client.public_repos(None).await.unwrap_err();
    assert!(matches!(err, GhOrgError::Http(_)));
}

#[test]
fn test_default_client() {
    let client = GithubOrgClient::new("google").unwrap();
    assert_eq!(client.org_url(), "https://api.github.com/orgs/google");
}

#[test]
fn test_has_license_without_a_client() {
    let repo = json!({"license": {"key": "mit"}});

    assert!(GithubOrgClient::has_license(&repo, "mit").unwrap());
    assert!(!GithubOrgClient::has_license(&repo, "apache-2.0").unwrap());
    assert!(has_license(&repo, "mit").unwrap());
}
