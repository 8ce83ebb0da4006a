
use gh_core::creds::Token;
use serde_json::{Value, json};
use wiremock::MockServer;

use crate::client::GitHubClient;

/// Client pointed at `mock_server`
pub(super) fn mock_client(mock_server: &MockServer) -> GitHubClient {
  GitHubClient::new(&Token::new("test_token"))
    .and_then(|client| client.with_base_url(&mock_server.uri()))
    .expect("client for mock server")
}

/// `Link` header advertising `page` of `path` as the next page
pub(super) fn next_link(mock_server: &MockServer, path: &str, page: u32) -> String {
  format!("<{}{}?per_page=10&page={}>; rel=\"next\"", mock_server.uri(), path, page)
}

pub(super) fn repo_json(owner: &str, name: &str) -> Value {
  json!({
      "id": 1,
      "name": name,
      "full_name": format!("{owner}/{name}"),
      "owner": { "login": owner, "id": 2 },
      "private": false,
      "html_url": format!("https://github.com/{owner}/{name}"),
      "ssh_url": format!("git@github.com:{owner}/{name}.git"),
      "clone_url": format!("https://github.com/{owner}/{name}.git")
  })
}

pub(super) fn gist_json(owner: &str, id: &str) -> Value {
  json!({
      "id": id,
      "html_url": format!("https://gist.github.com/{id}"),
      "description": format!("gist {id}"),
      "public": true,
      "owner": { "login": owner, "id": 3 },
      "files": {}
  })
}
