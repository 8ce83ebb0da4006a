//! Helpers shared by the binary-level tests.

#![allow(dead_code)]

use assert_cmd::Command;
use gh_test_utils::ConfigFileGuard;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Every variable the tools read, so the developer's own setup cannot leak in.
const GH_VARS: [&str; 10] = [
  "GH_TOKEN",
  "GH_LOG_LEVEL",
  "GH_API_URL",
  "GH_CLONE_ORGANIZATION",
  "GH_CLONE_SSH",
  "GH_CLONE_USER",
  "GH_CLONE_EMAIL",
  "GH_FOREACH_REPOSITORY_AFFILIATION",
  "GH_FOREACH_REPOSITORY_VISIBILITY",
  "GH_GISTS_ORGANIZATION",
];

/// Run `cmd` against `config` only: no `GH_*` variables, no `RUST_LOG`, and
/// HOME pointing at the config file's temporary directory.
pub fn isolated(mut cmd: Command, config: &ConfigFileGuard) -> Command {
  for var in GH_VARS {
    cmd.env_remove(var);
  }
  cmd
    .env_remove("RUST_LOG")
    .env("HOME", config.dir())
    .env("NO_COLOR", "1")
    .arg("--config")
    .arg(config.path());
  cmd
}

/// A config file with a token and the mock server as API root
pub fn config_for(server: &MockServer, extra: &str) -> ConfigFileGuard {
  ConfigFileGuard::new(&format!(
    "token = \"test-token\"\napi-url = \"{}\"\n{}",
    server.uri(),
    extra
  ))
}

/// Mount one page of `endpoint`.
///
/// `page` is `None` for the first request (no `page` parameter); `next`
/// adds a `Link` header pointing at the following page.
pub async fn mount_page(server: &MockServer, endpoint: &str, page: Option<u32>, body: Value, next: Option<u32>) {
  let mut response = ResponseTemplate::new(200).set_body_json(body);
  if let Some(next) = next {
    response = response.insert_header(
      "Link",
      format!(
        "<{}{}?per_page=10&page={}>; rel=\"next\"",
        server.uri(),
        endpoint,
        next
      )
      .as_str(),
    );
  }

  let mock = Mock::given(method("GET")).and(path(endpoint));
  let mock = match page {
    Some(page) => mock.and(query_param("page", page.to_string())),
    None => mock.and(query_param_is_missing("page")),
  };
  mock.respond_with(response).expect(1).mount(server).await;
}

/// A repository record as `/user/repos` returns it
pub fn repo_json(full_name: &str, clone_url: &str) -> Value {
  let (owner, name) = full_name.split_once('/').unwrap_or(("", full_name));
  json!({
    "id": 1,
    "name": name,
    "full_name": full_name,
    "owner": {"login": owner, "type": "Organization"},
    "private": false,
    "html_url": format!("https://github.com/{full_name}"),
    "ssh_url": format!("git@github.com:{full_name}.git"),
    "clone_url": clone_url,
  })
}

/// A gist record as `/gists` returns it
pub fn gist_json(id: &str, owner: &str) -> Value {
  json!({
    "id": id,
    "owner": {"login": owner},
    "html_url": format!("https://gist.github.com/{id}"),
    "description": format!("gist {id}"),
    "public": true,
    "files": {}
  })
}

/// The value of `field` in each JSON line of `stdout`
pub fn field_per_line(stdout: &[u8], field: &str) -> Vec<String> {
  String::from_utf8_lossy(stdout)
    .lines()
    .map(|line| {
      let record: Value = serde_json::from_str(line).unwrap();
      record[field].as_str().unwrap_or_default().to_string()
    })
    .collect()
}
