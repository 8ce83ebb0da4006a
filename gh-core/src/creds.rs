//! Credential handling.

use std::fmt;

/// A GitHub access token.
///
/// The value is only reachable through [`Token::expose`]; `Debug` output is
/// redacted so the token never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  /// The raw token, for building the `Authorization` header
  pub fn expose(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Token(<redacted>)")
  }
}
