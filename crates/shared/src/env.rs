use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5003";
pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";
pub const DEFAULT_SEARCH_FIELD: &str = "content";
pub const DEFAULT_SEARCH_SIZE: usize = 10;
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppEnv {
  pub server_addr: SocketAddr,
  pub elasticsearch_url: String,
  pub search_field: String,
  pub search_size: usize,
  pub search_timeout: Duration,
}

impl AppEnv {
  /// Load from the process environment. Call after `dotenvy::dotenv()`.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

    Ok(Self {
      server_addr: parse("SERVER_ADDR", &var("SERVER_ADDR", DEFAULT_SERVER_ADDR))?,
      elasticsearch_url: var("ELASTICSEARCH_URL", DEFAULT_ELASTICSEARCH_URL)
        .trim_end_matches('/')
        .to_owned(),
      search_field: var("SEARCH_FIELD", DEFAULT_SEARCH_FIELD),
      search_size: parse(
        "SEARCH_SIZE",
        &var("SEARCH_SIZE", &DEFAULT_SEARCH_SIZE.to_string()),
      )?,
      search_timeout: Duration::from_secs(parse(
        "SEARCH_TIMEOUT_SECS",
        &var("SEARCH_TIMEOUT_SECS", &DEFAULT_SEARCH_TIMEOUT_SECS.to_string()),
      )?),
    })
  }
}

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  raw
    .parse()
    .with_context(|| format!("{key} has an invalid value: {raw:?}"))
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn load(vars: &[(&str, &str)]) -> Result<AppEnv> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    AppEnv::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_when_unset() {
    let env = load(&[]).unwrap();
    assert_eq!(env.server_addr, "0.0.0.0:5003".parse().unwrap());
    assert_eq!(env.elasticsearch_url, "http://localhost:9200");
    assert_eq!(env.search_field, "content");
    assert_eq!(env.search_size, 10);
    assert_eq!(env.search_timeout, Duration::from_secs(10));
  }

  #[test]
  fn overrides_and_trims_trailing_slash() {
    let env = load(&[
      ("SERVER_ADDR", "127.0.0.1:8080"),
      ("ELASTICSEARCH_URL", "http://es:9200/"),
      ("SEARCH_FIELD", "body"),
      ("SEARCH_SIZE", "3"),
    ])
    .unwrap();
    assert_eq!(env.server_addr.port(), 8080);
    assert_eq!(env.elasticsearch_url, "http://es:9200");
    assert_eq!(env.search_field, "body");
    assert_eq!(env.search_size, 3);
  }

  #[test]
  fn invalid_value_names_the_variable() {
    let err = load(&[("SEARCH_SIZE", "many")]).unwrap_err();
    assert!(err.to_string().contains("SEARCH_SIZE"));
  }
}
