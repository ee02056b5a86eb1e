use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("invalid filter `{filter}`, expected FIELD=VALUE")]
  FilterSyntax { filter: String },
  #[error("failed to decode nested `{field}` field")]
  NestedDecode {
    field: &'static str,
    source: serde_json::Error,
  },
  #[error("failed to decode search response body")]
  ResponseDecode { source: serde_json::Error },
  #[error("request to {endpoint} failed")]
  Transport {
    endpoint: String,
    source: reqwest::Error,
  },
}

impl Error {
  pub(crate) fn transport(
    endpoint: &str,
  ) -> impl FnOnce(reqwest::Error) -> Self + '_ {
    move |source| Self::Transport {
      endpoint: endpoint.to_string(),
      source,
    }
  }
}
