use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueryConfig {
  pub(crate) details: Option<CourseKey>,
  pub(crate) endpoint: String,
  pub(crate) expand_nested: bool,
  pub(crate) filters: Vec<Criterion>,
  pub(crate) srcdb: String,
  pub(crate) timeout: Duration,
  pub(crate) user_agent: String,
}

impl QueryConfig {
  pub(crate) const DEFAULT_ENDPOINT: &str = "https://cab.brown.edu/api/";

  pub(crate) const DEFAULT_SRCDB: &str = "202520";

  pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

  pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

  pub(crate) fn default_filters() -> Vec<Criterion> {
    vec![
      Criterion::new("is_ind_study", "N"),
      Criterion::new("is_canc", "N"),
    ]
  }

  pub(crate) fn details_request(
    &self,
    course: &CourseKey,
  ) -> DetailsRequest {
    DetailsRequest::new(&self.srcdb, course)
  }

  pub(crate) fn search_request(&self) -> SearchRequest {
    SearchRequest::new(&self.srcdb, &self.filters)
  }
}

impl Default for QueryConfig {
  fn default() -> Self {
    Self {
      details: None,
      endpoint: Self::DEFAULT_ENDPOINT.to_string(),
      expand_nested: false,
      filters: Self::default_filters(),
      srcdb: Self::DEFAULT_SRCDB.to_string(),
      timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
      user_agent: Self::DEFAULT_USER_AGENT.to_string(),
    }
  }
}
