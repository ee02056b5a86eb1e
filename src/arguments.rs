use super::*;

/// Query the course catalog search endpoint and summarize the response.
#[derive(Debug, Parser)]
#[command(name = "cab", version)]
pub(crate) struct Arguments {
  #[arg(
    long,
    requires = "crn",
    help = "Course code of the section to look up, e.g. `CSCI 0150`"
  )]
  pub(crate) code: Option<String>,
  #[arg(
    long,
    value_name = "CRN",
    requires = "code",
    conflicts_with_all = ["filters", "expand_nested"],
    help = "Look up details for one section instead of searching"
  )]
  pub(crate) crn: Option<String>,
  #[arg(
    long,
    env = "CAB_API_URL",
    default_value = QueryConfig::DEFAULT_ENDPOINT,
    help = "Catalog search endpoint"
  )]
  pub(crate) endpoint: String,
  #[arg(long, help = "Decode `meetingTimes` and `cart_opts` before printing")]
  pub(crate) expand_nested: bool,
  #[arg(
    long = "filter",
    value_name = "FIELD=VALUE",
    help = "Search criterion, repeatable, replaces the default filters"
  )]
  pub(crate) filters: Vec<Criterion>,
  #[arg(
    long,
    default_value = QueryConfig::DEFAULT_SRCDB,
    help = "Term code to search"
  )]
  pub(crate) srcdb: String,
  #[arg(
    long,
    value_name = "SECONDS",
    default_value_t = QueryConfig::DEFAULT_TIMEOUT_SECS,
    help = "Request timeout"
  )]
  pub(crate) timeout: u64,
  #[arg(
    long,
    default_value = QueryConfig::DEFAULT_USER_AGENT,
    help = "User-Agent header value"
  )]
  pub(crate) user_agent: String,
  #[arg(short, long, help = "Log request details to stderr")]
  pub(crate) verbose: bool,
}

impl Arguments {
  pub(crate) fn into_config(self) -> QueryConfig {
    QueryConfig {
      details: self
        .code
        .zip(self.crn)
        .map(|(code, crn)| CourseKey { code, crn }),
      endpoint: self.endpoint,
      expand_nested: self.expand_nested,
      filters: if self.filters.is_empty() {
        QueryConfig::default_filters()
      } else {
        self.filters
      },
      srcdb: self.srcdb,
      timeout: Duration::from_secs(self.timeout),
      user_agent: self.user_agent,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, clap::CommandFactory};

  fn parse(args: &[&str]) -> Arguments {
    Arguments::try_parse_from(
      std::iter::once("cab").chain(args.iter().copied()),
    )
    .unwrap()
  }

  #[test]
  fn command_is_well_formed() {
    Arguments::command().debug_assert();
  }

  #[test]
  fn no_flags_yield_default_config() {
    let mut config = parse(&[]).into_config();

    // the environment may point at another endpoint
    config.endpoint = QueryConfig::DEFAULT_ENDPOINT.to_string();

    assert_eq!(config, QueryConfig::default());
  }

  #[test]
  fn filters_replace_defaults_in_order() {
    let config = parse(&[
      "--filter",
      "subject=CSCI",
      "--filter",
      "is_canc=N",
      "--srcdb",
      "202510",
    ])
    .into_config();

    assert_eq!(
      config.filters,
      [
        Criterion::new("subject", "CSCI"),
        Criterion::new("is_canc", "N"),
      ]
    );
    assert_eq!(config.srcdb, "202510");
  }

  #[test]
  fn overrides_are_applied() {
    let config = parse(&[
      "--endpoint",
      "http://localhost:8080/api/",
      "--user-agent",
      "cab-test",
      "--timeout",
      "5",
      "--expand-nested",
    ])
    .into_config();

    assert_eq!(config.endpoint, "http://localhost:8080/api/");
    assert_eq!(config.user_agent, "cab-test");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.expand_nested);
  }

  #[test]
  fn malformed_filter_is_rejected() {
    assert!(
      Arguments::try_parse_from(["cab", "--filter", "is_canc"]).is_err()
    );
  }

  #[test]
  fn code_and_crn_select_details_lookup() {
    let config =
      parse(&["--code", "HIST 0150A", "--crn", "25874", "--srcdb", "202510"])
        .into_config();

    assert_eq!(
      config.details,
      Some(CourseKey {
        code: "HIST 0150A".to_string(),
        crn: "25874".to_string(),
      })
    );
    assert_eq!(config.srcdb, "202510");
  }

  #[test]
  fn details_lookup_needs_code_and_crn() {
    assert!(Arguments::try_parse_from(["cab", "--crn", "25874"]).is_err());
    assert!(Arguments::try_parse_from(["cab", "--code", "CSCI 0150"]).is_err());
    assert!(
      Arguments::try_parse_from([
        "cab",
        "--code",
        "CSCI 0150",
        "--crn",
        "26680",
        "--filter",
        "is_canc=N",
      ])
      .is_err()
    );
  }
}
