use {super::*, anyhow::Context};

#[derive(Debug)]
pub(crate) struct Client {
  client: reqwest::Client,
  config: QueryConfig,
}

impl Client {
  const DETAILS_PARAMETERS: [(&str, &str); 2] =
    [("page", "fose"), ("route", "details")];

  const JSON_CONTENT_TYPE: &str = "application/json";

  const SEARCH_PARAMETERS: [(&str, &str); 4] = [
    ("page", "fose"),
    ("route", "search"),
    ("is_ind_study", "N"),
    ("is_canc", "N"),
  ];

  pub(crate) fn details_request(
    &self,
    course: &CourseKey,
  ) -> Result<reqwest::Request, Error> {
    self.post(
      &Self::DETAILS_PARAMETERS,
      &self.config.details_request(course),
    )
  }

  async fn fetch(
    &self,
    request: reqwest::Request,
  ) -> Result<(StatusCode, String), Error> {
    debug!(url = %request.url(), srcdb = %self.config.srcdb, "sending request");

    let response = self
      .client
      .execute(request)
      .await
      .map_err(Error::transport(&self.config.endpoint))?;

    let status = response.status();

    let body = response
      .text()
      .await
      .map_err(Error::transport(&self.config.endpoint))?;

    info!(status = status.as_u16(), bytes = body.len(), "response");

    Ok((status, body))
  }

  pub(crate) fn new(config: QueryConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .context("could not initialize HTTP client")?;

    Ok(Self { client, config })
  }

  fn post<B: Serialize>(
    &self,
    parameters: &[(&str, &str)],
    body: &B,
  ) -> Result<reqwest::Request, Error> {
    self
      .client
      .post(&self.config.endpoint)
      .query(parameters)
      .header(CONTENT_TYPE, HeaderValue::from_static(Self::JSON_CONTENT_TYPE))
      .header(USER_AGENT, &self.config.user_agent)
      .json(body)
      .build()
      .map_err(Error::transport(&self.config.endpoint))
  }

  /// Sends the configured query once and writes a summary of the
  /// response to `out`.
  pub(crate) async fn run(&self, out: &mut impl Write) -> Result {
    writeln!(out, "Sending request...")?;
    out.flush()?;

    let request = match &self.config.details {
      Some(course) => self.details_request(course)?,
      None => self.search_request()?,
    };

    let (status, body) = self.fetch(request).await?;

    writeln!(out, "Status: {}", status.as_u16())?;

    match &self.config.details {
      Some(course) => {
        let response = DetailsResponse::from_parts(status, body)?;

        debug!(
          crn = %course.crn,
          status = response.status().as_u16(),
          "decoded details"
        );

        response.write_summary(out)
      }
      None => {
        let response = SearchResponse::from_parts(status, body)?;

        debug!(
          status = response.status().as_u16(),
          "decoded search results"
        );

        if let Some(first) = response.first_course() {
          debug!(
            code = first.field("code"),
            crn = first.field("crn"),
            meetings = first.meeting_times().as_ref().map(Vec::len).ok(),
            "first course"
          );
        }

        response.write_summary(out, self.config.expand_nested)
      }
    }
  }

  pub(crate) fn search_request(&self) -> Result<reqwest::Request, Error> {
    self.post(&Self::SEARCH_PARAMETERS, &self.config.search_request())
  }
}
