use super::*;

#[derive(Debug, Deserialize)]
struct SuccessBody {
  count: Option<Value>,
  results: Option<Vec<Value>>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum SearchResponse {
  Failure {
    body: String,
    status: StatusCode,
  },
  Success {
    count: Value,
    results: Vec<Value>,
    status: StatusCode,
  },
}

impl SearchResponse {
  fn count_text(count: &Value) -> String {
    match count {
      Value::Null => "0".to_string(),
      Value::String(s) => s.clone(),
      other => other.to_string(),
    }
  }

  /// The first result, when it is a record.
  pub(crate) fn first_course(&self) -> Option<SearchResult> {
    match self {
      Self::Failure { .. } => None,
      Self::Success { results, .. } => results
        .first()
        .and_then(Value::as_object)
        .cloned()
        .map(SearchResult::from),
    }
  }

  /// Interprets a raw response. Only a `200 OK` body is decoded; any other
  /// status keeps the body as opaque text.
  pub(crate) fn from_parts(
    status: StatusCode,
    body: String,
  ) -> Result<Self, Error> {
    if status != StatusCode::OK {
      return Ok(Self::Failure { body, status });
    }

    let SuccessBody { count, results } = serde_json::from_str(&body)
      .map_err(|source| Error::ResponseDecode { source })?;

    Ok(Self::Success {
      count: count.unwrap_or(Value::Null),
      results: results.unwrap_or_default(),
      status,
    })
  }

  pub(crate) fn status(&self) -> StatusCode {
    match self {
      Self::Failure { status, .. } | Self::Success { status, .. } => *status,
    }
  }

  pub(crate) fn write_summary(
    &self,
    out: &mut impl Write,
    expand_nested: bool,
  ) -> Result {
    match self {
      Self::Failure { body, .. } => writeln!(out, "Response: {body}")?,
      Self::Success { count, results, .. } => {
        writeln!(out, "Count: {}", Self::count_text(count))?;
        writeln!(out, "Results: {}", results.len())?;

        if let Some(first) = results.first() {
          let first = match self.first_course() {
            Some(course) if expand_nested => {
              to_string_pretty_ascii(&course.expanded()?)?
            }
            _ => to_string_pretty_ascii(first)?,
          };

          writeln!(out, "\nFirst course: {first}")?;
        }
      }
    }

    Ok(())
  }
}
