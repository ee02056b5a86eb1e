use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum DetailsResponse {
  Failure {
    body: String,
    status: StatusCode,
  },
  Success {
    details: CourseDetails,
    status: StatusCode,
  },
}

impl DetailsResponse {
  pub(crate) fn from_parts(
    status: StatusCode,
    body: String,
  ) -> Result<Self, Error> {
    if status != StatusCode::OK {
      return Ok(Self::Failure { body, status });
    }

    Ok(Self::Success {
      details: serde_json::from_str(&body)
        .map_err(|source| Error::ResponseDecode { source })?,
      status,
    })
  }

  pub(crate) fn status(&self) -> StatusCode {
    match self {
      Self::Failure { status, .. } | Self::Success { status, .. } => *status,
    }
  }

  pub(crate) fn write_summary(&self, out: &mut impl Write) -> Result {
    match self {
      Self::Failure { body, .. } => writeln!(out, "Response: {body}")?,
      Self::Success { details, .. } => details.write_summary(out)?,
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn failure_keeps_raw_body() {
    let response = DetailsResponse::from_parts(
      StatusCode::NOT_FOUND,
      "no such section".to_string(),
    )
    .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut out = Vec::new();
    response.write_summary(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Response: no such section\n");
  }

  #[test]
  fn empty_object_has_no_details() {
    assert_eq!(
      DetailsResponse::from_parts(StatusCode::OK, "{}".to_string()).unwrap(),
      DetailsResponse::Success {
        details: CourseDetails::default(),
        status: StatusCode::OK,
      }
    );
  }

  #[test]
  fn malformed_body_is_decode_error() {
    assert!(matches!(
      DetailsResponse::from_parts(StatusCode::OK, "[".to_string()),
      Err(Error::ResponseDecode { .. })
    ));
  }
}
