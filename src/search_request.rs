use super::*;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct SearchOptions {
  pub(crate) srcdb: String,
}

/// JSON body of a catalog search.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct SearchRequest {
  pub(crate) criteria: Vec<Criterion>,
  pub(crate) other: SearchOptions,
}

impl SearchRequest {
  pub(crate) fn new(srcdb: &str, criteria: &[Criterion]) -> Self {
    Self {
      criteria: criteria.to_vec(),
      other: SearchOptions {
        srcdb: srcdb.to_string(),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_wire_shape() {
    let request = SearchRequest::new(
      "202520",
      &[
        Criterion::new("is_ind_study", "N"),
        Criterion::new("is_canc", "N"),
      ],
    );

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      serde_json::json!({
        "criteria": [
          { "field": "is_ind_study", "value": "N" },
          { "field": "is_canc", "value": "N" },
        ],
        "other": { "srcdb": "202520" },
      })
    );
  }

  #[test]
  fn empty_criteria_serialize_as_empty_list() {
    let body =
      serde_json::to_string(&SearchRequest::new("202510", &[])).unwrap();

    assert_eq!(body, r#"{"criteria":[],"other":{"srcdb":"202510"}}"#);
  }
}
