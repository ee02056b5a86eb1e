use super::*;

/// Identifies one section for a details lookup.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CourseKey {
  pub(crate) code: String,
  pub(crate) crn: String,
}

impl CourseKey {
  pub(crate) fn group(&self) -> String {
    format!("code:{}", self.code)
  }

  pub(crate) fn key(&self) -> String {
    format!("crn:{}", self.crn)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_catalog_selectors() {
    let key = CourseKey {
      code: "HIST 0150A".to_string(),
      crn: "25874".to_string(),
    };

    assert_eq!(key.group(), "code:HIST 0150A");
    assert_eq!(key.key(), "crn:25874");
  }
}
