use super::*;

/// JSON body of a section details lookup.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct DetailsRequest {
  pub(crate) group: String,
  pub(crate) key: String,
  pub(crate) matched: String,
  pub(crate) srcdb: String,
  #[serde(rename = "userWithRolesStr")]
  pub(crate) user_with_roles: String,
}

impl DetailsRequest {
  const ANONYMOUS_ROLES: &str = "!!!!!!";

  pub(crate) fn new(srcdb: &str, course: &CourseKey) -> Self {
    Self {
      group: course.group(),
      key: course.key(),
      matched: course.key(),
      srcdb: srcdb.to_string(),
      user_with_roles: Self::ANONYMOUS_ROLES.to_string(),
    }
  }
}
