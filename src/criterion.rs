use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Criterion {
  pub(crate) field: String,
  pub(crate) value: String,
}

impl Criterion {
  pub(crate) fn new(field: &str, value: &str) -> Self {
    Self {
      field: field.to_string(),
      value: value.to_string(),
    }
  }
}

impl FromStr for Criterion {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.split_once('=') {
      Some((field, value)) if !field.is_empty() => Ok(Self::new(field, value)),
      _ => Err(Error::FilterSyntax {
        filter: s.to_string(),
      }),
    }
  }
}
