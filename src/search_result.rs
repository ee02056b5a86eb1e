use super::*;

/// A single course section returned by a catalog search.
///
/// The record is kept as an ordered JSON map, so fields the catalog adds
/// later are carried through untouched.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct SearchResult(Map<String, Value>);

impl SearchResult {
  const CART_OPTIONS: &str = "cart_opts";

  const MEETING_TIMES: &str = "meetingTimes";

  pub(crate) fn cart_options(&self) -> Result<Option<Value>, Error> {
    self.decode_nested(Self::CART_OPTIONS)
  }

  fn decode_nested<T: for<'de> Deserialize<'de>>(
    &self,
    field: &'static str,
  ) -> Result<Option<T>, Error> {
    match self.field(field) {
      None | Some("") => Ok(None),
      Some(raw) => serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| Error::NestedDecode { field, source }),
    }
  }

  /// Returns a copy with the JSON-encoded string fields replaced by their
  /// decoded values.
  pub(crate) fn expanded(&self) -> Result<Self, Error> {
    let mut expanded = self.clone();

    if let Some(meeting_times) =
      self.decode_nested::<Value>(Self::MEETING_TIMES)?
    {
      expanded
        .0
        .insert(Self::MEETING_TIMES.to_string(), meeting_times);
    }

    if let Some(cart_options) = self.cart_options()? {
      expanded.0.insert(Self::CART_OPTIONS.to_string(), cart_options);
    }

    Ok(expanded)
  }

  pub(crate) fn field(&self, name: &str) -> Option<&str> {
    self.0.get(name).and_then(Value::as_str)
  }

  pub(crate) fn meeting_times(&self) -> Result<Vec<MeetingTime>, Error> {
    Ok(self.decode_nested(Self::MEETING_TIMES)?.unwrap_or_default())
  }
}

impl From<Map<String, Value>> for SearchResult {
  fn from(fields: Map<String, Value>) -> Self {
    Self(fields)
  }
}
