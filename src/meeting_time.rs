use super::*;

/// One entry of a section's `meetingTimes` list.
///
/// `meet_day` counts from Monday as `0`; times are `HHMM` without a separator.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct MeetingTime {
  #[serde(deserialize_with = "deserialize_string_or_number")]
  pub(crate) end_time: String,
  #[serde(deserialize_with = "deserialize_string_or_number")]
  pub(crate) meet_day: String,
  #[serde(deserialize_with = "deserialize_string_or_number")]
  pub(crate) start_time: String,
}
