use super::*;

/// Catalog details for one section. The `_html` fields hold markup and are
/// stripped to plain text when read.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct CourseDetails {
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) credits_html: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) description: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) instructordetail_html: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) meeting_html: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_text")]
  pub(crate) title: Option<String>,
}

impl CourseDetails {
  pub(crate) fn description(&self) -> Option<String> {
    Self::plain(self.description.as_deref())
  }

  fn plain(field: Option<&str>) -> Option<String> {
    field.map(strip_html).filter(|text| !text.is_empty())
  }

  pub(crate) fn write_summary(&self, out: &mut impl Write) -> Result {
    for (label, field) in [
      ("Title", &self.title),
      ("Credits", &self.credits_html),
      ("Instructor", &self.instructordetail_html),
      ("Meeting", &self.meeting_html),
    ] {
      if let Some(text) = Self::plain(field.as_deref()) {
        writeln!(out, "{label}: {text}")?;
      }
    }

    if let Some(description) = self.description() {
      writeln!(out, "\nDescription: {description}")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, indoc::indoc};

  #[test]
  fn summary_lists_plain_text_fields() {
    let details: CourseDetails = serde_json::from_str(
      r#"{
        "title": "The Histories of Capitalism",
        "credits_html": "<p>1 course credit</p>",
        "instructordetail_html": "<div class=\"instructor-name\">J. Smith</div>",
        "meeting_html": "<div class=\"meet\">MWF 10-10:50a</div>",
        "description": "<p>How markets &amp; states shaped the modern world.</p>",
        "seats": "<div>40</div>"
      }"#,
    )
    .unwrap();

    let mut out = Vec::new();
    details.write_summary(&mut out).unwrap();

    assert_eq!(
      String::from_utf8(out).unwrap(),
      indoc! {"
        Title: The Histories of Capitalism
        Credits: 1 course credit
        Instructor: J. Smith
        Meeting: MWF 10-10:50a

        Description: How markets & states shaped the modern world.
      "}
    );
  }

  #[test]
  fn missing_and_empty_fields_are_skipped() {
    let details: CourseDetails = serde_json::from_str(
      r#"{"title": "Seminar", "description": "<p></p>", "meeting_html": null}"#,
    )
    .unwrap();

    assert_eq!(details.description(), None);

    let mut out = Vec::new();
    details.write_summary(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Title: Seminar\n");
  }
}
