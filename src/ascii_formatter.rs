use super::*;

/// Pretty printer with 2-space indentation that writes every character
/// outside printable ASCII as a `\uXXXX` escape, splitting astral
/// characters into surrogate pairs.
pub(crate) struct AsciiFormatter(PrettyFormatter<'static>);

impl AsciiFormatter {
  pub(crate) fn new() -> Self {
    Self(PrettyFormatter::with_indent(b"  "))
  }
}

impl Formatter for AsciiFormatter {
  fn begin_array<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.begin_array(writer)
  }

  fn begin_array_value<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
    first: bool,
  ) -> io::Result<()> {
    self.0.begin_array_value(writer, first)
  }

  fn begin_object<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.begin_object(writer)
  }

  fn begin_object_key<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
    first: bool,
  ) -> io::Result<()> {
    self.0.begin_object_key(writer, first)
  }

  fn begin_object_value<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.begin_object_value(writer)
  }

  fn end_array<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.end_array(writer)
  }

  fn end_array_value<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.end_array_value(writer)
  }

  fn end_object<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.end_object(writer)
  }

  fn end_object_value<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
  ) -> io::Result<()> {
    self.0.end_object_value(writer)
  }

  fn write_string_fragment<W: ?Sized + io::Write>(
    &mut self,
    writer: &mut W,
    fragment: &str,
  ) -> io::Result<()> {
    for ch in fragment.chars() {
      if (' '..='~').contains(&ch) {
        writer.write_all(ch.encode_utf8(&mut [0; 4]).as_bytes())?;
      } else {
        for unit in ch.encode_utf16(&mut [0; 2]) {
          write!(writer, "\\u{unit:04x}")?;
        }
      }
    }

    Ok(())
  }
}
