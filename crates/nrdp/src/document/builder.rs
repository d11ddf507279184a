//! checkresults document construction.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use super::{CHECK_TYPE_PASSIVE, INDENT_WIDTH};
use crate::error::DocumentError;
use crate::result::CheckResult;
use crate::validation::is_xml_char;

/// One `<checkresult>` with every field already checked and rendered
#[derive(Debug)]
struct Entry<'a> {
    kind: &'static str,
    hostname: &'a str,
    servicename: Option<&'a str>,
    state: u8,
    output: String,
}

/// Build the checkresults document for `results`, in order.
///
/// Every record is checked before anything is written: an incomplete record
/// or one carrying characters XML cannot represent fails the whole batch.
pub fn build_document(results: &[CheckResult]) -> Result<Vec<u8>, DocumentError> {
    let entries = results
        .iter()
        .enumerate()
        .map(|(index, result)| prepare(index, result))
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(write_error)?;

    if entries.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new("checkresults")))
            .map_err(write_error)?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new("checkresults")))
            .map_err(write_error)?;

        for entry in &entries {
            write_entry(&mut writer, entry)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("checkresults")))
            .map_err(write_error)?;
    }

    let mut document = writer.into_inner();
    document.push(b'\n');

    debug!(results = entries.len(), bytes = document.len(), "Built checkresults document");

    Ok(document)
}

/// [`build_document`] as a `String`
pub fn build_document_string(results: &[CheckResult]) -> Result<String, DocumentError> {
    String::from_utf8(build_document(results)?).map_err(write_error)
}

fn prepare(index: usize, result: &CheckResult) -> Result<Entry<'_>, DocumentError> {
    let invalid = |reason: &str| DocumentError::InvalidResult { index, reason: reason.to_string() };

    let servicename = match result {
        CheckResult::Host(_) => None,
        CheckResult::Service(service) => {
            Some(service.service().ok_or_else(|| invalid("service is not set"))?)
        }
    };
    let hostname = result.host().ok_or_else(|| invalid("host is not set"))?;
    let state = result.state_code().ok_or_else(|| invalid("state is not set"))?;
    let output = result.formatted();

    let texts = [
        ("host", hostname),
        ("service", servicename.unwrap_or_default()),
        ("output", output.as_str()),
    ];
    for (field, text) in texts {
        if !text.chars().all(is_xml_char) {
            return Err(invalid(&format!("{field} contains characters not allowed in XML")));
        }
    }

    Ok(Entry { kind: result.kind(), hostname, servicename, state, output })
}

fn write_entry(writer: &mut Writer<Vec<u8>>, entry: &Entry<'_>) -> Result<(), DocumentError> {
    let start = BytesStart::new("checkresult")
        .with_attributes([("type", entry.kind), ("checktype", CHECK_TYPE_PASSIVE)]);

    writer.write_event(Event::Start(start)).map_err(write_error)?;

    write_text_element(writer, "hostname", entry.hostname)?;
    if let Some(servicename) = entry.servicename {
        write_text_element(writer, "servicename", servicename)?;
    }
    write_text_element(writer, "state", &entry.state.to_string())?;
    write_text_element(writer, "output", &entry.output)?;

    writer.write_event(Event::End(BytesEnd::new("checkresult"))).map_err(write_error)?;

    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), DocumentError> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(write_error)?;
    let text = BytesText::from_escaped(escape_text(text));
    writer.write_event(Event::Text(text)).map_err(write_error)?;
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(write_error)?;
    Ok(())
}

/// Escape markup characters and carriage returns; quotes stay literal.
///
/// A raw `\r` would be normalised away by the receiving XML parser.
fn escape_text(text: &str) -> Cow<'_, str> {
    let escaped = partial_escape(text);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

fn write_error(error: impl Display) -> DocumentError {
    DocumentError::Write(error.to_string())
}
