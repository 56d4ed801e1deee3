//! Document parser: cards, nesting and lenient recovery.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, LogicalLine, logical_lines, parse_content_line};
use super::values::{
    decode_base64, parse_address, parse_date, parse_organization, parse_structured_name,
    parse_timestamp, split_component, unescape_text,
};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion, encodings};

/// Cards recovered from a document plus the problems skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub cards: Vec<VCard>,
    pub issues: Vec<ParseError>,
}

/// Parses a vCard document, recovering from malformed content.
///
/// ## Summary
/// Malformed content lines are skipped, an unterminated card is closed at
/// the end of input, content outside `BEGIN:VCARD`/`END:VCARD` is ignored,
/// and nested cards (2.1 `AGENT`) are skipped. Each of these is reported
/// in [`ParseOutcome::issues`]. A missing or unknown `VERSION` is not an
/// issue; the card falls back to 3.0 and keeps the declared text.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_lenient(input: &str) -> ParseOutcome {
    tracing::debug!("Parsing vCard document");

    let lines = logical_lines(input);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    parser.parse_document();

    tracing::debug!(
        count = parser.cards.len(),
        issues = parser.issues.len(),
        "Parsed vCards"
    );

    ParseOutcome {
        cards: parser.cards,
        issues: parser.issues,
    }
}

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Strict variant of [`parse_lenient`]: any recovered problem fails the parse.
///
/// ## Errors
/// Returns the first problem found in the document.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    let outcome = parse_lenient(input);
    match outcome.issues.into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(outcome.cards),
    }
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(ParseErrorKind::NoVCard, 1, "document holds no BEGIN:VCARD")
    })
}

/// Walks the unfolded lines once, collecting cards and issues.
struct Parser {
    lines: std::vec::IntoIter<LogicalLine>,
    cards: Vec<VCard>,
    issues: Vec<ParseError>,
}

impl Parser {
    fn new(lines: Vec<LogicalLine>) -> Self {
        Self {
            lines: lines.into_iter(),
            cards: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn parse_document(&mut self) {
        while let Some(line) = self.lines.next() {
            if is_marker(&line.text, "BEGIN") {
                let card = self.parse_vcard(line.line);
                self.cards.push(card);
            } else {
                self.issues.push(ParseError::outside_card(line.line, &line.text));
            }
        }
    }

    fn parse_vcard(&mut self, start_line: usize) -> VCard {
        let mut card = VCard::new();

        while let Some(line) = self.lines.next() {
            if is_marker(&line.text, "END") {
                return card;
            }
            if is_marker(&line.text, "BEGIN") {
                tracing::trace!(line = line.line, "Skipping nested vCard");
                self.skip_nested(line.line);
                continue;
            }

            match parse_content_line(&line.text, line.line) {
                Ok(content) if content.name == "VERSION" => {
                    let declared = content.value.trim().to_string();
                    card.version = VCardVersion::parse(&declared).unwrap_or_default();
                    card.declared_version = Some(declared);
                }
                Ok(content) => {
                    let prop = into_property(content, line.line, &mut self.issues);
                    card.properties.push(prop);
                }
                Err(issue) => {
                    tracing::debug!(%issue, "Skipping malformed content line");
                    self.issues.push(issue);
                }
            }
        }

        self.issues.push(ParseError::unterminated(start_line, false));
        card
    }

    fn skip_nested(&mut self, start_line: usize) {
        let mut depth = 1_usize;
        for line in self.lines.by_ref() {
            if is_marker(&line.text, "BEGIN") {
                depth += 1;
            } else if is_marker(&line.text, "END") {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
        self.issues.push(ParseError::unterminated(start_line, true));
    }
}

fn into_property(line: ContentLine, line_num: usize, issues: &mut Vec<ParseError>) -> VCardProperty {
    let mut prop = VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value: VCardValue::Unknown(String::new()),
        raw_value: line.value,
        line: Some(line_num),
    };
    prop.value = interpret(&prop, line_num, issues);
    prop
}

/// Types the raw value by property name and `VALUE`. Anything that does
/// not parse stays [`VCardValue::Unknown`] for the consumer to look at.
fn interpret(prop: &VCardProperty, line_num: usize, issues: &mut Vec<ParseError>) -> VCardValue {
    let raw = prop.raw_value.as_str();
    let unknown = || VCardValue::Unknown(raw.to_string());

    // Quoted-printable needs the charset, which the consumer applies.
    if prop.is_quoted_printable() || prop.name.starts_with("X-") {
        return unknown();
    }
    if prop.encoding().is_some_and(encodings::is_base64) {
        return decode_base64(raw, line_num).map_or_else(
            |issue| {
                issues.push(issue);
                unknown()
            },
            VCardValue::Binary,
        );
    }

    let declared = prop.get_param_value("VALUE").map(str::to_ascii_lowercase);
    match declared.as_deref() {
        Some("text") => return VCardValue::Text(unescape_text(raw)),
        Some("uri" | "url" | "content-id" | "cid") => return VCardValue::Uri(raw.to_string()),
        _ => {}
    }

    match prop.name.as_str() {
        "N" => VCardValue::StructuredName(parse_structured_name(raw)),
        "ADR" => VCardValue::Address(parse_address(raw)),
        "ORG" => VCardValue::Organization(parse_organization(raw)),
        "BDAY" | "ANNIVERSARY" => parse_date(raw, line_num).map_or_else(|_| unknown(), VCardValue::Date),
        "REV" => parse_timestamp(raw, line_num).map_or_else(|_| unknown(), VCardValue::Timestamp),
        "URL" | "PHOTO" | "LOGO" | "SOUND" | "KEY" | "FBURL" | "CALADRURI" | "CALURI"
        | "SOURCE" | "MEMBER" | "IMPP" => VCardValue::Uri(raw.to_string()),
        "NICKNAME" | "CATEGORIES" => VCardValue::TextList(split_component(raw)),
        _ => VCardValue::Text(unescape_text(raw)),
    }
}

/// `BEGIN:VCARD` / `END:VCARD`, in any case and with stray whitespace.
fn is_marker(line: &str, marker: &str) -> bool {
    line.trim()
        .split_once(':')
        .is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case(marker) && value.trim().eq_ignore_ascii_case("VCARD")
        })
}
