//! `${name}` message templates.
//!
//! # Syntax
//!
//! - `${name}` - substitutes the value of `name`; left as written when absent
//! - `$` on its own is an ordinary character, so `$${cost}` renders as `$45`
//! - `{$name}` and stray braces are literal text
//! - when a second `${` opens before the first one closes, the earlier `${` is
//!   literal: `${${double}}` renders as `${woot}`
//!
//! A `${` that never closes is a syntax error. [`Template::parse`] reports it;
//! [`interpolate`] returns the whole template unchanged instead.
//!
//! Substituted values are copied verbatim and never scanned again, so a value
//! of `${name}` for `name` cannot recurse.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::domain::error::DomainError;
use crate::domain::values::Lookup;

const OPEN: &[u8] = b"${";
const CLOSE: u8 = b'}';

/// Substitute every resolvable `${name}` in `template`.
///
/// Absent names stay as written. A template with an unterminated `${` is
/// returned unchanged as a whole.
///
/// ```
/// use herald_core::domain::{Values, interpolate};
///
/// let values = Values::new().with("b", "middle");
/// assert_eq!(
///     interpolate("${a} and ${b} are sitting in a ${c}", &values),
///     "${a} and middle are sitting in a ${c}",
/// );
/// ```
pub fn interpolate<L: Lookup + ?Sized>(template: &str, values: &L) -> String {
    match Template::parse(template) {
        Ok(parsed) => parsed.render(values),
        Err(err) => {
            debug!(error = %err, "template not parseable, passing it through unchanged");
            template.to_owned()
        }
    }
}

/// One piece of a parsed template, as byte ranges into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is.
    Literal(Range<usize>),
    /// A `${name}` marker. `span` covers the whole marker, `name` only the token.
    Placeholder { span: Range<usize>, name: Range<usize> },
}

/// A parsed template: parse once, render with many value maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` in a single left-to-right pass.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnterminatedPlaceholder`] when a `${` has no closing `}`.
    pub fn parse(source: impl Into<String>) -> Result<Self, DomainError> {
        let source = source.into();
        let segments = scan(source.as_bytes())?;
        trace!(segments = segments.len(), "template parsed");
        Ok(Self { source, segments })
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(&self.source[name.clone()]),
            Segment::Literal(_) => None,
        })
    }

    /// Distinct placeholder names with no value in `values`, in first-seen order.
    pub fn unresolved<L: Lookup + ?Sized>(&self, values: &L) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for name in self.placeholders() {
            if values.lookup(name).is_none() && !missing.contains(&name) {
                missing.push(name);
            }
        }
        missing
    }

    /// Render, leaving placeholders without a value as written.
    pub fn render<L: Lookup + ?Sized>(&self, values: &L) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(range) => out.push_str(&self.source[range.clone()]),
                Segment::Placeholder { span, name } => {
                    match values.lookup(&self.source[name.clone()]) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&self.source[span.clone()]),
                    }
                }
            }
        }
        out
    }

    /// Render, failing if any placeholder has no value.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnresolvedPlaceholders`] naming every missing key.
    pub fn render_strict<L: Lookup + ?Sized>(&self, values: &L) -> Result<String, DomainError> {
        let missing = self.unresolved(values);
        if !missing.is_empty() {
            return Err(DomainError::UnresolvedPlaceholders {
                names: missing.into_iter().map(str::to_owned).collect(),
            });
        }
        Ok(self.render(values))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// All delimiters are ASCII, so every index produced here is a char boundary.
fn scan(bytes: &[u8]) -> Result<Vec<Segment>, DomainError> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos..].starts_with(OPEN) {
            pos += 1;
            continue;
        }

        let mut open = pos;
        let mut cursor = pos + OPEN.len();
        let close = loop {
            match bytes.get(cursor) {
                None => return Err(DomainError::UnterminatedPlaceholder { position: open }),
                Some(&CLOSE) => break cursor,
                Some(_) if bytes[cursor..].starts_with(OPEN) => {
                    // Innermost marker wins; the outer `${` becomes literal.
                    open = cursor;
                    cursor += OPEN.len();
                }
                Some(_) => cursor += 1,
            }
        };

        if literal_start < open {
            segments.push(Segment::Literal(literal_start..open));
        }
        segments.push(Segment::Placeholder {
            span: open..close + 1,
            name: open + OPEN.len()..close,
        });

        pos = close + 1;
        literal_start = pos;
    }

    if literal_start < bytes.len() {
        segments.push(Segment::Literal(literal_start..bytes.len()));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Values;

    fn vals<const N: usize>(pairs: [(&str, &str); N]) -> Values {
        pairs.into_iter().collect()
    }

    #[test]
    fn simple_substitution() {
        let values = vals([("name", "David"), ("age", "95")]);
        assert_eq!(
            interpolate("Hello ${name}. You are ${age} years old.", &values),
            "Hello David. You are 95 years old."
        );
    }

    #[test]
    fn no_placeholders_is_identity() {
        let values = vals([("x", "y")]);
        for text in ["", "plain text", "{braces} and $dollars", "}{ $ { } $"] {
            assert_eq!(interpolate(text, &values), text);
        }
    }

    #[test]
    fn absent_key_left_untouched() {
        assert_eq!(
            interpolate("My name is ${absent}", &Values::new()),
            "My name is ${absent}"
        );
    }

    #[test]
    fn empty_value_renders_empty_span() {
        let values = vals([("empty", "")]);
        assert_eq!(interpolate("before${empty}after", &values), "beforeafter");
    }

    #[test]
    fn values_are_not_rescanned() {
        let values = vals([("name", "${name}"), ("other", "${name}")]);
        assert_eq!(interpolate("my name is ${name}", &values), "my name is ${name}");
        assert_eq!(interpolate("${other}", &values), "${name}");
    }

    #[test]
    fn dollar_before_marker_is_literal() {
        let values = vals([("leave", "foo"), ("cost", "45")]);
        assert_eq!(interpolate("$${leave}}", &values), "$foo}");
        assert_eq!(interpolate("$${cost}", &values), "$45");
    }

    #[test]
    fn nested_marker_resolves_innermost() {
        let values = vals([("double", "woot")]);
        assert_eq!(interpolate("${${double}}", &values), "${woot}");
        assert_eq!(interpolate("${a ${double}", &values), "${a woot");
    }

    #[test]
    fn reversed_marker_is_literal() {
        let values = vals([("age", "95")]);
        assert_eq!(interpolate("{$age}", &values), "{$age}");
    }

    #[test]
    fn unterminated_marker_returns_whole_template() {
        let values = vals([("name", "David")]);
        let template = "Hello ${name}, you owe ${amount";
        assert_eq!(interpolate(template, &values), template);
    }

    #[test]
    fn parse_reports_unterminated_position() {
        assert_eq!(
            Template::parse("ab ${x").unwrap_err(),
            DomainError::UnterminatedPlaceholder { position: 3 }
        );
        // The innermost opener is the one that never closes.
        assert_eq!(
            Template::parse("${a ${b").unwrap_err(),
            DomainError::UnterminatedPlaceholder { position: 4 }
        );
    }

    #[test]
    fn segments_cover_source() {
        let template = Template::parse("in${t}nal").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal(0..2),
                Segment::Placeholder { span: 2..6, name: 4..5 },
                Segment::Literal(6..9),
            ]
        );
    }

    #[test]
    fn empty_name_is_a_placeholder() {
        let template = Template::parse("x${}y").unwrap();
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec![""]);
        assert_eq!(template.render(&Values::new()), "x${}y");
        assert_eq!(template.render(&vals([("", "-")])), "x-y");
    }

    #[test]
    fn placeholders_in_order_with_repeats() {
        let template = Template::parse("${b} ${a} ${b}").unwrap();
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["b", "a", "b"]);
    }

    #[test]
    fn unresolved_is_distinct_in_first_seen_order() {
        let template = Template::parse("${c} ${a} ${c} ${b}").unwrap();
        let values = vals([("a", "1")]);
        assert_eq!(template.unresolved(&values), vec!["c", "b"]);
    }

    #[test]
    fn render_strict_fails_on_missing() {
        let template = Template::parse("${a} and ${b}").unwrap();
        assert_eq!(
            template.render_strict(&vals([("a", "1")])).unwrap_err(),
            DomainError::UnresolvedPlaceholders { names: vec!["b".into()] }
        );
        assert_eq!(
            template.render_strict(&vals([("a", "1"), ("b", "2")])).unwrap(),
            "1 and 2"
        );
    }

    #[test]
    fn template_is_reusable() {
        let template: Template = "Hi ${who}".parse().unwrap();
        assert_eq!(template.render(&vals([("who", "Ana")])), "Hi Ana");
        assert_eq!(template.render(&vals([("who", "Luz")])), "Hi Luz");
        assert_eq!(template.to_string(), "Hi ${who}");
    }

    #[test]
    fn unicode_around_markers() {
        let values = vals([("emoji", "🎉"), ("text", "日本語")]);
        assert_eq!(
            interpolate("¡Hola ${emoji} ${text}! ${ñ}", &values),
            "¡Hola 🎉 日本語! ${ñ}"
        );
    }

    #[test]
    fn works_with_plain_hash_map() {
        let mut map = std::collections::HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        assert_eq!(interpolate("${k}", &map), "v");
    }
}
