//! Root-tag rewriting applied to every resolved icon.

use std::borrow::Cow;
use std::ops::Range;

use inline_icons_config::IconSettings;
use regex::{Captures, Regex};

const ROOT_TAG_PATTERN: &str = r#"(?i)\A<svg\b(?:[^>"']|"[^"]*"|'[^']*')*>"#;
const ATTRIBUTE_PATTERN: &str =
    r#"(\s+)([^\s=/>"']+)(?:(\s*=\s*)(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#;

/// Strips the sizing marker from the root `<svg>` tag and adds the inline
/// class marker exactly once. Everything outside the root opening tag is left
/// byte-for-byte intact; documents without an `<svg>` root pass through.
#[derive(Clone, Debug)]
pub struct SvgTransform {
    sizing_marker: String,
    inline_class: String,
    root_tag: Regex,
    attribute: Regex,
}

/// Value of the root tag's `class` attribute and where it sits in the tag.
struct ClassAttr<'a> {
    span: Range<usize>,
    leading: &'a str,
    name: &'a str,
    equals: &'a str,
    value: &'a str,
    /// `None` for an unquoted value.
    quote: Option<char>,
}

impl SvgTransform {
    pub fn new(sizing_marker: impl Into<String>, inline_class: impl Into<String>) -> Self {
        Self {
            sizing_marker: sizing_marker.into(),
            inline_class: inline_class.into(),
            root_tag: Regex::new(ROOT_TAG_PATTERN).expect("root tag pattern is valid"),
            attribute: Regex::new(ATTRIBUTE_PATTERN).expect("attribute pattern is valid"),
        }
    }

    pub fn from_settings(settings: &IconSettings) -> Self {
        Self::new(&settings.sizing_marker, &settings.inline_class)
    }

    pub fn sizing_marker(&self) -> &str {
        &self.sizing_marker
    }

    pub fn inline_class(&self) -> &str {
        &self.inline_class
    }

    pub fn apply(&self, svg: &str) -> String {
        let Some(root) = self.find_root_tag(svg) else {
            return svg.to_string();
        };

        let rewritten = self.rewrite_root_tag(&svg[root.clone()]);
        let mut output = String::with_capacity(svg.len() + self.inline_class.len() + 9);
        output.push_str(&svg[..root.start]);
        output.push_str(&rewritten);
        output.push_str(&svg[root.end..]);
        output
    }

    pub fn has_root_tag(&self, svg: &str) -> bool {
        self.find_root_tag(svg).is_some()
    }

    /// Byte range of the first element's opening tag, when that element is
    /// `<svg>`. Comments, processing instructions and doctypes are skipped.
    fn find_root_tag(&self, svg: &str) -> Option<Range<usize>> {
        let mut pos = 0;
        loop {
            pos += svg[pos..].find('<')?;
            let rest = &svg[pos..];
            if rest.starts_with("<!--") {
                pos += rest.find("-->")? + 3;
            } else if rest.starts_with("<?") {
                pos += rest.find("?>")? + 2;
            } else if rest.starts_with("<!") {
                pos += skip_declaration(rest)?;
            } else {
                let tag = self.root_tag.find(rest)?;
                return Some(pos + tag.start()..pos + tag.end());
            }
        }
    }

    fn rewrite_root_tag<'a>(&self, tag: &'a str) -> Cow<'a, str> {
        match self.class_attr(tag) {
            Some(attr) => self.rewrite_class_attr(tag, attr),
            None => {
                // `<svg` is always the first four bytes of a root tag match.
                let (open, rest) = tag.split_at(4);
                Cow::Owned(format!(r#"{open} class="{}"{rest}"#, self.inline_class))
            }
        }
    }

    fn class_attr<'a>(&self, tag: &'a str) -> Option<ClassAttr<'a>> {
        let attrs = &tag[4..];
        self.attribute
            .captures_iter(attrs)
            .find(|caps| caps[2].eq_ignore_ascii_case("class"))
            .and_then(|caps| class_attr_from(tag, &caps))
    }

    fn rewrite_class_attr<'a>(&self, tag: &'a str, attr: ClassAttr<'a>) -> Cow<'a, str> {
        let value = attr.value;
        let tokens: Vec<&str> = value.split_whitespace().collect();
        let has_marker = tokens.iter().any(|token| *token == self.sizing_marker);
        let inline_count = tokens
            .iter()
            .filter(|token| **token == self.inline_class)
            .count();

        if !has_marker && inline_count == 1 && attr.quote.is_some() {
            return Cow::Borrowed(tag);
        }

        let new_value = if !has_marker && inline_count == 1 {
            value.to_string()
        } else if !has_marker && inline_count == 0 {
            if value.trim().is_empty() {
                self.inline_class.clone()
            } else {
                format!("{} {}", self.inline_class, value)
            }
        } else {
            let mut classes = vec![self.inline_class.as_str()];
            classes.extend(tokens.into_iter().filter(|token| {
                *token != self.sizing_marker && *token != self.inline_class
            }));
            classes.join(" ")
        };

        // Unquoted values are written back double-quoted.
        let quote = attr.quote.unwrap_or('"');
        let equals = if attr.equals.is_empty() { "=" } else { attr.equals };
        let mut rewritten = String::with_capacity(tag.len() + self.inline_class.len() + 3);
        rewritten.push_str(&tag[..attr.span.start]);
        rewritten.push_str(attr.leading);
        rewritten.push_str(attr.name);
        rewritten.push_str(equals);
        rewritten.push(quote);
        rewritten.push_str(&new_value);
        rewritten.push(quote);
        rewritten.push_str(&tag[attr.span.end..]);
        Cow::Owned(rewritten)
    }
}

fn class_attr_from<'a>(tag: &'a str, caps: &Captures<'a>) -> Option<ClassAttr<'a>> {
    let offset = 4;
    let whole = caps.get(0)?;
    let mut end = offset + whole.end();
    let (value, quote) = match (caps.get(4), caps.get(5), caps.get(6)) {
        (Some(value), _, _) => (value.as_str(), Some('"')),
        (None, Some(value), _) => (value.as_str(), Some('\'')),
        (None, None, Some(value)) => {
            // `class=a/>`: the slash belongs to the self-closing tag.
            let raw = value.as_str();
            if raw.ends_with('/') && &tag[end..] == ">" {
                end -= 1;
                (&raw[..raw.len() - 1], None)
            } else {
                (raw, None)
            }
        }
        (None, None, None) => ("", Some('"')),
    };
    Some(ClassAttr {
        span: offset + whole.start()..end,
        leading: caps.get(1).map_or("", |m| m.as_str()),
        name: caps.get(2).map_or("", |m| m.as_str()),
        equals: caps.get(3).map_or("", |m| m.as_str()),
        value,
        quote,
    })
}

/// Length of a `<!DOCTYPE ...>` declaration, including an internal subset.
fn skip_declaration(rest: &str) -> Option<usize> {
    let close = rest.find('>')?;
    match rest.find('[') {
        Some(open) if open < close => {
            let subset_end = open + rest[open..].find(']')?;
            Some(subset_end + rest[subset_end..].find('>')? + 1)
        }
        _ => Some(close + 1),
    }
}
