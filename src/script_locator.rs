use scraper::{ElementRef, Html};
use tracing::debug;

use crate::error::{Result, StandingsError};

/// Substring identifying the script block that carries the league data.
pub const SCRIPT_MARKER: &str = "games";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
    StartTag(String),
    EndTag(String),
    Text(String),
    Comment,
}

/// Flatten an HTML document into tokens in document order.
///
/// Parsing goes through html5ever, so malformed markup is repaired the way a browser
/// would repair it. Script bodies come through as a single text token.
pub fn tokenize(html: &str) -> Vec<HtmlToken> {
    let document = Html::parse_document(html);
    let mut tokens = Vec::new();
    push_element(document.root_element(), &mut tokens);
    tokens
}

fn push_element(el: ElementRef<'_>, out: &mut Vec<HtmlToken>) {
    let name = el.value().name().to_string();
    out.push(HtmlToken::StartTag(name.clone()));
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            push_element(child_el, out);
        } else if let Some(text) = child.value().as_text() {
            out.push(HtmlToken::Text(String::from(&**text)));
        } else if child.value().is_comment() {
            out.push(HtmlToken::Comment);
        }
    }
    out.push(HtmlToken::EndTag(name));
}

/// Return the text of the first `<script>` whose body contains [`SCRIPT_MARKER`].
///
/// Only the token right after a `script` start tag is inspected; a script whose first
/// token is not text (an empty `<script src=..>`) is skipped.
pub fn locate_script<I>(tokens: I) -> Result<String>
where
    I: IntoIterator<Item = HtmlToken>,
{
    let mut tokens = tokens.into_iter();
    let mut scripts_seen = 0usize;
    while let Some(token) = tokens.next() {
        let HtmlToken::StartTag(name) = token else {
            continue;
        };
        if !name.eq_ignore_ascii_case("script") {
            continue;
        }
        scripts_seen += 1;
        match tokens.next() {
            Some(HtmlToken::Text(text)) if text.contains(SCRIPT_MARKER) => {
                debug!(scripts_seen, len = text.len(), "located league script");
                return Ok(text);
            }
            Some(_) => {}
            None => break,
        }
    }
    debug!(scripts_seen, "token stream ended without league script");
    Err(StandingsError::ScriptNotFound {
        marker: SCRIPT_MARKER,
    })
}

pub fn find_script(html: &str) -> Result<String> {
    locate_script(tokenize(html))
}
