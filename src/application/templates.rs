//! Name template compilation.
//!
//! The three operator templates are compiled once, when configuration is
//! loaded, into a [`NameTemplates`] value that is then shared read-only by
//! every formatting call.
//!
//! Templates use Tera syntax. Configurations written for the Go bridge use
//! leading-dot references (`{{.}}`, `{{.username}}`); these are rewritten
//! before compilation so both forms work:
//!
//! ```text
//! discord_{{.}}          ->  discord_{{value}}
//! {{ .global_name }}     ->  {{ global_name }}
//! {{ guild.name }}       ->  unchanged (member access)
//! ```

use serde::Serialize;
use tera::{Context, Tera};

use crate::shared::error::{TemplateError, TemplateKind};

/// Value the username template is rendered with during the self-test.
pub const USER_ID_PROBE: &str = "1234567890";

/// Name the whole bound input is available under in every template.
pub const ROOT_VARIABLE: &str = "value";

/// The compiled username, display name and channel name templates.
///
/// Cheap to share behind an `Arc`; rendering takes `&self` and allocates a
/// fresh output buffer per call.
#[derive(Debug)]
pub struct NameTemplates {
    tera: Tera,
}

impl NameTemplates {
    /// Compile the three templates.
    ///
    /// Fails on the first template with a syntax error, or when the username
    /// template does not echo the user ID it is given.
    pub fn compile(
        username: &str,
        displayname: &str,
        channelname: &str,
    ) -> Result<Self, TemplateError> {
        let mut templates = Self {
            tera: Tera::default(),
        };

        templates.add(TemplateKind::Username, username)?;
        if !templates
            .render_username(USER_ID_PROBE)
            .contains(USER_ID_PROBE)
        {
            return Err(TemplateError::MissingUserIdPlaceholder);
        }

        templates.add(TemplateKind::Displayname, displayname)?;
        templates.add(TemplateKind::Channelname, channelname)?;

        Ok(templates)
    }

    fn add(&mut self, kind: TemplateKind, source: &str) -> Result<(), TemplateError> {
        let normalized = normalize_dot_references(source);
        self.tera
            .add_raw_template(kind.as_str(), &normalized)
            .map_err(|source| TemplateError::Syntax { kind, source })?;

        tracing::debug!(template = %kind, source = %normalized, "Compiled name template");
        Ok(())
    }

    /// Render the username template for a remote user ID.
    pub fn render_username(&self, user_id: &str) -> String {
        let mut context = Context::new();
        context.insert(ROOT_VARIABLE, user_id);
        context.insert("id", user_id);
        self.render_context(TemplateKind::Username, context)
    }

    /// Render a template with the fields of `input` as top-level variables.
    ///
    /// Errors are logged and produce an empty string.
    pub fn render<T: Serialize>(&self, kind: TemplateKind, input: &T) -> String {
        match Context::from_serialize(input) {
            Ok(mut context) => {
                context.insert(ROOT_VARIABLE, input);
                self.render_context(kind, context)
            }
            Err(e) => {
                tracing::warn!(template = %kind, error = ?e, "Template input is not a record");
                String::new()
            }
        }
    }

    fn render_context(&self, kind: TemplateKind, context: Context) -> String {
        match self.tera.render(kind.as_str(), &context) {
            Ok(rendered) => rendered,
            Err(e) => {
                tracing::warn!(template = %kind, error = ?e, "Failed to render name template");
                String::new()
            }
        }
    }
}

/// Rewrite Go-style dot references inside `{{ }}` and `{% %}` tags.
fn normalize_dot_references(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = find_tag_open(rest) {
        let (literal, tag) = rest.split_at(start);
        out.push_str(literal);

        let close = if tag.starts_with("{{") { "}}" } else { "%}" };
        let body = &tag[2..];
        let Some(end) = find_tag_close(body, close) else {
            // Unterminated tag, let the parser report it.
            out.push_str(tag);
            return out;
        };

        out.push_str(&tag[..2]);
        out.push_str(&rewrite_expression(&body[..end]));
        out.push_str(close);
        rest = &body[end + close.len()..];

        // Raw block contents are literal text.
        if close == "%}" && statement_keyword(&body[..end]) == "raw" {
            let raw_len = find_endraw(rest).unwrap_or(rest.len());
            out.push_str(&rest[..raw_len]);
            rest = &rest[raw_len..];
        }
    }

    out.push_str(rest);
    out
}

/// The statement tag body without whitespace control or padding.
fn statement_keyword(body: &str) -> &str {
    body.trim().trim_matches('-').trim()
}

/// Offset of the `{% endraw %}` tag closing a raw block.
fn find_endraw(s: &str) -> Option<usize> {
    s.match_indices("{%").map(|(i, _)| i).find(|&i| {
        let body = &s[i + 2..];
        find_tag_close(body, "%}").is_some_and(|end| statement_keyword(&body[..end]) == "endraw")
    })
}

fn find_tag_open(s: &str) -> Option<usize> {
    s.match_indices('{')
        .map(|(i, _)| i)
        .find(|&i| matches!(s.as_bytes().get(i + 1), Some(b'{') | Some(b'%')))
}

fn find_tag_close(body: &str, close: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in body.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if is_quote(c) => quote = Some(c),
            None if body[i..].starts_with(close) => return Some(i),
            None => {}
        }
    }
    None
}

fn rewrite_expression(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + ROOT_VARIABLE.len());
    let mut quote = None;
    let mut prev: Option<char> = None;
    let mut chars = expr.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                out.push(c);
            }
            None if is_quote(c) => {
                quote = Some(c);
                out.push(c);
            }
            None if c == '.' && !ends_operand(prev) => match chars.peek() {
                Some(&next) if next.is_alphabetic() || next == '_' => {}
                Some(&next) if next.is_ascii_digit() => out.push(c),
                _ => out.push_str(ROOT_VARIABLE),
            },
            None => out.push(c),
        }
        prev = Some(c);
    }

    out
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// A dot after one of these characters is member access, not a reference.
fn ends_operand(prev: Option<char>) -> bool {
    matches!(prev, Some(p) if p.is_alphanumeric() || p == '_' || p == ')' || p == ']')
}
