//! Tag substitution engine
//!
//! Lexes the document body into text and tag tokens, then expands loop
//! regions and resolves scalar tags against a scope stack: innermost
//! loop element first, ambient context last. Strict by default: any
//! tag that resolves nowhere aborts the render.

use crate::context::{TagContext, TagValue};
use crate::error::{TemplateError, TemplateResult};
use quick_xml::escape::escape;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'t> {
    Text(&'t str),
    Scalar(&'t str),
    LoopStart(&'t str),
    LoopEnd(&'t str),
}

/// Substitute `ctx` into `template`, returning the rendered text.
///
/// The output is guaranteed to contain no tag delimiters: the lexer
/// rejects stray braces and every well-formed tag either resolves or
/// fails the render. Substituted values are XML-escaped.
pub fn render(template: &str, ctx: &TagContext) -> TemplateResult<String> {
    let tokens = lex(template)?;
    let mut out = String::with_capacity(template.len());
    let mut scopes: Vec<&TagContext> = vec![ctx];
    expand(&tokens, &mut scopes, &mut out)?;
    Ok(out)
}

fn lex(template: &str) -> TemplateResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < template.len() {
        let rest = &template[pos..];
        match (rest.find('{'), rest.find('}')) {
            (None, None) => {
                tokens.push(Token::Text(rest));
                break;
            }
            (None, Some(_)) => {
                return Err(TemplateError::MalformedTemplate(
                    "'}' without a matching '{'".to_string(),
                ));
            }
            (Some(_), None) => {
                return Err(TemplateError::MalformedTemplate(
                    "'{' is never closed".to_string(),
                ));
            }
            (Some(open), Some(close)) => {
                if close < open {
                    return Err(TemplateError::MalformedTemplate(
                        "'}' without a matching '{'".to_string(),
                    ));
                }
                if open > 0 {
                    tokens.push(Token::Text(&rest[..open]));
                }
                let raw = &rest[open + 1..close];
                if raw.contains('{') {
                    return Err(TemplateError::MalformedTemplate(
                        "'{' is never closed".to_string(),
                    ));
                }
                tokens.push(tag_token(raw)?);
                pos += close + 1;
            }
        }
    }
    Ok(tokens)
}

fn tag_token(raw: &str) -> TemplateResult<Token<'_>> {
    let inner = raw.trim();
    if let Some(name) = inner.strip_prefix('#') {
        return Ok(Token::LoopStart(tag_name(name)?));
    }
    if let Some(name) = inner.strip_prefix('/') {
        return Ok(Token::LoopEnd(tag_name(name)?));
    }
    Ok(Token::Scalar(tag_name(inner)?))
}

fn tag_name(raw: &str) -> TemplateResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TemplateError::MalformedTemplate("empty tag".to_string()));
    }
    Ok(name)
}

fn lookup<'c>(scopes: &[&'c TagContext], name: &str) -> Option<&'c TagValue> {
    scopes.iter().rev().find_map(|scope| scope.get(name))
}

fn expand<'c>(
    tokens: &[Token<'_>],
    scopes: &mut Vec<&'c TagContext>,
    out: &mut String,
) -> TemplateResult<()> {
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            Token::Text(text) => out.push_str(text),
            Token::Scalar(name) => {
                let value = lookup(scopes, name)
                    .ok_or_else(|| TemplateError::UnresolvedTag(name.to_string()))?;
                if value.is_list() {
                    return Err(TemplateError::MalformedTemplate(format!(
                        "'{{{name}}}' references a list; loop over it with '{{#{name}}}'"
                    )));
                }
                out.push_str(&escape(&value.to_display_string()));
            }
            Token::LoopStart(name) => {
                let end = find_loop_end(tokens, i, name)?;
                let value = lookup(scopes, name)
                    .ok_or_else(|| TemplateError::UnresolvedTag(name.to_string()))?;
                let TagValue::List(elements) = value else {
                    return Err(TemplateError::MalformedTemplate(format!(
                        "'{{#{name}}}' does not reference a list"
                    )));
                };
                for element in elements {
                    scopes.push(element);
                    let result = expand(&tokens[i + 1..end], scopes, out);
                    scopes.pop();
                    result?;
                }
                i = end;
            }
            Token::LoopEnd(name) => {
                return Err(TemplateError::MalformedTemplate(format!(
                    "'{{/{name}}}' without a matching '{{#{name}}}'"
                )));
            }
        }
        i += 1;
    }
    Ok(())
}

/// Index of the `{/name}` matching the `{#name}` at `start`, counting
/// depth so same-named nested loops pair up correctly
fn find_loop_end(tokens: &[Token<'_>], start: usize, name: &str) -> TemplateResult<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens[start + 1..].iter().enumerate() {
        match token {
            Token::LoopStart(n) if *n == name => depth += 1,
            Token::LoopEnd(n) if *n == name => {
                if depth == 0 {
                    return Ok(start + 1 + offset);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    Err(TemplateError::MalformedTemplate(format!(
        "'{{#{name}}}' is never closed"
    )))
}
