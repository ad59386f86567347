//! Signature parser
//!
//! Turns signature text such as `"(x1, x2, /, out=None, *, where=True)"` or the
//! documentation form `"([start,] stop[, step,], dtype=None)"` into an ordered
//! list of [`Argument`]s.
//!
//! The parser never fails. Scraped signatures come from many unrelated libraries
//! and are not machine-checked, so malformed input yields the prefix that could
//! be interpreted (possibly nothing). Whatever sits after the outer `)`, usually
//! a `-> ReturnType` arrow, is never looked at.
//!
//! Walk over the parameter list:
//!
//! 1. leading whitespace and commas are skipped
//! 2. `[` opens an optional group, parsed recursively; every argument inside is
//!    marked optional
//! 3. `(` opens a grouped name such as `(a1, a2, ...)`, kept verbatim
//! 4. anything else is a name up to the next top-level `, : = )` or `[`,
//!    followed by an annotation after `:` and/or a default after `=`

use super::argument::{non_empty, Argument, Signature};
use super::scanning::{find_matching_close, scan_to, skip_group};

/// Optional groups nested deeper than this are treated as unbalanced
const MAX_GROUP_DEPTH: usize = 64;

const NAME_STOPS: &[char] = &[',', ':', '=', ')', '['];
const TYPE_STOPS: &[char] = &['=', ',', ')', '['];
const DEFAULT_STOPS: &[char] = &[',', ')', '['];

const ELLIPSIS: &str = "...";

/// Parse signature text into its ordered argument list
pub fn parse(text: &str) -> Vec<Argument> {
    parse_signature(text).args
}

/// Parse signature text, keeping the variadic flag alongside the arguments
pub fn parse_signature(text: &str) -> Signature {
    let Some(end) = find_matching_close(text, '(', ')') else {
        if !text.is_empty() {
            log::debug!("no balanced parameter list in {text:?}");
        }
        return Signature::default();
    };
    parse_params(&text[1..end], 0)
}

/// Parse the body of a parameter list (the text between the brackets)
///
/// Stops at a top-level `)` or at the end of `body`.
fn parse_params(body: &str, depth: usize) -> Signature {
    let mut signature = Signature::default();
    let mut rest = body;

    loop {
        rest = rest.trim_start_matches(|ch: char| ch.is_whitespace() || ch == ',');
        if rest.is_empty() {
            break;
        }

        if rest.starts_with('[') {
            let Some((group, remaining)) = expand_optional_group(rest, depth) else {
                break;
            };
            signature.variadic |= group.variadic;
            signature.args.extend(group.args);
            rest = remaining;
            continue;
        }

        if rest.starts_with('(') {
            let Some(close) = find_matching_close(rest, '(', ')') else {
                log::debug!("unbalanced grouped name at {rest:?}");
                break;
            };
            let mut arg = Argument::new(&rest[..=close]);
            let after = rest[close + 1..].trim_start();
            let next = match after.strip_prefix('=') {
                Some(default_text) => attach_default(&mut arg, default_text),
                None => Some(after),
            };
            push(&mut signature, arg);
            match next {
                Some(remaining) => rest = remaining,
                None => break,
            }
            continue;
        }

        let Some(end) = scan_to(rest, NAME_STOPS) else {
            log::debug!("unclosed quote or bracket in parameter name at {rest:?}");
            break;
        };
        let name = rest[..end].trim();
        let delimiter = rest[end..].chars().next();

        if name.is_empty() {
            match delimiter {
                Some(')') | Some('[') | None => break,
                Some(_) => {
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }

        let mut arg = if name == ELLIPSIS {
            Argument::new(ellipsis_name(&signature.args))
        } else {
            Argument::new(name)
        };

        let next = match delimiter {
            Some(':') => match parse_type(&rest[end + 1..]) {
                Some((type_expr, remaining)) => {
                    arg.type_expr = non_empty(type_expr);
                    match remaining.strip_prefix('=') {
                        Some(default_text) => attach_default(&mut arg, default_text),
                        None => Some(remaining),
                    }
                }
                None => {
                    log::debug!("unclosed quote or bracket in annotation of {name:?}");
                    None
                }
            },
            Some('=') => attach_default(&mut arg, &rest[end + 1..]),
            Some(')') => None,
            // `[` starts an optional group, handled on the next pass
            Some('[') | None => Some(&rest[end..]),
            Some(_) => Some(&rest[end + 1..]),
        };
        push(&mut signature, arg);
        match next {
            Some(remaining) => rest = remaining,
            None => break,
        }
    }

    signature
}

fn push(signature: &mut Signature, arg: Argument) {
    if arg.is_var_positional() {
        signature.variadic = true;
    }
    log::trace!("parsed argument {arg}");
    signature.args.push(arg);
}

/// Parse the `[...]` group at the start of `text`
///
/// Returns the group's arguments, all marked optional, and the text after the
/// closing `]`. `None` when the group is unbalanced, in which case nothing inside
/// it is emitted.
fn expand_optional_group(text: &str, depth: usize) -> Option<(Signature, &str)> {
    if depth >= MAX_GROUP_DEPTH {
        log::debug!("optional groups nested deeper than {MAX_GROUP_DEPTH}, stopping");
        return None;
    }
    let Some(close) = find_matching_close(text, '[', ']') else {
        log::debug!("unbalanced optional group at {text:?}");
        return None;
    };

    let mut group = parse_params(&text[1..close], depth + 1);
    for arg in &mut group.args {
        arg.optional = true;
    }
    Some((group, &text[close + 1..]))
}

/// Read a default value into `arg`, returning the text after it
fn attach_default<'a>(arg: &mut Argument, text: &'a str) -> Option<&'a str> {
    match parse_default(text) {
        Some((default_expr, remaining)) => {
            arg.default_expr = non_empty(default_expr);
            Some(remaining)
        }
        None => {
            log::debug!("unclosed quote or bracket in default of {:?}", arg.name);
            None
        }
    }
}

/// `...` stands in for a catch-all: `**kwargs` after a defaulted argument
/// (`op1=func1, op2=func2, ...`), `**args` otherwise
fn ellipsis_name(preceding: &[Argument]) -> &'static str {
    match preceding.last() {
        Some(previous) if previous.has_default() => "**kwargs",
        _ => "**args",
    }
}

/// Scan a type annotation, returning its text and the text that follows
///
/// Ends at a top-level `=`, `,` or `)`. Subscripts such as `Optional[int]` are
/// part of the annotation, but a `[` followed by `,` opens an optional group
/// (`start: int[, step]`) and ends it. `None` when the annotation runs into an
/// unclosed quote or bracket.
pub fn parse_type(text: &str) -> Option<(String, &str)> {
    let mut end = 0;
    loop {
        end += scan_to(&text[end..], TYPE_STOPS)?;
        let tail = &text[end..];
        if !tail.starts_with('[') || opens_optional_group(tail) {
            break;
        }
        end += skip_group(tail)? + 1;
    }
    Some((text[..end].trim().to_string(), &text[end..]))
}

fn opens_optional_group(text: &str) -> bool {
    text[1..].trim_start().starts_with(',')
}

/// Scan a default value, returning its text and the text that follows
///
/// A value starting with `(`, `[` or `{` is taken whole as a tuple, list or dict
/// literal; since this only runs right after `=`, a `[` here is never an optional
/// group. Any other value ends at a top-level `,`, `)` or `[`. `None` when the
/// value runs into an unclosed quote or bracket.
pub fn parse_default(text: &str) -> Option<(String, &str)> {
    let text = text.trim_start();
    if text.starts_with(['(', '[', '{']) {
        if let Some(close) = skip_group(text) {
            return Some((text[..=close].to_string(), &text[close + 1..]));
        }
    }
    let end = scan_to(text, DEFAULT_STOPS)?;
    Some((text[..end].trim().to_string(), &text[end..]))
}
