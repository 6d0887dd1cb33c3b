//! Parser for Go-style type expressions.
//!
//! Accepts the declared type syntax of struct fields:
//!
//! | Syntax | Result |
//! |---|---|
//! | `Name` | [`TypeExpr::Identifier`] |
//! | `pkg.Name` | [`TypeExpr::Qualified`] |
//! | `*T` | [`TypeExpr::Pointer`] |
//! | `[]T`, `[8]T` | [`TypeExpr::Sequence`] |
//! | `map[K]V` | [`TypeExpr::Mapping`] |
//! | `interface{}` | [`TypeExpr::Identifier`] named `interface{}` |
//!
//! The public entry point is [`parse_type_expr`].

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, cut_err, delimited, fail, opt, preceded},
    error::{ContextError, ErrMode},
    token::{one_of, take_while},
};

use crate::{ast::TypeExpr, error::ParseError};

/// Maximum number of nested type constructors (`*`, `[]`, `map`) accepted by
/// [`parse_type_expr`].
pub const MAX_NESTING: usize = 64;

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
    /// A structural limit that was exceeded
    Limit(&'static str),
}

type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;

/// Parse zero or more whitespace characters
fn ws(input: &mut &str) -> IResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a bare identifier
fn identifier<'src>(input: &mut &'src str) -> IResult<&'src str> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .context(Context::Label("type name"))
        .parse_next(input)
}

/// Parse `*T`
fn pointer(input: &mut &str, depth: usize) -> IResult<TypeExpr> {
    preceded('*', cut_err(|i: &mut &str| type_expr(i, depth + 1)))
        .map(TypeExpr::pointer)
        .parse_next(input)
}

/// Parse `[]T` or `[N]T`; the length is discarded
fn sequence(input: &mut &str, depth: usize) -> IResult<TypeExpr> {
    preceded(
        (
            '[',
            ws,
            take_while(0.., |c: char| c.is_ascii_digit()),
            ws,
            cut_err(']').context(Context::Label("closing `]`")),
        ),
        cut_err(|i: &mut &str| type_expr(i, depth + 1)),
    )
    .map(TypeExpr::sequence)
    .parse_next(input)
}

/// Parse a name, a qualified name, `map[K]V` or `interface{}`
fn named(input: &mut &str, depth: usize) -> IResult<TypeExpr> {
    let first = identifier.parse_next(input)?;

    if first == "map" && input.trim_start().starts_with('[') {
        let key = cut_err(delimited(
            (ws, '['),
            |i: &mut &str| type_expr(i, depth + 1),
            ']',
        ))
        .context(Context::Label("map key"))
        .parse_next(input)?;
        let value = cut_err(|i: &mut &str| type_expr(i, depth + 1))
            .context(Context::Label("map value"))
            .parse_next(input)?;
        return Ok(TypeExpr::mapping(key, value));
    }

    if first == "interface" && opt((ws, '{', ws, '}')).parse_next(input)?.is_some() {
        return Ok(TypeExpr::ident("interface{}"));
    }

    let name = opt(preceded('.', cut_err(identifier))).parse_next(input)?;
    Ok(match name {
        Some(name) => TypeExpr::qualified(first, name),
        None => TypeExpr::ident(first),
    })
}

/// Parse a type expression with surrounding whitespace
///
/// `depth` counts the enclosing type constructors.
fn type_expr(input: &mut &str, depth: usize) -> IResult<TypeExpr> {
    if depth > MAX_NESTING {
        return cut_err(fail)
            .context(Context::Limit("type nested too deeply"))
            .parse_next(input);
    }

    delimited(
        ws,
        alt((
            |i: &mut &str| pointer(i, depth),
            |i: &mut &str| sequence(i, depth),
            |i: &mut &str| named(i, depth),
        )),
        ws,
    )
    .context(Context::Label("type expression"))
    .parse_next(input)
}

/// Converts a winnow error into a [`ParseError`] at the failure position.
fn convert_error(
    source: &str,
    remaining: &str,
    error: ErrMode<ContextError<Context>>,
) -> ParseError {
    let offset = source.len() - remaining.len();
    let message = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().next().map(|ctx| match ctx {
            Context::Label(label) => format!("expected {label}"),
            Context::Limit(limit) => (*limit).to_string(),
        }),
        ErrMode::Incomplete(_) => None,
    };

    ParseError::new(
        offset,
        message.unwrap_or_else(|| "expected type expression".to_string()),
    )
}

/// Parses a Go-style type expression.
///
/// The whole input must be consumed; surrounding whitespace is allowed.
/// At most [`MAX_NESTING`] type constructors may be nested.
///
/// # Errors
///
/// Returns [`ParseError`] for empty input, malformed syntax, nesting deeper
/// than [`MAX_NESTING`], or trailing text after a complete expression.
///
/// # Examples
///
/// ```
/// use dddmap_parser::{TypeExpr, parse_type_expr};
///
/// let expr = parse_type_expr("map[string]*pkg.User").unwrap();
/// assert_eq!(
///     expr,
///     TypeExpr::mapping(
///         TypeExpr::ident("string"),
///         TypeExpr::pointer(TypeExpr::qualified("pkg", "User")),
///     )
/// );
/// assert!(parse_type_expr("map[string]").is_err());
/// ```
pub fn parse_type_expr(source: &str) -> Result<TypeExpr, ParseError> {
    let mut input = source;
    let expr = type_expr(&mut input, 0)
        .map_err(|err| convert_error(source, input, err))?;

    if !input.is_empty() {
        let offset = source.len() - input.len();
        return Err(ParseError::new(offset, format!("unexpected `{input}`")));
    }

    trace!(source, expr:?; "Parsed type expression");
    Ok(expr)
}
