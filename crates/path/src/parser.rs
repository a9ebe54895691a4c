//! A `nom`-based parser for the path expression grammar.
//!
//! ```text
//! expr      = abs / rel-up / rel-same / bare
//! abs       = "/" segment *("/" segment)
//! rel-same  = "./" segment
//! rel-up    = 1*("../") [segment *("/" segment)]
//! bare      = segment *("/" segment)
//! segment   = name ["[" index "]"]
//! index     = 1*DIGIT / "*" / "@"
//! ```
use super::ast::{Anchor, IndexSelector, PathExpr, Segment};
use crate::error::PathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, u64 as nom_u64},
    combinator::{map, opt},
    multi::{many1, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded},
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<PathExpr, PathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PathError::Empty);
    }
    match path_expr(trimmed) {
        Ok(("", expr)) => Ok(expr),
        Ok((rem, _)) => Err(PathError::Parse(
            input.to_string(),
            format!("parser did not consume all input, remainder: '{}'", rem),
        )),
        Err(e) => Err(PathError::Parse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn path_expr(input: &str) -> IResult<&str, PathExpr> {
    alt((absolute, rel_up, rel_same, bare)).parse(input)
}

fn absolute(input: &str) -> IResult<&str, PathExpr> {
    map(
        preceded(char('/'), separated_list0(char('/'), segment)),
        |segments| PathExpr {
            anchor: Anchor::Root,
            segments,
        },
    )
    .parse(input)
}

fn rel_up(input: &str) -> IResult<&str, PathExpr> {
    map(pair(many1(tag("../")), opt(segments)), |(ups, segments)| {
        PathExpr {
            anchor: Anchor::Up(ups.len()),
            segments: segments.unwrap_or_default(),
        }
    })
    .parse(input)
}

fn rel_same(input: &str) -> IResult<&str, PathExpr> {
    map(preceded(tag("./"), segments), |segments| PathExpr {
        anchor: Anchor::Up(1),
        segments,
    })
    .parse(input)
}

fn bare(input: &str) -> IResult<&str, PathExpr> {
    map(segments, |segments| PathExpr {
        anchor: Anchor::Up(1),
        segments,
    })
    .parse(input)
}

// --- Segment Parsers ---

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
    separated_list1(char('/'), segment).parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    map(
        pair(
            segment_name,
            opt(delimited(char('['), index_selector, char(']'))),
        ),
        |(name, index)| Segment {
            name: name.to_string(),
            index,
        },
    )
    .parse(input)
}

fn segment_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '/' && c != '[' && c != ']').parse(input)
}

fn index_selector(input: &str) -> IResult<&str, IndexSelector> {
    alt((
        map(nom_u64, |i| IndexSelector::Literal(i as usize)),
        map(char('*'), |_| IndexSelector::Wildcard),
        map(char('@'), |_| IndexSelector::Current),
    ))
    .parse(input)
}
