//! Command classification and argument parsing

use hpgl_distiller_core::{AcceptSet, Mnemonic, Point};
use std::borrow::Cow;

/// An accepted token split into its mnemonic and raw argument bytes.
///
/// `args` is everything after the mnemonic, untouched. For `PGfoo` the
/// mnemonic is `PG` and the arguments are `foo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    pub mnemonic: Mnemonic,
    pub args: &'a [u8],
}

impl<'a> Command<'a> {
    /// Whether the argument text looks like it holds a coordinate pair.
    pub fn has_coordinate_separator(&self) -> bool {
        self.args.contains(&b',')
    }

    /// Parse the arguments as exactly two integers.
    pub fn coordinate_pair(&self) -> Option<Point> {
        match parse_integers(self.args)?.as_slice() {
            [x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    /// Parse the arguments as a non-empty list of `x,y` pairs.
    ///
    /// Only commands whose mnemonic carries coordinates have points.
    pub fn coordinate_list(&self) -> Option<Vec<Point>> {
        if !self.mnemonic.carries_coordinates() {
            return None;
        }
        let values = parse_integers(self.args)?;
        if values.len() % 2 != 0 {
            return None;
        }
        Some(
            values
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
        )
    }

    /// Arguments with every coordinate pair shifted by `(dx, dy)`.
    ///
    /// Arguments that are not a clean coordinate list are returned unchanged,
    /// as are all arguments when the shift is zero. Returns `None` when a
    /// shifted coordinate no longer fits in an `i64`.
    pub fn shifted_args(&self, dx: i128, dy: i128) -> Option<Cow<'a, [u8]>> {
        if dx == 0 && dy == 0 {
            return Some(Cow::Borrowed(self.args));
        }
        let Some(points) = self.coordinate_list() else {
            return Some(Cow::Borrowed(self.args));
        };
        let shifted = points
            .iter()
            .map(|p| p.checked_translate(dx, dy).map(|p| format!("{},{}", p.x, p.y)))
            .collect::<Option<Vec<_>>>()?;
        Some(Cow::Owned(shifted.join(",").into_bytes()))
    }
}

/// Classify a token against the accept set.
///
/// Returns `None` for tokens that a cutter has no use for.
pub fn classify<'a>(token: &'a [u8], accept_set: &AcceptSet) -> Option<Command<'a>> {
    let mnemonic = accept_set.match_prefix(token)?;
    Some(Command {
        mnemonic,
        args: &token[mnemonic.byte_len()..],
    })
}

/// Parse comma separated signed integers, ignoring blanks around each field.
fn parse_integers(args: &[u8]) -> Option<Vec<i64>> {
    let text = std::str::from_utf8(args).ok()?;
    if text.trim().is_empty() {
        return None;
    }
    text.split(',')
        .map(|field| field.trim().parse::<i64>().ok())
        .collect()
}
