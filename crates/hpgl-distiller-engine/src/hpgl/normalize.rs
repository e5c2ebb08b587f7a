//! Bounding box normalization
//!
//! Artwork exported from drawing packages rarely sits at the device origin.
//! Normalization is a two pass job: the first pass collects the extents of
//! every drawn coordinate, the second rewrites each pair relative to the
//! lower-left corner. User offsets are applied on top, and are applied even
//! when normalization itself is off.

use super::{classify, Command, CommandStream};
use hpgl_distiller_core::{AcceptSet, BoundingBox, DistillerConfig};
use std::borrow::Cow;

/// Collect the extents of all coordinate pairs in accepted drawing commands.
///
/// Returns `None` when the document has no readable coordinates.
pub fn scan_extents(stream: &CommandStream, accept_set: &AcceptSet) -> Option<BoundingBox> {
    let points = stream
        .tokens()
        .filter_map(|token| classify(token, accept_set))
        .filter_map(|command| command.coordinate_list())
        .flatten();
    BoundingBox::from_points(points)
}

/// Translation applied to every coordinate pair before emission.
///
/// Held as `i128` so `offset - min` cannot overflow for any pair of `i64`
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinateShift {
    pub dx: i128,
    pub dy: i128,
}

impl CoordinateShift {
    /// Shift for the given configuration and pre-pass result.
    ///
    /// Without normalization, or with nothing to normalize, only the user
    /// offsets are applied.
    pub fn new(config: &DistillerConfig, extents: Option<&BoundingBox>) -> Self {
        let (min_x, min_y) = match extents {
            Some(bbox) if config.normalize => (bbox.min_x, bbox.min_y),
            _ => (0, 0),
        };
        Self {
            dx: i128::from(config.x_offset) - i128::from(min_x),
            dy: i128::from(config.y_offset) - i128::from(min_y),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Rewritten arguments for `command`, `None` if a coordinate leaves the i64 range.
    pub fn apply<'a>(&self, command: &Command<'a>) -> Option<Cow<'a, [u8]>> {
        command.shifted_args(self.dx, self.dy)
    }
}

/// Runs the extents pre-pass and hands out the resulting shift.
#[derive(Debug, Clone)]
pub struct BoundingBoxNormalizer {
    extents: Option<BoundingBox>,
    shift: CoordinateShift,
}

impl BoundingBoxNormalizer {
    /// Prepare the rewrite for `stream`.
    ///
    /// The extents pass only runs when normalization was asked for.
    pub fn prepare(config: &DistillerConfig, stream: &CommandStream) -> Self {
        let extents = if config.normalize {
            let extents = scan_extents(stream, config.accept_set());
            match &extents {
                Some(bbox) => tracing::info!("Bounding box: {}", bbox),
                None => tracing::info!("Bounding box: no coordinates to normalize"),
            }
            extents
        } else {
            None
        };

        let shift = CoordinateShift::new(config, extents.as_ref());
        if !shift.is_identity() {
            tracing::debug!("Shifting coordinates by ({}, {})", shift.dx, shift.dy);
        }

        Self { extents, shift }
    }

    pub fn extents(&self) -> Option<&BoundingBox> {
        self.extents.as_ref()
    }

    pub fn shift(&self) -> CoordinateShift {
        self.shift
    }

    pub fn is_active(&self) -> bool {
        !self.shift.is_identity()
    }

    /// Arguments to emit for `command`.
    ///
    /// A command whose shifted coordinates would not fit is emitted unchanged.
    pub fn rewrite<'a>(&self, command: &Command<'a>) -> Cow<'a, [u8]> {
        if !self.is_active() {
            return Cow::Borrowed(command.args);
        }
        match self.shift.apply(command) {
            Some(args) => args,
            None => {
                tracing::warn!(
                    "Coordinates of {}{} are out of range after shifting by ({}, {}); left unchanged",
                    command.mnemonic,
                    String::from_utf8_lossy(command.args),
                    self.shift.dx,
                    self.shift.dy
                );
                Cow::Borrowed(command.args)
            }
        }
    }
}
