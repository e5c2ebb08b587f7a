//! HPGL mnemonics understood by simple two-axis cutters

use std::fmt;

/// Mnemonic of a command that a cutter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// `IN` - initialize.
    Initialize,
    /// `PA` - plot absolute.
    PlotAbsolute,
    /// `PD` - pen down.
    PenDown,
    /// `PU` - pen up.
    PenUp,
    /// `PG` - page feed.
    PageFeed,
    /// `PR` - plot relative.
    PlotRelative,
    /// `!PG` - device specific page feed / cut-off.
    DevicePageFeed,
}

impl Mnemonic {
    /// Every mnemonic, in wire order.
    pub const ALL: [Mnemonic; 7] = [
        Mnemonic::Initialize,
        Mnemonic::PlotAbsolute,
        Mnemonic::PenDown,
        Mnemonic::PenUp,
        Mnemonic::PageFeed,
        Mnemonic::PlotRelative,
        Mnemonic::DevicePageFeed,
    ];

    /// The literal text of the mnemonic as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "IN",
            Self::PlotAbsolute => "PA",
            Self::PenDown => "PD",
            Self::PenUp => "PU",
            Self::PageFeed => "PG",
            Self::PlotRelative => "PR",
            Self::DevicePageFeed => "!PG",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    /// Number of bytes the mnemonic occupies at the start of a token.
    pub fn byte_len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the command's arguments are (x, y) coordinate pairs.
    pub fn carries_coordinates(&self) -> bool {
        matches!(
            self,
            Self::PlotAbsolute | Self::PenDown | Self::PenUp | Self::PlotRelative
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of mnemonics that survive distillation.
///
/// Entries are kept ordered longest first, so `!PG` is tried before any
/// two character mnemonic when matching a token prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptSet {
    entries: Vec<Mnemonic>,
}

impl AcceptSet {
    /// The accept set for a vinyl cutter: `IN PA PD PU PG PR !PG`.
    pub fn standard() -> Self {
        let mut entries = Mnemonic::ALL.to_vec();
        // Stable sort keeps wire order among equal lengths.
        entries.sort_by_key(|m| std::cmp::Reverse(m.byte_len()));
        Self { entries }
    }

    /// Find the accepted mnemonic that prefixes `token`, if any.
    pub fn match_prefix(&self, token: &[u8]) -> Option<Mnemonic> {
        self.entries
            .iter()
            .copied()
            .find(|m| token.starts_with(m.as_bytes()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Mnemonic> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AcceptSet {
    fn default() -> Self {
        Self::standard()
    }
}
