//! Motion timing estimation and pacing
//!
//! Cutters driven over a serial line without flow control will drop
//! commands that arrive faster than the head can move. When a slew constant
//! is configured every emitted move is followed by a wait proportional to
//! the distance the head travels.

use super::Command;
use hpgl_distiller_core::{DistillerConfig, Point};
use std::time::Duration;

/// Pacing decision for a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No wait: pacing disabled or the command has no coordinate argument.
    Immediate,
    /// Head travels from `from` to `to`.
    Travel {
        from: Point,
        to: Point,
        distance: u64,
        delay: Duration,
    },
    /// Coordinate argument present but unreadable; a fixed wait is used.
    Fallback { delay: Duration },
}

impl Pacing {
    pub fn delay(&self) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::Travel { delay, .. } | Self::Fallback { delay } => *delay,
        }
    }
}

/// Tracks the pen position and turns each command into a wait.
#[derive(Debug, Clone)]
pub struct MotionTimer<'c> {
    config: &'c DistillerConfig,
    pen: Point,
}

impl<'c> MotionTimer<'c> {
    pub fn new(config: &'c DistillerConfig) -> Self {
        Self {
            config,
            pen: Point::ORIGIN,
        }
    }

    /// Last coordinate the head was sent to.
    pub fn pen_position(&self) -> Point {
        self.pen
    }

    /// Work out the wait that should follow `command` and advance the pen.
    pub fn estimate(&mut self, command: &Command<'_>) -> Pacing {
        if !self.config.pacing_enabled() || !command.has_coordinate_separator() {
            return Pacing::Immediate;
        }

        match command.coordinate_pair() {
            Some(to) => {
                let from = self.pen;
                let distance = from.distance_to(&to);
                tracing::debug!("Distance: {} from {} to {}", distance, from, to);
                self.pen = to;
                Pacing::Travel {
                    from,
                    to,
                    distance,
                    delay: self.config.slew_for(distance),
                }
            }
            None => {
                tracing::trace!(
                    "Unreadable coordinates in {}{}, using fallback delay",
                    command.mnemonic,
                    String::from_utf8_lossy(command.args)
                );
                Pacing::Fallback {
                    delay: self.config.fallback_delay(),
                }
            }
        }
    }
}

/// Blocking wait between emitted commands.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay)
    }
}
