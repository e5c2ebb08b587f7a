//! Distillation driver
//!
//! Wires the pieces together for one document:
//! tokenize, classify, rewrite coordinates, estimate the wait, emit.

use super::{
    classify, BoundingBoxNormalizer, Command, CommandStream, Emitter, MotionTimer, Pacer, Pacing,
};
use hpgl_distiller_core::{BoundingBox, DistillerConfig, Result};
use std::io::Write;
use std::time::Duration;

/// Counters for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistillStats {
    /// Tokens read from the input.
    pub tokens_seen: usize,
    /// Tokens written to the output.
    pub accepted: usize,
    /// Bytes written to the output, init string included.
    pub bytes_written: usize,
    /// Tokens dropped by the filter.
    pub rejected: usize,
    /// Accepted tokens whose coordinates could not be read for pacing.
    pub unreadable_coordinates: usize,
    /// Total head travel used for pacing, in device units.
    pub travel_units: u64,
    /// Total time spent waiting on the head.
    pub time_paced: Duration,
    /// Extents found by the normalization pre-pass.
    pub bounding_box: Option<BoundingBox>,
}

/// Runs a distillation with a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Distiller<'c> {
    config: &'c DistillerConfig,
}

impl<'c> Distiller<'c> {
    pub fn new(config: &'c DistillerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DistillerConfig {
        self.config
    }

    /// Distill `stream` into `writer`, waiting on `pacer` between moves.
    ///
    /// Accepted commands keep their input order. Nothing is buffered past a
    /// single command; the writer is flushed after each one.
    pub fn distill<W: Write, P: Pacer>(
        &self,
        stream: &CommandStream,
        writer: W,
        pacer: P,
    ) -> Result<DistillStats> {
        let accept_set = self.config.accept_set();
        let normalizer = BoundingBoxNormalizer::prepare(self.config, stream);
        let mut timer = MotionTimer::new(self.config);
        let mut emitter = Emitter::new(writer, pacer);
        let mut stats = DistillStats {
            bounding_box: normalizer.extents().copied(),
            ..Default::default()
        };

        emitter.write_init(&self.config.init_string)?;

        for token in stream.tokens() {
            stats.tokens_seen += 1;

            let Some(command) = classify(token, accept_set) else {
                tracing::debug!("in: {}  ignored", String::from_utf8_lossy(token));
                stats.rejected += 1;
                continue;
            };
            tracing::debug!("in: {}  good", String::from_utf8_lossy(token));

            let args = normalizer.rewrite(&command);
            let emitted = Command {
                mnemonic: command.mnemonic,
                args: &args[..],
            };

            let pacing = timer.estimate(&emitted);
            match pacing {
                Pacing::Travel { distance, .. } => stats.travel_units += distance,
                Pacing::Fallback { .. } => stats.unreadable_coordinates += 1,
                Pacing::Immediate => {}
            }

            emitter.emit(emitted.mnemonic, emitted.args, pacing.delay())?;
        }

        stats.accepted = emitter.commands_written();
        stats.bytes_written = emitter.bytes_written();
        stats.time_paced = emitter.time_paced();
        emitter.finish()?;

        tracing::info!(
            "Distilled {} of {} commands ({} ignored), {} bytes written",
            stats.accepted,
            stats.tokens_seen,
            stats.rejected,
            stats.bytes_written
        );
        if self.config.pacing_enabled() {
            tracing::info!(
                "Paced {} units of travel over {:?}",
                stats.travel_units,
                stats.time_paced
            );
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpgl_distiller_core::Point;

    #[derive(Default)]
    struct Recorder(Vec<Duration>);

    impl Pacer for Recorder {
        fn pause(&mut self, delay: Duration) {
            self.0.push(delay);
        }
    }

    fn run(config: &DistillerConfig, input: &str) -> (String, DistillStats, Vec<Duration>) {
        let mut out = Vec::new();
        let mut recorder = Recorder::default();
        let stats = Distiller::new(config)
            .distill(&CommandStream::from(input), &mut out, &mut recorder)
            .unwrap();
        (String::from_utf8(out).unwrap(), stats, recorder.0)
    }

    #[test]
    fn test_filters_plotter_commands() {
        let config = DistillerConfig::default();
        let (out, stats, waits) = run(&config, "IN;SP1;PU0,0;LT;PD100,0;PW0.5;PU;");
        assert_eq!(out, "IN;PU;\nIN;\nPU0,0;\nPD100,0;\nPU;\n");
        assert_eq!(stats.tokens_seen, 7);
        assert_eq!(stats.accepted, 4);
        assert_eq!(stats.rejected, 3);
        assert_eq!(stats.bytes_written, out.len());
        assert!(waits.is_empty());
    }

    #[test]
    fn test_empty_input_writes_init_only() {
        let config = DistillerConfig::new().with_init_string("IN;");
        let (out, stats, _) = run(&config, "");
        assert_eq!(out, "IN;\n");
        assert_eq!(
            stats,
            DistillStats {
                bytes_written: 4,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_pacing_follows_emitted_coordinates() {
        let config = DistillerConfig::new().with_slew_us(2);
        let (_, stats, waits) = run(&config, "PU;PA100,0;PAxx,yy;PD100,30");
        assert_eq!(
            waits,
            vec![
                Duration::from_micros(200),
                Duration::from_micros(20),
                Duration::from_micros(60),
            ]
        );
        assert_eq!(stats.travel_units, 130);
        assert_eq!(stats.unreadable_coordinates, 1);
        assert_eq!(stats.time_paced, Duration::from_micros(280));
    }

    #[test]
    fn test_normalize_and_pace_together() {
        let config = DistillerConfig::new().with_normalize(true).with_slew_us(1);
        let (out, stats, waits) = run(&config, "PA10,10;PD13,14");
        assert_eq!(out, "IN;PU;\nPA0,0;\nPD3,4;\n");
        // The head starts at the origin, which is where the shifted plot starts.
        assert_eq!(waits, vec![Duration::from_micros(5)]);
        assert_eq!(
            stats.bounding_box.map(|b| b.origin()),
            Some(Point::new(10, 10))
        );
    }
}
