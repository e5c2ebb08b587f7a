use hpgl_distiller_core::{AcceptSet, DistillerConfig, Mnemonic, Point};
use hpgl_distiller_engine::{classify, CommandStream, Distiller, MotionTimer, Pacer, Pacing};
use proptest::prelude::*;
use std::time::Duration;

#[derive(Default)]
struct RecordingPacer {
    waits: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}

fn distill(config: &DistillerConfig, input: &[u8]) -> (Vec<u8>, Vec<Duration>) {
    let mut out = Vec::new();
    let mut pacer = RecordingPacer::default();
    Distiller::new(config)
        .distill(&CommandStream::new(input.to_vec()), &mut out, &mut pacer)
        .unwrap();
    (out, pacer.waits)
}

/// Output lines after the init string, with the trailing `;` removed
fn body_lines(out: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(out);
    text.lines()
        .skip(1)
        .map(|line| line.strip_suffix(';').unwrap_or(line).to_string())
        .collect()
}

#[test]
fn test_pstoedit_style_document() {
    let input = b"IN;IP0,0,16158,11040;SC;\nSP1;PW0.35,1;LT;\nPU1000,1000;\nPD2000,1000;\nPD2000,2000;\nPU;\nSP0;PG;\n";
    let (out, _) = distill(&DistillerConfig::default(), input);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "IN;PU;\nIN;\nPU1000,1000;\nPD2000,1000;\nPD2000,2000;\nPU;\nPG;\n"
    );
}

#[test]
fn test_bang_pg_and_pg_disambiguation() {
    let (out, _) = distill(&DistillerConfig::default(), b"!PG;PGfoo;!PX;PG");
    assert_eq!(body_lines(&out), vec!["!PG", "PGfoo", "PG"]);
}

#[test]
fn test_zero_length_input_yields_init_only() {
    let config = DistillerConfig::new().with_init_string("IN;SP0;");
    let (out, waits) = distill(&config, b"");
    assert_eq!(out, b"IN;SP0;\n");
    assert!(waits.is_empty());
}

#[test]
fn test_redistilling_repeats_init_framing() {
    let config = DistillerConfig::default();
    let (first, _) = distill(&config, b"SP1;PA5,5;LT;PD10,10;PU");
    let (second, _) = distill(&config, &first);

    // The init string `IN;PU;` becomes two commands that are themselves accepted.
    let first_lines = body_lines(&first);
    let second_lines = body_lines(&second);
    assert_eq!(second_lines[..2], ["IN", "PU"]);
    assert_eq!(second_lines[2..], first_lines[..]);
}

#[test]
fn test_distance_pacing_from_origin() {
    let config = DistillerConfig::new().with_slew_us(25);
    let mut timer = MotionTimer::new(&config);
    let accept = AcceptSet::standard();

    let pacing = timer.estimate(&classify(b"PA100,0", &accept).unwrap());
    assert_eq!(pacing.delay(), Duration::from_micros(100 * 25));
    assert_eq!(timer.pen_position(), Point::new(100, 0));
}

#[test]
fn test_fallback_pacing_keeps_pen() {
    let config = DistillerConfig::new().with_slew_us(25);
    let mut timer = MotionTimer::new(&config);
    let accept = AcceptSet::standard();

    let pacing = timer.estimate(&classify(b"PAxx,yy", &accept).unwrap());
    assert_eq!(
        pacing,
        Pacing::Fallback {
            delay: Duration::from_micros(10 * 25)
        }
    );
    assert_eq!(timer.pen_position(), Point::ORIGIN);
}

#[test]
fn test_normalization_moves_minimum_to_origin() {
    let config = DistillerConfig::new().with_normalize(true);
    let (out, _) = distill(&config, b"PU-5,40;PD20,10;PD0,25;SP2;PU");
    assert_eq!(body_lines(&out), vec!["PU0,30", "PD25,0", "PD5,15", "PU"]);
}

#[test]
fn test_offsets_apply_without_normalization() {
    let config = DistillerConfig::new().with_offsets(10, -10);
    let (out, _) = distill(&config, b"PA0,0;PR5,5;IN;PD1,1,2,2");
    assert_eq!(body_lines(&out), vec!["PA10,-10", "PR15,-5", "IN", "PD11,-9,12,-8"]);
}

#[test]
fn test_normalization_with_offsets() {
    let config = DistillerConfig::new()
        .with_normalize(true)
        .with_offsets(100, 200);
    let (out, _) = distill(&config, b"PA50,60;PD70,90");
    assert_eq!(body_lines(&out), vec!["PA100,200", "PD120,230"]);
}

#[test]
fn test_normalization_at_i64_limits() {
    let config = DistillerConfig::new().with_normalize(true);
    let input = b"PA-9223372036854775808,0;PD9223372036854775807,0;PU";
    let mut out = Vec::new();
    let stats = Distiller::new(&config)
        .distill(&CommandStream::new(input.to_vec()), &mut out, RecordingPacer::default())
        .unwrap();

    assert_eq!(
        body_lines(&out),
        vec!["PA0,0", "PD9223372036854775807,0", "PU"]
    );
    let bbox = stats.bounding_box.unwrap();
    assert_eq!(bbox.width(), u64::MAX);
    assert!(bbox.to_string().starts_with("origin (-9223372036854775808, 0)"));
}

fn token_strategy() -> impl Strategy<Value = String> {
    let mnemonic = prop::sample::select(vec![
        "IN", "PA", "PD", "PU", "PG", "PR", "!PG", "SP", "LT", "PW", "LB", "DT", "IP", "SC",
    ]);
    let args = prop::option::of((-5000i64..5000, -5000i64..5000));
    (mnemonic, args).prop_map(|(m, a)| match a {
        Some((x, y)) => format!("{}{},{}", m, x, y),
        None => m.to_string(),
    })
}

fn document_strategy() -> impl Strategy<Value = (Vec<String>, Vec<&'static str>)> {
    let delimiter = prop::sample::select(vec![";", "\n", "\r\n", ";\n", ";;"]);
    prop::collection::vec((token_strategy(), delimiter), 0..40)
        .prop_map(|parts| parts.into_iter().unzip())
}

proptest! {
    #[test]
    fn prop_output_is_accepted_subsequence((tokens, delims) in document_strategy()) {
        let mut input = String::new();
        for (token, delim) in tokens.iter().zip(&delims) {
            input.push_str(token);
            input.push_str(delim);
        }

        let (out, _) = distill(&DistillerConfig::default(), input.as_bytes());
        let accept = AcceptSet::standard();

        let expected: Vec<String> = tokens
            .iter()
            .filter(|t| classify(t.as_bytes(), &accept).is_some())
            .cloned()
            .collect();
        let emitted = body_lines(&out);

        prop_assert_eq!(&emitted, &expected);
        for line in &emitted {
            let command = classify(line.as_bytes(), &accept);
            prop_assert!(command.is_some());
            prop_assert!(accept.iter().any(|m| m == command.unwrap().mnemonic));
        }
    }

    #[test]
    fn prop_normalized_extents_start_at_offset(
        points in prop::collection::vec((-10_000i64..10_000, -10_000i64..10_000), 1..30),
        x_offset in -100i64..100,
        y_offset in -100i64..100,
    ) {
        let input = points
            .iter()
            .map(|(x, y)| format!("PD{},{};", x, y))
            .collect::<String>();
        let config = DistillerConfig::new()
            .with_normalize(true)
            .with_offsets(x_offset, y_offset);
        let (out, _) = distill(&config, input.as_bytes());

        let accept = AcceptSet::standard();
        let emitted: Vec<Point> = body_lines(&out)
            .iter()
            .filter_map(|line| classify(line.as_bytes(), &accept)?.coordinate_pair())
            .collect();
        prop_assert_eq!(emitted.len(), points.len());
        prop_assert_eq!(emitted.iter().map(|p| p.x).min(), Some(x_offset));
        prop_assert_eq!(emitted.iter().map(|p| p.y).min(), Some(y_offset));
    }
}

#[test]
fn test_every_mnemonic_survives() {
    let input = Mnemonic::ALL
        .iter()
        .map(|m| format!("{};", m))
        .collect::<String>();
    let (out, _) = distill(&DistillerConfig::default(), input.as_bytes());
    let expected: Vec<String> = Mnemonic::ALL.iter().map(|m| m.to_string()).collect();
    assert_eq!(body_lines(&out), expected);
}
