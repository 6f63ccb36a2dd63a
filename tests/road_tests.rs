//! Road generation and segment sequence tests

use rand::rngs::StdRng;
use rand::SeedableRng;
use road_runner::simulation::{
    generate_segment, runway_segment, GameConfig, Segment, SegmentSequence, MAX_ROAD_WIDTH,
    MIN_GAP_WIDTH, MIN_ROAD_WIDTH,
};

const EPSILON: f32 = 1e-3;

/// Positions accumulate float error while scrolling
const STACK_EPSILON: f32 = 0.05;

fn is_regular(segment: &Segment, config: &GameConfig) -> bool {
    (segment.height - config.road_height()).abs() < EPSILON
}

fn assert_road_invariants(sequence: &SegmentSequence, config: &GameConfig) {
    assert_eq!(sequence.len(), config.sequence_len());

    let segments: Vec<&Segment> = sequence.iter().collect();
    for segment in &segments {
        assert!(segment.top_left_x < segment.top_right_x);
        assert!(segment.top_left_x >= 0.0, "segment off the left edge: {:?}", segment);
        assert!(
            segment.top_right_x <= config.screen_width,
            "segment off the right edge: {:?}",
            segment
        );
        if is_regular(segment, config) {
            assert!(segment.width() >= MIN_ROAD_WIDTH - EPSILON, "too narrow: {:?}", segment);
            assert!(segment.width() <= MAX_ROAD_WIDTH + EPSILON, "too wide: {:?}", segment);
        }
    }

    for pair in segments.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        assert!(
            lower.overlap_with(upper) >= MIN_GAP_WIDTH - EPSILON,
            "gap too narrow between {:?} and {:?}",
            lower,
            upper
        );
        assert!(
            (upper.bottom_y() - lower.top_y).abs() < STACK_EPSILON,
            "segments are not stacked: {:?} above {:?}",
            upper,
            lower
        );
    }
}

#[test]
fn test_runway_is_centered_and_flush_with_bottom() {
    let config = GameConfig::default();
    let runway = runway_segment(&config);

    assert_eq!(runway.width(), config.runway_width());
    assert_eq!(runway.height, config.road_height() * 4.0);
    assert_eq!(runway.bottom_y(), config.screen_height);
    assert_eq!(runway.center_x(), config.screen_width / 2.0);
}

#[test]
fn test_bootstrap_fills_sequence() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut sequence = SegmentSequence::new();

    sequence.bootstrap(&config, &mut rng).unwrap();

    assert_eq!(sequence.len(), 2 * config.visible_segment_count);
    assert_eq!(sequence.front(), Some(&runway_segment(&config)));
    assert_road_invariants(&sequence, &config);
}

#[test]
fn test_bootstrap_discards_previous_road() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let mut sequence = SegmentSequence::from_segments(vec![
        Segment::new(0.0, 10.0, 0.0, 1.0);
        10
    ]);

    sequence.bootstrap(&config, &mut rng).unwrap();

    assert_road_invariants(&sequence, &config);
}

#[test]
fn test_generated_segments_respect_width_and_gap() {
    let config = GameConfig::default();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut previous = runway_segment(&config);

        for _ in 0..200 {
            let next = generate_segment(&previous, &config, &mut rng);
            assert!(next.width() >= MIN_ROAD_WIDTH && next.width() <= MAX_ROAD_WIDTH);
            assert!(previous.overlap_with(&next) >= MIN_GAP_WIDTH);
            assert_eq!(next.top_y, previous.top_y - config.road_height());
            assert_eq!(next.height, config.road_height());
            previous = next;
        }
    }
}

#[test]
fn test_generator_turns_away_from_left_edge() {
    let config = GameConfig::default();
    let previous = Segment::new(10.0, 260.0, 0.0, config.road_height());

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = generate_segment(&previous, &config, &mut rng);
        assert!(
            next.top_left_x >= previous.top_left_x + previous.half_width(),
            "seed {}: segment placed left of an edge-hugging road: {:?}",
            seed,
            next
        );
    }
}

#[test]
fn test_generator_turns_away_from_right_edge() {
    let config = GameConfig::default();
    let previous = Segment::new(1050.0, 1270.0, 0.0, config.road_height());

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = generate_segment(&previous, &config, &mut rng);
        assert!(next.top_right_x <= previous.top_left_x + previous.half_width());
        assert!(next.top_right_x >= previous.top_left_x + MIN_GAP_WIDTH);
    }
}

#[test]
fn test_left_edge_clamp_wins_when_both_apply() {
    let config = GameConfig {
        screen_width: 500.0,
        ..GameConfig::default()
    };
    let previous = Segment::new(100.0, 400.0, 0.0, config.road_height());

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = generate_segment(&previous, &config, &mut rng);
        assert!(next.top_left_x >= 250.0, "seed {}: went left: {:?}", seed, next);
    }
}

#[test]
fn test_recycle_is_noop_before_front_leaves_screen() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut sequence = SegmentSequence::new();
    sequence.bootstrap(&config, &mut rng).unwrap();

    let before: Vec<Segment> = sequence.iter().copied().collect();
    let recycled = sequence.recycle_if_needed(&config, &mut rng).unwrap();
    let after: Vec<Segment> = sequence.iter().copied().collect();

    assert!(!recycled);
    assert_eq!(before, after);
}

/// A full-length road whose front segment has just left the screen
fn road_ready_to_recycle(config: &GameConfig) -> Vec<Segment> {
    let height = config.road_height();
    (0..config.sequence_len())
        .map(|i| {
            let left = 500.0 + 50.0 * (i % 2) as f32;
            Segment::new(left, left + 250.0, config.screen_height - i as f32 * height, height)
        })
        .collect()
}

#[test]
fn test_recycle_evicts_front_and_appends_back() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(4);
    let height = config.road_height();
    let road = road_ready_to_recycle(&config);
    let newest = *road.last().unwrap();
    let mut sequence = SegmentSequence::from_segments(road);

    let recycled = sequence.recycle_if_needed(&config, &mut rng).unwrap();

    assert!(recycled);
    assert_eq!(sequence.len(), config.sequence_len());
    assert_eq!(sequence.front().unwrap().top_y, config.screen_height - height);
    let back = sequence.back().unwrap();
    assert_eq!(back.top_y, newest.top_y - height);
    assert!(back.overlap_with(&newest) >= MIN_GAP_WIDTH);
}

#[test]
fn test_recycle_rejects_road_of_wrong_length() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(8);
    let road = road_ready_to_recycle(&config);

    let mut short = SegmentSequence::from_segments(road[..2].iter().copied());
    assert!(short.recycle_if_needed(&config, &mut rng).is_err());
    assert_eq!(short.len(), 2);

    let mut long = SegmentSequence::from_segments(road.iter().chain(&road).copied());
    assert!(long.recycle_if_needed(&config, &mut rng).is_err());
}

#[test]
fn test_sequence_invariants_hold_over_long_scroll() {
    let config = GameConfig::default();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sequence = SegmentSequence::new();
        sequence.bootstrap(&config, &mut rng).unwrap();

        let mut recycles = 0;
        for _ in 0..5_000 {
            sequence.advance(1.0 / 60.0, 540.0);
            if sequence.recycle_if_needed(&config, &mut rng).unwrap() {
                recycles += 1;
            }
            assert_eq!(sequence.len(), config.sequence_len());
        }

        assert!(recycles > 100, "seed {}: only {} recycles", seed, recycles);
        assert_road_invariants(&sequence, &config);
    }
}

#[test]
fn test_advance_moves_every_segment() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut sequence = SegmentSequence::new();
    sequence.bootstrap(&config, &mut rng).unwrap();
    let before: Vec<f32> = sequence.iter().map(|s| s.top_y).collect();

    sequence.advance(0.5, 240.0);

    for (old, segment) in before.iter().zip(sequence.iter()) {
        assert_eq!(segment.top_y, old + 120.0);
    }
}

#[test]
fn test_front_two_needs_two_segments() {
    let single = SegmentSequence::from_segments([Segment::new(0.0, 200.0, 0.0, 100.0)]);
    assert!(single.front_two().is_err());
    assert!(SegmentSequence::new().front_two().is_err());
}

#[test]
fn test_edges_connect_consecutive_segments() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(6);
    let mut sequence = SegmentSequence::new();
    sequence.bootstrap(&config, &mut rng).unwrap();

    let edges = sequence.edges();
    let segments: Vec<&Segment> = sequence.iter().collect();

    assert_eq!(edges.len(), segments.len());
    assert!(edges[0].connectors.is_none());
    for (i, edge) in edges.iter().enumerate().skip(1) {
        let [left, right] = edge.connectors.expect("upper segments have connectors");
        assert_eq!(left.0, segments[i].bottom_left());
        assert_eq!(left.1, segments[i - 1].top_left());
        assert_eq!(right.0, segments[i].bottom_right());
        assert_eq!(right.1, segments[i - 1].top_right());
    }
}

#[test]
fn test_same_seed_same_road() {
    let config = GameConfig::default();
    let build = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sequence = SegmentSequence::new();
        sequence.bootstrap(&config, &mut rng).unwrap();
        sequence.iter().copied().collect::<Vec<_>>()
    };

    assert_eq!(build(42), build(42));
}
