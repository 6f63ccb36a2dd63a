//! Procedural road generation
//!
//! Each new segment is placed from the previous one alone, so the road is a
//! Markov chain of segments. Placement keeps at least `min_gap_width` of
//! horizontal overlap between the two, which always leaves a path for the
//! car into the next segment.

use rand::Rng;

use super::config::GameConfig;
use super::types::Segment;

/// Inclusive uniform integer draw between two real bounds, rounded inwards
fn random_int_between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    let low = min.ceil() as i32;
    let high = max.floor() as i32;
    debug_assert!(low <= high, "empty draw range [{min}, {max}]");
    rng.random_range(low..=high.max(low)) as f32
}

/// Decide on which side of `previous` the next segment goes
///
/// Near a screen edge the side is forced back towards the middle. The left
/// edge is checked first and wins if both apply.
fn place_left_of<R: Rng>(previous: &Segment, config: &GameConfig, rng: &mut R) -> bool {
    let margin = config.edge_margin();
    let coin = rng.random_bool(0.5);

    if previous.top_left_x <= margin {
        false
    } else if config.screen_width - previous.top_right_x <= margin {
        true
    } else {
        coin
    }
}

/// Generate the segment that sits directly above `previous`
pub fn generate_segment<R: Rng>(
    previous: &Segment,
    config: &GameConfig,
    rng: &mut R,
) -> Segment {
    let prev_half_width = previous.half_width();
    let width = random_int_between(rng, config.min_road_width, config.max_road_width);

    let (top_left_x, top_right_x) = if place_left_of(previous, config, rng) {
        let top_right_x = random_int_between(
            rng,
            previous.top_left_x + config.min_gap_width,
            previous.top_left_x + prev_half_width,
        );
        (top_right_x - width, top_right_x)
    } else {
        let top_left_x = random_int_between(
            rng,
            previous.top_left_x + prev_half_width,
            previous.top_right_x - config.min_gap_width,
        );
        (top_left_x, top_left_x + width)
    };

    let road_height = config.road_height();
    Segment::new(
        top_left_x,
        top_right_x,
        previous.top_y - road_height,
        road_height,
    )
}

/// The oversized first segment of every run
///
/// Centred on the screen with its bottom edge on the bottom of the screen,
/// so the car starts well inside it.
pub fn runway_segment(config: &GameConfig) -> Segment {
    let half_width = config.runway_width() / 2.0;
    let center = (config.screen_width / 2.0).floor();
    let height = config.runway_height();
    Segment::new(
        center - half_width,
        center + half_width,
        config.screen_height - height,
        height,
    )
}
