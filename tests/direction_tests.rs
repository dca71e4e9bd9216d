use candle_layout::core::{Direction, classify};
use candle_layout::render::{ColorChannel, DirectionalColors, resolve_color};
use candle_layout::api::FinancialTheme;

// The bucket names are inverted relative to price movement: a close below the
// open is "up". Coloring depends on this, so it is pinned here.
#[test]
fn falling_close_is_bucketed_up() {
    assert_eq!(classify(100.0, 99.99), Direction::Up);
    assert_eq!(classify(100.0, 100.01), Direction::Down);
    assert_eq!(classify(-5.0, -5.0), Direction::Unchanged);
}

#[test]
fn non_finite_pairs_never_reach_a_color_lookup_as_nan() {
    let theme = FinancialTheme::light();
    for (open, close) in [
        (f64::NAN, 1.0),
        (1.0, f64::NAN),
        (f64::INFINITY, 1.0),
        (1.0, f64::NEG_INFINITY),
    ] {
        let direction = classify(open, close);
        assert_eq!(direction, Direction::Unchanged);
        assert_eq!(
            theme.candlestick_color(direction, ColorChannel::Fill),
            theme.candlestick.fill.unchanged
        );
    }
}

#[test]
fn direction_names_match_palette_slots() {
    let colors = DirectionalColors::default();
    for direction in [Direction::Up, Direction::Down, Direction::Unchanged] {
        let expected = match direction.as_str() {
            "up" => colors.border.up,
            "down" => colors.border.down,
            _ => colors.border.unchanged,
        };
        assert_eq!(resolve_color(direction, &colors, ColorChannel::Border), expected);
    }
}
