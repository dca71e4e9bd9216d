#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use candle_layout::api::FinancialTheme;
use candle_layout::core::{
    Bounds, Direction, FinancialDataPoint, LinearIndexAxis, LinearValueAxis, Viewport,
};
use candle_layout::render::{
    CairoDrawContext, CairoSurfaceRenderer, Color, ColorChannel, DrawContext,
};
use candle_layout::{ChartError, FinancialSeries, SeriesConfig};

/// Reads one ARGB32 pixel as `[r, g, b, a]` (little-endian byte order).
fn pixel(surface: &ImageSurface, x: usize, y: usize) -> [u8; 4] {
    surface.flush();
    let stride = usize::try_from(surface.stride()).expect("stride");
    let mut rgba = [0; 4];
    surface
        .with_data(|data| {
            let i = y * stride + x * 4;
            rgba = [data[i + 2], data[i + 1], data[i], data[i + 3]];
        })
        .expect("surface data");
    rgba
}

fn assert_color(actual: [u8; 4], expected: Color) {
    let expected = [expected.red, expected.green, expected.blue, expected.alpha]
        .map(|channel| (channel * 255.0).round() as i32);
    for (a, e) in actual.iter().zip(expected) {
        assert!((i32::from(*a) - e).abs() <= 1, "{actual:?} != {expected:?}");
    }
}

fn two_bar_render() -> (CairoSurfaceRenderer, FinancialSeries) {
    let series = FinancialSeries::new(
        vec![
            FinancialDataPoint::new(1.0, 100.0, 110.0, 95.0, 105.0),
            FinancialDataPoint::new(2.0, 108.0, 112.0, 100.0, 102.0),
        ],
        SeriesConfig::candlestick(),
        FinancialTheme::light(),
    )
    .expect("series");
    let value_axis = LinearValueAxis::new(90.0, 120.0, 300.0, 0.0).expect("value axis");
    let index_axis = LinearIndexAxis::new(0.0, 4.0, 0.0, 200.0).expect("index axis");
    let layout = series.layout(&value_axis, &index_axis, false);
    assert_eq!(layout.elements[0].record.direction, Direction::Down);
    assert_eq!(layout.elements[1].record.direction, Direction::Up);

    let mut renderer = CairoSurfaceRenderer::new(Viewport::new(200, 300)).expect("renderer");
    let plot_area = Bounds {
        left: 0.0,
        right: 200.0,
        top: 0.0,
        bottom: 300.0,
    };
    renderer
        .render(&series, &layout, plot_area)
        .expect("render");
    (renderer, series)
}

#[test]
fn surface_renderer_rejects_empty_viewport() {
    let err = CairoSurfaceRenderer::new(Viewport::new(0, 10)).expect_err("zero width must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 10
        }
    ));
}

#[test]
fn bodies_are_filled_with_theme_colors_per_direction() {
    let (renderer, series) = two_bar_render();
    let theme = series.theme();

    // Down bar body spans y 150..200 around x 50; up bar spans y 120..180 around x 100.
    assert_color(
        pixel(renderer.surface(), 50, 175),
        theme.candlestick_color(Direction::Down, ColorChannel::Fill),
    );
    assert_color(
        pixel(renderer.surface(), 100, 150),
        theme.candlestick_color(Direction::Up, ColorChannel::Fill),
    );
    assert_color(pixel(renderer.surface(), 160, 20), Color::rgb(1.0, 1.0, 1.0));
}

#[test]
fn clear_color_fills_untouched_area() {
    let (mut renderer, series) = two_bar_render();
    renderer
        .set_clear_color(Color::rgb(0.0, 0.0, 0.0))
        .expect("clear color");
    assert!(renderer.set_clear_color(Color::rgba(0.0, 0.0, 0.0, 2.0)).is_err());

    let value_axis = LinearValueAxis::new(90.0, 120.0, 300.0, 0.0).expect("value axis");
    let index_axis = LinearIndexAxis::new(0.0, 4.0, 0.0, 200.0).expect("index axis");
    let layout = series.layout(&value_axis, &index_axis, false);
    let plot_area = Bounds {
        left: 0.0,
        right: 200.0,
        top: 0.0,
        bottom: 300.0,
    };
    renderer
        .render(&series, &layout, plot_area)
        .expect("render");
    assert_color(pixel(renderer.surface(), 160, 20), Color::rgb(0.0, 0.0, 0.0));
}

#[test]
fn write_png_emits_png_signature() {
    let (renderer, _) = two_bar_render();
    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]));
}

#[test]
fn rect_paint_keeps_pending_path_and_uses_its_own_color() {
    let surface = ImageSurface::create(Format::ARgb32, 40, 40).expect("surface");
    let context = Context::new(&surface).expect("context");
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    {
        let mut ctx = CairoDrawContext::new(&context);
        ctx.set_stroke_style(blue);
        ctx.set_fill_style(red);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(30.0, 0.0);
        ctx.line_to(30.0, 40.0);
        ctx.fill_rect(0.0, 0.0, 10.0, 10.0).expect("fill");
        assert_eq!(context.current_point().expect("point"), (30.0, 40.0));
        ctx.stroke().expect("stroke");
    }
    drop(context);

    assert_color(pixel(&surface, 5, 5), red);
    assert_color(pixel(&surface, 30, 20), blue);
}
