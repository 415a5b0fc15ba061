//! Small SVG charts for the exploration page.
//!
//! Rendering is plain SVG generated from Rust so the page works without a
//! plotting library in the webview.

use dioxus::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const MARGIN: f64 = 48.0;
const TICKS: usize = 5;

/// Viridis colour stops, from low to high.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    /// Drives the colour scale when present.
    pub value: Option<f64>,
}

/// Maps a data interval linearly onto a pixel interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Evenly spaced data values across the domain, ends included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        match count {
            0 => Vec::new(),
            1 => vec![d0],
            _ => (0..count)
                .map(|i| d0 + (d1 - d0) * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

/// Minimum and maximum of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Viridis colour for `t` in `[0, 1]`; values outside are clamped.
pub fn viridis(t: f64) -> String {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lower as f64;
    let (a, b) = (VIRIDIS[lower], VIRIDIS[lower + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[derive(Clone, Debug, PartialEq)]
struct Projected {
    cx: f64,
    cy: f64,
    fill: String,
}

#[derive(Clone, Debug, PartialEq)]
struct Axis {
    label: String,
    ticks: Vec<(f64, String)>,
}

struct Layout {
    dots: Vec<Projected>,
    x_axis: Axis,
    y_axis: Axis,
}

fn layout(points: &[PlotPoint], x_label: &str, y_label: &str, flat_fill: &str) -> Option<Layout> {
    let x_extent = extent(points.iter().map(|p| p.x))?;
    let y_extent = extent(points.iter().map(|p| p.y))?;
    let value_extent = extent(points.iter().filter_map(|p| p.value));

    let x_scale = LinearScale::new(x_extent, (MARGIN, WIDTH - MARGIN / 2.0));
    // SVG y grows downwards.
    let y_scale = LinearScale::new(y_extent, (HEIGHT - MARGIN, MARGIN / 2.0));
    let colour_scale = value_extent.map(|domain| LinearScale::new(domain, (0.0, 1.0)));

    let dots = points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| Projected {
            cx: x_scale.map(p.x),
            cy: y_scale.map(p.y),
            fill: match (p.value, colour_scale) {
                (Some(value), Some(scale)) => viridis(scale.map(value)),
                _ => flat_fill.to_string(),
            },
        })
        .collect();

    let axis = |scale: &LinearScale, label: &str| Axis {
        label: label.to_string(),
        ticks: scale
            .ticks(TICKS)
            .into_iter()
            .map(|value| (scale.map(value), format!("{value:.1}")))
            .collect(),
    };

    Some(Layout {
        dots,
        x_axis: axis(&x_scale, x_label),
        y_axis: axis(&y_scale, y_label),
    })
}

#[component]
pub fn ScatterChart(
    points: Vec<PlotPoint>,
    x_label: String,
    y_label: String,
    title: String,
) -> Element {
    rsx! {
        Chart { points, x_label, y_label, title, radius: 3.0, opacity: 0.6 }
    }
}

/// Longitude/latitude scatter coloured by each point's value.
#[component]
pub fn GeoHeatmap(points: Vec<PlotPoint>, title: String) -> Element {
    rsx! {
        Chart {
            points,
            x_label: "Longitude".to_string(),
            y_label: "Latitude".to_string(),
            title,
            radius: 2.5,
            opacity: 0.8,
        }
    }
}

#[component]
fn Chart(
    points: Vec<PlotPoint>,
    x_label: String,
    y_label: String,
    title: String,
    radius: f64,
    opacity: f64,
) -> Element {
    let Some(layout) = layout(&points, &x_label, &y_label, "#00d2ff") else {
        return rsx! {
            div { class: "chart-empty text-muted", "No data to plot." }
        };
    };

    let baseline = HEIGHT - MARGIN;
    let left = MARGIN;

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart-title", "{title}" }
            svg {
                view_box: "0 0 {WIDTH} {HEIGHT}",
                width: "100%",
                g { class: "chart-axis",
                    line { x1: "{left}", y1: "{baseline}", x2: "{WIDTH - MARGIN / 2.0}", y2: "{baseline}" }
                    line { x1: "{left}", y1: "{MARGIN / 2.0}", x2: "{left}", y2: "{baseline}" }
                    for (x, label) in layout.x_axis.ticks {
                        text { x: "{x:.1}", y: "{baseline + 18.0}", text_anchor: "middle", "{label}" }
                    }
                    for (y, label) in layout.y_axis.ticks {
                        text { x: "{left - 8.0}", y: "{y:.1}", text_anchor: "end", "{label}" }
                    }
                    text { x: "{WIDTH / 2.0}", y: "{HEIGHT - 6.0}", text_anchor: "middle", "{layout.x_axis.label}" }
                    text {
                        x: "14",
                        y: "{HEIGHT / 2.0}",
                        transform: "rotate(-90 14 {HEIGHT / 2.0})",
                        text_anchor: "middle",
                        "{layout.y_axis.label}"
                    }
                }
                g {
                    for dot in layout.dots {
                        circle {
                            cx: "{dot.cx:.1}",
                            cy: "{dot.cy:.1}",
                            r: "{radius}",
                            fill: "{dot.fill}",
                            fill_opacity: "{opacity}",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64, value: Option<f64>) -> PlotPoint {
        PlotPoint { x, y, value }
    }

    #[test]
    fn scale_maps_ends_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(10.0), 200.0);
        assert_eq!(scale.map(5.0), 150.0);
    }

    #[test]
    fn inverted_range_flips_direction() {
        let scale = LinearScale::new((0.0, 1.0), (400.0, 0.0));
        assert_eq!(scale.map(1.0), 0.0);
        assert_eq!(scale.map(0.25), 300.0);
    }

    #[test]
    fn degenerate_domain_centres_everything() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.map(3.0), 50.0);
    }

    #[test]
    fn ticks_include_both_ends() {
        let scale = LinearScale::new((0.0, 4.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(scale.ticks(0).is_empty());
    }

    #[test]
    fn extent_skips_non_finite_values() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent([f64::INFINITY]), None);
        assert_eq!(extent(Vec::new()), None);
    }

    #[test]
    fn viridis_hits_its_stops_and_clamps() {
        assert_eq!(viridis(0.0), "#440154");
        assert_eq!(viridis(1.0), "#fde725");
        assert_eq!(viridis(0.5), "#21918c");
        assert_eq!(viridis(-2.0), viridis(0.0));
        assert_eq!(viridis(9.0), viridis(1.0));
    }

    #[test]
    fn layout_colours_by_value_and_places_extremes_on_edges() {
        let points = [point(0.0, 0.0, Some(1.0)), point(10.0, 5.0, Some(2.0))];
        let layout = layout(&points, "x", "y", "#fff").unwrap();
        assert_eq!(layout.dots.len(), 2);
        assert_eq!(layout.dots[0].cx, MARGIN);
        assert_eq!(layout.dots[0].cy, HEIGHT - MARGIN);
        assert_eq!(layout.dots[1].cy, MARGIN / 2.0);
        assert_eq!(layout.dots[0].fill, "#440154");
        assert_eq!(layout.dots[1].fill, "#fde725");
        assert_eq!(layout.x_axis.ticks.first().map(|t| t.1.as_str()), Some("0.0"));
    }

    #[test]
    fn layout_without_values_uses_flat_fill() {
        let layout = layout(&[point(1.0, 1.0, None)], "x", "y", "#00d2ff").unwrap();
        assert_eq!(layout.dots[0].fill, "#00d2ff");
    }

    #[test]
    fn layout_of_nothing_is_none() {
        assert!(layout(&[], "x", "y", "#fff").is_none());
    }
}
