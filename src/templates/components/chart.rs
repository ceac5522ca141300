use maud::{html, Markup};

pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

const WIDTH: f64 = 600.0;
const PAD: f64 = 24.0;

/// Filled line chart drawn as inline SVG. Points are spaced evenly along x
/// in the order given; y is scaled to the largest value.
pub fn area_chart(points: &[ChartPoint], height: u32, color: &str) -> Markup {
    let h = height as f64;
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let step = if points.len() > 1 {
        (WIDTH - 2.0 * PAD) / (points.len() - 1) as f64
    } else {
        0.0
    };

    let xy: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PAD + step * i as f64;
            let y = if max > 0.0 {
                h - PAD - (p.value / max) * (h - 2.0 * PAD)
            } else {
                h - PAD
            };
            (x, y)
        })
        .collect();

    let line: String = xy
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let area = match (xy.first(), xy.last()) {
        (Some((x0, _)), Some((xn, _))) => {
            format!("{x0:.1},{:.1} {line} {xn:.1},{:.1}", h - PAD, h - PAD)
        }
        _ => String::new(),
    };

    html! {
        @if points.is_empty() {
            p class="muted" { "Nothing to chart." }
        } @else {
            svg class="area-chart" viewBox=(format!("0 0 {WIDTH} {h}")) preserveAspectRatio="none" role="img" {
                polygon points=(area) fill=(color) fill-opacity="0.35" {}
                polyline points=(line) fill="none" stroke=(color) stroke-width="2" {}
                @for (p, (x, y)) in points.iter().zip(&xy) {
                    circle cx=(format!("{x:.1}")) cy=(format!("{y:.1}")) r="3" fill=(color) {
                        title { (p.label) ": " (format!("{:.2}", p.value)) }
                    }
                }
            }
            div class="chart-labels" {
                @for p in points {
                    span { (p.label) }
                }
            }
        }
    }
}
