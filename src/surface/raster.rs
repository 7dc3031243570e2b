use crate::models::WavePoint;

/// Horizontal spans of `polygon` crossed by the row at height `y` (even-odd rule).
///
/// Each span is `(x_start, x_end)` with `x_start <= x_end`, sorted left to right.
pub fn scanline_spans(polygon: &[WavePoint], y: f64) -> Vec<(f64, f64)> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let mut crossings: Vec<f64> = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .filter(|(a, b)| (a.y <= y && b.y > y) || (b.y <= y && a.y > y))
        .map(|(a, b)| a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x))
        .collect();
    crossings.sort_by(f64::total_cmp);

    crossings
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Pixel columns whose centres fall inside `[x_start, x_end)`, clipped to `0..width`
pub fn covered_columns(span: (f64, f64), width: u32) -> Option<(i32, i32)> {
    let first = (span.0 - 0.5).ceil().max(0.0) as i32;
    let last = ((span.1 - 0.5).ceil() as i32 - 1).min(width as i32 - 1);
    (first <= last).then_some((first, last))
}
