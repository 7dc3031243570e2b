use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::{
    Circle, DrawingArea, DrawingBackend, IntoDrawingArea, IntoFont, PathElement, RGBAColor,
    RGBColor, Rectangle, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color;
use tracing::trace;

use super::raster::{covered_columns, scanline_spans};
use super::{LabelStyle, LinearGradient, StrokeStyle, Surface};
use crate::models::WavePoint;
use crate::utils::{Rgb, Rgba, SurfaceError};

/// A [`Surface`] backed by any `plotters` drawing backend (bitmap file,
/// in-memory RGB buffer, SVG string).
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    background: Rgb,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(backend: DB) -> Self {
        PlottersSurface {
            area: backend.into_drawing_area(),
            background: Rgb::new(255, 255, 255),
        }
    }

    /// Colour `clear` paints with; bitmap targets have no transparency
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Flush pending output to the backend target
    pub fn present(&self) -> Result<(), SurfaceError> {
        self.area
            .present()
            .map_err(|e| SurfaceError::backend("present", e))
    }
}

fn to_plotters(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

fn to_coord(p: WavePoint) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl<DB: DrawingBackend> Surface for PlottersSurface<DB> {
    fn size(&self) -> (u32, u32) {
        self.area.dim_in_pixel()
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let bg = self.background;
        self.area
            .fill(&RGBColor(bg.r, bg.g, bg.b))
            .map_err(|e| SurfaceError::backend("clear", e))
    }

    fn fill_area(&mut self, outline: &[WavePoint], paint: &LinearGradient) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        for row in 0..height as i32 {
            let center = row as f64 + 0.5;
            let color = paint.color_at(center);
            if color.a <= 0.0 {
                continue;
            }
            let style = to_plotters(color).filled();
            for span in scanline_spans(outline, center) {
                if let Some((first, last)) = covered_columns(span, width) {
                    // bottom-right corner is exclusive
                    self.area
                        .draw(&Rectangle::new([(first, row), (last + 1, row + 1)], style))
                        .map_err(|e| SurfaceError::backend("fill_area", e))?;
                }
            }
        }
        trace!("filled {} vertex area", outline.len());
        Ok(())
    }

    fn stroke_path(&mut self, path: &[WavePoint], stroke: &StrokeStyle) -> Result<(), SurfaceError> {
        let color = to_plotters(stroke.color);
        let style = color.stroke_width(stroke.width.round().max(1.0) as u32);
        let coords: Vec<(i32, i32)> = path.iter().copied().map(to_coord).collect();

        let drawn = match stroke.dash {
            None => self.area.draw(&PathElement::new(coords.clone(), style)),
            Some(dash) => self.area.draw(&DashedPathElement::new(
                coords.clone().into_iter(),
                dash.on.round().max(1.0) as i32,
                dash.off.round().max(0.0) as i32,
                style,
            )),
        };
        drawn.map_err(|e| SurfaceError::backend("stroke_path", e))?;

        // round caps and joins: a disc of the stroke width on every vertex
        let radius = (stroke.width / 2.0).round() as i32;
        if stroke.rounded && radius > 0 {
            for &center in &coords {
                self.area
                    .draw(&Circle::new(center, radius, color.filled()))
                    .map_err(|e| SurfaceError::backend("stroke_path", e))?;
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: WavePoint, style: &LabelStyle) -> Result<(), SurfaceError> {
        let font = (style.family.as_str(), style.size)
            .into_font()
            .color(&to_plotters(style.color))
            .pos(Pos::new(HPos::Center, VPos::Top));

        self.area
            .draw(&Text::new(text, to_coord(anchor), font))
            .map_err(|e| SurfaceError::backend("draw_text", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DashPattern, StrokeStyle};
    use plotters::prelude::BitMapBackend;

    const W: u32 = 20;
    const H: u32 = 10;

    fn pixel(buf: &[u8], x: u32, y: u32) -> (u8, u8, u8) {
        let i = ((y * W + x) * 3) as usize;
        (buf[i], buf[i + 1], buf[i + 2])
    }

    #[test]
    fn test_clear_paints_background() {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let mut surface =
                PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, (W, H))).with_background(Rgb::new(1, 2, 3));
            assert_eq!(surface.size(), (W, H));
            surface.clear().unwrap();
            surface.present().unwrap();
        }
        assert!(buf.chunks(3).all(|p| p == [1, 2, 3]));
    }

    #[test]
    fn test_fill_area_opaque_rectangle() {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let mut surface = PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, (W, H)));
            surface.clear().unwrap();
            let outline = vec![
                WavePoint::new(5.0, 2.0),
                WavePoint::new(15.0, 2.0),
                WavePoint::new(15.0, 8.0),
                WavePoint::new(5.0, 8.0),
            ];
            let red = Rgba::new(255, 0, 0, 1.0);
            surface
                .fill_area(&outline, &LinearGradient::vertical(0.0, 10.0, red, red))
                .unwrap();
            surface.present().unwrap();
        }
        assert_eq!(pixel(&buf, 5, 2), (255, 0, 0));
        assert_eq!(pixel(&buf, 14, 7), (255, 0, 0));
        assert_eq!(pixel(&buf, 15, 5), (255, 255, 255));
        assert_eq!(pixel(&buf, 10, 8), (255, 255, 255));
        assert_eq!(pixel(&buf, 4, 5), (255, 255, 255));
    }

    #[test]
    fn test_transparent_rows_are_skipped() {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let mut surface = PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, (W, H)));
            surface.clear().unwrap();
            let outline = vec![
                WavePoint::new(0.0, 0.0),
                WavePoint::new(20.0, 0.0),
                WavePoint::new(20.0, 10.0),
                WavePoint::new(0.0, 10.0),
            ];
            let clear = Rgba::new(0, 0, 0, 0.0);
            surface
                .fill_area(&outline, &LinearGradient::vertical(0.0, 10.0, clear, clear))
                .unwrap();
            surface.present().unwrap();
        }
        assert!(buf.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_dashed_stroke_leaves_gaps() {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let mut surface = PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, (W, H)));
            surface.clear().unwrap();
            let stroke = StrokeStyle::dashed(Rgba::new(0, 0, 0, 1.0), 1.0, DashPattern::new(2.0, 6.0));
            surface
                .stroke_path(&[WavePoint::new(0.0, 5.0), WavePoint::new(19.0, 5.0)], &stroke)
                .unwrap();
            surface.present().unwrap();
        }
        assert_eq!(pixel(&buf, 1, 5), (0, 0, 0));
        assert_eq!(pixel(&buf, 5, 5), (255, 255, 255));
        assert_eq!(pixel(&buf, 9, 5), (0, 0, 0));
        let inked = (0..W).filter(|&x| pixel(&buf, x, 5) == (0, 0, 0)).count();
        assert!(inked < 14);
    }

    fn stroke_pixels(stroke: StrokeStyle) -> Vec<u8> {
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let mut surface = PlottersSurface::new(BitMapBackend::with_buffer(&mut buf, (W, H)));
            surface.clear().unwrap();
            surface
                .stroke_path(&[WavePoint::new(6.0, 5.0), WavePoint::new(14.0, 5.0)], &stroke)
                .unwrap();
            surface.present().unwrap();
        }
        buf
    }

    #[test]
    fn test_rounded_stroke_caps_past_endpoints() {
        let butt = StrokeStyle::solid(Rgba::new(0, 0, 0, 1.0), 6.0);
        let buf = stroke_pixels(butt);
        assert_eq!(pixel(&buf, 10, 5), (0, 0, 0));
        assert_eq!(pixel(&buf, 4, 5), (255, 255, 255));
        assert_eq!(pixel(&buf, 16, 5), (255, 255, 255));

        let buf = stroke_pixels(butt.rounded());
        assert_eq!(pixel(&buf, 4, 5), (0, 0, 0));
        assert_eq!(pixel(&buf, 16, 5), (0, 0, 0));
        assert_eq!(pixel(&buf, 0, 5), (255, 255, 255));
    }
}
