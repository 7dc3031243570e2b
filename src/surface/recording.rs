use super::{LabelStyle, LinearGradient, StrokeStyle, Surface};
use crate::models::WavePoint;
use crate::utils::SurfaceError;

/// One call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillArea {
        outline: Vec<WavePoint>,
        paint: LinearGradient,
    },
    Stroke {
        path: Vec<WavePoint>,
        stroke: StrokeStyle,
    },
    Text {
        text: String,
        anchor: WavePoint,
        style: LabelStyle,
    },
}

/// Surface that keeps the operations drawn since the last clear
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&[WavePoint], &StrokeStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Stroke { path, stroke } => Some((path.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, WavePoint)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, anchor, .. } => Some((text.as_str(), *anchor)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_area(&mut self, outline: &[WavePoint], paint: &LinearGradient) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::FillArea {
            outline: outline.to_vec(),
            paint: *paint,
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &[WavePoint], stroke: &StrokeStyle) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Stroke {
            path: path.to_vec(),
            stroke: *stroke,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: WavePoint, style: &LabelStyle) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            anchor,
            style: style.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Rgba;

    #[test]
    fn test_clear_drops_previous_ops() {
        let mut surface = RecordingSurface::new(10, 10);
        let stroke = StrokeStyle::solid(Rgba::new(0, 0, 0, 1.0), 1.0);
        surface
            .stroke_path(&[WavePoint::new(0.0, 0.0), WavePoint::new(1.0, 1.0)], &stroke)
            .unwrap();
        assert_eq!(surface.ops().len(), 1);

        surface.clear().unwrap();
        assert_eq!(surface.ops(), &[DrawOp::Clear]);
        assert_eq!(surface.strokes().count(), 0);
    }
}
