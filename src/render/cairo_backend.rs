use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{PI, TAU};

use crate::core::{Point, Rect, Size};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, HatchPattern, Renderer, Stroke, TextStyle, validate_surface_size};

const FONT_FAMILY: &str = "Sans";
const DASH_PATTERN: [f64; 2] = [4.0, 1.0];
const HATCH_SPACING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub shapes_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can replay their image onto an
/// external Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn paint_on_cairo_context(&self, context: &Context) -> PlotResult<()>;
}

/// Cairo + Pango + PangoCairo bitmap backend.
///
/// Draws into an ARGB32 image surface that is cleared to `clear_color` on
/// creation and on every resize; `flush` writes it as PNG.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: f64, height: f64) -> PlotResult<Self> {
        let (surface, context) = create_surface(width, height)?;
        let renderer = Self {
            surface,
            context,
            clear_color: Color::WHITE,
            stats: CairoRenderStats::default(),
        };
        renderer.clear()?;
        Ok(renderer)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Sets the background and repaints the whole surface with it.
    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        self.clear()
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    fn clear(&self) -> PlotResult<()> {
        apply_color(&self.context, self.clear_color);
        self.context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn apply_stroke(&self, stroke: Stroke) {
        apply_color(&self.context, stroke.color);
        self.context.set_line_width(stroke.width);
        if stroke.dashed {
            self.context.set_dash(&DASH_PATTERN, 0.0);
        } else {
            self.context.set_dash(&[], 0.0);
        }
    }

    fn stroke_path(&mut self, stroke: Stroke, what: &str) -> PlotResult<()> {
        self.apply_stroke(stroke);
        self.context
            .stroke()
            .map_err(|err| map_backend_error(&format!("failed to stroke {what}"), err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn fill_path(&mut self, color: Color, what: &str) -> PlotResult<()> {
        apply_color(&self.context, color);
        self.context
            .fill()
            .map_err(|err| map_backend_error(&format!("failed to fill {what}"), err))?;
        self.stats.shapes_drawn += 1;
        Ok(())
    }

    fn draw_hatch(&mut self, rect: Rect, hatch: HatchPattern) -> PlotResult<()> {
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.rectangle(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
        context.clip();
        apply_color(context, Color::BLACK);
        context.set_line_width(1.0);
        context.set_dash(&[], 0.0);

        let (left, top) = (rect.origin.x, rect.origin.y);
        let (right, bottom) = (left + rect.size.width, top + rect.size.height);
        let span = rect.size.width + rect.size.height;
        let mut offset = 0.0;
        while offset <= span {
            match hatch {
                HatchPattern::None => {}
                HatchPattern::ForwardSlash => {
                    context.move_to(left + offset, bottom);
                    context.line_to(left + offset - rect.size.height, top);
                }
                HatchPattern::BackwardSlash => {
                    context.move_to(left + offset - rect.size.height, bottom);
                    context.line_to(left + offset, top);
                }
                HatchPattern::Vertical => {
                    context.move_to(left + offset, top);
                    context.line_to(left + offset, bottom);
                }
                HatchPattern::Horizontal => {
                    context.move_to(left, top + offset);
                    context.line_to(right, top + offset);
                }
                HatchPattern::Grid => {
                    context.move_to(left + offset, top);
                    context.line_to(left + offset, bottom);
                    context.move_to(left, top + offset);
                    context.line_to(right, top + offset);
                }
                HatchPattern::Cross => {
                    context.move_to(left + offset, bottom);
                    context.line_to(left + offset - rect.size.height, top);
                    context.move_to(left + offset - rect.size.height, bottom);
                    context.line_to(left + offset, top);
                }
                HatchPattern::HollowCircle | HatchPattern::FilledCircle => {
                    let mut y = top + HATCH_SPACING / 2.0;
                    while y < bottom {
                        context.new_sub_path();
                        context.arc(left + offset + HATCH_SPACING / 2.0, y, 3.0, 0.0, TAU);
                        y += HATCH_SPACING;
                    }
                }
            }
            offset += HATCH_SPACING;
        }

        let painted = if matches!(hatch, HatchPattern::FilledCircle) {
            context.fill()
        } else {
            context.stroke()
        };
        painted.map_err(|err| map_backend_error("failed to draw hatch", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))
    }

    fn text_layout(&self, text: &str, size: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(&self.context);
        let mut font = FontDescription::from_string(FONT_FAMILY);
        font.set_absolute_size(size * f64::from(pango::SCALE));
        layout.set_font_description(Some(&font));
        layout.set_text(text);
        layout
    }
}

impl Renderer for CairoRenderer {
    fn backend_name(&self) -> &'static str {
        "cairo"
    }

    fn surface_size(&self) -> Size {
        Size::new(
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        )
    }

    fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        let (surface, context) = create_surface(width, height)?;
        self.surface = surface;
        self.context = context;
        self.clear()
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> PlotResult<()> {
        self.context
            .rectangle(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
        self.stroke_path(stroke, "rectangle")
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color, hatch: HatchPattern) -> PlotResult<()> {
        self.context
            .rectangle(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
        self.fill_path(fill, "rectangle")?;
        if !hatch.is_none() {
            self.draw_hatch(rect, hatch)?;
        }
        Ok(())
    }

    fn fill_stroke_rect(&mut self, rect: Rect, fill: Color, stroke: Stroke) -> PlotResult<()> {
        self.context
            .rectangle(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
        apply_color(&self.context, fill);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.stats.shapes_drawn += 1;
        self.stroke_path(stroke, "rectangle border")
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color) -> PlotResult<()> {
        self.context.new_sub_path();
        self.context.arc(center.x, center.y, radius, 0.0, TAU);
        self.fill_path(fill, "circle")
    }

    fn fill_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
    ) -> PlotResult<()> {
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return Ok(());
        }
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.translate(center.x, center.y);
        context.scale(radius_x, radius_y);
        context.new_sub_path();
        context.arc(0.0, 0.0, 1.0, 0.0, TAU);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.fill_path(fill, "ellipse")
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) -> PlotResult<()> {
        let [first, rest @ ..] = points else {
            return Ok(());
        };
        if rest.len() < 2 {
            return Ok(());
        }
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.context.close_path();
        self.fill_path(fill, "polygon")
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> PlotResult<()> {
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.stroke_path(stroke, "line")
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> PlotResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.stroke_path(stroke, "polyline")
    }

    fn text(&mut self, text: &str, location: Point, style: TextStyle, angle: f64) -> PlotResult<()> {
        let layout = self.text_layout(text, style.size);
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.translate(location.x, location.y);
        // Counter-clockwise on the image is negative in y-down space.
        context.rotate(-angle * PI / 180.0);
        context.move_to(0.0, -baseline);
        apply_color(context, style.color);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.stats.texts_drawn += 1;
        Ok(())
    }

    fn text_extent(&self, text: &str, size: f64) -> Size {
        let (width, height) = self.text_layout(text, size).pixel_size();
        Size::new(f64::from(width), f64::from(height))
    }

    fn encode_image(&mut self) -> PlotResult<Vec<u8>> {
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface
            .write_to_png(&mut bytes)
            .map_err(|err| PlotError::Export(format!("failed to encode png: {err}")))?;
        Ok(bytes)
    }

    /// Writes the surface as PNG to `output`, appending `.png` when missing.
    fn flush(&mut self, output: &str) -> PlotResult<()> {
        let path = if output.ends_with(".png") {
            output.to_owned()
        } else {
            format!("{output}.png")
        };
        let bytes = self.encode_image()?;
        std::fs::write(&path, bytes)
            .map_err(|err| PlotError::Export(format!("failed to write `{path}`: {err}")))?;
        tracing::info!(path, "png written");
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn paint_on_cairo_context(&self, context: &Context) -> PlotResult<()> {
        self.surface.flush();
        context
            .set_source_surface(&self.surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to set source surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint surface", err))
    }
}

fn create_surface(width: f64, height: f64) -> PlotResult<(ImageSurface, Context)> {
    validate_surface_size(width, height)?;
    let surface = ImageSurface::create(Format::ARgb32, width.ceil() as i32, height.ceil() as i32)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
    let context = Context::new(&surface)
        .map_err(|err| map_backend_error("failed to create cairo context", err))?;
    Ok((surface, context))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Export(format!("{prefix}: {err}"))
}
