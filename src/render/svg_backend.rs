use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::{Point, Rect, Size};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, HatchPattern, Renderer, Stroke, TextStyle, estimate_text_extent, validate_surface_size,
};

const FONT_FAMILY: &str = "Roboto, Helvetica, Arial, sans-serif";
const DASH_ARRAY: &str = "4 1";

/// Vector backend producing a standalone SVG document.
///
/// Elements are appended in draw order; hatch pattern definitions are
/// emitted once per pattern the first time a rectangle uses it.
#[derive(Debug)]
pub struct SvgRenderer {
    size: Size,
    background: Color,
    defs: String,
    body: String,
    used_hatches: BTreeSet<&'static str>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(
            crate::core::DEFAULT_FRAME_WIDTH,
            crate::core::DEFAULT_FRAME_HEIGHT,
        )
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            background: Color::WHITE,
            defs: String::new(),
            body: String::new(),
            used_hatches: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// The complete document for everything drawn so far.
    #[must_use]
    pub fn document(&self) -> String {
        let mut document = format!(
            r#"<svg height="{h}" width="{w}" viewBox="0 0 {w} {h}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#,
            w = fmt_num(self.size.width),
            h = fmt_num(self.size.height),
        );
        document.push('\n');
        if !self.defs.is_empty() {
            document.push_str("<defs>\n");
            document.push_str(&self.defs);
            document.push_str("</defs>\n");
        }
        document.push_str(&format!(
            r#"<rect width="100%" height="100%" style="{}"/>"#,
            fill_style(self.background)
        ));
        document.push('\n');
        document.push_str(&self.body);
        document.push_str("</svg>\n");
        document
    }

    fn push_element(&mut self, element: String) {
        tracing::trace!(element = element.as_str(), "svg element");
        self.body.push_str(&element);
        self.body.push('\n');
    }

    fn ensure_hatch_defined(&mut self, hatch: HatchPattern) {
        let Some(definition) = hatch_definition(hatch) else {
            return;
        };
        if self.used_hatches.insert(hatch.id()) {
            self.defs.push_str(&definition);
            self.defs.push('\n');
        }
    }

    fn rect_element(rect: Rect, style: &str) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" style="{style}"/>"#,
            fmt_num(rect.origin.x),
            fmt_num(rect.origin.y),
            fmt_num(rect.size.width),
            fmt_num(rect.size.height),
        )
    }
}

impl Renderer for SvgRenderer {
    fn backend_name(&self) -> &'static str {
        "svg"
    }

    fn surface_size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        validate_surface_size(width, height)?;
        self.size = Size::new(width, height);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> PlotResult<()> {
        let style = format!("fill:none;{}", stroke_style(stroke));
        self.push_element(Self::rect_element(rect, &style));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color, hatch: HatchPattern) -> PlotResult<()> {
        let style = format!("{};stroke:none", fill_style(fill));
        self.push_element(Self::rect_element(rect, &style));
        if !hatch.is_none() {
            self.ensure_hatch_defined(hatch);
            let style = format!("fill:url(#{});stroke:none", hatch.id());
            self.push_element(Self::rect_element(rect, &style));
        }
        Ok(())
    }

    fn fill_stroke_rect(&mut self, rect: Rect, fill: Color, stroke: Stroke) -> PlotResult<()> {
        let style = format!("{};{}", fill_style(fill), stroke_style(stroke));
        self.push_element(Self::rect_element(rect, &style));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color) -> PlotResult<()> {
        self.push_element(format!(
            r#"<circle cx="{}" cy="{}" r="{}" style="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            fill_style(fill),
        ));
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
    ) -> PlotResult<()> {
        self.push_element(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" style="{}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius_x),
            fmt_num(radius_y),
            fill_style(fill),
        ));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) -> PlotResult<()> {
        if points.len() < 3 {
            return Ok(());
        }
        self.push_element(format!(
            r#"<polygon points="{}" style="{}"/>"#,
            points_attr(points),
            fill_style(fill),
        ));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> PlotResult<()> {
        self.push_element(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" style="{};stroke-linecap:butt"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_style(stroke),
        ));
        Ok(())
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        self.push_element(format!(
            r#"<polyline points="{}" style="fill:none;{};stroke-linecap:butt;stroke-linejoin:round"/>"#,
            points_attr(points),
            stroke_style(stroke),
        ));
        Ok(())
    }

    fn text(&mut self, text: &str, location: Point, style: TextStyle, angle: f64) -> PlotResult<()> {
        let x = fmt_num(location.x);
        let y = fmt_num(location.y);
        // SVG rotates clockwise in y-down space.
        let rotation = if angle == 0.0 {
            String::new()
        } else {
            format!(r#" transform="rotate({},{x},{y})""#, fmt_num(-angle))
        };
        let [red, green, blue] = style.color.to_rgb8();
        self.push_element(format!(
            r#"<text font-size="{}" font-family="{FONT_FAMILY}" x="{x}" y="{y}" style="fill:rgb({red},{green},{blue});stroke:rgb({red},{green},{blue});stroke-width:{};opacity:{}"{rotation}>{}</text>"#,
            fmt_num(style.size),
            fmt_num(style.stroke_width / 4.0),
            fmt_num(style.color.alpha),
            escape_xml(text),
        ));
        Ok(())
    }

    fn text_extent(&self, text: &str, size: f64) -> Size {
        estimate_text_extent(text, size)
    }

    fn encode_image(&mut self) -> PlotResult<Vec<u8>> {
        Ok(self.document().into_bytes())
    }

    /// Writes the document to `output`, appending `.svg` when missing.
    fn flush(&mut self, output: &str) -> PlotResult<()> {
        let path = svg_path(output);
        std::fs::write(&path, self.document()).map_err(|err| {
            PlotError::Export(format!("failed to write `{}`: {err}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "svg written");
        Ok(())
    }
}

fn svg_path(output: &str) -> PathBuf {
    if output.ends_with(".svg") {
        PathBuf::from(output)
    } else {
        PathBuf::from(format!("{output}.svg"))
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", fmt_num(point.x), fmt_num(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fill_style(color: Color) -> String {
    let [red, green, blue] = color.to_rgb8();
    format!(
        "fill:rgb({red},{green},{blue});fill-opacity:{}",
        fmt_num(color.alpha)
    )
}

fn stroke_style(stroke: Stroke) -> String {
    let [red, green, blue] = stroke.color.to_rgb8();
    let mut style = format!(
        "stroke:rgb({red},{green},{blue});stroke-width:{};stroke-opacity:{}",
        fmt_num(stroke.width),
        fmt_num(stroke.color.alpha)
    );
    if stroke.dashed {
        style.push_str(";stroke-dasharray:");
        style.push_str(DASH_ARRAY);
    }
    style
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            ch => escaped.push(ch),
        }
    }
    escaped
}

/// 10×10 user-space tile for each pattern.
fn hatch_definition(hatch: HatchPattern) -> Option<String> {
    const LINE: &str = "stroke:black;stroke-width:1";
    let (transform, content) = match hatch {
        HatchPattern::None => return None,
        HatchPattern::ForwardSlash => (
            r#" patternTransform="rotate(45 0 0)""#,
            format!(r#"<line x1="0" y1="0" x2="0" y2="10" style="{LINE}"/>"#),
        ),
        HatchPattern::BackwardSlash => (
            r#" patternTransform="rotate(-45 0 0)""#,
            format!(r#"<line x1="0" y1="0" x2="0" y2="10" style="{LINE}"/>"#),
        ),
        HatchPattern::HollowCircle => (
            "",
            r#"<circle cx="5" cy="5" r="3" stroke="black" stroke-width="1" fill="none"/>"#
                .to_owned(),
        ),
        HatchPattern::FilledCircle => (
            "",
            r#"<circle cx="5" cy="5" r="3" stroke="black" stroke-width="1"/>"#.to_owned(),
        ),
        HatchPattern::Vertical => (
            "",
            format!(r#"<line x1="5" y1="0" x2="5" y2="10" style="{LINE}"/>"#),
        ),
        HatchPattern::Horizontal => (
            "",
            format!(r#"<line x1="0" y1="5" x2="10" y2="5" style="{LINE}"/>"#),
        ),
        HatchPattern::Grid => (
            "",
            format!(
                r#"<line x1="0" y1="5" x2="10" y2="5" style="{LINE}"/><line x1="5" y1="0" x2="5" y2="10" style="{LINE}"/>"#
            ),
        ),
        HatchPattern::Cross => (
            "",
            format!(
                r#"<line x1="0" y1="0" x2="10" y2="10" style="{LINE}"/><line x1="0" y1="10" x2="10" y2="0" style="{LINE}"/>"#
            ),
        ),
    };
    Some(format!(
        r#"<pattern id="{}" width="10" height="10"{transform} patternUnits="userSpaceOnUse">{content}</pattern>"#,
        hatch.id()
    ))
}
