use super::{
    DISC_OUTLINE_WIDTH, FONT_FAMILY, GLOW_ALPHA, GLOW_WIDTH, HIGHLIGHT_CORE_WIDTH,
    HIGHLIGHT_WIDTH, LABEL_HALO_WIDTH, OUTLINE_WIDTH,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use plutchik::{DrawCommand, Ink, Point, SegmentSpan};
use std::f64::consts::PI;

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Traces the annular sector between `inner` and `outer`. Angles stay clockwise in screen
/// space, which is also cairo's positive direction.
fn sector_path(cr: &Context, span: &SegmentSpan, inner: f64, outer: f64) {
    let (start, end) = (span.start.to_radians(), span.end.to_radians());
    cr.new_path();
    cr.arc(0.0, 0.0, outer, start, end);
    cr.arc_negative(0.0, 0.0, inner, end, start);
    cr.close_path();
}

fn draw_sector(
    cr: &Context,
    span: &SegmentSpan,
    inner: f64,
    outer: f64,
    fill: Ink,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    sector_path(cr, span, inner, outer);
    set_source(cr, colors.ink(fill));
    cr.fill_preserve()?;
    set_source(cr, colors.ink(Ink::Outline));
    cr.set_line_width(OUTLINE_WIDTH);
    cr.stroke()
}

fn draw_hover(
    cr: &Context,
    span: &SegmentSpan,
    inner: f64,
    outer: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    sector_path(cr, span, inner, outer);
    set_source(cr, colors.ink(Ink::Hover));
    cr.fill()
}

fn draw_highlight(
    cr: &Context,
    span: &SegmentSpan,
    inner: f64,
    outer: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let highlight = colors.ink(Ink::Highlight);
    let (r, g, b, _) = highlight.into_components();
    let glow = Srgba::new(r, g, b, GLOW_ALPHA);
    sector_path(cr, span, inner, outer);
    for (color, width) in [
        (glow, GLOW_WIDTH),
        (highlight, HIGHLIGHT_WIDTH),
        (colors.highlight_core, HIGHLIGHT_CORE_WIDTH),
    ] {
        set_source(cr, color);
        cr.set_line_width(width);
        cr.stroke_preserve()?;
    }
    cr.new_path();
    Ok(())
}

fn draw_label(
    cr: &Context,
    text: &str,
    at: Point,
    size: f64,
    bold: bool,
    ink: Ink,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let weight = if bold {
        cairo::FontWeight::Bold
    } else {
        cairo::FontWeight::Normal
    };
    cr.select_font_face(FONT_FAMILY, cairo::FontSlant::Normal, weight);
    cr.set_font_size(size);

    let ext = cr.text_extents(text)?;
    cr.new_path();
    cr.move_to(
        at.x - (ext.width() / 2.0 + ext.x_bearing()),
        at.y - (ext.height() / 2.0 + ext.y_bearing()),
    );
    cr.text_path(text);

    set_source(cr, colors.halo(ink));
    cr.set_line_width(LABEL_HALO_WIDTH);
    cr.stroke_preserve()?;
    set_source(cr, colors.ink(ink));
    cr.fill()
}

fn draw_disc(
    cr: &Context,
    radius: f64,
    ink: Ink,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.new_path();
    cr.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
    set_source(cr, colors.ink(ink));
    cr.fill_preserve()?;
    set_source(cr, colors.ink(Ink::Outline));
    cr.set_line_width(DISC_OUTLINE_WIDTH);
    cr.stroke()
}

/// Paints a wheel scene with its center at `center` in widget coordinates.
pub fn draw(
    cr: &Context,
    center: Point,
    scene: &[DrawCommand],
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(center.x, center.y);

    for command in scene {
        match command {
            DrawCommand::Sector {
                span,
                inner,
                outer,
                fill,
            } => draw_sector(cr, span, *inner, *outer, *fill, colors)?,
            DrawCommand::Hover { span, inner, outer } => {
                draw_hover(cr, span, *inner, *outer, colors)?
            }
            DrawCommand::Highlight { span, inner, outer } => {
                draw_highlight(cr, span, *inner, *outer, colors)?
            }
            DrawCommand::Label {
                text,
                at,
                size,
                bold,
                ink,
            } => draw_label(cr, text, *at, *size, *bold, *ink, colors)?,
            DrawCommand::Disc { radius, ink } => draw_disc(cr, *radius, *ink, colors)?,
        }
    }

    cr.restore()
}
