use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle};

pub(crate) fn paint_list(render: &RenderList, window: &mut Window, cx: &mut App) {
    for command in render.commands() {
        match command {
            RenderCommand::Rect { rect, style } => paint_rect(window, *rect, *style),
            RenderCommand::Line { start, end, style } => {
                paint_line(window, *start, *end, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => paint_text(window, cx, *position, text, style),
        }
    }
}

fn paint_rect(window: &mut Window, rect: ScreenRect, style: RectStyle) {
    if !rect.is_valid() {
        return;
    }
    window.paint_quad(quad(
        to_bounds(rect),
        Corners::all(px(style.corner_radius)),
        to_rgba(style.fill),
        Edges::all(px(0.0)),
        to_rgba(Color::TRANSPARENT),
        BorderStyle::default(),
    ));
}

fn paint_line(window: &mut Window, start: ScreenPoint, end: ScreenPoint, style: LineStyle) {
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    builder.move_to(point(px(start.x), px(start.y)));
    builder.line_to(point(px(end.x), px(end.y)));
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(px(position.x), px(position.y));
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}
