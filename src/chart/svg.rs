//! SVG paint adapter for chart drawing commands

use crate::chart::render::DrawCommand;
use std::fmt::Write;

/// Serialize a command list into a standalone SVG document.
///
/// Each call emits a complete document, so writing the result over the
/// previous file is the "clear and redraw" of a canvas surface.
pub fn to_svg(commands: &[DrawCommand], width: f64, height: f64) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );

    for command in commands {
        match command {
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => {
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    x1, y1, x2, y2, color, width
                );
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => {
                let coordinates = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", x, y))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(
                    svg,
                    r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    coordinates, color, width
                );
            }
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                color,
            } => {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    cx, cy, radius, color
                );
            }
            DrawCommand::Text {
                x,
                y,
                content,
                size,
                color,
            } => {
                let _ = writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
                    x,
                    y,
                    size,
                    color,
                    escape(content)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render::render;
    use crate::chart::scale::SeriesPoint;

    #[test]
    fn test_svg_document_shape() {
        let points = vec![
            SeriesPoint {
                label: "2025-01".to_string(),
                value: 3.0,
            },
            SeriesPoint {
                label: "2025-02".to_string(),
                value: 8.0,
            },
        ];
        let commands = render(&points, 600.0, 250.0, "#f59e0b").unwrap();
        let svg = to_svg(&commands, 600.0, 250.0);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<polyline "));
        assert!(svg.contains(r##"stroke="#f59e0b""##));
        assert_eq!(svg.matches("<circle ").count(), 2);
    }

    #[test]
    fn test_text_content_is_escaped() {
        let commands = vec![DrawCommand::Text {
            x: 0.0,
            y: 0.0,
            content: "a<b&c".to_string(),
            size: 12.0,
            color: "#000".to_string(),
        }];
        let svg = to_svg(&commands, 100.0, 100.0);
        assert!(svg.contains(">a&lt;b&amp;c</text>"));
    }
}
