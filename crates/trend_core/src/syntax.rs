//! Path data text: one command per line, `M x,y`, `L x,y` and `S cx,cy x,y`.
//!
//! This is the subset of SVG path syntax the compiler emits, so any vector
//! renderer that understands SVG `d` attributes can draw a [`Path`] directly.

use std::fmt;

use crate::geometry::Point;
use crate::path::{Path, PathBuilder, PathCommand};
use crate::TrendError;

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {},{}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {},{}", p.x, p.y),
            PathCommand::SmoothTo { control, end } => {
                write!(f, "S {},{} {},{}", control.x, control.y, end.x, end.y)
            }
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

impl Path {
    /// Serialize to path data suitable for an SVG `d` attribute.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

/// Parse path data produced by [`Path::to_svg_d`].
///
/// Accepts absolute `M`, `L` and `S` commands separated by any mix of
/// whitespace and commas. A command letter may be followed by several
/// coordinate groups (`L 1,2 3,4`), as in SVG; pairs repeated after `M` are
/// implicit line segments. Empty input is an empty path.
pub fn parse_svg_d(src: &str) -> Result<Path, TrendError> {
    let mut cursor = Cursor::new(src);
    let mut builder = PathBuilder::new();
    let mut command: Option<u8> = None;
    let mut first = true;

    loop {
        cursor.skip_separators();
        if cursor.at_end() {
            break;
        }

        if let Some(c) = cursor.peek().filter(u8::is_ascii_alphabetic) {
            if !matches!(c, b'M' | b'L' | b'S') {
                return Err(cursor.error(format!("unsupported command '{}'", c as char)));
            }
            command = Some(c);
            cursor.advance();
            cursor.skip_separators();
        }

        let Some(cmd) = command else {
            return Err(cursor.error("expected a command letter".to_string()));
        };
        if first && cmd != b'M' {
            return Err(cursor.error("path must start with 'M'".to_string()));
        }
        first = false;

        builder = match cmd {
            b'M' => {
                command = Some(b'L');
                builder.move_to(cursor.point()?)
            }
            b'L' => builder.line_to(cursor.point()?),
            _ => {
                let control = cursor.point()?;
                builder.smooth_to(control, cursor.point()?)
            }
        };
    }

    Ok(builder.build())
}

struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == b',' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, message: String) -> TrendError {
        TrendError::PathSyntax {
            offset: self.pos,
            message,
        }
    }

    fn point(&mut self) -> Result<Point, TrendError> {
        let x = self.number()?;
        self.skip_separators();
        let y = self.number()?;
        self.skip_separators();
        Ok(Point::new(x, y))
    }

    fn number(&mut self) -> Result<f32, TrendError> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.advance();
        }
        self.digits();
        if self.peek() == Some(b'.') {
            self.advance();
            self.digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.advance();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.advance();
            }
            self.digits();
        }

        // The slice only ever holds ASCII sign/digit/dot/exponent bytes.
        let text = std::str::from_utf8(&self.src[start..self.pos]).unwrap_or_default();
        text.parse::<f32>().map_err(|_| TrendError::PathSyntax {
            offset: start,
            message: if text.is_empty() {
                "expected a number".to_string()
            } else {
                format!("invalid number '{text}'")
            },
        })
    }

    fn digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_one_command_per_line() {
        let path = PathBuilder::new()
            .move_to(Point::new(0.0, 10.0))
            .line_to(Point::new(1.5, 0.0))
            .smooth_to(Point::new(2.0, 1.0), Point::new(3.0, -2.25))
            .build();
        assert_eq!(path.to_svg_d(), "M 0,10\nL 1.5,0\nS 2,1 3,-2.25");
    }

    #[test]
    fn parses_own_output() {
        let path = PathBuilder::new()
            .move_to(Point::new(8.0, 67.0))
            .line_to(Point::new(12.25, 20.125))
            .smooth_to(Point::new(15.0, 8.0), Point::new(18.0, 9.5))
            .line_to(Point::new(292.0, 8.0))
            .build();
        assert_eq!(parse_svg_d(&path.to_svg_d()).unwrap(), path);
    }

    #[test]
    fn parses_compact_and_repeated_coordinates() {
        let path = parse_svg_d("M0,0 L1,2 3,4S5 6 7e0 -8").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(1.0, 2.0)),
                PathCommand::LineTo(Point::new(3.0, 4.0)),
                PathCommand::SmoothTo {
                    control: Point::new(5.0, 6.0),
                    end: Point::new(7.0, -8.0),
                },
            ]
        );
        assert!(parse_svg_d("  \n").unwrap().is_empty());
    }

    #[test]
    fn pairs_after_move_are_line_segments() {
        let path = parse_svg_d("M 0,0 1,1 2,0 M 5,5 6,6").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(1.0, 1.0)),
                PathCommand::LineTo(Point::new(2.0, 0.0)),
                PathCommand::MoveTo(Point::new(5.0, 5.0)),
                PathCommand::LineTo(Point::new(6.0, 6.0)),
            ]
        );
    }

    #[test]
    fn reports_syntax_errors_with_offsets() {
        assert!(matches!(
            parse_svg_d("L 1,2"),
            Err(TrendError::PathSyntax { offset: 2, .. })
        ));
        assert!(matches!(
            parse_svg_d("M 1,2 C 3,4"),
            Err(TrendError::PathSyntax { offset: 6, .. })
        ));
        assert!(matches!(
            parse_svg_d("M 1,"),
            Err(TrendError::PathSyntax { offset: 4, .. })
        ));
        assert!(matches!(
            parse_svg_d("1,2"),
            Err(TrendError::PathSyntax { offset: 0, .. })
        ));
    }
}
