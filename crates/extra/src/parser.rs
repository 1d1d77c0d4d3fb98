//! SVG path data parser.
//!
//! Supports the commands that map directly onto cubic bézier outlines:
//! `M`, `L`, `H`, `V`, `C`, `S` and `Z` in their absolute and relative forms,
//! including implicit repeated commands. Quadratic curves and arcs are
//! rejected.
//!
//! ```
//! use speedpunk_extra::parse_path_data;
//!
//! let outline = parse_path_data("M 0 0 C 0 10 10 10 10 0 Z").unwrap();
//! assert_eq!(outline.paths.len(), 1);
//! assert!(outline.paths[0].is_closed());
//! ```

use crate::math::{point, Point};
use crate::path::{CompoundPath, PathBuilder};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Unsupported command {command:?}, only cubic bézier outlines can be combed.")]
    Unsupported {
        command: char,
        line: i32,
        column: i32,
    },
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// Parses SVG path data into a `PathBuilder`.
///
/// Each `M` command starts a new sub-path. `S` reflects the second control
/// point of the previous `C` or `S` command, or uses the current point if
/// there is none.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    current_position: Point,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(
        &mut self,
        src: &mut Source<Iter>,
        output: &mut PathBuilder,
    ) -> Result<(), ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        // A relative move-to at the start of the data is relative to the origin.
        self.current_position = point(0.0, 0.0);
        let mut first_position = point(0.0, 0.0);

        let mut need_start = false;
        let mut prev_cubic_ctrl = None;
        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            if need_start && cmd != 'm' && cmd != 'M' {
                return Err(ParseError::MissingMoveTo {
                    command: cmd,
                    line: cmd_line,
                    column: cmd_col,
                });
            }

            let is_relative = cmd.is_lowercase();

            match cmd {
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mut x = self.parse_number(src)?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = point(x, self.current_position.y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'v' | 'V' => {
                    let mut y = self.parse_number(src)?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = point(self.current_position.x, y);
                    self.current_position = to;
                    output.line_to(to);
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, src)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = self.get_smooth_ctrl(prev_cubic_ctrl);
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'm' | 'M' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    first_position = to;
                    output.begin(to);
                    need_start = false;
                }
                'z' | 'Z' => {
                    output.close();
                    self.current_position = first_position;
                    need_start = true;
                }
                'q' | 'Q' | 't' | 'T' | 'a' | 'A' => {
                    return Err(ParseError::Unsupported {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            }

            if !matches!(cmd, 'c' | 'C' | 's' | 'S') {
                prev_cubic_ctrl = None;
            }

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Point {
        if let Some(prev_ctrl) = prev_ctrl {
            self.current_position + (self.current_position - prev_ctrl)
        } else {
            self.current_position
        }
    }

    fn parse_endpoint(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        Ok(point(x, y))
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f64, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if src.current == '-' || src.current == '+' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                self.float_buffer.push(src.current);
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        match self.float_buffer.parse::<f64>() {
            Ok(val) if val.is_finite() => Ok(val),
            _ => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

/// Parses a complete SVG path data string, one `Path` per sub-path.
pub fn parse_path_data(data: &str) -> Result<CompoundPath, ParseError> {
    let mut builder = PathBuilder::new();
    PathParser::new().parse(&mut Source::new(data.chars()), &mut builder)?;

    Ok(builder.build())
}

#[cfg(test)]
use crate::path::Anchor;

#[test]
fn empty() {
    assert!(parse_path_data("").unwrap().paths.is_empty());
    assert!(parse_path_data(" \n ").unwrap().paths.is_empty());
}

#[test]
fn simple_square() {
    let outline = parse_path_data("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();
    assert_eq!(outline.paths.len(), 1);

    let square = &outline.paths[0];
    assert!(square.is_closed());
    assert_eq!(square.len(), 4);
    assert_eq!(square.num_segments(), 4);
    assert!(square.segments().all(|segment| segment.is_straight()));
}

#[test]
fn closing_on_the_first_anchor() {
    let outline = parse_path_data("M 0 0 C 0 10 10 10 10 0 C 10 -10 0 -10 0 0 Z").unwrap();
    let path = &outline.paths[0];

    assert_eq!(path.len(), 2);
    assert_eq!(path.num_segments(), 2);
    assert_eq!(path.anchors()[0].incoming, point(0.0, -10.0));
    assert_eq!(path.anchors()[0].outgoing, point(0.0, 10.0));
}

#[test]
fn teardrop_loop() {
    let outline = parse_path_data("M 0 0 C 50 50 -50 50 0 0 Z").unwrap();
    let path = &outline.paths[0];

    assert_eq!(path.len(), 2);
    assert!(!path.segment(0).unwrap().is_straight());
}

#[test]
fn relative_and_implicit_commands() {
    let outline = parse_path_data("m 10 10 20 0 v 5 h-20 z m 0 30 l 5 5").unwrap();
    assert_eq!(outline.paths.len(), 2);

    let positions: Vec<Point> = outline.paths[0]
        .anchors()
        .iter()
        .map(|anchor| anchor.position)
        .collect();
    assert_eq!(
        positions,
        vec![
            point(10.0, 10.0),
            point(30.0, 10.0),
            point(30.0, 15.0),
            point(10.0, 15.0),
        ]
    );

    // After a close, relative coordinates start from the first point of the sub-path.
    assert_eq!(
        outline.paths[1].anchors(),
        &[
            Anchor::corner(point(10.0, 40.0)),
            Anchor::corner(point(15.0, 45.0)),
        ][..]
    );
}

#[test]
fn smooth_cubic() {
    let outline = parse_path_data("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0").unwrap();
    let anchors = outline.paths[0].anchors();

    assert_eq!(anchors.len(), 3);
    // Reflection of (10, 10) around (10, 0).
    assert_eq!(anchors[1].outgoing, point(10.0, -10.0));
    assert_eq!(anchors[2].incoming, point(20.0, -10.0));

    let outline = parse_path_data("M 0 0 s 5 5 10 0").unwrap();
    assert_eq!(outline.paths[0].anchors()[0].outgoing, point(0.0, 0.0));
}

#[test]
fn numbers() {
    // Equivalent to "M 0.6 0.5".
    let outline = parse_path_data("M 0.6.5").unwrap();
    assert_eq!(outline.paths[0].anchors()[0].position, point(0.6, 0.5));

    let outline = parse_path_data("M 1e-2 -1E3").unwrap();
    assert_eq!(outline.paths[0].anchors()[0].position, point(0.01, -1000.0));

    let outline = parse_path_data("M+1,2L3-4").unwrap();
    assert_eq!(outline.paths[0].anchors()[1].position, point(3.0, -4.0));

    parse_path_data("M 1.e-9 1.4e-4z").unwrap();
    parse_path_data("M0 1.6e-9L0 1.4e-4").unwrap();
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| matches!(parse_path_data(src), Err(ParseError::Number { .. }));

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 1e999"));
    assert!(bad_number("M 0 0 C 1 1 2"));
}

#[test]
fn invalid_cmd() {
    assert_eq!(
        parse_path_data("x 0 0"),
        Err(ParseError::Command {
            command: 'x',
            line: 0,
            column: 0
        })
    );

    assert_eq!(
        parse_path_data("\n M 0 \n0 1 x 1 1"),
        Err(ParseError::Command {
            command: 'x',
            line: 2,
            column: 4
        })
    );
}

#[test]
fn unsupported_commands() {
    for src in &[
        "M 0 0 Q 1 1 2 0",
        "M 0 0 q 1 1 2 0",
        "M 0 0 T 2 0",
        "M 0 0 A 5 5 0 0 1 10 0",
    ] {
        match parse_path_data(src) {
            Err(ParseError::Unsupported { line: 0, column: 6, .. }) => {}
            other => panic!("{:?}: {:?}", src, other),
        }
    }
}

#[test]
fn need_start() {
    match parse_path_data("M 0 0 Z L 1 1") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        other => panic!("{:?}", other),
    }

    let outline = parse_path_data("M 0 0 L 1 1 Z M 4 4 L 5 5").unwrap();
    assert_eq!(outline.paths.len(), 2);
    assert!(outline.paths[0].is_closed());
    assert!(!outline.paths[1].is_closed());
}
