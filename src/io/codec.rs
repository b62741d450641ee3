// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing file serialization and deserialization.
//!
//! A drawing file is plain text with one segment per line:
//! `x1,y1,x2,y2,color,width`. Older files omit the width, which then
//! defaults to [`DEFAULT_WIDTH`]. An optional first line `#scribble v1`
//! marks the format version; files without it are read as the legacy
//! unversioned format.

use crate::models::segment::{Point, Rgb, Segment, DEFAULT_WIDTH};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Marker prefix of the optional version line.
pub const VERSION_PREFIX: &str = "#scribble";

/// The only version this build reads and writes.
pub const VERSION: &str = "v1";

/// File extension used by the file dialogs.
pub const EXTENSION: &str = "draw";

/// Errors raised while parsing a drawing file. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected 5 or 6 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: unknown color '{value}'")]
    InvalidColor { line: usize, value: String },
    #[error("line {line}: width must be a positive integer, found '{value}'")]
    InvalidWidth { line: usize, value: String },
    #[error("unsupported drawing format version '{0}'")]
    UnsupportedVersion(String),
}

/// Options controlling how drawings are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Write the `#scribble v1` marker as the first line.
    pub version_header: bool,
}

/// Parse the full text of a drawing file.
///
/// Either every line parses or an error is returned; partial drawings
/// are never produced.
pub fn parse(text: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut seen_content = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !seen_content {
            seen_content = true;
            if let Some(version) = line.strip_prefix(VERSION_PREFIX) {
                let version = version.trim();
                if version != VERSION {
                    return Err(ParseError::UnsupportedVersion(version.to_string()));
                }
                continue;
            }
        }
        segments.push(parse_line(line, index + 1)?);
    }

    Ok(segments)
}

fn parse_line(line: &str, number: usize) -> Result<Segment, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 5 && fields.len() != 6 {
        return Err(ParseError::FieldCount {
            line: number,
            found: fields.len(),
        });
    }

    let coord = |i: usize, field: &'static str| {
        fields[i]
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidNumber {
                line: number,
                field,
                value: fields[i].to_string(),
            })
    };
    let start = Point::new(coord(0, "start x")?, coord(1, "start y")?);
    let end = Point::new(coord(2, "end x")?, coord(3, "end y")?);

    let color = Rgb::parse(fields[4]).ok_or_else(|| ParseError::InvalidColor {
        line: number,
        value: fields[4].to_string(),
    })?;

    let width = match fields.get(5) {
        None => DEFAULT_WIDTH,
        Some(text) => match text.parse::<u32>() {
            Ok(width) if width > 0 => width,
            _ => {
                return Err(ParseError::InvalidWidth {
                    line: number,
                    value: text.to_string(),
                })
            }
        },
    };

    Ok(Segment::new(start, end, color, width))
}

/// Serialize segments, one newline-terminated line each, in paint order.
pub fn serialize(segments: &[Segment], options: CodecOptions) -> String {
    let mut out = String::new();
    if options.version_header {
        out.push_str(VERSION_PREFIX);
        out.push(' ');
        out.push_str(VERSION);
        out.push('\n');
    }
    for s in segments {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            s.start.x,
            s.start.y,
            s.end.x,
            s.end.y,
            s.color.to_hex(),
            s.width
        ));
    }
    out
}

/// Read and parse a drawing file.
pub fn read(path: &Path) -> Result<Vec<Segment>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let segments =
        parse(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(segments)
}

/// Serialize and write a drawing file.
///
/// The text goes to a sibling temporary file first and is then renamed
/// over `path`, so a failed write leaves any existing file intact.
pub fn write(path: &Path, segments: &[Segment], options: CodecOptions) -> Result<()> {
    let text = serialize(segments, options);
    let tmp = temp_path(path);
    if let Err(e) = std::fs::write(&tmp, text) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to write {}", tmp.display()));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb, width: u32) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2), color, width)
    }

    #[test]
    fn test_parse_two_lines() {
        let text = "0,0,10,0,#ff0000,3\n10,0,10,10,#00ff00,5\n";
        let segments = parse(text).unwrap();
        assert_eq!(
            segments,
            vec![
                seg(0, 0, 10, 0, Rgb::RED, 3),
                seg(10, 0, 10, 10, Rgb::GREEN, 5)
            ]
        );
    }

    #[test]
    fn test_serialize_single_segment() {
        let segments = vec![seg(5, 5, 40, 5, Rgb::BLACK, 3)];
        assert_eq!(
            serialize(&segments, CodecOptions::default()),
            "5,5,40,5,#000000,3\n"
        );
    }

    #[test]
    fn test_roundtrip_preserves_fields_and_order() {
        let segments = vec![
            seg(-4, 7, 300, 2, Rgb::new(18, 52, 86), 1),
            seg(300, 2, 300, 2, Rgb::WHITE, 9),
            seg(0, 0, 1, 1, Rgb::BLUE, 64),
        ];
        let text = serialize(&segments, CodecOptions::default());
        assert_eq!(parse(&text).unwrap(), segments);

        let text = serialize(
            &segments,
            CodecOptions {
                version_header: true,
            },
        );
        assert_eq!(parse(&text).unwrap(), segments);
    }

    #[test]
    fn test_legacy_five_field_lines_get_default_width() {
        let segments = parse("1,2,3,4,#0000ff\n").unwrap();
        assert_eq!(segments, vec![seg(1, 2, 3, 4, Rgb::BLUE, DEFAULT_WIDTH)]);
    }

    #[test]
    fn test_named_colors_and_whitespace() {
        let segments = parse("  1, 2 ,3,4, red ,7\r\n\n   \n").unwrap();
        assert_eq!(segments, vec![seg(1, 2, 3, 4, Rgb::RED, 7)]);
    }

    #[test]
    fn test_empty_file_is_empty_drawing() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("#scribble v1\n").unwrap().is_empty());
    }

    #[test]
    fn test_version_header() {
        let text = "#scribble v1\n0,0,1,1,#000000,2\n";
        assert_eq!(parse(text).unwrap().len(), 1);

        assert_eq!(
            parse("#scribble v9\n0,0,1,1,#000000,2\n"),
            Err(ParseError::UnsupportedVersion("v9".to_string()))
        );
    }

    #[test]
    fn test_header_only_allowed_first() {
        let err = parse("0,0,1,1,#000000,2\n#scribble v1\n").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { line: 2, .. }));
    }

    #[test]
    fn test_malformed_lines_are_rejected() {
        assert_eq!(
            parse("0,0,1,1,#000000,2\n0,x,1,1,#000000,2\n"),
            Err(ParseError::InvalidNumber {
                line: 2,
                field: "start y",
                value: "x".to_string()
            })
        );
        assert!(matches!(
            parse("0,0,1,1\n"),
            Err(ParseError::FieldCount { line: 1, found: 4 })
        ));
        assert!(matches!(
            parse("0,0,1,1,notacolor,3\n"),
            Err(ParseError::InvalidColor { line: 1, .. })
        ));
        assert!(matches!(
            parse("0,0,1,1,#000000,0\n"),
            Err(ParseError::InvalidWidth { line: 1, .. })
        ));
        assert!(matches!(
            parse("0,0,1,1,#000000,-2\n"),
            Err(ParseError::InvalidWidth { line: 1, .. })
        ));
        assert!(matches!(
            parse("0,0,1.5,1,#000000,3\n"),
            Err(ParseError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.draw");
        let segments = vec![seg(5, 5, 40, 5, Rgb::BLACK, 3)];

        write(&path, &segments, CodecOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "5,5,40,5,#000000,3\n");
        assert_eq!(read(&path).unwrap(), segments);
        assert!(!dir.path().join("a.draw.tmp").exists());
    }

    #[test]
    fn test_write_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.draw");
        let segments = vec![
            seg(0, 0, 10, 0, Rgb::BLACK, 3),
            seg(0, 0, 10, 0, Rgb::WHITE, 9),
        ];

        write(&path, &segments, CodecOptions::default()).unwrap();
        let first = std::fs::read(&path).unwrap();
        write(&path, &segments, CodecOptions::default()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_failed_write_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.draw");
        std::fs::write(&path, "1,1,2,2,#000000,3\n").unwrap();
        // A directory squatting on the temp name makes the write fail.
        std::fs::create_dir(dir.path().join("c.draw.tmp")).unwrap();

        let segments = vec![seg(0, 0, 9, 9, Rgb::RED, 5)];
        assert!(write(&path, &segments, CodecOptions::default()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,1,2,2,#000000,3\n");
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("d.draw");

        let segments = vec![seg(0, 0, 9, 9, Rgb::RED, 5)];
        assert!(write(&path, &segments, CodecOptions::default()).is_err());
        assert!(!dir.path().join("missing").join("d.draw.tmp").exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(&dir.path().join("missing.draw")).is_err());
    }
}
