use std::path::Path;

use super::format::{LineFormat, TextEncoding};
use super::model::Trace;
use crate::error::{PlotError, PlotResult};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read one trace from `path` according to `format`.
///
/// The whole file is read and decoded up front, so the handle is released
/// before any parsing starts.
pub fn load_trace(path: &Path, format: &LineFormat) -> PlotResult<Trace> {
    let bytes = std::fs::read(path).map_err(|e| PlotError::io(path, e))?;
    let text = decode(&bytes, format.encoding, path)?;
    let trace = parse_trace(&text, format, path)?;
    log::info!("Loaded {} points from {}", trace.len(), path.display());
    Ok(trace)
}

/// Parse already-decoded text. `origin` is only used in error messages.
pub fn parse_trace(text: &str, format: &LineFormat, origin: &Path) -> PlotResult<Trace> {
    if !(2..=3).contains(&format.fields) {
        return Err(PlotError::InvalidFormat(format.fields));
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); format.fields];

    for (idx, line) in text.lines().enumerate().skip(format.header_lines) {
        if format.skip.skips(line) {
            continue;
        }
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let enough = if format.ignore_extra_fields {
            tokens.len() >= format.fields
        } else {
            tokens.len() == format.fields
        };
        if !enough {
            return Err(PlotError::Parse {
                path: origin.to_path_buf(),
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    format.fields,
                    tokens.len()
                ),
            });
        }

        for (column, tok) in columns.iter_mut().zip(&tokens) {
            let value = tok.parse::<f64>().map_err(|_| PlotError::Parse {
                path: origin.to_path_buf(),
                line: line_no,
                reason: format!("'{tok}' is not a number"),
            })?;
            column.push(value);
        }
    }

    let mut columns = columns.into_iter();
    let x = columns.next().unwrap_or_default();
    let y = columns.next().unwrap_or_default();
    Ok(match columns.next() {
        Some(fit) => Trace::with_fit(x, y, fit),
        None => Trace::new(x, y),
    })
}

// ---------------------------------------------------------------------------
// Text decoding
// ---------------------------------------------------------------------------

fn decode(bytes: &[u8], encoding: TextEncoding, path: &Path) -> PlotResult<String> {
    match encoding {
        TextEncoding::Utf8 => {
            let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
            String::from_utf8(bytes.to_vec()).map_err(|e| PlotError::Encoding {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
        TextEncoding::Utf16 => decode_utf16(bytes, path),
    }
}

fn decode_utf16(bytes: &[u8], path: &Path) -> PlotResult<String> {
    let encoding_error = |reason: String| PlotError::Encoding {
        path: path.to_path_buf(),
        reason,
    };

    let (big_endian, body) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (true, rest),
        [0xFF, 0xFE, rest @ ..] => (false, rest),
        _ => (false, bytes),
    };
    if body.len() % 2 != 0 {
        return Err(encoding_error(format!(
            "odd number of bytes ({}) for UTF-16 text",
            body.len()
        )));
    }

    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| encoding_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(text: &str, format: &LineFormat) -> PlotResult<Trace> {
        parse_trace(text, format, Path::new("test.txt"))
    }

    fn utf16_le(text: &str, bom: bool) -> Vec<u8> {
        let mut out = Vec::new();
        if bom {
            out.extend_from_slice(&[0xFF, 0xFE]);
        }
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out
    }

    #[test]
    fn bli_file_skips_header_and_footer_text() {
        let text = "Sensor A1\nTime Signal Fit\n0.2 0.01 0.0\n0.4 0.02 0.015\n\n0.6 0.05 0.04\nEnd of data\n";
        let trace = parse(text, &LineFormat::BLI).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.x(), &[0.2, 0.4, 0.6]);
        assert_eq!(trace.y(), &[0.01, 0.02, 0.05]);
        assert_eq!(trace.fit(), Some(&[0.0, 0.015, 0.04][..]));
    }

    #[test]
    fn length_matches_accepted_line_count() {
        let text = "# peaks\n500.1 10\n501.2 20\n502.3 15\n503.4 5\n";
        let trace = parse(text, &LineFormat::MASS_SPECTRUM).unwrap();
        assert_eq!(trace.len(), 4);
        assert!(trace.fit().is_none());
    }

    #[test]
    fn non_numeric_leading_line_is_skipped_not_an_error() {
        let trace = parse("abc 1.0 2.0\n1.0 2.0 3.0\n", &LineFormat::BLI).unwrap();
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn non_numeric_field_on_accepted_line_is_a_parse_error() {
        let err = parse("1.0 2.0\n1.0 abc\n", &LineFormat::MASS_SPECTRUM).unwrap_err();
        match err {
            PlotError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("abc"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count_is_a_parse_error() {
        let err = parse("1.0 2.0\n", &LineFormat::BLI).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 1, .. }));

        let err = parse("1.0 2.0 3.0\n", &LineFormat::MASS_SPECTRUM).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 1, .. }));
    }

    #[test]
    fn unsupported_field_count_is_rejected() {
        let format = LineFormat {
            fields: 4,
            ..LineFormat::BLI
        };
        let err = parse("1 2 3 4\n", &format).unwrap_err();
        assert!(matches!(err, PlotError::InvalidFormat(4)));
    }

    #[test]
    fn empty_input_gives_empty_trace() {
        let trace = parse("no data here\n", &LineFormat::BLI).unwrap();
        assert!(trace.is_empty());
        assert!(matches!(trace.zeroed_time(), Err(PlotError::EmptyData)));
    }

    #[test]
    fn sec_format_skips_header_and_ignores_extra_columns() {
        let text = "Run 001\nml\tmAU\tcond\nsecond header\n0.5\t1.25\t12.0\n1.0\t3.5\t12.1\n";
        let trace = parse(text, &LineFormat::SEC).unwrap();
        assert_eq!(trace.x(), &[0.5, 1.0]);
        assert_eq!(trace.y(), &[1.25, 3.5]);
    }

    #[test]
    fn sec_format_rejects_short_lines_after_header() {
        let err = parse("h\nh\nh\n0.5\n", &LineFormat::SEC).unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 4, .. }));
    }

    #[test]
    fn loads_utf16_sec_file_with_and_without_bom() {
        let text = "a\nb\nc\n0.5 1.0 x\n1.5 2.0 y\n";
        for bom in [true, false] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(&utf16_le(text, bom)).unwrap();
            let trace = load_trace(file.path(), &LineFormat::SEC).unwrap();
            assert_eq!(trace.x(), &[0.5, 1.5]);
            assert_eq!(trace.y(), &[1.0, 2.0]);
        }
    }

    #[test]
    fn big_endian_utf16_is_detected_from_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "h\nh\nh\n2 4\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let text = decode_utf16(&bytes, Path::new("be.csv")).unwrap();
        assert_eq!(text, "h\nh\nh\n2 4\n");
    }

    #[test]
    fn odd_length_utf16_is_an_encoding_error() {
        let err = decode_utf16(&[0xFF, 0xFE, 0x31], Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, PlotError::Encoding { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_trace(Path::new("/definitely/not/here.txt"), &LineFormat::BLI).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }));
    }
}
