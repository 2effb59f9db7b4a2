// ---------------------------------------------------------------------------
// LineFormat – declarative description of one instrument's text export
// ---------------------------------------------------------------------------

/// Which lines past the header block are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRule {
    /// Every line is data.
    None,
    /// Skip lines whose first character is not numeric (headers, footers,
    /// blank lines).
    NonNumericStart,
}

impl SkipRule {
    pub fn skips(self, line: &str) -> bool {
        match self {
            SkipRule::None => false,
            SkipRule::NonNumericStart => !line.chars().next().is_some_and(char::is_numeric),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// UTF-16 with an optional byte-order mark; little-endian without one.
    Utf16,
}

/// How to turn the lines of a text file into numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    /// Number of numeric fields per data line (2 or 3).
    pub fields: usize,
    /// Read only the first `fields` tokens and ignore the rest of the line.
    pub ignore_extra_fields: bool,
    pub skip: SkipRule,
    /// Leading lines dropped before any other rule applies.
    pub header_lines: usize,
    pub encoding: TextEncoding,
}

impl LineFormat {
    /// Biolayer interferometry export: `time signal fit`.
    pub const BLI: LineFormat = LineFormat {
        fields: 3,
        ignore_extra_fields: false,
        skip: SkipRule::NonNumericStart,
        header_lines: 0,
        encoding: TextEncoding::Utf8,
    };

    /// Mass spectrum peak list: `mass intensity`.
    pub const MASS_SPECTRUM: LineFormat = LineFormat {
        fields: 2,
        ignore_extra_fields: false,
        skip: SkipRule::NonNumericStart,
        header_lines: 0,
        encoding: TextEncoding::Utf8,
    };

    /// Size-exclusion chromatography export: UTF-16, three header lines,
    /// `volume absorbance ...`.
    pub const SEC: LineFormat = LineFormat {
        fields: 2,
        ignore_extra_fields: true,
        skip: SkipRule::None,
        header_lines: 3,
        encoding: TextEncoding::Utf16,
    };
}
