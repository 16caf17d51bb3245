//! IDN report parser.
//!
//! The export has no schema: each finding starts on a line carrying a
//! `Date :` marker and runs until the next one. Field markers (`Scale:`,
//! the instruction frequency labels, `Scantype:`) may appear on any line
//! of the finding, including the date line itself. Every line is tested
//! against every marker.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use wellscan_core::models::condition::Condition;
use wellscan_core::models::scan_report::ScanReport;

use crate::error::ParseError;
use crate::reassemble::reassemble_lines;

const DATE_MARKER: &str = "Date :";
const SCALE_MARKER: &str = "Scale:";
const SCAN_TYPE_MARKER: &str = "Scantype:";
const REAL_FREQ_LABEL: &str = "Real Instruction Freq.";

/// Spellings of the brain frequency label seen in exports. The middle one is
/// what the line reassembler produces when the label was wrapped.
const BRAIN_FREQ_LABELS: [&str; 3] = [
    "Brain Instruction Freq.",
    "Brain InstructionFreq.",
    "Brain  Instruction Freq.",
];

static SCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Scale: (\d+)").expect("scale pattern is valid"));

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\((\d+(?:\.\d+)?%)\)\s*Scale:").expect("percentage pattern is valid")
});

static FREQ_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("frequency pattern is valid"));

static SCAN_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Scantype:\s*(\d+)").expect("scan type pattern is valid"));

/// Whether a finding is currently being collected.
#[derive(Debug, Default)]
pub enum ParseState {
    #[default]
    NoOpenCondition,
    OpenCondition(Condition),
}

impl ParseState {
    /// Open `condition`, handing back the previously open one (if any) so
    /// the caller can finalize it.
    pub fn open(&mut self, condition: Condition) -> Option<Condition> {
        match std::mem::replace(self, ParseState::OpenCondition(condition)) {
            ParseState::OpenCondition(previous) => Some(previous),
            ParseState::NoOpenCondition => None,
        }
    }

    pub fn current_mut(&mut self) -> Option<&mut Condition> {
        match self {
            ParseState::OpenCondition(condition) => Some(condition),
            ParseState::NoOpenCondition => None,
        }
    }

    /// Close out the state at end of input.
    pub fn finish(self) -> Option<Condition> {
        match self {
            ParseState::OpenCondition(condition) => Some(condition),
            ParseState::NoOpenCondition => None,
        }
    }
}

/// Single-pass scanner over logical (already reassembled) lines.
#[derive(Debug, Default)]
pub struct ReportParser {
    state: ParseState,
    conditions: Vec<Condition>,
    scan_type: u32,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        if line.contains(DATE_MARKER) {
            let opened = Condition {
                name: condition_name(line),
                ..Condition::default()
            };
            if let Some(finished) = self.state.open(opened) {
                self.conditions.push(finished);
            }
        }

        let Some(condition) = self.state.current_mut() else {
            return;
        };

        if line.contains(SCALE_MARKER) {
            if let Some(scale) = capture_number(&SCALE, line) {
                condition.scale = Some(scale);
            }
            if let Some(caps) = PERCENTAGE.captures(line) {
                condition.percentage = Some(caps[1].to_string());
            }
        }

        if let Some(rest) = after_label(line, REAL_FREQ_LABEL) {
            condition.real_freq = frequency_list(rest);
        }

        for label in BRAIN_FREQ_LABELS {
            if let Some(rest) = after_label(line, label) {
                condition.brain_freq = frequency_list(rest);
            }
        }

        if line.contains(SCAN_TYPE_MARKER)
            && let Some(scan_type) = capture_number(&SCAN_TYPE, line)
        {
            self.scan_type = scan_type;
        }
    }

    pub fn finish(mut self) -> ScanReport {
        if let Some(last) = self.state.finish() {
            self.conditions.push(last);
        }
        ScanReport {
            scan_type: self.scan_type,
            report: self.conditions,
        }
    }
}

/// Parse the full text of an IDN export.
///
/// Never fails: unrecognized lines are skipped and fields whose pattern does
/// not match are left unset.
pub fn parse_idn_report(text: &str) -> ScanReport {
    let raw: Vec<&str> = text.lines().collect();
    let lines = reassemble_lines(&raw);

    let mut parser = ReportParser::new();
    for line in &lines {
        parser.feed_line(line);
    }
    let report = parser.finish();

    debug!(
        raw_lines = raw.len(),
        logical_lines = lines.len(),
        conditions = report.report.len(),
        scan_type = report.scan_type,
        "parsed IDN report"
    );

    report
}

/// Read and parse an IDN export from disk.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; only a
/// failed read is an error.
pub fn parse_idn_report_file(path: impl AsRef<Path>) -> Result<ScanReport, ParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_idn_report(&String::from_utf8_lossy(&bytes)))
}

fn condition_name(line: &str) -> Option<String> {
    line.split("  ")
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn capture_number(pattern: &Regex, line: &str) -> Option<u32> {
    pattern.captures(line)?[1].parse().ok()
}

fn after_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.split_once(label).map(|(_, rest)| rest)
}

/// First parenthesized group, split on commas. Empty when there is no group.
fn frequency_list(text: &str) -> Vec<String> {
    FREQ_GROUP
        .captures(text)
        .map(|caps| caps[1].split(',').map(|f| f.trim().to_string()).collect())
        .unwrap_or_default()
}
