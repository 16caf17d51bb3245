//! Repair of records the instrument's text exporter wrapped across lines.
//!
//! The exporter breaks long fields in a handful of known places: after a
//! comma inside a frequency list, and right after the `Brain Instruction`
//! label. A wrapped line is joined with the line that follows it; if the
//! joined line still ends in a comma, one more line is pulled in. Wraps
//! deeper than that have not been observed in exports.

/// Labels the exporter is known to wrap immediately after.
const WRAPPED_LABELS: [&str; 2] = ["Brain Instruction", "Brain Instruction Freq."];

/// Whether `line` is a fragment that continues on the next physical line.
pub fn is_wrapped(line: &str) -> bool {
    let line = line.trim();
    line.ends_with(',') || WRAPPED_LABELS.iter().any(|label| line.ends_with(label))
}

/// Join raw lines into logical lines, merging wrapped fragments with their
/// successors.
///
/// A wrapped line with no successor is kept as it is.
pub fn reassemble_lines<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut lines = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let line = raw[i].as_ref();
        let next = raw.get(i + 1).filter(|_| is_wrapped(line));

        let Some(next) = next else {
            lines.push(line.to_string());
            i += 1;
            continue;
        };

        let mut joined = join(line, next.as_ref());
        i += 2;

        if joined.trim().ends_with(',')
            && let Some(third) = raw.get(i)
        {
            joined = join(&joined, third.as_ref());
            i += 1;
        }

        lines.push(joined);
    }

    lines
}

fn join(head: &str, tail: &str) -> String {
    let tail = tail.trim();
    let mut joined = String::with_capacity(head.len() + tail.len());
    joined.push_str(head.trim_end());
    joined.push_str(tail);
    joined
}
