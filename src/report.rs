use thiserror::Error;

/// One recoverable defect found while decoding.
///
/// Diagnostics never abort a pass; they are collected in an [`ErrorLog`]
/// and surfaced together once the pass has finished. Line numbers are
/// 1-based positions in the file being decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Invalid characters in line {line}: {content}")]
    InvalidCharacters { line: usize, content: String },

    #[error("Incomplete binary length in line {line}: {length} is not a multiple of {width}")]
    RaggedLine {
        line: usize,
        length: usize,
        width: usize,
    },

    #[error("Skipped incomplete group in line {line}: {group}")]
    ShortGroup { line: usize, group: String },

    #[error("Invalid binary group in line {line}: {group}")]
    MalformedGroup { line: usize, group: String },

    #[error("Key stream exhausted at line {line}")]
    KeyExhausted { line: usize },
}

/// Ordered accumulator for [`Diagnostic`]s, in encounter order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorLog {
    entries: Vec<Diagnostic>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.entries.extend(diagnostics);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl IntoIterator for ErrorLog {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_encounter_order() {
        let mut log = ErrorLog::new();
        log.push(Diagnostic::KeyExhausted { line: 3 });
        log.extend(vec![
            Diagnostic::ShortGroup {
                line: 4,
                group: "01".into(),
            },
            Diagnostic::KeyExhausted { line: 5 },
        ]);

        assert_eq!(log.len(), 3);
        let lines: Vec<usize> = log
            .iter()
            .map(|d| match d {
                Diagnostic::KeyExhausted { line } => *line,
                Diagnostic::ShortGroup { line, .. } => *line,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(lines, vec![3, 4, 5]);
    }

    #[test]
    fn test_diagnostic_messages() {
        let diag = Diagnostic::InvalidCharacters {
            line: 2,
            content: "0100x001".into(),
        };
        assert_eq!(diag.to_string(), "Invalid characters in line 2: 0100x001");

        let diag = Diagnostic::RaggedLine {
            line: 1,
            length: 10,
            width: 8,
        };
        assert_eq!(
            diag.to_string(),
            "Incomplete binary length in line 1: 10 is not a multiple of 8"
        );
    }
}
