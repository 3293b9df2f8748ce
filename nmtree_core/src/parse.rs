use std::fmt;

use rayon::prelude::*;
use regex::Regex;

use crate::decompose::decompose;
use crate::error::NmTreeError;
use crate::model::Symbol;

const SYMBOL_LINE_PATTERN: &str = r"^\s*(?:([0-9a-fA-F]+)\s+)?([0-9]+)\s+([A-Za-z?\-])\s+(.+)$";

pub const DEFAULT_SYNTHETIC_PREFIXES: [&str; 2] = ["go:", "type:"];

const PARALLEL_LINE_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based position in the dump.
    pub line_number: usize,
    pub line: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to find type symbol in line {}: {}",
            self.line_number, self.line
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Symbol(Symbol),
    /// Runtime metadata entry such as `go:buildid` or `type:*`; dropped silently.
    Synthetic,
    Malformed(LineDiagnostic),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDump {
    pub symbols: Vec<Symbol>,
    pub diagnostics: Vec<LineDiagnostic>,
    pub synthetic_count: usize,
}

#[derive(Debug, Clone)]
pub struct LineParser {
    pattern: Regex,
    synthetic_prefixes: Vec<String>,
}

impl LineParser {
    pub fn new() -> Result<Self, NmTreeError> {
        Self::with_synthetic_prefixes(DEFAULT_SYNTHETIC_PREFIXES)
    }

    pub fn with_synthetic_prefixes<I, S>(prefixes: I) -> Result<Self, NmTreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            pattern: Regex::new(SYMBOL_LINE_PATTERN)?,
            synthetic_prefixes: prefixes.into_iter().map(Into::into).collect(),
        })
    }

    fn is_synthetic(&self, name: &str) -> bool {
        self.synthetic_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    pub fn parse_line(&self, line_number: usize, line: &str) -> LineOutcome {
        let malformed = || {
            LineOutcome::Malformed(LineDiagnostic {
                line_number,
                line: line.to_string(),
            })
        };
        let Some(captures) = self.pattern.captures(line) else {
            return malformed();
        };
        let Ok(size) = captures[2].parse::<u64>() else {
            return malformed();
        };
        let Some(kind) = captures[3].chars().next() else {
            return malformed();
        };
        let name = &captures[4];
        if self.is_synthetic(name) {
            return LineOutcome::Synthetic;
        }

        let address = captures
            .get(1)
            .and_then(|raw| u64::from_str_radix(raw.as_str(), 16).ok());
        let decomposed = decompose(name);
        LineOutcome::Symbol(Symbol {
            address,
            size,
            kind,
            qualified_name: name.to_string(),
            path_segments: decomposed.path_segments,
            leaf_name: decomposed.leaf_name,
        })
    }

    /// Parses a whole dump, keeping symbols and diagnostics in line order.
    pub fn parse_dump(&self, text: &str) -> ParsedDump {
        let lines = text.lines().collect::<Vec<_>>();
        let outcomes = if lines.len() >= PARALLEL_LINE_THRESHOLD {
            lines
                .par_iter()
                .enumerate()
                .map(|(index, line)| self.parse_line(index + 1, line))
                .collect::<Vec<_>>()
        } else {
            lines
                .iter()
                .enumerate()
                .map(|(index, line)| self.parse_line(index + 1, line))
                .collect::<Vec<_>>()
        };

        let mut parsed = ParsedDump {
            symbols: Vec::with_capacity(outcomes.len()),
            ..ParsedDump::default()
        };
        for outcome in outcomes {
            match outcome {
                LineOutcome::Symbol(symbol) => parsed.symbols.push(symbol),
                LineOutcome::Synthetic => parsed.synthetic_count += 1,
                LineOutcome::Malformed(diagnostic) => parsed.diagnostics.push(diagnostic),
            }
        }
        parsed
    }
}
