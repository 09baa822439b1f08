//! Parser for the compact circuit notation.
//!
//! A circuit is written on a single line:
//!
//! ```text
//! notation  = name ':' source ':' topology
//! source    = ('V' | 'I') '.' value
//! topology  = group
//! group     = series { ',' series } [ ';' ]
//! series    = element { [ '.' ] element }
//! element   = value | ':' group
//! value     = digits [ unit_suffix ]
//! ```
//!
//! | Separator | Meaning |
//! |-----------|---------|
//! | `.` | next element of the same series chain |
//! | `:` | open a nested parallel group |
//! | `,` | next branch of the innermost group |
//! | `;` | close the innermost group (optional at end of input) |
//!
//! Because `.` is a separator, values never carry a decimal point. Use the
//! engineering suffixes (`p`, `n`, `u`, `m`, `k`, `M`, `G`) instead.
//!
//! # Example
//!
//! ```text
//! Circuit 1:V.12:300.150
//! ```
//!
//! A 12 V source driving a 300 Ohm and a 150 Ohm resistor in series.

mod lexer;
mod parser;

pub use lexer::{parse_value, Lexer, Token, TokenKind};
pub use parser::Parser;

use tracing::debug;

use crate::circuit::{Node, Supply};
use crate::error::{OhmdrawError, Result};

/// The three segments of a notation line, with the topology parsed.
#[derive(Debug, Clone)]
pub struct ParsedCircuit {
    /// Circuit name (first segment)
    pub name: String,
    /// Voltage or current source
    pub supply: Supply,
    /// Raw topology tree, still wrapped in the implicit top-level group
    pub topology: Node,
}

/// Parse a full `Name:Source:Topology` line.
pub fn parse(input: &str) -> Result<ParsedCircuit> {
    let line = input.trim_end_matches(['\r', '\n']);

    let mut segments = line.splitn(3, ':');
    let (name, source, topology) = match (segments.next(), segments.next(), segments.next()) {
        (Some(name), Some(source), Some(topology)) => (name, source, topology),
        _ => {
            return Err(OhmdrawError::malformed(
                line.len(),
                "expected 'Name:Source:Topology'",
            ));
        }
    };

    let source_offset = name.len() + 1;
    let supply = parse_supply(source, source_offset)?;

    let topology_offset = source_offset + source.len() + 1;
    let mut parser = Parser::new(Lexer::new(topology, topology_offset));
    let topology = parser.parse()?;

    debug!(circuit = name, %supply, raw = %topology.structure(), "parsed circuit notation");

    Ok(ParsedCircuit {
        name: name.to_string(),
        supply,
        topology,
    })
}

/// Parse a `V.<value>` or `I.<value>` source token.
///
/// The magnitude must be a finite number. Its sign is not checked here;
/// the solver rejects non-positive supplies.
pub fn parse_supply(text: &str, position: usize) -> Result<Supply> {
    let (kind, magnitude): (fn(f64) -> Supply, &str) =
        if let Some(rest) = text.strip_prefix("V.") {
            (Supply::Voltage, rest)
        } else if let Some(rest) = text.strip_prefix("I.") {
            (Supply::Current, rest)
        } else {
            return Err(OhmdrawError::malformed(
                position,
                format!("source '{}' must be 'V.<value>' or 'I.<value>'", text),
            ));
        };

    let value = parse_value(magnitude).ok_or_else(|| {
        OhmdrawError::malformed(position + 2, format!("invalid source value '{}'", magnitude))
    })?;

    if !value.is_finite() {
        return Err(OhmdrawError::malformed(
            position + 2,
            format!("source value '{}' is not a finite number", magnitude),
        ));
    }

    Ok(kind(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notation() {
        let parsed = parse("Circuit 1:V.12:300.150\n").unwrap();
        assert_eq!(parsed.name, "Circuit 1");
        assert_eq!(parsed.supply, Supply::Voltage(12.0));
        assert_eq!(parsed.topology.structure(), "{(R 300)(R 150)}");
    }

    #[test]
    fn test_parse_current_source() {
        let parsed = parse("X:I.2k:100").unwrap();
        assert_eq!(parsed.supply, Supply::Current(2000.0));
    }

    #[test]
    fn test_topology_may_contain_colons() {
        let parsed = parse("X:V.1:1:2,3").unwrap();
        assert_eq!(parsed.topology.structure(), "{(R 1){(R 2),(R 3)}}");
    }

    #[test]
    fn test_too_few_segments() {
        let err = parse("X:V.1").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { .. }));
    }

    #[test]
    fn test_bad_source_kind() {
        let err = parse("X:Z.1:1").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { position: 2, .. }));
    }

    #[test]
    fn test_bad_source_value() {
        let err = parse("X:V.abc:1").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { position: 4, .. }));
    }

    #[test]
    fn test_non_finite_source_value() {
        for input in ["X:V.1e400:100", "X:V.inf:100", "X:I.NaN:100"] {
            let err = parse(input).unwrap_err();
            assert!(
                matches!(err, OhmdrawError::MalformedNotation { position: 4, .. }),
                "{} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_whitespace_is_not_a_separator() {
        let err = parse("X:V.1:10 20").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { position: 6, .. }));

        let parsed = parse("X:V.1: 10 . 20 ").unwrap();
        assert_eq!(parsed.topology.structure(), "{(R 10)(R 20)}");
    }

    #[test]
    fn test_unterminated_group() {
        let err = parse("X:V.1:1:").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { position: 8, .. }));
    }

    #[test]
    fn test_error_positions_are_line_offsets() {
        // "X:V.1:" is 6 bytes, the bad value starts 3 bytes into the topology
        let err = parse("X:V.1:10.x1").unwrap_err();
        assert!(matches!(err, OhmdrawError::MalformedNotation { position: 9, .. }));
    }
}
