//! Line quoting for JSON array literals.
use std::io::Write;

use crate::{error::ConvertError, result::Result};

/// How a changelog line is rendered inside the surrounding quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    /// Historical behavior: content is embedded verbatim. Embedded quote
    /// and backslash characters are not escaped, so lines containing them
    /// produce output that is not valid JSON.
    Verbatim,
    /// Render the content as a JSON string literal.
    Escaped,
}

/// Quote a single line (trailing newline already removed) and append the
/// trailing comma.
pub fn quote_line(line: &str, mode: QuoteMode) -> Result<String> {
    match mode {
        QuoteMode::Verbatim => Ok(format!("\"{line}\",")),
        QuoteMode::Escaped => {
            let quoted = serde_json::to_string(line)
                .map_err(ConvertError::JsonError)?;
            Ok(format!("{quoted},"))
        }
    }
}

/// Render a whole changelog body to `out`, one quoted line per input line.
///
/// Splits on `\n` only, stripping exactly one trailing newline per line; a
/// `\r` left behind by a CRLF file is content, not a delimiter. An empty
/// body renders nothing.
pub fn render<W: Write>(
    body: &str,
    mode: QuoteMode,
    out: &mut W,
) -> Result<()> {
    for line in body.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        writeln!(out, "{}", quote_line(content, mode)?)?;
    }

    Ok(())
}
