//! Text command parser
//!
//! Parses one line of `[$]<name>[<sep><value>]` where `<sep>` is any of
//! space, `=`, `:`, `|` or tab. Names are matched case-insensitively. A value
//! that does not parse as a number turns the command into a query.

use crate::cmd::{CmdObject, ValueType};
use crate::error::{ConfigError, Result};
use crate::registry::{is_group, Index};
use crate::resolver::resolve;
use heapless::String;

/// Longest accepted input line
pub const INPUT_LEN: usize = 80;

/// Characters that end the name
pub const SEPARATORS: [char; 5] = [' ', '=', ':', '|', '\t'];

/// Parse `line` into `cmd` and return the resolved index.
///
/// On return `cmd` holds the index, token and name, and either a float value
/// (set), a null value (query) or the parent marker (group request; any
/// value given is ignored).
///
/// # Errors
///
/// Returns [`ConfigError::UnrecognizedCommand`] if the name does not
/// resolve. `cmd` is left untouched in that case.
pub fn parse(line: &str, cmd: &mut CmdObject) -> Result<Index> {
    let line = line.trim_start();
    let line = line.strip_prefix('$').unwrap_or(line);

    let mut lowered: String<INPUT_LEN> = String::new();
    for c in line.chars() {
        if lowered.push(c.to_ascii_lowercase()).is_err() {
            break;
        }
    }

    let (name, value) = match lowered.find(SEPARATORS) {
        Some(pos) => (&lowered[..pos], Some(&lowered[pos + 1..])),
        None => (lowered.as_str(), None),
    };
    let index = resolve(name)?;

    *cmd = CmdObject::for_index(index)?;
    if is_group(index) {
        cmd.value_type = ValueType::Parent;
    } else if let Some(value) = value.and_then(parse_number) {
        cmd.set_float(value);
    }
    Ok(index)
}

/// Longest numeric prefix of `text`, after leading whitespace
fn parse_number(text: &str) -> Option<f32> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e')))
        .unwrap_or(text.len());
    let mut candidate = &text[..end];
    while !candidate.is_empty() {
        if let Ok(value) = candidate.parse::<f32>() {
            return Some(value);
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::index_of;

    fn parsed(line: &str) -> (Index, CmdObject) {
        let mut cmd = CmdObject::new();
        let index = parse(line, &mut cmd).unwrap();
        (index, cmd)
    }

    #[test]
    fn test_set_with_each_separator() {
        for line in ["$xfr=1200", "$xfr 1200", "xfr:1200", "$xfr|1200", "$xfr\t1200"] {
            let (index, cmd) = parsed(line);
            assert_eq!(index, index_of("xfr"), "{}", line);
            assert_eq!(cmd.value, 1200.0);
            assert_eq!(cmd.value_type, ValueType::Float);
        }
    }

    #[test]
    fn test_query_without_value() {
        let (index, cmd) = parsed("$xfr");
        assert_eq!(index, index_of("xfr"));
        assert_eq!(cmd.value_type, ValueType::Null);
        assert_eq!(cmd.token.as_str(), "xfr");
    }

    #[test]
    fn test_case_insensitive_friendly_name() {
        let (index, cmd) = parsed("$X_Feedrate_Maximum = 800");
        assert_eq!(index, index_of("xfr"));
        // first separator is the space, value follows after the '='
        assert_eq!(cmd.value_type, ValueType::Null);

        let (_, cmd) = parsed("X_FEEDRATE_MAXIMUM=800");
        assert_eq!(cmd.value, 800.0);
    }

    #[test]
    fn test_malformed_value_becomes_query() {
        let (_, cmd) = parsed("$xfr=fast");
        assert_eq!(cmd.value_type, ValueType::Null);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_number("12.5mm"), Some(12.5));
        assert_eq!(parse_number("  -3"), Some(-3.0));
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("1.5e2"), Some(150.0));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_group_forces_parent() {
        let (index, cmd) = parsed("$x=5");
        assert_eq!(index, index_of("x"));
        assert_eq!(cmd.value_type, ValueType::Parent);
    }

    #[test]
    fn test_unrecognized_leaves_cmd_untouched() {
        let mut cmd = CmdObject::new();
        cmd.value = 7.0;
        assert_eq!(
            parse("$nosuch=1", &mut cmd),
            Err(ConfigError::UnrecognizedCommand)
        );
        assert_eq!(cmd.value, 7.0);
    }
}
