//! Name resolution
//!
//! Maps user input to a registry index. Input is expected lower-cased.
//!
//! [`resolve`] tries, in order:
//!
//! 1. Exact token or exact friendly name
//! 2. Abbreviated friendly name (`x_feed` for `x_feedrate_maximum`); an
//!    abbreviation shared by more than one name is rejected
//! 3. Token fast path ([`index_by_token`])
//! 4. Prefix scan ([`index_by_prefix`]): the input starts with a token or a
//!    friendly name; first match in registry order wins

use crate::error::{ConfigError, Result};
use crate::registry::{self, Getter, Index, REGISTRY};
use heapless::String;

/// Token fast path.
///
/// Tokens of up to 3 characters must match the input exactly; a 4-character
/// token matches on its 4 characters regardless of what follows.
pub fn index_by_token(input: &str) -> Option<Index> {
    REGISTRY.iter().position(|d| {
        let token = d.token;
        input == token || (token.len() == 4 && input.starts_with(token))
    })
}

/// General path: first descriptor whose token or friendly name prefixes the input
pub fn index_by_prefix(input: &str) -> Option<Index> {
    if input.is_empty() {
        return None;
    }
    REGISTRY
        .iter()
        .position(|d| input.starts_with(d.token) || input.starts_with(d.name))
}

fn index_by_abbreviation(input: &str) -> Result<Option<Index>> {
    let mut found = None;
    for (i, d) in REGISTRY.iter().enumerate() {
        if d.name.starts_with(input) {
            if found.is_some() {
                return Err(ConfigError::UnrecognizedCommand);
            }
            found = Some(i);
        }
    }
    Ok(found)
}

/// Resolve a token or friendly name.
///
/// # Errors
///
/// Returns [`ConfigError::UnrecognizedCommand`] if nothing matches or an
/// abbreviation is ambiguous.
pub fn resolve(input: &str) -> Result<Index> {
    if input.is_empty() {
        return Err(ConfigError::UnrecognizedCommand);
    }
    if let Some(index) = REGISTRY
        .iter()
        .position(|d| d.token == input || d.name == input)
    {
        return Ok(index);
    }
    if let Some(index) = index_by_abbreviation(input)? {
        return Ok(index);
    }
    index_by_token(input)
        .or_else(|| index_by_prefix(input))
        .ok_or(ConfigError::UnrecognizedCommand)
}

/// Resolve a child token inside a group request.
///
/// Children of axis, motor and offset groups carry their token with the
/// group prefix stripped (`fr` inside `x`), so the prefix is put back before
/// lookup. Children of `sys` and `?` carry full tokens.
pub fn resolve_child(group: Index, child: &str) -> Result<Index> {
    let descriptor = registry::descriptor(group).ok_or(ConfigError::UnrecognizedCommand)?;
    let index = if descriptor.getter == Getter::Group {
        let mut token: String<8> = String::new();
        token
            .push_str(descriptor.token)
            .and_then(|_| token.push_str(child))
            .map_err(|_| ConfigError::UnrecognizedCommand)?;
        REGISTRY.iter().position(|d| d.token == token.as_str())
    } else {
        REGISTRY.iter().position(|d| d.token == child)
    };
    index
        .filter(|&i| i < group)
        .ok_or(ConfigError::UnrecognizedCommand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{index_of, REGISTRY_LEN, START_GROUPS};

    #[test]
    fn test_token_and_name_resolve_to_same_index() {
        for (i, d) in REGISTRY.iter().enumerate() {
            assert_eq!(resolve(d.token), Ok(i), "token {}", d.token);
            assert_eq!(resolve(d.name), Ok(i), "name {}", d.name);
        }
    }

    #[test]
    fn test_fast_path_requires_exact_short_tokens() {
        // "gco" must not stop at "gc"
        assert_eq!(index_by_token("gco"), Some(index_of("gco")));
        assert_eq!(index_by_token("gc"), Some(index_of("gc")));
        assert_eq!(index_by_token("xfrq"), None);
    }

    #[test]
    fn test_fast_path_four_char_tokens_match_prefix() {
        assert_eq!(index_by_token("xabsolute"), Some(index_of("xabs")));
        assert_eq!(index_by_token("line_number"), Some(index_of("line")));
    }

    #[test]
    fn test_name_sharing_token_prefix() {
        // both start with the "stat" token
        assert_eq!(resolve("status_report"), Ok(index_of("sr")));
        assert_eq!(resolve("status_i"), Ok(index_of("si")));
        assert_eq!(resolve("stat"), Ok(index_of("stat")));
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(resolve("x_feed"), Ok(index_of("xfr")));
        assert_eq!(resolve("m2_micro"), Ok(index_of("2mi")));
        assert_eq!(resolve("enable_x"), Ok(index_of("ex")));
    }

    #[test]
    fn test_ambiguous_abbreviation_rejected() {
        // x_switch_mode and x_search_velocity
        assert_eq!(resolve("x_s"), Err(ConfigError::UnrecognizedCommand));
        assert_eq!(resolve("gcode_"), Err(ConfigError::UnrecognizedCommand));
    }

    #[test]
    fn test_prefix_scan_first_match() {
        assert_eq!(index_by_prefix("x_feedrate_maximum_now"), Some(index_of("xfr")));
        assert_eq!(resolve("velocity2"), Ok(index_of("vel")));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(resolve("qqq"), Err(ConfigError::UnrecognizedCommand));
        assert_eq!(resolve(""), Err(ConfigError::UnrecognizedCommand));
    }

    #[test]
    fn test_groups_resolve() {
        assert_eq!(resolve("x"), Ok(index_of("x")));
        assert_eq!(resolve("?"), Ok(index_of("?")));
        assert_eq!(resolve("qm"), Ok(index_of("?")));
        assert!(index_of("x") >= START_GROUPS && index_of("x") < REGISTRY_LEN);
    }

    #[test]
    fn test_resolve_child() {
        assert_eq!(resolve_child(index_of("x"), "fr"), Ok(index_of("xfr")));
        assert_eq!(resolve_child(index_of("2"), "mi"), Ok(index_of("2mi")));
        assert_eq!(resolve_child(index_of("g55"), "z"), Ok(index_of("g55z")));
        assert_eq!(resolve_child(index_of("sys"), "ja"), Ok(index_of("ja")));
        assert_eq!(
            resolve_child(index_of("x"), "zz"),
            Err(ConfigError::UnrecognizedCommand)
        );
    }
}
