//! Pick commands for single and multiple selection.
//!
//! A [`Picker`] turns the raw text typed at the selection prompt into
//! positions within the options currently on display, and describes its own
//! syntax for the help listing.

use std::num::ParseIntError;

use thiserror::Error;

/// A recoverable failure to interpret a pick command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("invalid index `{token}`: {source}")]
    InvalidIndex {
        token: String,
        source: ParseIntError,
    },

    #[error("index {index} out of range, {visible} option(s) listed")]
    OutOfRange { index: usize, visible: usize },
}

/// One row of the help listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub pattern: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
        }
    }
}

pub trait Picker {
    /// Resolves `raw` against `visible` listed options, returning positions
    /// in `0..visible`.
    ///
    /// # Errors
    ///
    /// Returns a [`PickError`] when `raw` is not a valid pick.
    fn pick(&self, visible: usize, raw: &str) -> Result<Vec<usize>, PickError>;

    fn help(&self, visible: usize) -> Vec<HelpEntry>;
}

/// Picks exactly one option by index.
#[derive(Debug, Default, Clone, Copy)]
pub struct Single;

/// Picks a comma separated list of indices, or `*` for everything listed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiple;

/// Wildcard accepted by [`Multiple`].
pub const PICK_ALL: &str = "*";

impl Picker for Single {
    fn pick(&self, visible: usize, raw: &str) -> Result<Vec<usize>, PickError> {
        parse_index(raw, visible).map(|index| vec![index])
    }

    fn help(&self, visible: usize) -> Vec<HelpEntry> {
        vec![HelpEntry::new(
            index_hint(visible),
            "Select option with given index",
        )]
    }
}

impl Picker for Multiple {
    fn pick(&self, visible: usize, raw: &str) -> Result<Vec<usize>, PickError> {
        if raw == PICK_ALL {
            return Ok((0..visible).collect());
        }

        raw.split(',')
            .map(|token| parse_index(token.trim(), visible))
            .collect()
    }

    fn help(&self, visible: usize) -> Vec<HelpEntry> {
        vec![
            HelpEntry::new(index_hint(visible), "Select options with given index(es)"),
            HelpEntry::new(PICK_ALL, "Select all listed options"),
        ]
    }
}

fn parse_index(token: &str, visible: usize) -> Result<usize, PickError> {
    let index = token
        .parse::<usize>()
        .map_err(|source| PickError::InvalidIndex {
            token: token.to_string(),
            source,
        })?;

    if index >= visible {
        return Err(PickError::OutOfRange { index, visible });
    }

    Ok(index)
}

/// `[0-N]` with `N` capped at 9; the hint is cosmetic only.
fn index_hint(visible: usize) -> String {
    let max = match visible {
        1..=9 => visible - 1,
        _ => 9,
    };
    format!("[0-{max}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pick() {
        assert_eq!(Single.pick(4, "0"), Ok(vec![0]));
        assert_eq!(Single.pick(4, "3"), Ok(vec![3]));
    }

    #[test]
    fn test_single_out_of_range() {
        assert_eq!(
            Single.pick(4, "5"),
            Err(PickError::OutOfRange {
                index: 5,
                visible: 4
            })
        );
        assert!(matches!(
            Single.pick(4, "4"),
            Err(PickError::OutOfRange { .. })
        ));
        assert!(matches!(
            Single.pick(0, "0"),
            Err(PickError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_single_rejects_non_numeric() {
        for raw in ["", "one", "-1", "1,2", "*", " 1x"] {
            assert!(
                matches!(Single.pick(4, raw), Err(PickError::InvalidIndex { .. })),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_multiple_wildcard() {
        assert_eq!(Multiple.pick(3, "*"), Ok(vec![0, 1, 2]));
        assert_eq!(Multiple.pick(0, "*"), Ok(vec![]));
    }

    #[test]
    fn test_multiple_list_keeps_order_and_duplicates() {
        assert_eq!(Multiple.pick(4, "2, 0 ,2"), Ok(vec![2, 0, 2]));
        assert_eq!(Multiple.pick(4, "1"), Ok(vec![1]));
    }

    #[test]
    fn test_multiple_aborts_on_any_bad_token() {
        assert!(matches!(
            Multiple.pick(4, "0,x"),
            Err(PickError::InvalidIndex { ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            Multiple.pick(4, "0,,1"),
            Err(PickError::InvalidIndex { ref token, .. }) if token.is_empty()
        ));
        assert_eq!(
            Multiple.pick(4, "0,7"),
            Err(PickError::OutOfRange {
                index: 7,
                visible: 4
            })
        );
    }

    #[test]
    fn test_index_hint() {
        assert_eq!(index_hint(4), "[0-3]");
        assert_eq!(index_hint(1), "[0-0]");
        assert_eq!(index_hint(9), "[0-8]");
        assert_eq!(index_hint(10), "[0-9]");
        assert_eq!(index_hint(250), "[0-9]");
        assert_eq!(index_hint(0), "[0-9]");
    }

    #[test]
    fn test_help_entries() {
        let single = Single.help(4);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].pattern, "[0-3]");

        let multiple = Multiple.help(4);
        assert_eq!(multiple.len(), 2);
        assert_eq!(multiple[1], HelpEntry::new("*", "Select all listed options"));
    }

    #[test]
    fn test_error_messages() {
        let err = Single.pick(2, "9").unwrap_err();
        assert_eq!(err.to_string(), "index 9 out of range, 2 option(s) listed");

        let err = Single.pick(2, "abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid index `abc`"));
    }
}
