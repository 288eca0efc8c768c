//! Expanded/collapsed flags for the table-of-contents outline.

use std::fmt;

/// Header character occupying the unused slot 0 of the encoding.
const HEADER: char = '_';
const EXPANDED: char = 'T';
const COLLAPSED: char = 'F';

/// State of one outline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Expanded,
    Collapsed,
}

impl Flag {
    /// The other state.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Expanded => EXPANDED,
            Self::Collapsed => COLLAPSED,
        }
    }

    fn from_char(c: char) -> Self {
        if c == EXPANDED {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => f.write_str("expanded"),
            Self::Collapsed => f.write_str("collapsed"),
        }
    }
}

/// One flag per outline node, indexed `1..=section_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineState {
    /// `flags[0]` is node 1
    flags: Vec<Flag>,
}

impl OutlineState {
    /// Root expanded, every other node collapsed.
    pub fn new_default(section_count: usize) -> Self {
        let mut flags = vec![Flag::Collapsed; section_count];
        if let Some(root) = flags.first_mut() {
            *root = Flag::Expanded;
        }
        Self { flags }
    }

    pub fn section_count(&self) -> usize {
        self.flags.len()
    }

    /// Flag of a 1-based node index, `None` when out of range.
    pub fn flag(&self, index: usize) -> Option<Flag> {
        index
            .checked_sub(1)
            .and_then(|slot| self.flags.get(slot))
            .copied()
    }

    /// Flips one node and returns its new flag. Out of range changes nothing.
    pub fn flip(&mut self, index: usize) -> Option<Flag> {
        let slot = index.checked_sub(1)?;
        let flag = self.flags.get_mut(slot)?;
        *flag = flag.flipped();
        Some(*flag)
    }

    /// `(index, flag)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Flag)> + '_ {
        self.flags.iter().enumerate().map(|(slot, flag)| (slot + 1, *flag))
    }
}

/// Length of the persisted blob for a given section count.
pub const fn encoded_len(section_count: usize) -> usize {
    section_count + 1
}

/// Restores state from a persisted blob.
///
/// A missing blob, or one whose length is not `section_count + 1`, is
/// discarded in favor of the default vector.
pub fn load(persisted: Option<&str>, section_count: usize) -> OutlineState {
    let Some(blob) = persisted else {
        return OutlineState::new_default(section_count);
    };

    let len = blob.chars().count();
    if len != encoded_len(section_count) {
        tracing::warn!(
            "Discarding outline state of length {} (expected {})",
            len,
            encoded_len(section_count)
        );
        return OutlineState::new_default(section_count);
    }

    OutlineState {
        flags: blob.chars().skip(1).map(Flag::from_char).collect(),
    }
}

/// Encodes the whole vector; the header slot is followed by one flag per node.
pub fn save(state: &OutlineState) -> String {
    std::iter::once(HEADER)
        .chain(state.flags.iter().map(|flag| flag.as_char()))
        .collect()
}

/// Whether a 1-based node is expanded. Out of range reads as collapsed.
pub fn is_expanded(state: &OutlineState, index: usize) -> bool {
    state.flag(index) == Some(Flag::Expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_default_pattern() {
        let state = OutlineState::new_default(5);
        check!(save(&state) == "_TFFFF");
        check!(is_expanded(&state, 1));
        check!((2..=5).all(|i| !is_expanded(&state, i)));
    }

    #[test]
    fn test_empty_outline() {
        let state = OutlineState::new_default(0);
        check!(save(&state) == "_");
        check!(!is_expanded(&state, 1));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("_TT"))]
    #[case(Some("_TTTTTTT"))]
    fn test_wrong_length_falls_back(#[case] blob: Option<&str>) {
        check!(load(blob, 5) == OutlineState::new_default(5));
    }

    #[test]
    fn test_load_parses_matching_length() {
        let state = load(Some("_FTFTT"), 5);
        let flags: Vec<_> = state.iter().map(|(_, flag)| flag).collect();
        check!(
            flags
                == [
                    Flag::Collapsed,
                    Flag::Expanded,
                    Flag::Collapsed,
                    Flag::Expanded,
                    Flag::Expanded,
                ]
        );
    }

    #[test]
    fn test_unknown_flag_characters_read_as_collapsed() {
        let state = load(Some("xT?t"), 3);
        check!(save(&state) == "_TFF");
    }

    #[rstest]
    #[case("_TFFFF")]
    #[case("_FFFFF")]
    #[case("_TTTTT")]
    #[case("_FTFTF")]
    fn test_round_trip(#[case] blob: &str) {
        let state = load(Some(blob), 5);
        check!(save(&state) == blob);
        check!(load(Some(&save(&state)), 5) == state);
    }

    #[test]
    fn test_flip_changes_only_target() {
        let mut state = OutlineState::new_default(5);
        check!(state.flip(3) == Some(Flag::Expanded));
        check!(save(&state) == "_TFTFF");
        check!(state.flip(3) == Some(Flag::Collapsed));
        check!(save(&state) == "_TFFFF");
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn test_flip_out_of_range(#[case] index: usize) {
        let mut state = OutlineState::new_default(5);
        check!(state.flip(index).is_none());
        check!(state == OutlineState::new_default(5));
    }
}
