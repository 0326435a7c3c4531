/// The visitor's last explicit pause/resume choice.
///
/// Stored under a single key as the literal strings `true` (paused) and
/// `false` (resumed); a missing key means no choice was ever made. Only
/// explicit actions through the page's own controls write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoredPreference {
    #[default]
    Unset,
    Paused,
    Resumed,
}

impl StoredPreference {
    pub fn from_raw(raw: Option<bool>) -> Self {
        match raw {
            None => StoredPreference::Unset,
            Some(true) => StoredPreference::Paused,
            Some(false) => StoredPreference::Resumed,
        }
    }

    /// The stored wire value, if this preference is stored at all.
    pub fn as_raw(self) -> Option<bool> {
        match self {
            StoredPreference::Unset => None,
            StoredPreference::Paused => Some(true),
            StoredPreference::Resumed => Some(false),
        }
    }

    pub fn is_paused(self) -> bool {
        self == StoredPreference::Paused
    }
}

/// Small key-value persistence seam for the playback preference.
pub trait PreferenceStore {
    fn load(&self) -> StoredPreference;
    fn store(&self, pref: StoredPreference);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_map_to_the_three_states() {
        assert_eq!(StoredPreference::from_raw(None), StoredPreference::Unset);
        assert_eq!(
            StoredPreference::from_raw(Some(true)),
            StoredPreference::Paused
        );
        assert_eq!(
            StoredPreference::from_raw(Some(false)),
            StoredPreference::Resumed
        );
    }

    #[test]
    fn only_explicit_choices_have_a_wire_value() {
        assert_eq!(StoredPreference::Unset.as_raw(), None);
        assert_eq!(StoredPreference::Paused.as_raw(), Some(true));
        assert_eq!(StoredPreference::Resumed.as_raw(), Some(false));
    }

    #[test]
    fn paused_is_the_only_startup_block() {
        assert!(StoredPreference::Paused.is_paused());
        assert!(!StoredPreference::Unset.is_paused());
        assert!(!StoredPreference::Resumed.is_paused());
    }
}
