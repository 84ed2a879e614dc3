//! Keyed access into the static configuration tables.
//!
//! Every table in this crate is a `const` slice of `(key, value)` pairs. Lookups
//! never fail: an absent key resolves to the caller-supplied default.

pub type Table<V> = [(&'static str, V)];

pub fn lookup<'a, V>(table: &'a Table<V>, key: &str, default: &'a V) -> &'a V {
    find(table, key).unwrap_or(default)
}

pub fn find<'a, V>(table: &'a Table<V>, key: &str) -> Option<&'a V> {
    let key = key.trim();
    table.iter().find(|(candidate, _)| candidate.eq_ignore_ascii_case(key)).map(|(_, value)| value)
}

pub fn contains<V>(table: &Table<V>, key: &str) -> bool {
    find(table, key).is_some()
}

#[cfg(test)]
mod tests {
    use super::{contains, lookup, Table};

    const TIERS: &Table<u8> = &[("never", 1), ("monthly", 2), ("weekly", 3)];

    #[test]
    fn lookup_returns_row_for_known_key() {
        assert_eq!(*lookup(TIERS, "weekly", &1), 3);
    }

    #[test]
    fn lookup_falls_back_to_default_for_unknown_key() {
        assert_eq!(*lookup(TIERS, "hourly", &1), 1);
        assert_eq!(*lookup(TIERS, "", &7), 7);
    }

    #[test]
    fn keys_match_after_trimming_and_case_folding() {
        assert_eq!(*lookup(TIERS, "  Monthly ", &1), 2);
        assert!(contains(TIERS, "NEVER"));
        assert!(!contains(TIERS, "daily"));
    }
}
