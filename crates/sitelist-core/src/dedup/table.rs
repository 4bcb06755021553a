//! Insertion-ordered canonical key → representative map.

use std::collections::HashMap;

use crate::canonical::CanonicalKey;

/// One representative per key; iteration follows first-seen key order.
#[derive(Debug, Default)]
pub struct DedupTable {
    index: HashMap<CanonicalKey, usize>,
    slots: Vec<String>,
}

/// Result of offering an entry to the table.
#[derive(Debug, PartialEq, Eq)]
pub enum Offer<'a> {
    /// First entry for its key.
    Inserted,
    /// Key was already present; `current` is the live representative.
    Occupied { current: &'a mut String },
}

impl DedupTable {
    /// Stores `entry` under `key` if the key is new; otherwise hands back the
    /// existing representative for the caller to keep or replace.
    pub fn offer(&mut self, key: CanonicalKey, entry: &str) -> Offer<'_> {
        if let Some(&slot) = self.index.get(&key) {
            return Offer::Occupied {
                current: &mut self.slots[slot],
            };
        }
        self.index.insert(key, self.slots.len());
        self.slots.push(entry.to_string());
        Offer::Inserted
    }

    /// Representatives in first-seen key order.
    pub fn into_representatives(self) -> Vec<String> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::normalize;

    #[test]
    fn keeps_first_seen_order_across_replacements() {
        let mut table = DedupTable::default();
        assert_eq!(table.offer(normalize("b.org"), "b.org"), Offer::Inserted);
        assert_eq!(table.offer(normalize("a.org"), "a.org"), Offer::Inserted);
        if let Offer::Occupied { current } = table.offer(normalize("x.b.org"), "x.b.org") {
            *current = "replaced.b.org".to_string();
        } else {
            panic!("expected occupied slot");
        }
        assert_eq!(table.into_representatives(), vec!["replaced.b.org", "a.org"]);
    }

    #[test]
    fn occupied_does_not_grow_table() {
        let mut table = DedupTable::default();
        table.offer(normalize("foo.com"), "foo.com");
        assert!(matches!(
            table.offer(normalize("www.foo.com"), "www.foo.com"),
            Offer::Occupied { current } if *current == "foo.com"
        ));
        assert_eq!(table.into_representatives(), vec!["foo.com"]);
    }
}
