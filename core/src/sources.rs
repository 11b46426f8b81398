/// A list of predatory journals or publishers published on the web.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredatorySource {
    pub url: &'static str,
    /// CSS selector for the elements that each describe one entity.
    pub item_selector: &'static str,
    /// CSS selector, relative to an item, for the entity's link.
    pub link_selector: &'static str,
    /// Bibliography fields this list should be compared against.
    pub fields: &'static [&'static str],
}

const JOURNAL_FIELDS: &[&str] = &["journal", "journaltitle", "booktitle"];
const PUBLISHER_FIELDS: &[&str] = &["publisher"];

const PLAIN_LIST_ITEM: &str = "li:not([id]):not([class])";
const PLAIN_TABLE_CELL: &str = "td:not([id]):not([class])";
const LINK: &str = "a[href]";

pub const SOURCES: &[PredatorySource] = &[
    PredatorySource {
        url: "https://predatoryjournals.com/journals/",
        item_selector: PLAIN_LIST_ITEM,
        link_selector: LINK,
        fields: JOURNAL_FIELDS,
    },
    PredatorySource {
        url: "https://predatoryjournals.com/hijacked/",
        item_selector: PLAIN_TABLE_CELL,
        link_selector: LINK,
        fields: JOURNAL_FIELDS,
    },
    PredatorySource {
        url: "https://predatoryjournals.com/publishers/",
        item_selector: PLAIN_LIST_ITEM,
        link_selector: LINK,
        fields: PUBLISHER_FIELDS,
    },
    PredatorySource {
        url: "https://beallslist.net/",
        item_selector: PLAIN_LIST_ITEM,
        link_selector: LINK,
        fields: PUBLISHER_FIELDS,
    },
    PredatorySource {
        url: "https://beallslist.net/standalone-journals/",
        item_selector: PLAIN_LIST_ITEM,
        link_selector: LINK,
        fields: JOURNAL_FIELDS,
    },
];

impl PredatorySource {
    pub fn applies_to(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.eq_ignore_ascii_case(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_lists_skip_publisher_field() {
        let journals = SOURCES.iter().find(|s| s.url.ends_with("/journals/")).unwrap();
        assert!(journals.applies_to("Journal"));
        assert!(journals.applies_to("booktitle"));
        assert!(!journals.applies_to("publisher"));
    }

    #[test]
    fn urls_are_unique() {
        for (i, a) in SOURCES.iter().enumerate() {
            assert!(SOURCES[i + 1..].iter().all(|b| b.url != a.url), "duplicate {}", a.url);
        }
    }
}
