//! Text search and tag filtering over flat record lists.
//!
//! All functions here are pure: they never reorder their input and return the
//! same output for the same arguments.

use crate::types::{Club, Vendor, VendorRequest};
use std::collections::HashSet;

/// Trim and lower-case. Used for tags and queries alike.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A normalized free-text query. Empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Records that expose a fixed set of fields to free-text search.
pub trait Searchable {
    /// The searchable fields in order. List fields contribute every element.
    fn search_fields(&self) -> Vec<&str>;

    /// Lower-cased, space-joined concatenation of [`Searchable::search_fields`].
    fn haystack(&self) -> String {
        self.search_fields().join(" ").to_lowercase()
    }
}

fn push_all<'a>(out: &mut Vec<&'a str>, list: &'a [String]) {
    out.extend(list.iter().map(String::as_str));
}

impl Searchable for Club {
    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str(), self.description.as_str()];
        push_all(&mut out, &self.interests);
        push_all(&mut out, &self.vibes);
        push_all(&mut out, &self.collab_needs);
        out
    }
}

impl Searchable for Vendor {
    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![self.name.as_str(), self.description.as_str()];
        push_all(&mut out, &self.services);
        push_all(&mut out, &self.vibes);
        push_all(&mut out, &self.tags);
        push_all(&mut out, &self.availability);
        out
    }
}

impl Searchable for VendorRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut out = vec![
            self.title.as_str(),
            self.club_name.as_str(),
            self.description.as_str(),
        ];
        push_all(&mut out, &self.needs);
        out
    }
}

/// Substring containment, not tokenized: "cric" matches "cricket".
pub fn text_matches<R: Searchable>(record: &R, query: &SearchQuery) -> bool {
    query.is_empty() || record.haystack().contains(query.as_str())
}

/// The normalized union of a club's interests, vibes and collab needs.
pub fn tag_bag(club: &Club) -> HashSet<String> {
    club.tag_lists()
        .map(|t| normalize(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// True when nothing is selected or any selected tag is in the club's tag bag.
pub fn tags_match(club: &Club, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let bag = tag_bag(club);
    selected.iter().any(|tag| bag.contains(&normalize(tag)))
}

pub fn filter_records<R: Searchable + Clone>(records: &[R], query: &SearchQuery) -> Vec<R> {
    records
        .iter()
        .filter(|r| text_matches(*r, query))
        .cloned()
        .collect()
}

/// Clubs passing both the tag filter and the text filter.
pub fn filter_clubs(clubs: &[Club], query: &SearchQuery, selected: &[String]) -> Vec<Club> {
    clubs
        .iter()
        .filter(|c| tags_match(c, selected) && text_matches(*c, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: i64, name: &str, interests: &[&str]) -> Club {
        Club {
            id,
            name: name.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Club::default()
        }
    }

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_query_matches_any_record() {
        let q = SearchQuery::new("   ");
        assert!(q.is_empty());
        assert!(text_matches(&Club::default(), &q));
        assert!(text_matches(&Vendor::default(), &q));
        assert!(text_matches(&VendorRequest::default(), &q));
    }

    #[test]
    fn cricket_scenario() {
        let c = club(1, "Cricket Club", &["sports", "cricket"]);
        assert!(text_matches(&c, &SearchQuery::new("cricket")));
        assert!(text_matches(&c, &SearchQuery::new("  CRIC ")));
        assert!(!text_matches(&c, &SearchQuery::new("football")));
    }

    #[test]
    fn query_reaches_list_fields() {
        let v = Vendor {
            name: "Print Hub".into(),
            availability: vec!["Weekends".into()],
            ..Vendor::default()
        };
        assert!(text_matches(&v, &SearchQuery::new("weekend")));

        let r = VendorRequest {
            title: "Kits".into(),
            club_name: "Cricket Club".into(),
            needs: vec!["Merch".into()],
            ..VendorRequest::default()
        };
        assert!(text_matches(&r, &SearchQuery::new("merch")));
        assert!(text_matches(&r, &SearchQuery::new("cricket")));
        assert!(!text_matches(&r, &SearchQuery::new("dj")));
    }

    #[test]
    fn selected_tags_use_or_semantics() {
        let selected = tags(&["women", "business"]);
        assert!(tags_match(&club(1, "A", &["business"]), &selected));
        assert!(!tags_match(&club(2, "B", &["sports"]), &selected));
    }

    #[test]
    fn tag_comparison_is_normalized_on_both_sides() {
        let c = Club {
            vibes: vec!["  Chill ".into()],
            collab_needs: vec!["Venues".into()],
            ..Club::default()
        };
        assert!(tags_match(&c, &tags(&["CHILL"])));
        assert!(tags_match(&c, &tags(&[" venues  "])));
        assert!(!tags_match(&c, &tags(&["chilly"])));
    }

    #[test]
    fn no_selected_tags_matches_everything() {
        assert!(tags_match(&Club::default(), &[]));
    }

    #[test]
    fn combined_filter_requires_both_axes_and_keeps_order() {
        let clubs = vec![
            club(3, "Cricket Club", &["sports", "cricket"]),
            club(1, "Women in Business", &["business", "women"]),
            club(2, "Football", &["sports"]),
        ];
        let all = filter_clubs(&clubs, &SearchQuery::default(), &[]);
        assert_eq!(all, clubs);

        let sports = filter_clubs(&clubs, &SearchQuery::default(), &tags(&["Sports"]));
        assert_eq!(sports.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 2]);

        let cricket = filter_clubs(&clubs, &SearchQuery::new("cricket"), &tags(&["sports"]));
        assert_eq!(cricket.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3]);

        let none = filter_clubs(&clubs, &SearchQuery::new("cricket"), &tags(&["women"]));
        assert!(none.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let clubs = vec![
            club(1, "Cricket Club", &["sports", "cricket"]),
            club(2, "Chess", &["games"]),
            club(3, "Sports Science", &["sports"]),
        ];
        let q = SearchQuery::new("sport");
        let selected = tags(&["sports", "games"]);
        let once = filter_clubs(&clubs, &q, &selected);
        let twice = filter_clubs(&once, &q, &selected);
        assert_eq!(once, twice);

        let once = filter_records(&clubs, &q);
        assert_eq!(filter_records(&once, &q), once);
    }
}
