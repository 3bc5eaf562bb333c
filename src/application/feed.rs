//! List-view filtering over an already-loaded collection.
//!
//! This is presentation-side selection, deliberately kept out of the
//! store: the store hands over the whole collection and the view narrows
//! it. Search is a case-insensitive substring match on title or excerpt;
//! tag selection is exact membership.

use std::collections::BTreeSet;

use crate::domain::posts::Post;

/// Filter criteria for the list view.
#[derive(Debug, Clone, Default)]
pub struct PostQueryFilter {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl PostQueryFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none()
    }
}

/// Posts matching the filter, in the collection's own order.
pub fn filter_posts<'a>(posts: &'a [Post], filter: &PostQueryFilter) -> Vec<&'a Post> {
    let needle = filter.search.as_deref().map(str::to_lowercase);

    posts
        .iter()
        .filter(|post| {
            let matches_search = needle.as_deref().is_none_or(|needle| {
                post.title.to_lowercase().contains(needle)
                    || post.excerpt.to_lowercase().contains(needle)
            });
            let matches_tag = filter
                .tag
                .as_deref()
                .is_none_or(|tag| post.tags.iter().any(|candidate| candidate == tag));
            matches_search && matches_tag
        })
        .collect()
}

/// Ordered unique tag set across the collection (the filter chips).
pub fn known_tags(posts: &[Post]) -> BTreeSet<&str> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::posts::default_posts;

    #[test]
    fn empty_filter_selects_everything_in_order() {
        let posts = default_posts();
        let selected = filter_posts(&posts, &PostQueryFilter::default());
        assert_eq!(selected.len(), posts.len());
        assert_eq!(selected[0].id, posts[0].id);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_excerpt() {
        let posts = default_posts();

        let by_title = filter_posts(
            &posts,
            &PostQueryFilter {
                search: Some("ZERO-DAY".to_string()),
                tag: None,
            },
        );
        assert!(
            by_title
                .iter()
                .any(|post| post.slug == "understanding-zero-day-vulnerabilities")
        );

        let by_excerpt = filter_posts(
            &posts,
            &PostQueryFilter {
                search: Some("ethical hacking".to_string()),
                tag: None,
            },
        );
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].slug, "introduction-to-penetration-testing");
    }

    #[test]
    fn tag_selection_is_exact_membership() {
        let posts = default_posts();

        let security = filter_posts(
            &posts,
            &PostQueryFilter {
                search: None,
                tag: Some("security".to_string()),
            },
        );
        assert_eq!(security.len(), 2);

        // Substrings of a tag must not match.
        let partial = filter_posts(
            &posts,
            &PostQueryFilter {
                search: None,
                tag: Some("secur".to_string()),
            },
        );
        assert!(partial.is_empty());
    }

    #[test]
    fn search_and_tag_compose_conjunctively() {
        let posts = default_posts();
        let selected = filter_posts(
            &posts,
            &PostQueryFilter {
                search: Some("ransomware".to_string()),
                tag: Some("backup".to_string()),
            },
        );
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].slug, "ransomware-defense-strategies");
    }

    #[test]
    fn known_tags_dedupe_across_posts() {
        let posts = default_posts();
        let tags = known_tags(&posts);
        assert!(tags.contains("security"));
        assert!(tags.contains("zero-day"));
        assert!(tags.len() >= 10);
    }
}
