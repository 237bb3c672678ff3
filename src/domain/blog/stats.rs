//! Aggregation engine over collections of blog posts.
//!
//! All operations are pure functions of the input slice, including its
//! order: ties are broken by scan order, never by sorting. The reporting
//! layer calls these with a freshly fetched post collection; nothing here
//! mutates, persists, or performs I/O.
//!
//! # Tie-breaking
//!
//! - `most_liked` keeps the first post reaching the maximum like count,
//!   scanning left to right.
//! - `most_prolific_author` and `most_liked_author` keep the author whose
//!   group was created first among those sharing the maximum. Grouping
//!   therefore uses an insertion-ordered map (`AuthorGroups`), never a
//!   bare hash map whose iteration order is undefined.

use std::collections::HashMap;

use super::{Post, StatsError};

/// An author together with how many posts they wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorPostCount {
    pub author: String,
    pub posts: u64,
}

/// An author together with the sum of likes over their posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikeTotal {
    pub author: String,
    pub likes: u64,
}

/// Sum of `likes` over all posts. Empty input sums to 0.
pub fn total_likes(posts: &[Post]) -> Result<u64, StatsError> {
    let mut total: u64 = 0;
    for (index, post) in posts.iter().enumerate() {
        total += likes_of(post, index)?;
    }
    Ok(total)
}

/// The first post (in input order) with the maximum like count.
/// Empty input yields `None`.
pub fn most_liked(posts: &[Post]) -> Result<Option<&Post>, StatsError> {
    let mut best: Option<(&Post, u64)> = None;
    for (index, post) in posts.iter().enumerate() {
        let likes = likes_of(post, index)?;
        match best {
            // Strictly greater replaces, so the first maximum wins.
            Some((_, max)) if likes <= max => {}
            _ => best = Some((post, likes)),
        }
    }
    Ok(best.map(|(post, _)| post))
}

/// The author with the most posts. Ties go to the author whose group
/// was created first. Empty input yields `None`.
pub fn most_prolific_author(posts: &[Post]) -> Result<Option<AuthorPostCount>, StatsError> {
    let mut groups = AuthorGroups::new();
    for (index, post) in posts.iter().enumerate() {
        groups.add(author_of(post, index)?, 1);
    }
    Ok(groups
        .into_max()
        .map(|(author, posts)| AuthorPostCount { author, posts }))
}

/// The author with the highest like total. A zero like count is a valid
/// sum: if posts exist but nobody was liked, the first-seen author wins
/// with total 0. Empty input yields `None`.
pub fn most_liked_author(posts: &[Post]) -> Result<Option<AuthorLikeTotal>, StatsError> {
    let mut groups = AuthorGroups::new();
    for (index, post) in posts.iter().enumerate() {
        let author = author_of(post, index)?;
        let likes = likes_of(post, index)?;
        groups.add(author, likes);
    }
    Ok(groups
        .into_max()
        .map(|(author, likes)| AuthorLikeTotal { author, likes }))
}

fn likes_of(post: &Post, index: usize) -> Result<u64, StatsError> {
    post.likes
        .ok_or_else(|| StatsError::invalid_record(index, "likes"))
}

fn author_of(post: &Post, index: usize) -> Result<&str, StatsError> {
    post.author
        .as_deref()
        .ok_or_else(|| StatsError::invalid_record(index, "author"))
}

/// Insertion-ordered map from author to accumulator.
///
/// A `Vec` of groups keeps creation order; the index map makes lookups
/// O(1). Selection walks the `Vec`, so two authors with equal totals
/// resolve to whichever group came into existence first.
struct AuthorGroups {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl AuthorGroups {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, author: &str, amount: u64) {
        match self.index.get(author) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(author.to_string(), self.entries.len());
                self.entries.push((author.to_string(), amount));
            }
        }
    }

    /// The first group (in creation order) holding the maximum value.
    fn into_max(self) -> Option<(String, u64)> {
        let mut best: Option<(String, u64)> = None;
        for (author, value) in self.entries {
            match best {
                Some((_, max)) if value <= max => {}
                _ => best = Some((author, value)),
            }
        }
        best
    }
}
