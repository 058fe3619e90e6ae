use std::cmp::Ordering;

use crate::api::{CommentRecord, SortKey};

pub fn date_comparator(a: &CommentRecord, b: &CommentRecord) -> Ordering {
    a.date.cmp(&b.date)
}

pub fn num_comparator(a: u64, b: u64) -> Ordering {
    a.cmp(&b)
}

pub trait SortKeyExt {
    fn compare(&self, a: &CommentRecord, b: &CommentRecord) -> Ordering;

    /// Stable: comments with equal keys keep their relative order
    fn sort(&self, comments: &mut [CommentRecord]);

    fn sorted(&self, comments: &[CommentRecord]) -> Vec<CommentRecord>;
}

impl SortKeyExt for SortKey {
    fn compare(&self, a: &CommentRecord, b: &CommentRecord) -> Ordering {
        match self {
            SortKey::Date => date_comparator(a, b),
            SortKey::Likes => num_comparator(a.current_likes, b.current_likes),
        }
    }

    fn sort(&self, comments: &mut [CommentRecord]) {
        comments.sort_by(|a, b| self.compare(a, b))
    }

    fn sorted(&self, comments: &[CommentRecord]) -> Vec<CommentRecord> {
        let mut res = comments.to_vec();
        self.sort(&mut res);
        res
    }
}
