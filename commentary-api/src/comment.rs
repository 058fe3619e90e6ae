use crate::{Error, Time};

/// Maximum number of characters accepted in a comment's author name
pub const MAX_AUTHOR_LEN: usize = 50;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Unique among the comments of the same article
    pub id: CommentId,
    pub article_id: ArticleId,

    pub author: String,
    pub text: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: Time,

    #[serde(default)]
    pub current_likes: u64,
}

/// A comment as typed in by the user, before it got an id
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewComment {
    pub author: String,
    pub text: String,
    pub date: Time,
}

impl NewComment {
    pub fn validate(&self) -> Result<(), Error> {
        if self.author.is_empty() {
            return Err(Error::EmptyAuthor);
        }
        let author_len = self.author.chars().count();
        if author_len > MAX_AUTHOR_LEN {
            return Err(Error::AuthorTooLong(author_len));
        }
        if self.text.is_empty() {
            return Err(Error::EmptyText);
        }
        Ok(())
    }

    pub fn into_record(self, id: CommentId, article_id: ArticleId) -> CommentRecord {
        CommentRecord {
            id,
            article_id,
            author: self.author,
            text: self.text,
            date: self.date,
            current_likes: 0,
        }
    }
}
