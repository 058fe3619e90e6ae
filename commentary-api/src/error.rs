use crate::{ArticleId, CommentId};

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Author name is required")]
    EmptyAuthor,

    #[error("Author name is {0} characters long, which is over the limit")]
    AuthorTooLong(usize),

    #[error("Comment text is required")]
    EmptyText,

    #[error("Unknown sort key {0:?}")]
    UnknownSortKey(String),

    #[error("No comment with id {0:?}")]
    UnknownComment(CommentId),

    #[error("Comments of article {0:?} are still loading")]
    StillLoading(ArticleId),

    #[error("No comment id left after {0:?}")]
    IdsExhausted(CommentId),
}
