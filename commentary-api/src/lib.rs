use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{ArticleId, CommentId, CommentRecord, NewComment, MAX_AUTHOR_LEN};

mod error;
pub use error::Error;

mod sort;
pub use sort::SortKey;
