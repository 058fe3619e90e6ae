use crate::api::{ArticleId, CommentId, CommentRecord, Error, NewComment};

/// One article's comments, in arrival order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentList {
    comments: Vec<CommentRecord>,
}

impl From<Vec<CommentRecord>> for CommentList {
    fn from(comments: Vec<CommentRecord>) -> CommentList {
        CommentList { comments }
    }
}

impl CommentList {
    pub fn new() -> CommentList {
        CommentList::default()
    }

    pub fn as_slice(&self) -> &[CommentRecord] {
        &self.comments
    }

    /// One more than the highest id in the list, or 1 for an empty list.
    ///
    /// Not unique across concurrent writers: another source may hand out the
    /// same id, and a deleted highest id gets reused.
    pub fn next_id(&self) -> Result<CommentId, Error> {
        let max = self.comments.iter().map(|c| c.id.0).max().unwrap_or(0);
        max.checked_add(1)
            .map(CommentId)
            .ok_or(Error::IdsExhausted(CommentId(max)))
    }

    /// Appends a new comment, returning the id it got
    pub fn push(&mut self, article_id: ArticleId, comment: NewComment) -> Result<CommentId, Error> {
        let id = self.next_id()?;
        self.comments.push(comment.into_record(id, article_id));
        Ok(id)
    }

    /// Removes every comment with this id
    pub fn delete(&mut self, id: CommentId) -> Result<(), Error> {
        let len_before = self.comments.len();
        self.comments.retain(|c| c.id != id);
        if len_before == self.comments.len() {
            return Err(Error::UnknownComment(id));
        }
        Ok(())
    }

    /// Adds one like to the comment with this id
    pub fn like(&mut self, id: CommentId) -> Result<(), Error> {
        let mut found = false;
        for c in self.comments.iter_mut().filter(|c| c.id == id) {
            c.current_likes = c.current_likes.saturating_add(1);
            found = true;
        }
        match found {
            true => Ok(()),
            false => Err(Error::UnknownComment(id)),
        }
    }
}
