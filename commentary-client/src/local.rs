use crate::{
    api::{ArticleId, CommentId, CommentRecord, Error, NewComment, SortKey},
    CommentList, LoadTicket, Rendered, ThreadEvent, ThreadState,
};

/// Callback a locally-stored thread owes its parent after an operation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThreadNotice {
    CommentAdded,
    CommentDeleted,
}

/// Thread that keeps its comments to itself instead of going through the store.
///
/// Ids of new comments are generated locally, and comments can be liked.
#[derive(Clone, Debug)]
pub struct LocalThread {
    thread: ThreadState,
    comments: CommentList,
    ticket: LoadTicket,
}

impl LocalThread {
    pub fn mount(article: ArticleId) -> LocalThread {
        LocalThread {
            thread: ThreadState::mount(article),
            comments: CommentList::new(),
            ticket: LoadTicket::new(),
        }
    }

    pub fn article(&self) -> ArticleId {
        self.thread.article()
    }

    pub fn is_loading(&self) -> bool {
        self.thread.is_loading()
    }

    /// Ticket the initial fetch of the displayed article has to carry
    pub fn ticket(&self) -> LoadTicket {
        self.ticket.clone()
    }

    /// Starts displaying `article`, disowning any fetch still in flight
    pub fn remount(&mut self, article: ArticleId) {
        self.ticket.cancel();
        *self = LocalThread::mount(article);
    }

    /// Disowns the fetch still in flight, if any
    pub fn unmount(&self) {
        self.ticket.cancel();
    }

    /// Installs the result of the initial fetch, returning whether anything changed
    pub fn loaded(&mut self, article: ArticleId, comments: Vec<CommentRecord>) -> bool {
        let thread = self.thread.handle(ThreadEvent::Loaded(article));
        if thread == self.thread {
            // stale or duplicate completion
            return false;
        }
        self.thread = thread;
        self.comments = CommentList::from(comments);
        true
    }

    pub fn submit(&mut self, comment: NewComment) -> Result<ThreadNotice, Error> {
        if self.thread.is_loading() {
            return Err(Error::StillLoading(self.article()));
        }
        comment.validate()?;
        let id = self.comments.push(self.article(), comment)?;
        tracing::debug!(article = ?self.article(), ?id, "added comment");
        Ok(ThreadNotice::CommentAdded)
    }

    /// The parent hears about every deletion request, even for ids already gone
    pub fn delete(&mut self, id: CommentId) -> ThreadNotice {
        if let Err(err) = self.comments.delete(id) {
            tracing::warn!(article = ?self.article(), "deleting comment: {err}");
        }
        ThreadNotice::CommentDeleted
    }

    pub fn like(&mut self, id: CommentId) -> Result<(), Error> {
        self.comments.like(id)
    }

    pub fn render(&self, key: SortKey) -> Rendered {
        self.thread.render(self.comments.as_slice(), key)
    }
}
