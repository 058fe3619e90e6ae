use std::{cell::Cell, rc::Rc};

use anyhow::Context;
use async_trait::async_trait;

use crate::api::{ArticleId, CommentRecord};

/// Provider of an article's initial comment list
#[async_trait(?Send)]
pub trait CommentSource {
    async fn fetch_comments(&self, article: ArticleId) -> anyhow::Result<Vec<CommentRecord>>;
}

/// Shared between an initial fetch and the view that started it, so the view
/// can disown the fetch once it moves to another article or a newer fetch
#[derive(Clone, Debug, Default)]
pub struct LoadTicket {
    cancelled: Rc<Cell<bool>>,
}

impl LoadTicket {
    pub fn new() -> LoadTicket {
        LoadTicket::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Fetches the initial comments of `article`.
///
/// Returns `None` if `ticket` got cancelled while the fetch was in flight,
/// in which case the result must not reach the store.
pub async fn fetch_initial<S>(
    source: &S,
    article: ArticleId,
    ticket: &LoadTicket,
) -> anyhow::Result<Option<Vec<CommentRecord>>>
where
    S: CommentSource + ?Sized,
{
    let comments = source
        .fetch_comments(article)
        .await
        .with_context(|| format!("fetching comments for article {:?}", article))?;
    if ticket.is_cancelled() {
        tracing::debug!(
            ?article,
            num_comments = comments.len(),
            "dropping comments fetched for a disowned load"
        );
        return Ok(None);
    }
    Ok(Some(comments))
}
