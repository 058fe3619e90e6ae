use std::collections::HashMap;

use crate::{
    api::{ArticleId, CommentId, CommentRecord, Error, NewComment},
    CommentList,
};

/// Mutations a thread view can request from the store
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreCommand {
    LoadInitial {
        article: ArticleId,
        comments: Vec<CommentRecord>,
    },
    Add {
        article: ArticleId,
        comment: NewComment,
    },
    Delete {
        article: ArticleId,
        id: CommentId,
    },
}

/// Comment lists of every article the application has seen
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentStore {
    articles: HashMap<ArticleId, CommentList>,
}

impl CommentStore {
    pub fn new() -> CommentStore {
        CommentStore::default()
    }

    /// Current comments of `article` in arrival order, empty if nothing was loaded yet
    pub fn comments(&self, article: ArticleId) -> &[CommentRecord] {
        self.articles
            .get(&article)
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces whatever the store held for `article`
    pub fn load_initial(&mut self, article: ArticleId, comments: Vec<CommentRecord>) {
        tracing::debug!(?article, num_comments = comments.len(), "loading initial comments");
        self.articles.insert(article, CommentList::from(comments));
    }

    pub fn add(&mut self, article: ArticleId, comment: NewComment) -> Result<CommentId, Error> {
        let id = self
            .articles
            .entry(article)
            .or_default()
            .push(article, comment)?;
        tracing::debug!(?article, ?id, "added comment");
        Ok(id)
    }

    pub fn delete(&mut self, article: ArticleId, id: CommentId) -> Result<(), Error> {
        self.articles
            .get_mut(&article)
            .ok_or(Error::UnknownComment(id))?
            .delete(id)?;
        tracing::debug!(?article, ?id, "deleted comment");
        Ok(())
    }

    pub fn apply(&mut self, cmd: StoreCommand) {
        let res = match cmd {
            StoreCommand::LoadInitial { article, comments } => {
                self.load_initial(article, comments);
                Ok(())
            }
            StoreCommand::Add { article, comment } => self.add(article, comment).map(|_| ()),
            StoreCommand::Delete { article, id } => self.delete(article, id),
        };
        if let Err(err) = res {
            tracing::warn!("store command had no effect: {err}");
        }
    }
}
