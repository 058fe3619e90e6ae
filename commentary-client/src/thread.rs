use crate::{
    api::{ArticleId, CommentRecord, Error, SortKey, Time},
    Fields, SortKeyExt, StoreCommand,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LoadState {
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThreadEvent {
    /// The view started displaying this article
    Mount(ArticleId),

    /// The initial fetch for this article resolved
    Loaded(ArticleId),
}

/// What a thread view should display
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rendered {
    Loading,
    Ready(Vec<CommentRecord>),
}

/// Load progress of the article a thread view currently displays
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThreadState {
    article: ArticleId,
    load: LoadState,
}

impl ThreadState {
    pub fn mount(article: ArticleId) -> ThreadState {
        ThreadState {
            article,
            load: LoadState::Loading,
        }
    }

    pub fn article(&self) -> ArticleId {
        self.article
    }

    /// This state if it is about `article`, otherwise a fresh one still loading `article`
    pub fn displaying(&self, article: ArticleId) -> ThreadState {
        match article == self.article {
            true => self.clone(),
            false => ThreadState::mount(article),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn handle(&self, event: ThreadEvent) -> ThreadState {
        match event {
            ThreadEvent::Mount(article) => ThreadState::mount(article),
            ThreadEvent::Loaded(article) if article == self.article => ThreadState {
                article,
                load: LoadState::Ready,
            },
            ThreadEvent::Loaded(article) => {
                tracing::debug!(
                    ?article,
                    current = ?self.article,
                    "dropping load completion for an article no longer displayed"
                );
                self.clone()
            }
        }
    }

    /// The command adding what was typed into `fields`, if the thread accepts submissions
    pub fn submission(&self, fields: &Fields, date: Time) -> Result<StoreCommand, Error> {
        if self.is_loading() {
            return Err(Error::StillLoading(self.article));
        }
        Ok(StoreCommand::Add {
            article: self.article,
            comment: fields.new_comment(date)?,
        })
    }

    pub fn render(&self, comments: &[CommentRecord], key: SortKey) -> Rendered {
        match self.load {
            LoadState::Loading => Rendered::Loading,
            LoadState::Ready => Rendered::Ready(key.sorted(comments)),
        }
    }
}
