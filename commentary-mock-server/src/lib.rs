use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use anyhow::anyhow;
use async_trait::async_trait;
use commentary_client::{
    api::{ArticleId, CommentRecord},
    CommentSource,
};
use tokio::sync::oneshot;

/// In-memory comment source for tests
pub struct MockSource {
    articles: HashMap<ArticleId, Vec<CommentRecord>>,
    failing: HashSet<ArticleId>,
    gates: RefCell<HashMap<ArticleId, oneshot::Receiver<()>>>,
    fetches: RefCell<Vec<ArticleId>>,
    pending: Cell<usize>,
}

impl MockSource {
    pub fn new() -> MockSource {
        MockSource {
            articles: HashMap::new(),
            failing: HashSet::new(),
            gates: RefCell::new(HashMap::new()),
            fetches: RefCell::new(Vec::new()),
            pending: Cell::new(0),
        }
    }

    pub fn with_comments(mut self, article: ArticleId, comments: Vec<CommentRecord>) -> MockSource {
        self.articles.insert(article, comments);
        self
    }

    /// Make every fetch of `article` fail
    pub fn fail(&mut self, article: ArticleId) {
        self.failing.insert(article);
    }

    /// Hold the next fetch of `article` until the returned sender fires.
    ///
    /// Dropping the sender leaves that fetch pending forever.
    pub fn gate(&self, article: ArticleId) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.gates.borrow_mut().insert(article, receiver);
        sender
    }

    /// Articles fetched so far, in call order
    pub fn test_fetches(&self) -> Vec<ArticleId> {
        self.fetches.borrow().clone()
    }

    /// Number of fetches currently waiting on a gate
    pub fn test_num_pending(&self) -> usize {
        self.pending.get()
    }
}

impl Default for MockSource {
    fn default() -> MockSource {
        MockSource::new()
    }
}

#[async_trait(?Send)]
impl CommentSource for MockSource {
    async fn fetch_comments(&self, article: ArticleId) -> anyhow::Result<Vec<CommentRecord>> {
        self.fetches.borrow_mut().push(article);
        let gate = self.gates.borrow_mut().remove(&article);
        if let Some(gate) = gate {
            self.pending.set(self.pending.get() + 1);
            let released = gate.await.is_ok();
            self.pending.set(self.pending.get() - 1);
            if !released {
                tracing::debug!(?article, "gate dropped, fetch stays pending");
                futures::future::pending::<()>().await;
            }
        }
        if self.failing.contains(&article) {
            return Err(anyhow!("mock source refuses article {:?}", article));
        }
        Ok(self.articles.get(&article).cloned().unwrap_or_default())
    }
}
