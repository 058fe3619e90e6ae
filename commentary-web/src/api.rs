use std::rc::Rc;

use anyhow::Context;
use async_trait::async_trait;
use commentary_client::{
    api::{ArticleId, CommentRecord},
    CommentSource,
};

/// Comment source reached over HTTP at `{host}/api/articles/{id}/comments`
pub struct HttpSource {
    host: String,
}

impl HttpSource {
    pub fn new(host: String) -> HttpSource {
        HttpSource { host }
    }
}

#[async_trait(?Send)]
impl CommentSource for HttpSource {
    async fn fetch_comments(&self, article: ArticleId) -> anyhow::Result<Vec<CommentRecord>> {
        let url = format!("{}/api/articles/{}/comments", self.host, article.0);
        tracing::debug!(%url, "fetching comments");
        crate::CLIENT
            .get(&url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("non-success response from {url}"))?
            .json()
            .await
            .with_context(|| format!("parsing comments received from {url}"))
    }
}

/// Shared handle on a comment source, usable as a component property
#[derive(Clone)]
pub struct SourceHandle(pub Rc<dyn CommentSource>);

impl SourceHandle {
    pub fn http(host: String) -> SourceHandle {
        SourceHandle(Rc::new(HttpSource::new(host)))
    }
}

impl PartialEq for SourceHandle {
    fn eq(&self, other: &SourceHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
