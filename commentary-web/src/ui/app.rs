use std::rc::Rc;

use commentary_client::{api::ArticleId, CommentStore, StoreCommand};
use yew::prelude::*;

use crate::{
    api::SourceHandle,
    config::{Config, Variant},
    ui,
};

pub enum AppMsg {
    Store(StoreCommand),

    SetHost(String),
    SetArticle(ArticleId),
    SetVariant(Variant),

    CommentAdded,
    CommentDeleted,
}

pub struct App {
    config: Config,
    source: SourceHandle,
    store: Rc<CommentStore>,
    comments_added: usize,
    comments_deleted: usize,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = Config::load();
        tracing::info!(?config, "starting comment thread app");
        App {
            source: SourceHandle::http(config.host.clone()),
            config,
            store: Rc::new(CommentStore::new()),
            comments_added: 0,
            comments_deleted: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Store(cmd) => {
                tracing::trace!(?cmd, "applying store command");
                Rc::make_mut(&mut self.store).apply(cmd);
            }
            AppMsg::SetHost(host) => {
                self.source = SourceHandle::http(host.clone());
                self.config.host = host;
                self.config.save();
            }
            AppMsg::SetArticle(article) => {
                self.config.article = article;
                self.config.save();
            }
            AppMsg::SetVariant(variant) => {
                self.config.variant = variant;
                self.config.save();
            }
            AppMsg::CommentAdded => self.comments_added += 1,
            AppMsg::CommentDeleted => self.comments_deleted += 1,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let article = self.config.article;
        let thread = match self.config.variant {
            Variant::Store => html! {
                <ui::CommentThreadView
                    { article }
                    source={ self.source.clone() }
                    comments={ Rc::new(self.store.comments(article).to_vec()) }
                    on_command={ ctx.link().callback(AppMsg::Store) }
                />
            },
            Variant::Legacy => html! {
                <>
                    <div class="session-counters text-muted mb-2">
                        { format!(
                            "{} added, {} deleted this session",
                            self.comments_added, self.comments_deleted,
                        ) }
                    </div>
                    <ui::LegacyCommentThread
                        { article }
                        source={ self.source.clone() }
                        on_comment_added={ ctx.link().callback(|_| AppMsg::CommentAdded) }
                        on_comment_deleted={ ctx.link().callback(|_| AppMsg::CommentDeleted) }
                    />
                </>
            },
        };
        html! {
            <div class="container py-3">
                <ui::SettingsBar
                    config={ self.config.clone() }
                    on_host_change={ ctx.link().callback(AppMsg::SetHost) }
                    on_article_change={ ctx.link().callback(AppMsg::SetArticle) }
                    on_variant_change={ ctx.link().callback(AppMsg::SetVariant) }
                />
                <h1 class="h4 my-3">{ format!("Comments on article {}", article.0) }</h1>
                { thread }
            </div>
        }
    }
}
