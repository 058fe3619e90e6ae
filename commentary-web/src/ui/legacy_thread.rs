use commentary_client::{
    api::{ArticleId, CommentId, CommentRecord, NewComment, SortKey, MAX_AUTHOR_LEN},
    fetch_initial, LocalThread, Rendered, ThreadNotice,
};
use yew::prelude::*;

use crate::{api::SourceHandle, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct LegacyThreadProps {
    pub article: ArticleId,
    pub source: SourceHandle,
    pub on_comment_added: Callback<()>,
    pub on_comment_deleted: Callback<()>,
}

pub enum LegacyMsg {
    Loaded(ArticleId, Vec<CommentRecord>),
    SetSortKey(SortKey),
    Submit,
    Delete(CommentId),
    Like(CommentId),
}

/// Comment thread keeping its comments to itself, with likes and id generation
pub struct LegacyCommentThread {
    thread: LocalThread,
    sort_key: SortKey,
    form_ref: NodeRef,
    name_ref: NodeRef,
    comment_ref: NodeRef,
}

impl LegacyCommentThread {
    fn fetch(&self, ctx: &Context<Self>) {
        let article = self.thread.article();
        let ticket = self.thread.ticket();
        let source = ctx.props().source.clone();
        ctx.link().send_future_batch(async move {
            match fetch_initial(&*source.0, article, &ticket).await {
                Ok(Some(comments)) => vec![LegacyMsg::Loaded(article, comments)],
                Ok(None) => Vec::new(),
                Err(err) => {
                    tracing::error!(?article, "failed loading comments: {err:#}");
                    Vec::new()
                }
            }
        });
    }

    /// Reads the form fields as they are at submission time
    fn read_form(&self) -> Option<NewComment> {
        let name = self.name_ref.cast::<web_sys::HtmlInputElement>();
        let comment = self.comment_ref.cast::<web_sys::HtmlTextAreaElement>();
        match (name, comment) {
            (Some(name), Some(comment)) => Some(NewComment {
                author: name.value(),
                text: comment.value(),
                date: chrono::Utc::now(),
            }),
            _ => {
                tracing::error!("comment form fields are not mounted");
                None
            }
        }
    }

    fn notify(ctx: &Context<Self>, notice: ThreadNotice) {
        match notice {
            ThreadNotice::CommentAdded => ctx.props().on_comment_added.emit(()),
            ThreadNotice::CommentDeleted => ctx.props().on_comment_deleted.emit(()),
        }
    }
}

impl Component for LegacyCommentThread {
    type Message = LegacyMsg;
    type Properties = LegacyThreadProps;

    fn create(ctx: &Context<Self>) -> Self {
        let this = LegacyCommentThread {
            thread: LocalThread::mount(ctx.props().article),
            sort_key: SortKey::default(),
            form_ref: NodeRef::default(),
            name_ref: NodeRef::default(),
            comment_ref: NodeRef::default(),
        };
        this.fetch(ctx);
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let p = ctx.props();
        if p.article != old_props.article || p.source != old_props.source {
            self.thread.remount(p.article);
            self.fetch(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LegacyMsg::Loaded(article, comments) => return self.thread.loaded(article, comments),
            LegacyMsg::SetSortKey(key) => self.sort_key = key,
            LegacyMsg::Submit => {
                let comment = match self.read_form() {
                    Some(c) => c,
                    None => return false,
                };
                match self.thread.submit(comment) {
                    Ok(notice) => {
                        if let Some(form) = self.form_ref.cast::<web_sys::HtmlFormElement>() {
                            form.reset();
                        }
                        Self::notify(ctx, notice);
                    }
                    Err(err) => {
                        tracing::info!("not submitting comment: {err}");
                        return false;
                    }
                }
            }
            LegacyMsg::Delete(id) => {
                let notice = self.thread.delete(id);
                Self::notify(ctx, notice);
            }
            LegacyMsg::Like(id) => {
                if let Err(err) = self.thread.like(id) {
                    tracing::warn!("liking comment: {err}");
                    return false;
                }
            }
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.thread.unmount();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let list = match self.thread.render(self.sort_key) {
            Rendered::Loading => html! {
                <div class="comments-loading my-3">{ "Loading..." }</div>
            },
            Rendered::Ready(comments) => html! {
                <>
                    <div class="comment-count text-muted mb-2">
                        { format!("{} comments", comments.len()) }
                    </div>
                    <ul class="comment-list list-group mb-3">
                        { for comments.into_iter().map(|c| {
                            let id = c.id;
                            html! {
                                <ui::CommentItem
                                    key={ id.0.to_string() }
                                    comment={ c }
                                    on_delete={ link.callback(move |_| LegacyMsg::Delete(id)) }
                                    on_like={ link.callback(move |_| LegacyMsg::Like(id)) }
                                />
                            }
                        }) }
                    </ul>
                </>
            },
        };
        html! {
            <div class="comments-container">
                <ui::SortSelector
                    current={ self.sort_key }
                    on_change={ link.callback(LegacyMsg::SetSortKey) }
                />
                { list }
                <form
                    ref={ self.form_ref.clone() }
                    class="comment-form d-flex flex-column gap-2"
                    name="newComment"
                    onsubmit={ link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        LegacyMsg::Submit
                    }) }
                >
                    <input
                        ref={ self.name_ref.clone() }
                        class="form-control"
                        type="text"
                        name="name"
                        placeholder="Enter your name"
                        maxlength={ MAX_AUTHOR_LEN.to_string() }
                        required={ true }
                    />
                    <textarea
                        ref={ self.comment_ref.clone() }
                        class="form-control"
                        name="comment"
                        placeholder="Enter your comment"
                        required={ true }
                    />
                    <button
                        class="btn btn-primary align-self-end"
                        type="submit"
                        disabled={ self.thread.is_loading() }
                    >
                        <span class="me-2">{ "Comment" }</span>
                        <span class="bi-send" aria-hidden="true"></span>
                    </button>
                </form>
            </div>
        }
    }
}
