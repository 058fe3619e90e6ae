use std::rc::Rc;

use commentary_client::{
    api::{ArticleId, CommentRecord, SortKey, MAX_AUTHOR_LEN},
    fetch_initial, FieldAction, Fields, LoadTicket, Rendered, StoreCommand, ThreadEvent,
    ThreadState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api::SourceHandle, ui};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub article: ArticleId,
    pub source: SourceHandle,

    /// The store's current comments for `article`, in arrival order
    pub comments: Rc<Vec<CommentRecord>>,
    pub on_command: Callback<StoreCommand>,
}

struct ThreadReducer(ThreadState);

impl Reducible for ThreadReducer {
    type Action = ThreadEvent;

    fn reduce(self: Rc<Self>, event: ThreadEvent) -> Rc<Self> {
        Rc::new(ThreadReducer(self.0.handle(event)))
    }
}

struct FieldsReducer(Fields);

impl Reducible for FieldsReducer {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: FieldAction) -> Rc<Self> {
        Rc::new(FieldsReducer(self.0.reduce(action)))
    }
}

#[function_component(CommentThreadView)]
pub fn comment_thread_view(p: &CommentThreadProps) -> Html {
    let thread = {
        let article = p.article;
        use_reducer(move || ThreadReducer(ThreadState::mount(article)))
    };
    let fields = use_reducer(|| FieldsReducer(Fields::default()));
    let sort_key = use_state(SortKey::default);

    // Fetch the comments once per displayed article, disowning the fetch on
    // article change or unmount
    {
        let thread = thread.dispatcher();
        let on_command = p.on_command.clone();
        use_effect_with_deps(
            move |(article, source): &(ArticleId, SourceHandle)| {
                let (article, source) = (*article, source.clone());
                let ticket = LoadTicket::new();
                thread.dispatch(ThreadEvent::Mount(article));
                {
                    let ticket = ticket.clone();
                    spawn_local(async move {
                        match fetch_initial(&*source.0, article, &ticket).await {
                            Ok(Some(comments)) => {
                                on_command.emit(StoreCommand::LoadInitial { article, comments });
                                thread.dispatch(ThreadEvent::Loaded(article));
                            }
                            Ok(None) => (),
                            Err(err) => {
                                tracing::error!(?article, "failed loading comments: {err:#}")
                            }
                        }
                    });
                }
                move || ticket.cancel()
            },
            (p.article, p.source.clone()),
        );
    }

    // Until the effect re-mounts the reducer, it still describes the previous article
    let state = thread.0.displaying(p.article);
    let loading = state.is_loading();
    let list = match state.render(&p.comments, *sort_key) {
        Rendered::Loading => html! {
            <div class="comments-loading my-3">{ "Loading..." }</div>
        },
        Rendered::Ready(comments) => {
            let items = comments.into_iter().map(|c| {
                let (article, id) = (p.article, c.id);
                let on_delete = p
                    .on_command
                    .reform(move |_| StoreCommand::Delete { article, id });
                html! {
                    <ui::CommentItem key={ id.0.to_string() } comment={ c } { on_delete } />
                }
            });
            html! {
                <>
                    <div class="comment-count text-muted mb-2">
                        { format!("{} comments", p.comments.len()) }
                    </div>
                    <ul class="comment-list list-group mb-3">
                        { for items }
                    </ul>
                </>
            }
        }
    };

    let on_submit = {
        let fields = fields.clone();
        let on_command = p.on_command.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.submission(&fields.0, chrono::Utc::now()) {
                Ok(cmd) => {
                    on_command.emit(cmd);
                    fields.dispatch(FieldAction::Clear);
                }
                Err(err) => tracing::info!("not submitting comment: {err}"),
            }
        })
    };
    let on_name_input = {
        let fields = fields.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::SetName(input.value()));
        })
    };
    let on_comment_input = {
        let fields = fields.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::SetComment(input.value()));
        })
    };

    let on_sort_change = {
        let sort_key = sort_key.clone();
        Callback::from(move |k| sort_key.set(k))
    };

    html! {
        <div class="comments-container">
            <ui::SortSelector current={ *sort_key } on_change={ on_sort_change } />
            { list }
            <form class="comment-form d-flex flex-column gap-2" name="newComment" onsubmit={ on_submit }>
                <input
                    class="form-control"
                    type="text"
                    name="name"
                    placeholder="Enter your name"
                    maxlength={ MAX_AUTHOR_LEN.to_string() }
                    required={ true }
                    value={ fields.0.name.clone() }
                    oninput={ on_name_input }
                />
                <textarea
                    class="form-control"
                    name="comment"
                    placeholder="Enter your comment"
                    required={ true }
                    value={ fields.0.comment.clone() }
                    oninput={ on_comment_input }
                />
                <button class="btn btn-primary align-self-end" type="submit" disabled={ loading }>
                    <span class="me-2">{ "Comment" }</span>
                    <span class="bi-send" aria-hidden="true"></span>
                </button>
            </form>
        </div>
    }
}
