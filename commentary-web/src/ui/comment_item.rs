use commentary_client::api::CommentRecord;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: CommentRecord,
    pub on_delete: Callback<()>,

    /// Without it the like count is shown read-only
    #[prop_or_default]
    pub on_like: Option<Callback<()>>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let c = &p.comment;
    html! {
        <li class="comment list-group-item">
            <div class="d-flex align-items-center">
                <span class="comment-author fw-bold flex-grow-1">{ &c.author }</span>
                <span class="comment-date text-muted me-3">{ util::format_date(&c.date) }</span>
                { likes(c, p.on_like.as_ref()) }
                <button
                    type="button"
                    class="btn bi-btn bi-trash"
                    aria-label="Delete comment"
                    onclick={ p.on_delete.reform(|_| ()) }
                >
                </button>
            </div>
            <p class="comment-text mb-0">{ &c.text }</p>
        </li>
    }
}

fn likes(c: &CommentRecord, on_like: Option<&Callback<()>>) -> Html {
    match on_like {
        Some(on_like) => html! {
            <button
                type="button"
                class="btn btn-sm btn-outline-secondary me-2"
                aria-label="Like comment"
                onclick={ on_like.reform(|_| ()) }
            >
                <span class="bi-hand-thumbs-up me-1" aria-hidden="true"></span>
                { c.current_likes.to_string() }
            </button>
        },
        None => html! {
            <span class="comment-likes text-muted me-2">
                <span class="bi-hand-thumbs-up me-1" aria-hidden="true"></span>
                { c.current_likes.to_string() }
            </span>
        },
    }
}
