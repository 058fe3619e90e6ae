use commentary_client::api::ArticleId;
use yew::prelude::*;

use crate::config::{Config, Variant};

#[derive(Clone, PartialEq, Properties)]
pub struct SettingsBarProps {
    pub config: Config,
    pub on_host_change: Callback<String>,
    pub on_article_change: Callback<ArticleId>,
    pub on_variant_change: Callback<Variant>,
}

#[function_component(SettingsBar)]
pub fn settings_bar(p: &SettingsBarProps) -> Html {
    let on_host_change = p.on_host_change.reform(|e: web_sys::Event| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        String::from(input.value().trim_end_matches('/'))
    });
    let on_article_change = {
        let on_article_change = p.on_article_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<u64>() {
                Ok(id) => on_article_change.emit(ArticleId(id)),
                Err(err) => tracing::warn!(value = %input.value(), "invalid article id: {err}"),
            }
        })
    };
    let on_variant_change = {
        let on_variant_change = p.on_variant_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(v) = Variant::parse(&select.value()) {
                on_variant_change.emit(v);
            }
        })
    };
    html! {
        <form class="settings-bar row g-2" onsubmit={ Callback::from(|e: SubmitEvent| e.prevent_default()) }>
            <div class="col-md-6 input-group-sm input-group">
                <label class="input-group-text" for="host">{ "Source" }</label>
                <input
                    type="url"
                    class="form-control"
                    id="host"
                    placeholder="https://example.org"
                    value={ p.config.host.clone() }
                    onchange={ on_host_change }
                />
            </div>
            <div class="col-md-3 input-group-sm input-group">
                <label class="input-group-text" for="article">{ "Article" }</label>
                <input
                    type="number"
                    min="1"
                    class="form-control"
                    id="article"
                    value={ p.config.article.0.to_string() }
                    onchange={ on_article_change }
                />
            </div>
            <div class="col-md-3 input-group-sm input-group">
                <select class="form-select" aria-label="Thread variant" onchange={ on_variant_change }>
                    { for Variant::ALL.iter().map(|v| html! {
                        <option value={ v.as_str() } selected={ *v == p.config.variant }>
                            { v.label() }
                        </option>
                    }) }
                </select>
            </div>
        </form>
    }
}
