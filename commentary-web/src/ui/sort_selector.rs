use commentary_client::api::SortKey;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SortSelectorProps {
    pub current: SortKey,
    pub on_change: Callback<SortKey>,
}

#[function_component(SortSelector)]
pub fn sort_selector(p: &SortSelectorProps) -> Html {
    let on_change = {
        let on_change = p.on_change.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<SortKey>() {
                Ok(key) => on_change.emit(key),
                Err(err) => tracing::warn!("ignoring sort selection: {err}"),
            }
        })
    };
    let options = SortKey::ALL.iter().map(|k| {
        html! {
            <option value={ k.as_str() } selected={ *k == p.current }>{ k.label() }</option>
        }
    });
    html! {
        <div class="sort-selector input-group mb-3">
            <label class="input-group-text" for="sort-key">{ "Sort by" }</label>
            <select id="sort-key" class="form-select" onchange={ on_change }>
                { for options }
            </select>
        </div>
    }
}
