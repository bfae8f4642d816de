use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Path the router could not match.
    #[prop_or_default]
    pub path: AttrValue,
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let mut args = BTreeMap::new();
    args.insert("path", props.path.as_str());

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ i18n::t("not_found.title") }</h1>
            <p>{ i18n::tr("not_found.message", Some(&args)) }</p>
            <button type="button" onclick={go_home}>
                { i18n::t("not_found.back") }
            </button>
        </section>
    }
}
