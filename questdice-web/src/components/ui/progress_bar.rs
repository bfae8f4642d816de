use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    /// Whole-number percentage, `0..=100`.
    pub percent_done: u8,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &Props) -> Html {
    let percent = props.percent_done.min(100);
    let percent_str = percent.to_string();
    let mut args = BTreeMap::new();
    args.insert("percent", percent_str.as_str());
    let label = i18n::tr("quest.percent_done", Some(&args));

    html! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuenow={percent_str.clone()}
            aria-valuemin="0"
            aria-valuemax="100"
            aria-label={label}
        >
            <div class="progress-fill" style={format!("width: {percent}%")} />
        </div>
    }
}
