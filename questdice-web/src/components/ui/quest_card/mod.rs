mod handlers;
mod markers;

use crate::components::ui::progress_bar::ProgressBar;
use crate::game::{BoardMsg, QuestRow};
use crate::i18n;
use handlers::{include_handler, progress_handler};
use std::collections::BTreeMap;
use yew::prelude::*;

pub use markers::{MarkerView, breakpoints_tooltip, marker_views};

#[derive(Properties, Clone, PartialEq)]
pub struct QuestCardProps {
    pub row: QuestRow,
    pub on_msg: Callback<BoardMsg>,
}

fn max_label(total: u32) -> String {
    let total = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("total", total.as_str());
    i18n::tr("quest.max", Some(&args))
}

fn input_label(quest: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("quest", quest);
    i18n::tr("quest.progress_label", Some(&args))
}

#[function_component(QuestCard)]
pub fn quest_card(props: &QuestCardProps) -> Html {
    let row = &props.row;
    let quest = row.quest();
    let total = row.total_dice();
    let tally = row.tally();
    let marker_list = marker_views(quest.breakpoints.tiers(), tally);

    let oninput = progress_handler(row.name(), props.on_msg.clone());

    let include_toggle = quest.optional.then(|| {
        let onchange = include_handler(row.name(), props.on_msg.clone());
        html! {
            <div class="optional-checkbox">
                <label class="checkbox-label">
                    { i18n::t("quest.include") }
                    <input
                        name="includeCheckbox"
                        type="checkbox"
                        checked={row.included()}
                        {onchange}
                        class="checkbox-input"
                    />
                </label>
            </div>
        }
    });

    html! {
        <div class="quest-card" title={breakpoints_tooltip(quest.breakpoints.thresholds())}>
            <div class="quest-top">
                <div class="quest-title">{ quest.name.clone() }</div>
                <input
                    type="number"
                    min="0"
                    max={total.to_string()}
                    placeholder={quest.placeholder_text.clone()}
                    aria-label={input_label(&quest.name)}
                    value={row.raw_input().to_string()}
                    {oninput}
                    class="number-input"
                />
                <div class="quest-max">{ max_label(total) }</div>
            </div>
            <ProgressBar percent_done={tally.percent_done()} />
            <div class="quest-rewards">
                { for marker_list.iter().map(markers::render_marker) }
            </div>
            { include_toggle.unwrap_or_default() }
        </div>
    }
}
