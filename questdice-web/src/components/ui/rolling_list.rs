use crate::game::RollingSummary;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub summaries: Vec<RollingSummary>,
}

/// One sentence describing a rolling quest's payout.
#[must_use]
pub fn summary_text(summary: &RollingSummary) -> String {
    let count = summary.total_dice.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    let available = i18n::tr("rolling.available", Some(&args));
    match summary.range {
        Some((from, to)) => {
            let from = from.to_string();
            let to = to.to_string();
            let mut range_args = BTreeMap::new();
            range_args.insert("from", from.as_str());
            range_args.insert("to", to.as_str());
            format!("{available} {}", i18n::tr("rolling.range", Some(&range_args)))
        }
        None => available,
    }
}

fn title(name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    i18n::tr("rolling.title", Some(&args))
}

#[function_component(RollingList)]
pub fn rolling_list(props: &Props) -> Html {
    html! {
        <ul class="rolling-list">
            { for props.summaries.iter().map(|summary| html! {
                <li key={summary.name.clone()}>
                    <strong>{ title(&summary.name) }</strong>
                    { format!(": {}", summary_text(summary)) }
                </li>
            }) }
            <li>
                <strong>{ i18n::t("rolling.board_tiles_title") }</strong>
                { format!(": {}", i18n::t("rolling.board_tiles_desc")) }
            </li>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn summary(total_dice: u32, range: Option<(u32, u32)>) -> RollingSummary {
        RollingSummary {
            name: String::from("Laps Completed"),
            total_dice,
            range,
        }
    }

    #[test]
    fn summary_text_includes_range() {
        crate::i18n::set_lang("en");
        assert_eq!(
            summary_text(&summary(11, Some((1, 10)))),
            "11 dice available with breakpoints ranging from 1 to 10"
        );
    }

    #[test]
    fn summary_text_uses_singular_and_skips_missing_range() {
        crate::i18n::set_lang("en");
        assert_eq!(summary_text(&summary(1, None)), "1 die available");
    }

    #[test]
    fn list_ends_with_board_tiles_entry() {
        crate::i18n::set_lang("en");
        let props = Props {
            summaries: vec![summary(11, Some((1, 10)))],
        };
        let html = block_on(LocalServerRenderer::<RollingList>::with_props(props).render());
        assert!(html.contains("Laps Completed Quest"));
        assert!(html.contains("Rolling Around Board"));
    }
}
