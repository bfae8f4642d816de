use crate::game::DicePair;
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub totals: DicePair,
}

fn count_line(key: &str, count: u32) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    i18n::tr(key, Some(&args))
}

#[function_component(DiceTotals)]
pub fn dice_totals(props: &Props) -> Html {
    html! {
        <div class="dice-totals" role="status" aria-live="polite">
            <p class="dice-earned">{ count_line("totals.earned", props.totals.earned) }</p>
            <p class="dice-left">{ count_line("totals.left", props.totals.left) }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_both_totals() {
        crate::i18n::set_lang("en");
        let props = Props {
            totals: DicePair::new(7, 28),
        };
        let html = block_on(LocalServerRenderer::<DiceTotals>::with_props(props).render());
        assert!(html.contains("Dice Earned: 7"));
        assert!(html.contains("Dice Left: 28"));
    }
}
