use crate::game::BreakpointTally;
use crate::i18n;
use crate::paths::{DICE_IMAGE, asset_path};
use std::collections::BTreeMap;
use yew::prelude::*;

const REACHED_MARK: &str = "✔";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerView {
    pub threshold: u32,
    pub reward: u32,
    pub reached: bool,
}

impl MarkerView {
    /// Corner text: a check once reached, otherwise the tier's dice count.
    #[must_use]
    pub fn corner(&self) -> String {
        if self.reached {
            REACHED_MARK.to_string()
        } else {
            self.reward.to_string()
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        let threshold = self.threshold.to_string();
        let mut args = BTreeMap::new();
        args.insert("threshold", threshold.as_str());
        let key = if self.reached {
            "quest.marker_reached"
        } else {
            "quest.marker_pending"
        };
        i18n::tr(key, Some(&args))
    }
}

pub fn marker_views(tiers: impl Iterator<Item = (u32, u32)>, tally: BreakpointTally) -> Vec<MarkerView> {
    tiers
        .enumerate()
        .map(|(idx, (threshold, reward))| MarkerView {
            threshold,
            reward,
            reached: tally.is_reached(idx),
        })
        .collect()
}

pub fn breakpoints_tooltip(thresholds: &[u32]) -> String {
    let list = thresholds
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut args = BTreeMap::new();
    args.insert("list", list.as_str());
    i18n::tr("quest.breakpoints", Some(&args))
}

pub fn render_marker(marker: &MarkerView) -> Html {
    let label = marker.label();
    let classes = classes!("reward", marker.reached.then_some("reached"));
    html! {
        <div
            key={marker.threshold}
            class={classes}
            style={format!("background-image: url({})", asset_path(DICE_IMAGE))}
            title={label.clone()}
            aria-label={label}
        >
            <div class="small above">{ marker.threshold.to_string() }</div>
            <div class="small corner-right">{ marker.corner() }</div>
        </div>
    }
}
