use crate::game::BoardMsg;
use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

pub fn progress_handler(quest: &str, on_msg: Callback<BoardMsg>) -> Callback<InputEvent> {
    let quest = quest.to_string();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_msg.emit(BoardMsg::Progress {
                quest: quest.clone(),
                raw: input.value(),
            });
        }
    })
}

pub fn include_handler(quest: &str, on_msg: Callback<BoardMsg>) -> Callback<Event> {
    let quest = quest.to_string();
    Callback::from(move |e: Event| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_msg.emit(BoardMsg::Include {
                quest: quest.clone(),
                included: input.checked(),
            });
        }
    })
}
