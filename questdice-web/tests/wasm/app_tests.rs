use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlInputElement};
use yew::Renderer;

use questdice_web::app::App;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|win| win.document())
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    questdice_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

fn totals_text() -> String {
    document()
        .query_selector(".dice-totals")
        .expect("query totals")
        .and_then(|node| node.text_content())
        .unwrap_or_default()
}

fn dispatch(input: &HtmlInputElement, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("event");
    input.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
async fn typing_progress_updates_totals() {
    render_app().await;
    let input: HtmlInputElement = document()
        .query_selector(".quest-card input[type='number']")
        .expect("query input")
        .expect("first quest input")
        .dyn_into()
        .expect("number input");
    input.set_value("1");
    dispatch(&input, "input");
    yew::platform::time::sleep(Duration::from_millis(20)).await;
    assert!(totals_text().contains("Dice Earned: 1"), "{}", totals_text());
}

#[wasm_bindgen_test]
async fn optional_quest_joins_total_when_checked() {
    render_app().await;
    let before = totals_text();
    let checkbox: HtmlInputElement = document()
        .query_selector("input[name='includeCheckbox']")
        .expect("query checkbox")
        .expect("optional quest checkbox")
        .dyn_into()
        .expect("checkbox input");
    checkbox.set_checked(true);
    dispatch(&checkbox, "change");
    yew::platform::time::sleep(Duration::from_millis(20)).await;
    assert_ne!(totals_text(), before);
}
