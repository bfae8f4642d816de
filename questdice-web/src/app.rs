use crate::components::footer::Footer;
use crate::pages::not_found::NotFound;
use crate::pages::quest_board::QuestBoardPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <QuestBoardPage /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}

#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let path = location
        .map(|loc| AttrValue::from(loc.path().to_string()))
        .unwrap_or_default();
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    });
    html! { <NotFound {path} {on_go_home} /> }
}
