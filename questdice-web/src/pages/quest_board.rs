//! The quest board page: one card per tracked quest, running totals, and the
//! rolling quest summary.
use crate::components::ui::dice_totals::DiceTotals;
use crate::components::ui::quest_card::QuestCard;
use crate::components::ui::rolling_list::RollingList;
use crate::game::{BoardMsg, QuestBoard, initial_board};
use crate::i18n;
use std::cell::RefCell;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Board the page starts from; defaults to the embedded quest book.
    #[prop_or_else(initial_board)]
    pub board: QuestBoard,
}

/// Apply `msg` to a copy of `board`, returning `None` when it is rejected.
#[must_use]
pub fn next_board(board: &QuestBoard, msg: &BoardMsg) -> Option<QuestBoard> {
    log::debug!("board message: {msg:?}");
    match board.applied(msg) {
        Ok(next) => Some(next),
        Err(e) => {
            log::error!("Rejected board message: {e}");
            None
        }
    }
}

/// Apply `msg` on top of the newest board in `latest`, storing and returning
/// the result. Messages that arrive before a re-render build on each other.
pub fn advance_latest(latest: &RefCell<QuestBoard>, msg: &BoardMsg) -> Option<QuestBoard> {
    let next = next_board(&latest.borrow(), msg)?;
    latest.replace(next.clone());
    Some(next)
}

#[function_component(QuestBoardPage)]
pub fn quest_board_page(props: &Props) -> Html {
    let board = {
        let initial = props.board.clone();
        use_state(move || initial)
    };

    let latest = {
        let initial = props.board.clone();
        use_mut_ref(move || initial)
    };

    let on_msg = {
        let board = board.clone();
        Callback::from(move |msg: BoardMsg| {
            if let Some(next) = advance_latest(&latest, &msg) {
                board.set(next);
            }
        })
    };

    let cards = if board.rows().is_empty() {
        html! { <p class="load-failed" role="alert">{ i18n::t("page.load_failed") }</p> }
    } else {
        html! {
            <div class="quest-grid">
                { for board.rows().iter().map(|row| html! {
                    <QuestCard
                        key={row.name().to_string()}
                        row={row.clone()}
                        on_msg={on_msg.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <main id="main" class="quest-board">
            <h2 class="page-title">{ i18n::t("page.title") }</h2>
            <section class="tracked-quests" aria-labelledby="tracked-heading">
                <h3 id="tracked-heading">{ i18n::t("page.tracked_heading") }</h3>
                <p class="blurb">{ i18n::t("page.tracked_blurb") }</p>
                { cards }
                <DiceTotals totals={board.totals()} />
            </section>
            <section class="rolling-quests" aria-labelledby="rolling-heading">
                <h3 id="rolling-heading">{ i18n::t("page.rolling_heading") }</h3>
                <p class="blurb">{ i18n::t("page.rolling_blurb") }</p>
                <RollingList summaries={board.rolling().to_vec()} />
            </section>
        </main>
    }
}
