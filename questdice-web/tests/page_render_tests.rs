use futures::executor::block_on;
use questdice_web::game::{QuestBoard, QuestBook, initial_board};
use questdice_web::pages::not_found::{NotFound, Props as NotFoundProps};
use questdice_web::pages::quest_board::{Props as QuestBoardProps, QuestBoardPage};
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn quest_board_renders_embedded_quests() {
    questdice_web::i18n::set_lang("en");
    let board = initial_board();
    let html = block_on(LocalServerRenderer::<QuestBoardPage>::new().render());

    for row in board.rows() {
        assert!(html.contains(row.name()), "missing card for {}", row.name());
    }
    for summary in board.rolling() {
        assert!(html.contains(&summary.name), "missing rolling line for {}", summary.name);
    }
    assert!(html.contains("Dice Earned: 0"));
    assert!(html.contains(&format!("Dice Left: {}", board.totals().left)));
    assert!(html.contains("Rolling Around Board"));
}

#[test]
fn quest_board_reflects_supplied_board_state() {
    questdice_web::i18n::set_lang("en");
    let book = QuestBook::from_json(
        r#"[
            {"name": "Story", "placeholderText": "Chapters", "breakpoints": [[10, 20, 30], [1, 2, 3]]},
            {"name": "Laps", "fromRolling": true, "breakpoints": [[1, 10], [1, 5]]}
        ]"#,
    )
    .unwrap();
    let board = QuestBoard::new(&book)
        .applied(&questdice_web::game::BoardMsg::Progress {
            quest: String::from("Story"),
            raw: String::from("20"),
        })
        .unwrap();
    let html = block_on(
        LocalServerRenderer::<QuestBoardPage>::with_props(QuestBoardProps { board }).render(),
    );
    assert!(html.contains("Dice Earned: 3"));
    assert!(html.contains("Dice Left: 3"));
    assert!(html.contains("6 dice available with breakpoints ranging from 1 to 10"));
}

#[test]
fn empty_board_shows_load_failure() {
    questdice_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<QuestBoardPage>::with_props(QuestBoardProps {
            board: QuestBoard::default(),
        })
        .render(),
    );
    assert!(html.contains("Quest data could not be loaded."));
    assert!(html.contains("Dice Left: 0"));
}

#[test]
fn not_found_mentions_missing_path() {
    questdice_web::i18n::set_lang("en");
    let props = NotFoundProps {
        path: AttrValue::from("/missing"),
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Nothing lives at /missing."));
    assert!(html.contains("Back to the quest board"));
}
