mod common;

use assert2::{check, let_assert};
use common::TempWorkspace;
use docnav_mcp::outline::{
    FileStorage, Flag, Icon, IndicatorView, MemoryStorage, OutlineState, OutlineStore,
    StorageAdapter, ToggleController, VecRegistry, is_expanded, load, save,
};
use rstest::rstest;

// --- Persistence ---

#[test]
fn wrong_length_blob_yields_default() {
    let state = load(Some("_TF"), 5);
    check!(save(&state) == "_TFFFF");
    check!(is_expanded(&state, 1));
    check!((2..=5).all(|index| !is_expanded(&state, index)));
}

#[rstest]
#[case("_TFFFF")]
#[case("_FTFTF")]
#[case("_TTTTT")]
fn round_trip_preserves_state(#[case] blob: &str) {
    let state = load(Some(blob), 5);
    check!(load(Some(&save(&state)), 5) == state);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
fn toggle_changes_exactly_one_index(#[case] target: usize) {
    let mut controller = ToggleController::new(
        OutlineStore::open(MemoryStorage::new(), "open", 5),
        VecRegistry::<IndicatorView>::with_defaults(5),
    );
    let before: Vec<Flag> = controller.state().iter().map(|(_, flag)| flag).collect();

    let_assert!(Ok(_) = controller.toggle(target));

    for (index, flag) in controller.state().iter() {
        if index == target {
            check!(flag == before[index - 1].flipped());
        } else {
            check!(flag == before[index - 1]);
        }
    }
}

#[test]
fn toggle_scenario_from_default() {
    let mut controller = ToggleController::new(
        OutlineStore::open(MemoryStorage::new(), "open", 5),
        VecRegistry::<IndicatorView>::with_defaults(5),
    );

    check!(controller.toggle(3) == Ok(Flag::Expanded));

    let_assert!(Some(blob) = controller.store().storage().get("open"));
    check!(blob.len() == 6);
    check!(blob == "_TFTFF");
}

// --- File-backed sessions ---

fn open_controller(
    path: &std::path::Path,
    sections: usize,
) -> ToggleController<FileStorage, VecRegistry<IndicatorView>> {
    ToggleController::new(
        OutlineStore::open(FileStorage::new(path), "outline-open", sections),
        VecRegistry::with_defaults(sections),
    )
}

#[test]
fn state_survives_reload() {
    let workspace = TempWorkspace::new();
    let path = workspace.path().join("outline.json");

    {
        let mut first = open_controller(&path, 4);
        first.toggle(1).unwrap();
        first.toggle(4).unwrap();
    }

    let second = open_controller(&path, 4);
    check!(save(second.state()) == "_FFFT");
}

#[test]
fn section_count_change_resets_state() {
    let workspace = TempWorkspace::new();
    let path = workspace.path().join("outline.json");

    {
        let mut first = open_controller(&path, 4);
        first.toggle(2).unwrap();
    }

    let second = open_controller(&path, 6);
    check!(second.state() == &OutlineState::new_default(6));

    // The stale blob stays until the next toggle overwrites it
    check!(FileStorage::new(&path).get("outline-open").as_deref() == Some("_TTFF"));
}

#[test]
fn hover_after_reload_shows_loaded_state() {
    let workspace = TempWorkspace::new();
    workspace.create_file("outline.json", r#"{ "outline-open": "_FT" }"#);

    let mut controller = open_controller(&workspace.path().join("outline.json"), 2);
    check!(controller.hover_enter(2) == Ok(Icon::HighlightedOpen));

    let_assert!(Some(root) = controller.registry().get(1));
    check!(*root == IndicatorView { children_visible: false, icon: Icon::Closed });
    check!(workspace.read_file("outline.json").contains("_FT"));
}
