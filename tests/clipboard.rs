//! Clipboard tests - whole-line cut, copy, paste and select all

mod common;

use common::{cursor, expected, rows, test_model};
use mathscribe::messages::{DocumentMsg, EditorMsg, LayoutMsg, Msg};
use mathscribe::model::Notice;
use mathscribe::update::update;

fn doc(model: &mut mathscribe::AppModel, msg: DocumentMsg) -> Option<mathscribe::Cmd> {
    update(model, Msg::Document(msg))
}

#[test]
fn test_cut_only_line_leaves_one_empty_line() {
    let mut model = test_model(&[&["a", "b"]], 0, 0);
    let cmd = doc(&mut model, DocumentMsg::Cut).unwrap();

    assert!(model.buffer().is_blank());
    assert_eq!(model.buffer().line_count(), 1);
    assert_eq!(model.clipboard.content().to_strings(), vec!["a", "b"]);
    assert_eq!(cursor(&model), (0, 0));
    assert_eq!(cmd.notice(), Some(Notice::Cut));
}

#[test]
fn test_cut_removes_line_and_keeps_cursor_line() {
    let mut model = test_model(&[&["a"], &["b", "c"], &["d"]], 1, 2);
    doc(&mut model, DocumentMsg::Cut);

    assert_eq!(rows(&model), expected(&[&["a"], &["d"]]));
    assert_eq!(cursor(&model), (1, 0));
}

#[test]
fn test_cut_last_line_moves_cursor_up() {
    let mut model = test_model(&[&["a"], &["b"]], 1, 1);
    doc(&mut model, DocumentMsg::Cut);

    assert_eq!(rows(&model), expected(&[&["a"]]));
    assert_eq!(cursor(&model), (0, 0));
}

#[test]
fn test_cut_empty_line_is_noop() {
    let mut model = test_model(&[&["a"], &[]], 1, 0);
    doc(&mut model, DocumentMsg::Copy);
    let cmd = doc(&mut model, DocumentMsg::Cut);

    assert_eq!(cmd, None);
    assert_eq!(rows(&model), expected(&[&["a"], &[]]));
    assert!(!model.can_undo());
}

#[test]
fn test_copy_leaves_buffer_untouched() {
    let mut model = test_model(&[&["x", "y"]], 0, 1);
    let cmd = doc(&mut model, DocumentMsg::Copy).unwrap();

    assert_eq!(cmd.notice(), Some(Notice::Copied));
    assert_eq!(rows(&model), expected(&[&["x", "y"]]));
    assert!(!model.can_undo());
    assert_eq!(model.clipboard.content().to_strings(), vec!["x", "y"]);
}

#[test]
fn test_paste_splices_run_at_cursor() {
    let mut model = test_model(&[&["x", "y"]], 0, 0);
    doc(&mut model, DocumentMsg::Copy);
    update(
        &mut model,
        Msg::Editor(EditorMsg::SetCursorPosition { line: 0, column: 0 }),
    );

    // Replace the line with [a, b] while keeping the clipboard
    doc(&mut model, DocumentMsg::DeleteForward);
    doc(&mut model, DocumentMsg::DeleteForward);
    update(&mut model, Msg::insert("a"));
    update(&mut model, Msg::insert("b"));
    update(
        &mut model,
        Msg::Editor(EditorMsg::SetCursorPosition { line: 0, column: 1 }),
    );

    let cmd = doc(&mut model, DocumentMsg::Paste).unwrap();
    assert_eq!(rows(&model), expected(&[&["a", "x", "y", "b"]]));
    assert_eq!(cursor(&model), (0, 3));
    assert_eq!(cmd.notice(), Some(Notice::Pasted));
}

#[test]
fn test_paste_with_empty_clipboard_reports_notice() {
    let mut model = test_model(&[&["a"]], 0, 1);
    let cmd = doc(&mut model, DocumentMsg::Paste).unwrap();

    assert_eq!(cmd.notice(), Some(Notice::NothingToPaste));
    assert_eq!(rows(&model), expected(&[&["a"]]));
    assert!(!model.can_undo());
}

#[test]
fn test_paste_is_undoable() {
    let mut model = test_model(&[&["a", "b"]], 0, 0);
    doc(&mut model, DocumentMsg::Copy);
    doc(&mut model, DocumentMsg::Paste);
    assert_eq!(rows(&model), expected(&[&["a", "b", "a", "b"]]));

    doc(&mut model, DocumentMsg::Undo);
    assert_eq!(rows(&model), expected(&[&["a", "b"]]));
}

#[test]
fn test_clipboard_is_shared_across_tabs() {
    let mut model = test_model(&[&["π", "r", "²"]], 0, 0);
    doc(&mut model, DocumentMsg::Copy);
    update(&mut model, Msg::Layout(LayoutMsg::NewTab));
    doc(&mut model, DocumentMsg::Paste);

    assert_eq!(rows(&model), expected(&[&["π", "r", "²"]]));
}

#[test]
fn test_select_all_moves_cursor_to_end() {
    let mut model = test_model(&[&["a", "b"], &["c"]], 0, 0);
    let cmd = update(&mut model, Msg::Editor(EditorMsg::SelectAll)).unwrap();

    assert_eq!(cursor(&model), (1, 1));
    assert_eq!(cmd.notice(), Some(Notice::SelectedAll));
}
