use booklist_core::{
    Book, BookDraft, BookListScreen, BookRowPresenter, CollectionError, DispatchQueue,
    EditorResult, RecordingSurface, RowPath, SurfaceCall,
};
use std::rc::Rc;

fn b1() -> Book {
    Book::new("Honzikova cesta", "Bohumil Riha", 1234)
}

fn b2() -> Book {
    Book::new("Robinson Crusoe", "Daniel Defoe", 1235)
}

fn b3() -> Book {
    Book::new("Dune", "Frank Herbert", 1965)
}

struct Fixture {
    screen: Rc<BookListScreen>,
    surface: Rc<RecordingSurface>,
    adapter: Rc<booklist_core::BookTableAdapter<RecordingSurface>>,
}

impl Fixture {
    fn seeded() -> Self {
        let screen = BookListScreen::new(vec![b1(), b2()], DispatchQueue::new());
        let surface = Rc::new(RecordingSurface::new());
        let adapter = screen.attach_surface(&surface);
        surface.set_data_source(adapter.data_source());
        Self {
            screen,
            surface,
            adapter,
        }
    }

    fn drain(&self) -> Vec<SurfaceCall> {
        self.screen.queue().run_pending();
        self.surface.take_calls()
    }
}

fn bracket(call: SurfaceCall) -> Vec<SurfaceCall> {
    vec![SurfaceCall::BeginUpdates, call, SurfaceCall::EndUpdates]
}

#[test]
fn scenario_created_appends_and_inserts_last_row() {
    let fx = Fixture::seeded();

    fx.screen.accept(EditorResult::Created(b3())).unwrap();

    assert_eq!(fx.screen.snapshot(), vec![b1(), b2(), b3()]);
    assert_eq!(
        fx.drain(),
        bracket(SurfaceCall::InsertRows(vec![RowPath::flat(2)]))
    );
    assert_eq!(fx.surface.visible_rows(), 3);
    assert_eq!(fx.surface.mismatches(), 0);
}

#[test]
fn scenario_saved_replaces_row_in_place() {
    let fx = Fixture::seeded();
    let edited = Book::new("Honzikova cesta II", "Bohumil Riha", 1240);

    fx.screen
        .accept(EditorResult::Saved(edited.clone(), 0))
        .unwrap();

    assert_eq!(fx.screen.snapshot(), vec![edited, b2()]);
    assert_eq!(
        fx.drain(),
        bracket(SurfaceCall::ReloadRows(vec![RowPath::flat(0)]))
    );
    assert_eq!(fx.surface.visible_rows(), 2);
}

#[test]
fn scenario_deleted_removes_row() {
    let fx = Fixture::seeded();

    fx.screen.accept(EditorResult::Deleted(b1(), 0)).unwrap();

    assert_eq!(fx.screen.snapshot(), vec![b2()]);
    assert_eq!(
        fx.drain(),
        bracket(SurfaceCall::DeleteRows(vec![RowPath::flat(0)]))
    );
    assert_eq!(fx.surface.visible_rows(), 1);
    assert_eq!(fx.surface.mismatches(), 0);
}

#[test]
fn scenario_cancelled_changes_nothing() {
    let fx = Fixture::seeded();

    fx.screen.accept(EditorResult::Cancelled).unwrap();

    assert_eq!(fx.screen.snapshot(), vec![b1(), b2()]);
    assert!(fx.drain().is_empty());
}

#[test]
fn deleted_uses_index_not_carried_record() {
    let fx = Fixture::seeded();

    fx.screen.accept(EditorResult::Deleted(b3(), 1)).unwrap();

    assert_eq!(fx.screen.snapshot(), vec![b1()]);
}

#[test]
fn out_of_range_result_is_reported_without_surface_calls() {
    let fx = Fixture::seeded();

    let err = fx.screen.accept(EditorResult::Saved(b3(), 2)).unwrap_err();

    assert_eq!(err, CollectionError::IndexOutOfRange { index: 2, len: 2 });
    assert!(fx.drain().is_empty());
    assert_eq!(fx.screen.len(), 2);
}

#[test]
fn adapter_serves_rows_from_current_content() {
    let fx = Fixture::seeded();
    fx.screen.accept(EditorResult::Created(b3())).unwrap();

    let row = fx.adapter.row_at(RowPath::flat(2)).unwrap();
    assert_eq!(row.title, "Dune");
    assert_eq!(row.year, "1965");
    assert_eq!(row.prototype_id, BookRowPresenter::PROTOTYPE_ID);
    assert!(fx.adapter.row_at(RowPath::flat(3)).is_none());
    assert!(fx.adapter.row_at(RowPath { section: 1, row: 0 }).is_none());
}

#[test]
fn edit_session_round_trip_updates_row_after_drain() {
    let fx = Fixture::seeded();

    let session = fx.screen.begin_edit(1).unwrap();
    let mut draft = session.draft();
    draft.year = Some("1719".to_string());
    session.save(&draft).unwrap();

    assert_eq!(fx.screen.snapshot()[1].year_of_publishing, 1235);
    assert_eq!(
        fx.drain(),
        bracket(SurfaceCall::ReloadRows(vec![RowPath::flat(1)]))
    );
    assert_eq!(fx.screen.snapshot()[1].year_of_publishing, 1719);
}

#[test]
fn create_session_appends_new_book() {
    let fx = Fixture::seeded();

    let session = fx.screen.begin_create();
    assert_eq!(session.index(), None);
    session
        .save(&BookDraft::new("Frank Herbert", "Dune", "1965"))
        .unwrap();

    assert_eq!(
        fx.drain(),
        bracket(SurfaceCall::InsertRows(vec![RowPath::flat(2)]))
    );
    assert_eq!(fx.screen.snapshot(), vec![b1(), b2(), b3()]);
}

#[test]
fn begin_edit_rejects_missing_row() {
    let fx = Fixture::seeded();
    let err = fx.screen.begin_edit(5).unwrap_err();
    assert_eq!(err, CollectionError::IndexOutOfRange { index: 5, len: 2 });
}

#[test]
fn stale_delete_index_surfaces_as_last_error() {
    let fx = Fixture::seeded();

    let session = fx.screen.begin_edit(1).unwrap();
    fx.screen.accept(EditorResult::Deleted(b1(), 0)).unwrap();
    session.delete().unwrap();
    fx.drain();

    assert_eq!(
        fx.screen.take_last_error(),
        Some(CollectionError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(fx.screen.snapshot(), vec![b2()]);
    assert_eq!(fx.screen.take_last_error(), None);
}

#[test]
fn dropped_surface_turns_updates_into_noops() {
    let fx = Fixture::seeded();
    let Fixture {
        screen,
        surface,
        adapter,
    } = fx;
    let weak_surface = Rc::downgrade(&surface);
    drop(surface);

    screen.accept(EditorResult::Created(b3())).unwrap();
    assert_eq!(screen.queue().run_pending(), 1);

    assert!(weak_surface.upgrade().is_none());
    assert!(!adapter.is_bound());
    assert_eq!(screen.len(), 3);
}

#[test]
fn dropped_adapter_detaches_from_list() {
    let fx = Fixture::seeded();
    drop(fx.adapter);

    fx.screen.accept(EditorResult::Created(b3())).unwrap();

    assert!(!fx.screen.books().borrow().has_observer());
    assert_eq!(fx.screen.queue().run_pending(), 0);
    assert!(fx.surface.take_calls().is_empty());
}

#[test]
fn reset_reloads_whole_surface() {
    let fx = Fixture::seeded();

    fx.screen.books().borrow_mut().reset(vec![b3()]);

    assert_eq!(fx.drain(), vec![SurfaceCall::ReloadData]);
    assert_eq!(fx.surface.visible_rows(), 1);
}
