//! Core logic for the editable book list.
//! An observable, index-addressed list reports every structural change to a
//! rendered surface, and detail-editor results are fed back into it.

pub mod collection;
pub mod dispatch;
pub mod editor;
pub mod logging;
pub mod model;
pub mod render;
pub mod screen;
pub mod seed;

pub use collection::change::ChangeOperation;
pub use collection::list::{CollectionError, CollectionResult, ObservableList};
pub use collection::observer::ChangeObserver;
pub use dispatch::DispatchQueue;
pub use editor::result::EditorResult;
pub use editor::session::{EditSession, RejectReason, SessionId, SessionRejection};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::book::{Book, BookValidationError, CoverImage};
pub use model::draft::{BookDraft, DraftError, DraftField};
pub use render::adapter::TableAdapter;
pub use render::presenter::{BookRow, BookRowPresenter, RowPresenter};
pub use render::recording::{RecordingSurface, SurfaceCall};
pub use render::surface::{ListDataSource, ListSurface, RowAnimation, RowPath};
pub use screen::list_screen::{BookListScreen, BookTableAdapter, SharedBookList};
pub use seed::{load_seed_json, SeedError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
