//! Rendered list surface contract.

use std::fmt::{Display, Formatter};

/// Address of one row on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    /// Row in the single flat section.
    pub fn flat(row: usize) -> Self {
        Self { section: 0, row }
    }
}

impl Display for RowPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.section, self.row)
    }
}

/// Visual transition requested for a structural row update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAnimation {
    #[default]
    Fade,
    None,
}

/// Structural-update API of a rendered list.
///
/// Methods take `&self`; the surface is shared and referenced weakly.
pub trait ListSurface {
    /// Redraw everything from the data source.
    fn reload_data(&self);
    fn begin_updates(&self);
    fn end_updates(&self);
    fn insert_rows(&self, paths: &[RowPath], animation: RowAnimation);
    fn delete_rows(&self, paths: &[RowPath], animation: RowAnimation);
    fn reload_rows(&self, paths: &[RowPath], animation: RowAnimation);
}

/// Row-count queries a surface issues against its data source.
pub trait ListDataSource {
    fn number_of_sections(&self) -> usize;
    fn number_of_rows(&self, section: usize) -> usize;
}
