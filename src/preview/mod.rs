//! Live preview of the notice page
//!
//! `render` is the pure projection; `PreviewPane` keeps the latest
//! rendering in sync with a [`FormStore`] through a subscription.

mod document;
mod render;

pub use document::{NoticeDocument, StatusLine};
pub use render::render;

use crate::state::FormStore;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Latest rendering of the store's snapshot
pub struct PreviewPane {
    document: Rc<RefCell<NoticeDocument>>,
}

impl PreviewPane {
    /// Render the current snapshot and re-render after every store mutation
    pub fn attach(store: &mut FormStore) -> Self {
        let document = Rc::new(RefCell::new(render(store.snapshot())));
        let sink = Rc::clone(&document);
        store.subscribe(move |snapshot, change| {
            tracing::trace!("Re-rendering preview after {change:?}");
            *sink.borrow_mut() = render(snapshot);
        });
        Self { document }
    }

    pub fn document(&self) -> Ref<'_, NoticeDocument> {
        self.document.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, FormSnapshot, RowSide};

    fn store() -> FormStore {
        FormStore::new(FormSnapshot::with_time(None))
    }

    #[test]
    fn test_attach_renders_immediately() {
        let mut store = store();
        let pane = PreviewPane::attach(&mut store);
        assert_eq!(*pane.document(), render(store.snapshot()));
    }

    #[test]
    fn test_pane_follows_field_edits() {
        let mut store = store();
        let pane = PreviewPane::attach(&mut store);
        store.set_field(Field::SectionHeader2, "Info");
        assert_eq!(pane.document().subtitle, "Info");
    }

    #[test]
    fn test_pane_follows_row_edits() {
        let mut store = store();
        let pane = PreviewPane::attach(&mut store);
        let index = store.add_row();
        store.set_row_field(index, RowSide::Key, "导师");
        assert_eq!(pane.document().rows.len(), 10);
        assert_eq!(pane.document().rows[index].label, "导师");
        assert_eq!(pane.document().rows[index].value, "");
    }

    #[test]
    fn test_pane_always_matches_fresh_render() {
        let mut store = store();
        let pane = PreviewPane::attach(&mut store);
        store.set_field(Field::Tips, "");
        store.remove_row(0);
        store.set_field(Field::RespColor, "");
        assert_eq!(*pane.document(), render(store.snapshot()));
    }
}
