//! Form state store with synchronous change notification

use super::field::Field;
use super::snapshot::{parse_time, FormSnapshot, InfoRow, RespColor, RespIcon, RowSide};
use chrono::NaiveDateTime;

/// Handle returned by [`FormStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What a mutation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Field(Field),
    RowAdded(usize),
    RowRemoved(usize),
    RowEdited(usize, RowSide),
}

type Subscriber = Box<dyn FnMut(&FormSnapshot, Change)>;

/// Owns the form snapshot and tells subscribers about every applied edit.
///
/// Subscribers run in registration order, after the mutation is fully
/// applied. Edits that turn out to be no-ops (an out-of-range row index, an
/// unknown selector token) change nothing and notify nobody.
pub struct FormStore {
    snapshot: FormSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    revision: u64,
}

impl FormStore {
    pub fn new(snapshot: FormSnapshot) -> Self {
        Self {
            snapshot,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Number of mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn row_count(&self) -> usize {
        self.snapshot.infos.len()
    }

    /// Register a callback run after every applied mutation
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FormSnapshot, Change) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the id was not registered
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Update one scalar field from text.
    ///
    /// The time field is parsed (unparseable text clears it). Selector
    /// fields take their raw token; unknown tokens are ignored.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Time => {
                self.set_time(parse_time(value));
                return;
            }
            Field::RespIcon => match value.parse::<RespIcon>() {
                Ok(icon) => self.snapshot.resp_icon = icon,
                Err(err) => {
                    tracing::warn!("Ignoring {}: {err}", field.name());
                    return;
                }
            },
            Field::RespColor => match value.parse::<RespColor>() {
                Ok(color) => self.snapshot.resp_color = color,
                Err(err) => {
                    tracing::warn!("Ignoring {}: {err}", field.name());
                    return;
                }
            },
            _ => {
                if let Some(text) = self.snapshot.text_mut(field) {
                    value.clone_into(text);
                }
            }
        }
        self.commit(Change::Field(field));
    }

    pub fn set_time(&mut self, time: Option<NaiveDateTime>) {
        self.snapshot.time = time;
        self.commit(Change::Field(Field::Time));
    }

    pub fn set_icon(&mut self, icon: RespIcon) {
        self.snapshot.resp_icon = icon;
        self.commit(Change::Field(Field::RespIcon));
    }

    pub fn set_color(&mut self, color: RespColor) {
        self.snapshot.resp_color = color;
        self.commit(Change::Field(Field::RespColor));
    }

    /// Append an empty row and return its index
    pub fn add_row(&mut self) -> usize {
        self.snapshot.infos.push(InfoRow::default());
        let index = self.snapshot.infos.len() - 1;
        self.commit(Change::RowAdded(index));
        index
    }

    pub fn remove_row(&mut self, index: usize) {
        if index >= self.snapshot.infos.len() {
            tracing::debug!("remove_row({index}) out of range, ignoring");
            return;
        }
        self.snapshot.infos.remove(index);
        self.commit(Change::RowRemoved(index));
    }

    pub fn set_row_field(&mut self, index: usize, side: RowSide, value: &str) {
        let Some(row) = self.snapshot.infos.get_mut(index) else {
            tracing::debug!("set_row_field({index}) out of range, ignoring");
            return;
        };
        value.clone_into(row.side_mut(side));
        self.commit(Change::RowEdited(index, side));
    }

    fn commit(&mut self, change: Change) {
        self.revision += 1;
        tracing::trace!("Form revision {} after {change:?}", self.revision);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.snapshot, change);
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new(FormSnapshot::default())
    }
}
