//! Form domain layer
//!
//! The notice form's snapshot, its field metadata, and the store that owns
//! it and announces edits.

mod field;
mod snapshot;
mod store;

pub use field::{Field, FieldKind};
pub use snapshot::{
    parse_time, FormSnapshot, InfoRow, RespColor, RespIcon, RowSide, ValidationHint,
};
pub use store::FormStore;
