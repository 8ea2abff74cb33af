//! Persisted flags, used for the one-time warning banner

mod json_store;
mod memory_store;
mod traits;

pub use json_store::JsonFlagStore;
pub use memory_store::MemoryFlagStore;
pub use traits::{FlagStore, FlagStoreError};

#[cfg(test)]
pub use traits::MockFlagStore;

/// Flag recording whether the warning has been shown
pub const FIRST_RUN_KEY: &str = "first";

/// Decide whether to show the warning banner, marking it as shown.
///
/// The banner shows while the flag is unset or `"0"`; the flag is then set
/// to `"1"` so later runs skip it.
pub async fn should_show_warning<S>(store: &mut S) -> Result<bool, FlagStoreError>
where
    S: FlagStore + ?Sized,
{
    match store.get(FIRST_RUN_KEY).await?.as_deref() {
        None | Some("0") => {
            store.set(FIRST_RUN_KEY, "1").await?;
            Ok(true)
        }
        Some(_) => Ok(false),
    }
}
