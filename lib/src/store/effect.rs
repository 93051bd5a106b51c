//! Side effects returned by the reducer for execution by the store.

/// Side effects that the reducer requests to be performed after state updates.
///
/// This keeps the reducer pure by separating state computation from I/O
/// operations like storage writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// Write the full saved list mapping to storage.
    PersistSavedLists,
}
