//! Room/partition filtering.
//!
//! Buyer analysis only covers sellable stock. Quarantine, staff stock, and
//! other rooms are excluded by an exact match on the normalized room value.

use crate::schema::{BatchRow, InventorySchema, ROOM_ALIASES};
use shelfwatch_tabular::{SchemaError, SchemaResult};

/// Partition of inventory rows into kept and removed sets.
#[derive(Debug)]
pub struct RoomFilterOutcome {
    pub kept: Vec<BatchRow>,
    pub removed: Vec<BatchRow>,
}

impl RoomFilterOutcome {
    pub fn included(&self) -> usize {
        self.kept.len()
    }

    pub fn excluded(&self) -> usize {
        self.removed.len()
    }
}

/// Normalize a room value for comparison: trim and lowercase.
///
/// Values keep their interior spacing ("employee stock" stays two words);
/// only the header lookup uses the stricter alias normalization.
fn normalize_room(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Restrict rows to a single partition label.
///
/// Fails with a schema error naming the missing column and the requested
/// partition when the input has no room-indicating column. Included and
/// excluded counts always sum to the input row count.
pub fn filter_room(
    schema: &InventorySchema,
    rows: Vec<BatchRow>,
    partition: &str,
) -> SchemaResult<RoomFilterOutcome> {
    if schema.room_col.is_none() {
        return Err(SchemaError::missing_partition_column(
            "room",
            ROOM_ALIASES,
            partition,
        ));
    }

    let want = normalize_room(partition);
    let (kept, removed): (Vec<_>, Vec<_>) = rows
        .into_iter()
        .partition(|row| row.room.as_deref().map(normalize_room).as_deref() == Some(want.as_str()));

    Ok(RoomFilterOutcome { kept, removed })
}
