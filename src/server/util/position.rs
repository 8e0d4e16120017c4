//! Dense position planning for ordered children.
//!
//! Lists inside a board and cards inside a list carry a 1-based `position` that must stay
//! unique and gap-free: a parent with N children holds exactly the positions 1..=N, and
//! its counter (`board.list_nb`, `board_list.card_nb`) equals N.
//!
//! The functions here never touch the database. They take the current siblings of a
//! container and return the `(id, position)` rows that have to change. Repositories load
//! the siblings, apply the plan and update the counters inside one transaction.

use thiserror::Error;

/// A child as currently stored in its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub id: i32,
    pub position: i32,
}

impl Slot {
    pub fn new(id: i32, position: i32) -> Self {
        Self { id, position }
    }
}

/// A single row update produced by a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionChange {
    pub id: i32,
    pub position: i32,
}

impl PositionChange {
    fn new(id: i32, position: i32) -> Self {
        Self { id, position }
    }
}

/// Result of moving a child from one container to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferPlan {
    /// Renumbered siblings left behind in the source container.
    pub source: Vec<PositionChange>,
    /// Shifted siblings of the target container, including the moved child itself.
    pub target: Vec<PositionChange>,
    /// Child count of the source container after the move.
    pub source_count: i32,
    /// Child count of the target container after the move.
    pub target_count: i32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Requested position lies outside of `1..=max`.
    #[error("Position {position} is out of range, expected a value between 1 and {max}")]
    OutOfRange { position: i32, max: i32 },

    /// The child to move or remove is not among the given siblings.
    #[error("Item {0} does not belong to this container")]
    UnknownItem(i32),
}

/// Position given to a child appended to a container holding `count` children.
pub fn append_position(count: i32) -> i32 {
    count + 1
}

/// Plans the removal of `removed_id`.
///
/// Every sibling placed after the removed child moves up by one.
///
/// # Returns
/// - `Ok(Vec<PositionChange>)` - Rows to renumber, the removed child excluded
/// - `Err(PositionError::UnknownItem)` - `removed_id` is not one of `siblings`
pub fn plan_removal(siblings: &[Slot], removed_id: i32) -> Result<Vec<PositionChange>, PositionError> {
    let removed = find(siblings, removed_id)?;

    Ok(siblings
        .iter()
        .filter(|s| s.id != removed_id && s.position > removed.position)
        .map(|s| PositionChange::new(s.id, s.position - 1))
        .collect())
}

/// Plans moving `moved_id` to `target` within the same container.
///
/// Siblings between the current and the target position shift one step against the
/// direction of the move. Moving to the current position is a no-op and yields no change.
///
/// # Returns
/// - `Ok(Vec<PositionChange>)` - Rows to update, the moved child included
/// - `Err(PositionError::OutOfRange)` - `target` is outside `1..=siblings.len()`
/// - `Err(PositionError::UnknownItem)` - `moved_id` is not one of `siblings`
pub fn plan_move(
    siblings: &[Slot],
    moved_id: i32,
    target: i32,
) -> Result<Vec<PositionChange>, PositionError> {
    check_range(target, siblings.len() as i32)?;
    let current = find(siblings, moved_id)?.position;

    if current == target {
        return Ok(Vec::new());
    }

    let mut changes: Vec<PositionChange> = siblings
        .iter()
        .filter(|s| s.id != moved_id)
        .filter_map(|s| {
            if target > current && s.position > current && s.position <= target {
                Some(PositionChange::new(s.id, s.position - 1))
            } else if target < current && s.position >= target && s.position < current {
                Some(PositionChange::new(s.id, s.position + 1))
            } else {
                None
            }
        })
        .collect();
    changes.push(PositionChange::new(moved_id, target));

    Ok(changes)
}

/// Plans moving `moved_id` out of `source` into `target_siblings` at `target`.
///
/// The move closes the gap in the source container, then opens one in the target: every
/// target sibling at or after `target` shifts down by one. The target accepts one more
/// position than it holds children, so appending at the end is allowed.
///
/// # Returns
/// - `Ok(TransferPlan)` - Changes for both containers and their new counts
/// - `Err(PositionError::OutOfRange)` - `target` is outside `1..=target_siblings.len() + 1`
/// - `Err(PositionError::UnknownItem)` - `moved_id` is not one of `source`
pub fn plan_transfer(
    source: &[Slot],
    target_siblings: &[Slot],
    moved_id: i32,
    target: i32,
) -> Result<TransferPlan, PositionError> {
    let target_count = target_siblings.len() as i32 + 1;
    check_range(target, target_count)?;

    let source_changes = plan_removal(source, moved_id)?;

    let mut target_changes: Vec<PositionChange> = target_siblings
        .iter()
        .filter(|s| s.position >= target)
        .map(|s| PositionChange::new(s.id, s.position + 1))
        .collect();
    target_changes.push(PositionChange::new(moved_id, target));

    Ok(TransferPlan {
        source: source_changes,
        target: target_changes,
        source_count: source.len() as i32 - 1,
        target_count,
    })
}

fn check_range(position: i32, max: i32) -> Result<(), PositionError> {
    if position < 1 || position > max {
        return Err(PositionError::OutOfRange { position, max });
    }
    Ok(())
}

fn find(siblings: &[Slot], id: i32) -> Result<Slot, PositionError> {
    siblings
        .iter()
        .find(|s| s.id == id)
        .copied()
        .ok_or(PositionError::UnknownItem(id))
}
