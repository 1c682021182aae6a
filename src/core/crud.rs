//! Generic list/add/edit/delete helpers shared by every page controller.

use crate::core::state::Collection;
use crate::errors::{AppError, AppResult};
use crate::models::Record;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Edit,
    Delete,
    Import,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Edit => "edit",
            Operation::Delete => "del",
            Operation::Import => "import",
        }
    }
}

/// A mutation applied to one collection; drives persistence, the audit log
/// and the sync queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub collection: Collection,
    pub operation: Operation,
    pub record_id: i64,
}

impl Change {
    pub fn new(collection: Collection, operation: Operation, record_id: i64) -> Self {
        Self {
            collection,
            operation,
            record_id,
        }
    }
}

/// Next free identifier: `max(id) + 1`, or 1 for an empty collection.
pub fn next_id<T: Record>(items: &[T]) -> i64 {
    items.iter().map(Record::id).max().unwrap_or(0) + 1
}

pub fn find<T: Record>(items: &[T], id: i64) -> AppResult<&T> {
    items
        .iter()
        .find(|r| r.id() == id)
        .ok_or(AppError::NotFound {
            entity: T::ENTITY,
            id,
        })
}

/// Fail with `NotFound` unless a record with `id` exists.
pub fn require<T: Record>(items: &[T], id: i64) -> AppResult<()> {
    find(items, id).map(|_| ())
}

/// Append `record` with a fresh id and return that id.
pub fn insert<T: Record>(items: &mut Vec<T>, mut record: T) -> i64 {
    let id = next_id(items);
    record.set_id(id);
    items.push(record);
    id
}

/// Replace the record carrying the same id.
pub fn replace<T: Record>(items: &mut [T], record: T) -> AppResult<()> {
    let id = record.id();
    let slot = items
        .iter_mut()
        .find(|r| r.id() == id)
        .ok_or(AppError::NotFound {
            entity: T::ENTITY,
            id,
        })?;
    *slot = record;
    Ok(())
}

pub fn remove<T: Record>(items: &mut Vec<T>, id: i64) -> AppResult<T> {
    let pos = items
        .iter()
        .position(|r| r.id() == id)
        .ok_or(AppError::NotFound {
            entity: T::ENTITY,
            id,
        })?;
    Ok(items.remove(pos))
}

/// Required text field: present and not blank.
pub fn required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// One page of a list view.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page actually shown.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into pages of `per_page`; the requested page is clamped
/// into `1..=total_pages` (an empty list has one empty page).
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}
