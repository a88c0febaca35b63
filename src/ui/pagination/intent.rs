use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationIntent {
    Next,
    Previous,
    First,
    Last,
    /// Advance to the next allowed page size and return to page 1.
    CycleSize,
    SetSize(u32),
    /// A page arrived reporting this many records in total.
    Loaded { total: u64 },
}

impl Intent for PaginationIntent {}
