pub mod block;
pub mod cell;
pub mod column;
pub mod error;
pub mod grid;
pub mod report;
pub mod rules;

pub use block::{ContiguousBlock, normalize_cell_key, normalize_key};
pub use cell::CellValue;
pub use column::{ColumnRange, column_index, column_letters};
pub use error::{Result, RosterError};
pub use grid::SheetGrid;
pub use report::{KeyOutcome, MissingSubunit, RedistributionReport};
pub use rules::{CompiledRule, CopyRule, RuleSet};
