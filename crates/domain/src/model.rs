pub mod metric;
pub mod row;
pub mod selection;
pub mod tally;

pub use metric::{LINE_TERMINATOR, Metric};
pub use row::{ResultRow, RowLabel, TOTAL_LABEL};
pub use selection::{DEFAULT_METRICS, SelectedMetrics};
pub use tally::Tally;
