//! Reusable view components
//!
//! Building blocks shared by the views: entity links, the edit details
//! table, pagers and the report/search page shells.

mod detail_table;
mod entity_link;
mod pager;
mod release_list;
mod report_layout;
mod row_renderer;
mod search_results;
mod work_list_entry;

pub use detail_table::DetailTable;
pub use entity_link::{artist_credit_link, descriptive_link, entity_link, entity_path};
pub use pager::{page_href, pager};
pub use release_list::{release_list, release_row, release_table};
pub use report_layout::{ReportHeader, filter_link, report_layout, total_text};
pub use row_renderer::{RowRenderer, render_rows};
pub use search_results::{paginated_search_results, result_count, results_layout};
pub use work_list_entry::{WORK_COLUMNS, work_list_entry};
