pub mod card;
pub mod chart;
pub mod error;
pub mod format;
pub mod listing_card;
pub mod review;

pub use card::card;
pub use chart::{area_chart, ChartPoint};
pub use error::{error_page, view_error};
pub use format::fmt_opt;
pub use listing_card::listing_card;
pub use review::review_item;
