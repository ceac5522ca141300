pub mod browse;
pub mod comments;
pub mod dashboard;
pub mod deep_dive;
pub mod locate;

pub use comments::comments_fragment;
pub use dashboard::{dashboard_page, DashboardVm, Tab};
