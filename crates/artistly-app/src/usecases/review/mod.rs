//! Review dashboard use cases.
//! 审核后台用例

mod get_application_detail;
mod get_status_counts;
mod list_applications;
mod review_application;

pub use get_application_detail::GetApplicationDetail;
pub use get_status_counts::GetStatusCounts;
pub use list_applications::{ListApplications, DEFAULT_PAGE_SIZE};
pub use review_application::ReviewApplication;
