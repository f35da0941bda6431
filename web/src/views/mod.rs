//! Page views. One module per page; the organization drill-down pages
//! (kurin → foreman → group → scout) share their bodies and differ only in
//! which typed route the wrapper navigates to next.

mod admin_dashboard;
mod dashboard;
mod foreman_details;
mod group_details;
mod join;
mod kurin_details;
mod liaison_detail;
mod login;
mod my_groups;
mod my_kurin;
mod my_progress;
mod not_found;
mod proba_board;
mod scout_progress;
mod unauthorized;

pub use admin_dashboard::AdminDashboard;
pub use dashboard::{Dashboard, Root};
pub use foreman_details::{AdminForemanDetails, ForemanDetail, LiaisonForemanDetails};
pub use group_details::{AdminGroupDetails, LiaisonGroupDetails};
pub use join::Join;
pub use kurin_details::{AdminKurinDetails, LiaisonKurinDetails};
pub use liaison_detail::LiaisonDetail;
pub use login::Login;
pub use my_groups::MyGroups;
pub use my_kurin::{LiaisonDashboard, MyKurin};
pub use my_progress::MyProgress;
pub use not_found::NotFound;
pub use scout_progress::{AdminScoutProgress, LiaisonScoutProgress, ScoutProgress};
pub use unauthorized::Unauthorized;
