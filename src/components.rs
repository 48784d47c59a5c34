//! Dashboard chrome and widgets shared between pages.

mod layout;
mod navbar;
mod rider_list;

pub use {
    layout::DashboardLayout,
    navbar::DashboardNavbar,
    rider_list::{RiderFeedProvider, RiderListWidget},
};
