use axum::extract::State;
use dioxus::prelude::*;

use crate::{
    components::RiderFeedProvider,
    pages::{Page, RidersPage},
    riders::RiderDirectory,
};

#[tracing::instrument(skip_all)]
pub async fn riders(State(directory): State<RiderDirectory>) -> Page<'static> {
    let feed = directory.feed().await;

    Page {
        title: rsx! { "Riders" },
        head: None,
        content: rsx! {
            RiderFeedProvider {
                feed: feed,
                RidersPage {}
            }
        },
    }
}
