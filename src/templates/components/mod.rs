use maud::{html, Markup};

pub mod error;
pub mod filter_form;
pub mod listing_map;
pub mod listing_table;

pub use error::html_error_response;
pub use filter_form::{display_toggle, filter_form};
pub use listing_map::listing_map;
pub use listing_table::listing_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}
