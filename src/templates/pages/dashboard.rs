use crate::domain::{FilterOptions, ViewState};
use crate::settings::MapSettings;
use crate::templates::components::{card, display_toggle, filter_form, listing_map, listing_table};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub options: &'a FilterOptions,
    pub view: &'a ViewState,
    pub map: &'a MapSettings,
    /// Store failure to surface as a banner.
    pub store_error: Option<&'a str>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let default_criteria = vm.options.default_criteria();
    let selected = vm
        .view
        .results()
        .map(|results| &results.criteria)
        .or(default_criteria.as_ref());

    desktop_layout(
        "Room Finder",
        html! {
            main class="dashboard" {
                aside {
                    (card("Search", filter_form(vm.options, selected)))
                    (card("Display", display_toggle(vm.view.show_all())))
                }

                div {
                    @if let Some(err) = vm.store_error {
                        div class="alert" role="alert" {
                            "Error loading data from database: " (err)
                        }
                    }

                    @match vm.view.visible() {
                        None => p class="muted" { "Choose your conditions and press Search." },
                        Some(rows) => {
                            (listing_map(rows.map_rows, vm.map))

                            section class="card" id="results" {
                                h3 {
                                    @if vm.view.show_all() {
                                        "All matching listings"
                                    } @else {
                                        "Listings on the map"
                                    }
                                    " (" (rows.table_rows.len()) ")"
                                }
                                (listing_table(rows.table_rows))
                                p { a href="/export.xlsx" { "Download as Excel" } }
                            }
                        }
                    }
                }
            }
        },
    )
}
