// templates/components/filter_form.rs
use crate::domain::{FilterCriteria, FilterOptions};
use maud::{html, Markup};

/// Sidebar search controls. `selected` pre-fills the inputs (last search,
/// or the defaults on a fresh session).
pub fn filter_form(options: &FilterOptions, selected: Option<&FilterCriteria>) -> Markup {
    let district = selected.map(|c| c.district.as_str());
    let range = selected.map(|c| c.rent_range).unwrap_or(options.rent_bounds);
    let plan_checked = |plan: &str| selected.is_some_and(|c| c.floor_plans.contains(plan));

    html! {
        form action="/search" method="post" {
            fieldset {
                legend { "District" }
                @if options.districts.is_empty() {
                    p class="muted" { "No districts available." }
                }
                @for name in &options.districts {
                    label {
                        input type="radio" name="district" value=(name) required
                            checked[district == Some(name.as_str())];
                        " " (name)
                    }
                    br;
                }
            }

            fieldset {
                legend { "Rent (万円)" }
                // Bounds are validated server-side; stored rents may have any precision.
                input type="number" name="rent_min" step="any" value=(range.min) required;
                " – "
                input type="number" name="rent_max" step="any" value=(range.max) required;
            }

            fieldset {
                legend { "Floor plan" }
                @for plan in &options.floor_plans {
                    label {
                        input type="checkbox" name="plan" value=(plan) checked[plan_checked(plan.as_str())];
                        " " (plan)
                    }
                    br;
                }
            }

            button type="submit" { "Search" }
        }
    }
}

/// Switches the table between map-plotted listings and every match.
pub fn display_toggle(show_all: bool) -> Markup {
    html! {
        form action="/toggle" method="post" {
            button type="submit" {
                @if show_all {
                    "Show only listings on the map"
                } @else {
                    "Show listings not on the map too"
                }
            }
        }
    }
}
