pub mod cell;
pub mod criteria;
pub mod listing;
pub mod pipeline;
pub mod view_state;

pub use cell::Cell;
pub use criteria::{FilterCriteria, FilterOptions, RentRange};
pub use listing::{Listing, ListingRow};
pub use view_state::ViewState;
