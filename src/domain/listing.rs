use crate::domain::cell::Cell;

/// One row of `room_ver2` exactly as read from the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingRow {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub floor: Option<String>,
    pub rent: Cell,
    pub floor_plan: Option<String>,
    pub detail_url: Option<String>,
    pub latitude: Cell,
    pub longitude: Cell,
    pub district: Option<String>,
}

/// A listing whose rent is known to be numeric (unit: 万円).
///
/// Coordinates stay raw; they are only coerced when deciding whether the
/// listing can be plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub floor: Option<String>,
    pub rent: f64,
    pub floor_plan: Option<String>,
    pub detail_url: Option<String>,
    pub latitude: Cell,
    pub longitude: Cell,
    pub district: Option<String>,
}

impl Listing {
    /// Builds a listing from a stored row, or `None` when the rent is not numeric.
    pub fn from_row(row: ListingRow) -> Option<Self> {
        let rent = row.rent.to_number()?;

        Some(Self {
            id: row.id,
            name: row.name,
            address: row.address,
            floor: row.floor,
            rent,
            floor_plan: row.floor_plan,
            detail_url: row.detail_url,
            latitude: row.latitude,
            longitude: row.longitude,
            district: row.district,
        })
    }

    /// The detail URL when it is safe to put in an `href` (http/https only).
    pub fn detail_link(&self) -> Option<&str> {
        let url = self.detail_url.as_deref()?.trim();
        let scheme = url.split_once(':')?.0;

        (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
            .then_some(url)
    }

    /// `(latitude, longitude)` when both are present and numeric.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude.to_number()?, self.longitude.to_number()?))
    }
}
