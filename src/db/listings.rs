use crate::db::connection::Database;
use crate::domain::pipeline::preprocess;
use crate::domain::{Cell, Listing, ListingRow};
use crate::errors::ServerError;
use rusqlite::types::ValueRef;
use rusqlite::Row;

const SQL_SELECT_LISTINGS: &str = include_str!("../../sql/select_listings.sql");

/// Preprocessed listings plus the load failure, if any, to show the user.
#[derive(Debug, Default)]
pub struct ListingTable {
    pub listings: Vec<Listing>,
    pub error: Option<String>,
}

/// Reads every row of `room_ver2` in id order.
pub fn load_listing_rows(db: &Database) -> Result<Vec<ListingRow>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(SQL_SELECT_LISTINGS)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = stmt
            .query_map([], listing_row)
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?);
        }
        Ok(out)
    })
}

/// Store reader followed by the preprocessor. A failing store yields an
/// empty table and the error message instead of an error.
pub fn load_listing_table(db: &Database) -> ListingTable {
    match load_listing_rows(db) {
        Ok(rows) => ListingTable {
            listings: preprocess(rows),
            error: None,
        },
        Err(e) => {
            log::error!("Error loading data from {}: {e}", db.path().display());
            ListingTable {
                listings: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

fn listing_row(row: &Row<'_>) -> rusqlite::Result<ListingRow> {
    Ok(ListingRow {
        id: row.get(0)?,
        name: text(row.get_ref(1)?),
        address: text(row.get_ref(2)?),
        floor: text(row.get_ref(3)?),
        rent: cell(row.get_ref(4)?),
        floor_plan: text(row.get_ref(5)?),
        detail_url: text(row.get_ref(6)?),
        latitude: cell(row.get_ref(7)?),
        longitude: cell(row.get_ref(8)?),
        district: text(row.get_ref(9)?),
    })
}

fn cell(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Cell::Null,
        ValueRef::Integer(i) => Cell::Integer(i),
        ValueRef::Real(r) => Cell::Real(r),
        ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
    }
}

fn text(value: ValueRef<'_>) -> Option<String> {
    cell(value).into_text()
}
