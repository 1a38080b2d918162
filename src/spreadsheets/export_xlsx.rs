use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use crate::templates::components::listing_table::{indexed_rows, TABLE_HEADERS};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

pub const EXPORT_FILENAME: &str = "listings.xlsx";

/// Same columns as the results table; the link column holds the raw URL.
pub fn build_listings_workbook(listings: &[Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Listings")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {e}")))?;

    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for row in indexed_rows(listings) {
        write_row(worksheet, row.index as u32, row.listing).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write listing {}: {e}", row.listing.id))
        })?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_row(worksheet: &mut Worksheet, r: u32, listing: &Listing) -> Result<(), XlsxError> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    worksheet.write_number(r, 0, r as f64)?;
    worksheet.write_string(r, 1, text(&listing.name))?;
    worksheet.write_string(r, 2, text(&listing.address))?;
    worksheet.write_string(r, 3, text(&listing.floor))?;
    worksheet.write_number(r, 4, listing.rent)?;
    worksheet.write_string(r, 5, text(&listing.floor_plan))?;
    worksheet.write_string(r, 6, text(&listing.detail_url))?;
    Ok(())
}

pub fn export_listings_xlsx(listings: &[Listing]) -> ResultResp {
    let buffer = build_listings_workbook(listings)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}
