//! Spreadsheet export of the whole order book.

use model::entities::{client, order};
use tracing::{error, info, instrument};

use crate::error::{ComputeError, Result};
use crate::xlsx::{Cell, Worksheet, write_workbook};

pub const SHEET_NAME: &str = "Orders";
pub const FILE_NAME: &str = "orders.xlsx";
pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const HEADER: [&str; 10] = [
    "ID", "Client", "Phone", "City", "Type", "Material", "Width", "Height", "Price", "Status",
];

/// Build the `orders.xlsx` workbook: the header row, then one row per order in
/// the given order.
///
/// A single order without its client aborts the whole export.
#[instrument(skip(rows), fields(orders = rows.len()))]
pub fn orders_workbook(rows: &[(order::Model, Option<client::Model>)]) -> Result<Vec<u8>> {
    let mut sheet = Worksheet::new(SHEET_NAME);
    sheet.append_row(HEADER.iter().map(|h| Cell::text(*h)).collect());

    for (order, client) in rows {
        let Some(client) = client else {
            error!(
                order_id = order.id,
                client_id = order.client_id,
                "Export aborted: order without client"
            );
            return Err(ComputeError::OrphanOrder {
                order_id: order.id,
                client_id: order.client_id,
            });
        };

        sheet.append_row(vec![
            Cell::from(order.id),
            Cell::text(client.name.as_str()),
            Cell::text(client.phone.as_str()),
            Cell::text(client.city.as_str()),
            Cell::text(order.furniture_type.as_str()),
            Cell::text(order.material.as_str()),
            Cell::from(order.width),
            Cell::from(order.height),
            Cell::from(order.price),
            Cell::text(order.status.as_str()),
        ]);
    }

    let bytes = write_workbook(&sheet)?;
    info!("Exported {} orders", rows.len());
    Ok(bytes)
}
