use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 14] = [
    "Rank",
    "Listing ID",
    "Name",
    "Country",
    "Review Score",
    "Price",
    "Currency",
    "Weekly Price",
    "Monthly Price",
    "Security Deposit",
    "Host",
    "Superhost",
    "Listed On",
    "Picture",
];

fn xlsx_err(what: &'static str) -> impl Fn(XlsxError) -> ServerError {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

fn write_opt_number(ws: &mut Worksheet, row: u32, col: u16, v: Option<f64>) -> Result<(), ServerError> {
    if let Some(v) = v {
        ws.write_number(row, col, v).map_err(xlsx_err("number"))?;
    }
    Ok(())
}

/// The current browse result as a workbook, one row per listing in rank order.
pub fn export_listings_xlsx(listings: &[&Listing], country: &str, currency: &str) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err("header"))?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_err("freeze panes"))?;

    for (i, l) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_number(r, 0, r as f64).map_err(xlsx_err("rank"))?;
        worksheet.write_string(r, 1, &l.id).map_err(xlsx_err("id"))?;
        worksheet.write_string(r, 2, &l.name).map_err(xlsx_err("name"))?;
        worksheet.write_string(r, 3, &l.country).map_err(xlsx_err("country"))?;
        write_opt_number(worksheet, r, 4, l.review_score)?;
        worksheet.write_number(r, 5, l.price).map_err(xlsx_err("price"))?;
        worksheet.write_string(r, 6, currency).map_err(xlsx_err("currency"))?;
        write_opt_number(worksheet, r, 7, l.weekly_price)?;
        write_opt_number(worksheet, r, 8, l.monthly_price)?;
        write_opt_number(worksheet, r, 9, l.security_deposit)?;
        worksheet
            .write_string(r, 10, l.host_name.as_deref().unwrap_or(""))
            .map_err(xlsx_err("host"))?;
        worksheet
            .write_string(r, 11, if l.is_superhost() { "Yes" } else { "No" })
            .map_err(xlsx_err("superhost"))?;

        let listed = l.listed_on.map(|d| d.to_string()).unwrap_or_default();
        worksheet.write_string(r, 12, listed).map_err(xlsx_err("date"))?;
        worksheet
            .write_string(r, 13, l.picture_url.as_deref().unwrap_or(""))
            .map_err(xlsx_err("picture"))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, &format!("listings_{country}.xlsx"))
}
