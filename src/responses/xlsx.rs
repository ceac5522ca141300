// responses/xlsx.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Return XLSX file as an attachment. The filename is reduced to
/// `[A-Za-z0-9._-]` so it can sit inside the quoted header value.
pub fn xlsx_response(buffer: Vec<u8>, filename: &str) -> ResultResp {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect();

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", XLSX_MIME)
        .header("Content-Disposition", format!("attachment; filename=\"{safe}\""))
        .body(Body::from(buffer))
        .map_err(|_| ServerError::InternalError)
}
