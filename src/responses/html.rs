use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

fn respond(status: u16, content_type: &mime::Mime, body: String) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", content_type.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

pub fn html_response(markup: Markup) -> ResultResp {
    respond(200, &mime::TEXT_HTML_UTF_8, markup.into_string())
}

pub fn css_response(css: &'static str) -> ResultResp {
    respond(200, &mime::TEXT_CSS_UTF_8, css.to_string())
}

pub fn text_response(status: u16, text: &str) -> ResultResp {
    respond(status, &mime::TEXT_PLAIN_UTF_8, text.to_string())
}
