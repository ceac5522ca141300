use maud::{html, Markup, DOCTYPE};

use crate::errors::ServerError;

/// Full error page.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to listings" } }
            }
        }
    }
}

/// Inline panel for a single view that failed. The rest of the page renders.
pub fn view_error(view: &str, err: &ServerError) -> Markup {
    html! {
        div class="view-error" role="alert" {
            strong { (view) " is unavailable." }
            p { (err.to_string()) }
        }
    }
}
