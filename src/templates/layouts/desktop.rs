use maud::{html, Markup, DOCTYPE};

pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, logo_url: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      @if let Some(url) = logo_url {
                          img src=(url) alt="Stays" height="40";
                      } @else {
                          // house icon
                          svg
                              xmlns="http://www.w3.org/2000/svg"
                              width="28"
                              height="28"
                              viewBox="0 0 24 24"
                              fill="none"
                              stroke="#ff385c"
                              stroke-width="2"
                              stroke-linecap="round"
                              stroke-linejoin="round"
                          {
                              path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                              path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                              path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                              path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                          }
                          span { "Stays" }
                      }
                  }
                  h3 { "Rental Listings" }
              }
                (content)
            }
        }
    }
}
