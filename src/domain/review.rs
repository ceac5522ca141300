use crate::db::table::Table;
use crate::domain::listing::title_case;

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub reviewer_name: String,
    pub posted_on: Option<String>,
    pub rating: Option<f64>,
    pub comments: String,
    // From the left join; absent when the listing is gone.
    pub listing_name: Option<String>,
    pub country: Option<String>,
}

impl Review {
    pub fn from_row(table: &Table, i: usize) -> Self {
        Self {
            reviewer_name: table.text(i, "reviewer_name").unwrap_or_default(),
            posted_on: table.text(i, "posted_on"),
            rating: table.real(i, "rating"),
            comments: table.text(i, "comments").unwrap_or_default(),
            listing_name: table.text(i, "listing_name"),
            country: table.text(i, "country"),
        }
    }

    pub fn reviewer_title(&self) -> String {
        title_case(&self.reviewer_name)
    }

    /// "Listing, Country" with whichever half is known.
    pub fn place(&self) -> String {
        match (&self.listing_name, &self.country) {
            (Some(n), Some(c)) => format!("{n}, {c}"),
            (Some(n), None) => n.clone(),
            (None, Some(c)) => c.clone(),
            (None, None) => "Unknown listing".to_string(),
        }
    }
}

pub fn reviews_from_table(table: &Table) -> Vec<Review> {
    (0..table.len()).map(|i| Review::from_row(table, i)).collect()
}
