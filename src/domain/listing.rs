use chrono::NaiveDate;

use crate::db::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub description: Option<String>,

    pub host_id: Option<String>,
    pub host_name: Option<String>,
    pub host_location: Option<String>,
    /// Raw flag as stored. See `is_superhost`.
    pub host_is_superhost: Option<String>,

    pub price: f64,
    pub weekly_price: Option<f64>,
    pub monthly_price: Option<f64>,
    pub security_deposit: Option<f64>,

    /// Serialized list, e.g. `['Wifi', 'Kitchen']`.
    pub amenities: Option<String>,
    pub picture_url: Option<String>,
    pub country: String,
    pub review_score: Option<f64>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub listed_on: Option<NaiveDate>,
}

impl Listing {
    /// Builds row `i` of a listings table. Columns that aren't in the
    /// projection read as empty.
    pub fn from_row(table: &Table, i: usize) -> Self {
        Self {
            id: table.text(i, "id").unwrap_or_default(),
            name: table.text(i, "name").unwrap_or_default(),
            description: table.text(i, "description"),
            host_id: table.text(i, "host_id"),
            host_name: table.text(i, "host_name"),
            host_location: table.text(i, "host_location"),
            host_is_superhost: table.text(i, "host_is_superhost"),
            price: table.real(i, "price").unwrap_or(0.0),
            weekly_price: table.real(i, "weekly_price"),
            monthly_price: table.real(i, "monthly_price"),
            security_deposit: table.real(i, "security_deposit"),
            amenities: table.text(i, "amenities"),
            picture_url: table.text(i, "picture_url"),
            country: table.text(i, "country").unwrap_or_default(),
            review_score: table.real(i, "review_score"),
            latitude: table.real(i, "latitude"),
            longitude: table.real(i, "longitude"),
            listed_on: table
                .text(i, "listed_on")
                .and_then(|s| NaiveDate::parse_from_str(s.get(..10).unwrap_or(&s), "%Y-%m-%d").ok()),
        }
    }

    /// Exact comparison against `"true"`; anything else is not a superhost.
    pub fn is_superhost(&self) -> bool {
        self.host_is_superhost.as_deref() == Some("true")
    }

    pub fn amenities_display(&self) -> String {
        self.amenities
            .as_deref()
            .unwrap_or("")
            .replace(['[', ']', '\''], "")
    }

    /// "cozy loft in soho" -> "Cozy Loft In Soho"
    pub fn title(&self) -> String {
        title_case(&self.name)
    }
}

pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Listings in fetch order, plus which columns the fetch actually returned.
#[derive(Debug, Clone, Default)]
pub struct ListingSet {
    pub columns: Vec<String>,
    pub listings: Vec<Listing>,
}

impl ListingSet {
    pub fn from_table(table: &Table) -> Self {
        Self {
            columns: table.columns.clone(),
            listings: (0..table.len()).map(|i| Listing::from_row(table, i)).collect(),
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
