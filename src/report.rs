use crate::sorare::Card;
use rust_xlsxwriter::{Workbook, XlsxError};

const SHEET_NAME: &str = "User Cards";
const HEADERS: [&str; 7] = [
    "UserSlug",
    "AssetID",
    "CardSlug",
    "Name",
    "Position",
    "PriceEUR",
    "OnSale",
];

/// Accumulates one row per (user, card) pair and writes the whole table
/// to a single-sheet workbook once the run is over.
pub struct Report {
    rows: Vec<Row>,
}

pub(crate) struct Row {
    pub(crate) user_slug: String,
    pub(crate) card: Card,
}

impl Report {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_cards(&mut self, user_slug: &str, cards: Vec<Card>) {
        for card in cards {
            self.rows.push(Row {
                user_slug: user_slug.to_string(),
                card,
            });
        }
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        self.write_workbook(path)
            .map_err(|err| format!("failed to save {path}: {err}"))
    }

    fn write_workbook(&self, path: &str) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }
        for (i, Row { user_slug, card }) in self.rows.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, user_slug.as_str())?;
            worksheet.write_string(row, 1, card.asset_id.as_str())?;
            worksheet.write_string(row, 2, card.slug.as_str())?;
            if let Some(name) = card.name.as_deref() {
                worksheet.write_string(row, 3, name)?;
            }
            if let Some(position) = card.position.as_deref() {
                worksheet.write_string(row, 4, position)?;
            }
            if let Some(price_eur) = card.price_eur {
                worksheet.write_number(row, 5, price_eur)?;
            }
            worksheet.write_boolean(row, 6, card.on_sale)?;
        }
        workbook.save(path)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
