//! The quote data model handed to the layout engine.
//!
//! A [`QuoteDocument`] is assembled by the data-entry layer and treated as
//! read-only input by the composer. Totals are always derived, never stored
//! from outside.

use crate::error::QuoteError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recipient details printed in the information grid of the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub contact_name: String,
    pub company_name: String,
    pub reference_text: String,
    pub phone: String,
    pub email: String,
    pub site_location: String,
}

/// One row of the quote table.
///
/// Fields are private so the derived `total` can never go stale; the only
/// ways in are [`LineItem::new`] and deserialization, both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem", rename_all = "camelCase")]
pub struct LineItem {
    item_number: u32,
    service_name: String,
    description: String,
    quantity: u32,
    unit_price: f64,
    total: f64,
}

impl LineItem {
    pub fn new(
        item_number: u32,
        service_name: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Result<Self, QuoteError> {
        if item_number == 0 {
            return Err(QuoteError::InvalidItemNumber(item_number));
        }
        if quantity == 0 {
            return Err(QuoteError::InvalidQuantity(quantity));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(QuoteError::InvalidUnitPrice(unit_price));
        }
        Ok(Self {
            item_number,
            service_name: service_name.into(),
            description: description.into(),
            quantity,
            unit_price,
            total: unit_price * quantity as f64,
        })
    }

    pub fn item_number(&self) -> u32 {
        self.item_number
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// `unit_price × quantity`, computed when the item was built.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Wire shape of a line item. Any `total` present in the input is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLineItem {
    item_number: u32,
    #[serde(default)]
    service_name: String,
    #[serde(default)]
    description: String,
    quantity: u32,
    unit_price: f64,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = QuoteError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        LineItem::new(
            raw.item_number,
            raw.service_name,
            raw.description,
            raw.quantity,
            raw.unit_price,
        )
    }
}

/// Everything the composer needs to produce one proposal PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDocument {
    #[serde(default)]
    pub client: ClientInfo,
    #[serde(default)]
    pub proposal_object: String,
    #[serde(default)]
    items: Vec<LineItem>,
    /// Printed verbatim after the proposal title. Empty means "derive from configuration".
    #[serde(default)]
    pub proposal_number: String,
    pub issue_date: NaiveDate,
    /// Highest item number ever handed out; numbers are not reused after removal.
    #[serde(default)]
    last_item_number: u32,
}

impl QuoteDocument {
    pub fn new(client: ClientInfo, proposal_object: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            client,
            proposal_object: proposal_object.into(),
            items: Vec::new(),
            proposal_number: String::new(),
            issue_date,
            last_item_number: 0,
        }
    }

    pub fn with_proposal_number(mut self, number: impl Into<String>) -> Self {
        self.proposal_number = number.into();
        self
    }

    /// Appends an item, numbering it one past the highest number handed out so far.
    pub fn add_item(
        &mut self,
        service_name: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Result<&LineItem, QuoteError> {
        let next = self.next_item_number();
        let item = LineItem::new(next, service_name, description, quantity, unit_price)?;
        self.last_item_number = next;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes the item at `index` (display position). Remaining items keep their numbers.
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, QuoteError> {
        if index >= self.items.len() {
            return Err(QuoteError::NoSuchItem(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all item totals, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    fn next_item_number(&self) -> u32 {
        let highest_present = self.items.iter().map(LineItem::item_number).max().unwrap_or(0);
        self.last_item_number.max(highest_present) + 1
    }
}
