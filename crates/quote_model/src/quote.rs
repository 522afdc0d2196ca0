//! Quote and line-item records
//!
//! `total_amount` is a cached derived field: it is recomputed by every
//! item mutation and is never settable on its own.

use crate::error::ModelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validity window applied when a quote leaves `validity_days` unset
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// Workflow status of a quote. A closed set; transitions are not
/// restricted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Bozza,
    DaControllare,
    DaConfermare,
    Inviato,
    Accettato,
    Rifiutato,
    Annullato,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Bozza => "bozza",
            QuoteStatus::DaControllare => "da_controllare",
            QuoteStatus::DaConfermare => "da_confermare",
            QuoteStatus::Inviato => "inviato",
            QuoteStatus::Accettato => "accettato",
            QuoteStatus::Rifiutato => "rifiutato",
            QuoteStatus::Annullato => "annullato",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single line item, owned exclusively by its quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    pub id: Uuid,
    /// What is being quoted (required, non-empty)
    pub description: String,
    pub item_notes: Option<String>,
    /// Defaults to 1
    pub quantity: f64,
    /// Defaults to 0
    pub unit_price: f64,
    /// Display and export order, ascending
    pub sort_order: u32,
}

impl QuoteItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            item_notes: None,
            quantity: 1.0,
            unit_price: 0.0,
            sort_order: 0,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.item_notes = Some(notes.into());
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = unit_price;
        self
    }

    pub fn with_sort_order(mut self, sort_order: u32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// quantity × unit price
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.description.trim().is_empty() {
            return Err(ModelError::EmptyDescription);
        }
        Ok(())
    }
}

/// A business quote: one client, ordered line items, a derived total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    /// Sequential number assigned by the data layer's counter
    pub quote_number: u32,
    pub client_id: Uuid,
    pub quote_date: NaiveDate,
    /// Falls back to [`DEFAULT_VALIDITY_DAYS`] when unset
    pub validity_days: Option<u32>,
    #[serde(default)]
    pub status: QuoteStatus,
    pub notes: Option<String>,
    /// Derived: always the sum of `quantity * unit_price` over items
    pub total_amount: f64,
    pub items: Vec<QuoteItem>,
}

impl Quote {
    pub fn new(client_id: Uuid, quote_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            quote_number: 0,
            client_id,
            quote_date,
            validity_days: None,
            status: QuoteStatus::default(),
            notes: None,
            total_amount: 0.0,
            items: Vec::new(),
        }
    }

    pub fn with_quote_number(mut self, quote_number: u32) -> Self {
        self.quote_number = quote_number;
        self
    }

    pub fn with_validity_days(mut self, days: u32) -> Self {
        self.validity_days = Some(days);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Append an item, assigning the next sort position
    pub fn add_item(&mut self, mut item: QuoteItem) -> Result<(), ModelError> {
        item.validate()?;
        item.sort_order = self.items.len() as u32;
        self.items.push(item);
        self.recalculate_total();
        Ok(())
    }

    /// Insert an item keeping its explicit sort position
    pub fn add_item_with_order(&mut self, item: QuoteItem) -> Result<(), ModelError> {
        item.validate()?;
        self.items.push(item);
        self.recalculate_total();
        Ok(())
    }

    /// Replace an existing item (matched by id)
    pub fn update_item(&mut self, item: QuoteItem) -> Result<(), ModelError> {
        item.validate()?;
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(ModelError::ItemNotFound(item.id))?;
        *slot = item;
        self.recalculate_total();
        Ok(())
    }

    /// Remove an item by id
    pub fn remove_item(&mut self, item_id: Uuid) -> Result<(), ModelError> {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(ModelError::ItemNotFound(item_id));
        }
        self.recalculate_total();
        Ok(())
    }

    /// Items ordered by `sort_order` ascending (stable)
    pub fn sorted_items(&self) -> Vec<&QuoteItem> {
        let mut items: Vec<&QuoteItem> = self.items.iter().collect();
        items.sort_by_key(|i| i.sort_order);
        items
    }

    /// Validity window, applying the documented default
    pub fn effective_validity_days(&self) -> u32 {
        self.validity_days.unwrap_or(DEFAULT_VALIDITY_DAYS)
    }

    fn recalculate_total(&mut self) {
        self.total_amount = self.items.iter().map(QuoteItem::line_total).sum();
    }
}
