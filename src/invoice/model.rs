use crate::config::{Business, Customer};
use crate::error::{InvoiceError, Result};

/// One billable line with its derived amounts. `value` and `total` are
/// recomputed by the constructor and every mutator; nothing sets them
/// directly.
#[derive(Debug, Clone)]
pub struct Item {
    description: String,
    unit: String,
    amount: f64,
    unit_price: f64,
    vat_percent: f64,
    value: f64,
    total: f64,
}

impl Item {
    pub fn new(
        description: impl Into<String>,
        unit: impl Into<String>,
        amount: f64,
        unit_price: f64,
        vat_percent: f64,
    ) -> Result<Self> {
        let mut item = Item {
            description: description.into(),
            unit: unit.into(),
            amount,
            unit_price,
            vat_percent,
            value: 0.0,
            total: 0.0,
        };
        item.check("amount", amount)?;
        item.check("unit_price", unit_price)?;
        item.check("vat_percent", vat_percent)?;
        item.recompute();
        Ok(item)
    }

    fn check(&self, field: &str, value: f64) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvoiceError::InvalidItem {
                item: self.description.clone(),
                reason: format!("{field} must be a non-negative number, got {value}"),
            });
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.value = self.amount * self.unit_price;
        self.total = self.value * (1.0 + self.vat_percent / 100.0);
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<()> {
        self.check("amount", amount)?;
        self.amount = amount;
        self.recompute();
        Ok(())
    }

    pub fn set_unit_price(&mut self, unit_price: f64) -> Result<()> {
        self.check("unit_price", unit_price)?;
        self.unit_price = unit_price;
        self.recompute();
        Ok(())
    }

    pub fn set_vat_percent(&mut self, vat_percent: f64) -> Result<()> {
        self.check("vat_percent", vat_percent)?;
        self.vat_percent = vat_percent;
        self.recompute();
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn vat_percent(&self) -> f64 {
        self.vat_percent
    }

    /// Pre-VAT line value: `amount * unit_price`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Line total including VAT.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// One invoice assembled for rendering: the issuing business, the billed
/// customer, and an ordered item list. The invoice total tracks the item
/// sequence and cannot drift from it.
#[derive(Debug, Clone)]
pub struct Invoice {
    number: String,
    date: String,
    due_date: String,
    business: Business,
    customer: Customer,
    items: Vec<Item>,
    total: f64,
}

impl Invoice {
    pub fn new(
        number: impl Into<String>,
        date: impl Into<String>,
        due_date: impl Into<String>,
        business: Business,
        customer: Customer,
        items: Vec<Item>,
    ) -> Self {
        let mut invoice = Invoice {
            number: number.into(),
            date: date.into(),
            due_date: due_date.into(),
            business,
            customer,
            items,
            total: 0.0,
        };
        invoice.recompute();
        invoice
    }

    fn recompute(&mut self) {
        self.total = self.items.iter().map(Item::total).sum();
    }

    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
        self.recompute();
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.recompute();
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of all item totals.
    pub fn total(&self) -> f64 {
        self.total
    }
}
