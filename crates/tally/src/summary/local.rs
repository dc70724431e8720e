//! Deterministic offline summarizer.
//!
//! Reads a sample of sales-like records and reports total sales, the best
//! product and region by sales, and the most used payment method.

use indexmap::IndexMap;

use crate::data::{Record, Value, ValueKey};
use crate::error::Result;

use super::provider::{Summarizer, SummaryRequest};

/// Text returned when the sample has no records.
pub const NO_DATA: &str = "No data available for analysis.";

const CURRENCY: &str = "₹";

/// Column names the local summarizer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesColumns {
    pub quantity: String,
    pub price: String,
    pub product: String,
    pub region: String,
    pub payment: String,
}

impl Default for SalesColumns {
    fn default() -> Self {
        Self {
            quantity: "Quantity".to_string(),
            price: "Price_per_Unit".to_string(),
            product: "Product".to_string(),
            region: "Region".to_string(),
            payment: "Payment_Method".to_string(),
        }
    }
}

/// Summarizer that never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct LocalSummarizer {
    columns: SalesColumns,
}

impl LocalSummarizer {
    /// Create a summarizer over the default sales columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different column names.
    pub fn with_columns(mut self, columns: SalesColumns) -> Self {
        self.columns = columns;
        self
    }

    /// Render the business summary for a set of records.
    pub fn summary(&self, records: &[Record]) -> String {
        if records.is_empty() {
            return NO_DATA.to_string();
        }

        let cols = &self.columns;
        let mut total_sales = 0.0;
        let mut products = Totals::default();
        let mut regions = Totals::default();
        let mut payments = Totals::default();

        for record in records {
            let quantity = record.number(&cols.quantity).unwrap_or(0.0);
            let price = record.number(&cols.price).unwrap_or(0.0);
            let sales = quantity * price;
            total_sales += sales;

            if let Some(product) = record.get(&cols.product) {
                products.add(product, sales);
            }
            if let Some(region) = record.get(&cols.region) {
                regions.add(region, sales);
            }
            if let Some(payment) = record.get(&cols.payment) {
                payments.add(payment, 1.0);
            }
        }

        let best_product = products.top();
        let best_region = regions.top();
        let top_payment = payments.top();

        let with_sales = |entry: Option<&(Value, f64)>, missing: &str| match entry {
            Some((name, sales)) => format!("{} ({}{})", name, CURRENCY, format_amount(*sales)),
            None => missing.to_string(),
        };
        let name_or_na = |entry: Option<&(Value, f64)>| match entry {
            Some((name, _)) => name.to_string(),
            None => "N/A".to_string(),
        };
        let payment_line = match top_payment {
            Some((name, uses)) => format!("{} ({} uses)", name, *uses as u64),
            None => "No payment data".to_string(),
        };

        format!(
            "📊 Business Analysis:\n\
             - Total Sales: {currency}{total}\n\
             \n\
             🏆 Best Performing:\n\
             - Product: {product}\n\
             - Region: {region}\n\
             - Payment Method: {payment}\n\
             \n\
             ✅ Recommendations:\n\
             - Focus on boosting sales of best-selling product: {product_name}\n\
             - Strengthen marketing in top region: {region_name}\n\
             - Promote preferred payment method ({payment_name}) with cashback/discounts\n\
             - Identify underperforming products/regions and run targeted campaigns",
            currency = CURRENCY,
            total = format_amount(total_sales),
            product = with_sales(best_product, "No product data"),
            region = with_sales(best_region, "No region data"),
            payment = payment_line,
            product_name = name_or_na(best_product),
            region_name = name_or_na(best_region),
            payment_name = name_or_na(top_payment),
        )
    }
}

impl Summarizer for LocalSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        Ok(self.summary(&request.sample))
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Running totals per distinct value, in first-encountered order.
#[derive(Default)]
struct Totals {
    totals: IndexMap<ValueKey, (Value, f64)>,
}

impl Totals {
    fn add(&mut self, value: &Value, amount: f64) {
        self.totals
            .entry(value.key())
            .or_insert_with(|| (value.clone(), 0.0))
            .1 += amount;
    }

    /// Largest total; ties go to the first value seen.
    fn top(&self) -> Option<&(Value, f64)> {
        self.totals
            .values()
            .fold(None, |best: Option<&(Value, f64)>, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
    }
}

/// Format an amount with thousands separators and two decimals.
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
