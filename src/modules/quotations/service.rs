use anyhow::anyhow;
use tracing::{debug, instrument};

use adspace_core::AppError;
use adspace_models::MonthlyRate;

use crate::modules::pricing::service::{ProrationService, grand_total, vat_amount};
use crate::modules::quotations::model::{QuotationLineItem, QuotationLinePricing, QuotationPricing};

pub struct QuotationService;

impl QuotationService {
    /// Price every line of a quotation and total them.
    #[instrument(skip_all, fields(line_items = items.len()))]
    pub fn price(items: &[QuotationLineItem]) -> Result<QuotationPricing, AppError> {
        let mut lines = Vec::with_capacity(items.len());
        let mut subtotal = 0.0;

        for (index, item) in items.iter().enumerate() {
            let rate = MonthlyRate::new(item.monthly_rate)
                .map_err(|e| AppError::unprocessable(anyhow!("items[{}]: {}", index, e)))?;

            let price = ProrationService::price_breakdown(rate, item.start_date, item.end_date);
            subtotal += price.total_amount;

            lines.push(QuotationLinePricing {
                site_name: item.site_name.clone(),
                site_code: item.site_code.clone(),
                price,
            });
        }

        debug!(subtotal, "Quotation priced");

        Ok(QuotationPricing {
            items: lines,
            subtotal,
            vat_amount: vat_amount(subtotal),
            grand_total: grand_total(subtotal),
        })
    }
}
