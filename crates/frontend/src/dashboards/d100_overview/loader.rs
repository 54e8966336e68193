//! One load cycle of the overview dashboard.
//!
//! The four sources are fetched concurrently and each degrades to its empty
//! value on its own. [`load_overview`] always returns a view model: failures
//! outside the per-source fallback are reported to an [`ErrorSink`] and end in
//! [`DashboardViewModel::fallback`].

use super::api::OverviewEndpoints;
use super::view_model::DashboardViewModel;
use crate::shared::api_utils::{ApiConfig, InvalidBaseUrl};
use crate::shared::data_source::{DataSourceClient, HttpTransport};
use contracts::dashboards::d100_overview::{
    DailySales, OverviewSummaryResponse, PaymentMethodSales, ProductSales,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Cannot resolve dashboard endpoints: {0}")]
    InvalidBaseUrl(#[from] InvalidBaseUrl),
}

/// Receives failures that escaped the per-source fallback
pub trait ErrorSink {
    fn report(&self, error: &AggregationError);
}

/// Browser console via `log`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ErrorSink for ConsoleSink {
    fn report(&self, error: &AggregationError) {
        log::error!("D100 overview load failed: {}", error);
    }
}

pub async fn load_overview<T>(
    client: &DataSourceClient<T>,
    config: &ApiConfig,
    sink: &dyn ErrorSink,
) -> DashboardViewModel
where
    T: HttpTransport,
{
    match assemble(client, config).await {
        Ok(view_model) => view_model,
        Err(err) => {
            sink.report(&err);
            DashboardViewModel::fallback()
        }
    }
}

async fn assemble<T>(
    client: &DataSourceClient<T>,
    config: &ApiConfig,
) -> Result<DashboardViewModel, AggregationError>
where
    T: HttpTransport,
{
    let endpoints = OverviewEndpoints::resolve(config)?;

    let (summary, payment_methods, products, daily_sales) = futures::join!(
        client.fetch_json_or_default(&endpoints.summary, OverviewSummaryResponse::default()),
        client.fetch_json_or_default(
            &endpoints.payment_methods,
            Vec::<PaymentMethodSales>::new()
        ),
        client.fetch_json_or_default(&endpoints.products, Vec::<ProductSales>::new()),
        client.fetch_json_or_default(&endpoints.daily_sales, Vec::<DailySales>::new()),
    );

    log::debug!(
        "D100 overview loaded: {} alerts, {} plans, {} payment methods, {} products, {} days",
        summary.alertas.len(),
        summary.plano_experimental.len(),
        payment_methods.len(),
        products.len(),
        daily_sales.len()
    );

    Ok(DashboardViewModel::from_sources(
        &summary,
        &payment_methods,
        &products,
        &daily_sales,
    ))
}
