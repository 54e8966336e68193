use crate::shared::api_utils::{ApiConfig, InvalidBaseUrl};

const API_BASE: &str = "/api/dashboard";

pub const SUMMARY_PATH: &str = "/visao-geral";
pub const PAYMENT_METHODS_PATH: &str = "/vendas/metodo-pagamento";
pub const PRODUCTS_PATH: &str = "/vendas/produto";
pub const DAILY_SALES_PATH: &str = "/vendas/diarias";

/// Absolute URLs of the four overview sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEndpoints {
    pub summary: String,
    pub payment_methods: String,
    pub products: String,
    pub daily_sales: String,
}

impl OverviewEndpoints {
    pub fn resolve(config: &ApiConfig) -> Result<Self, InvalidBaseUrl> {
        let url = |path: &str| config.url(&format!("{}{}", API_BASE, path));
        Ok(Self {
            summary: url(SUMMARY_PATH)?,
            payment_methods: url(PAYMENT_METHODS_PATH)?,
            products: url(PRODUCTS_PATH)?,
            daily_sales: url(DAILY_SALES_PATH)?,
        })
    }
}
