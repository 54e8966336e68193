//! Render-ready snapshot of the overview dashboard.
//!
//! Everything here is pure: the same source payloads always derive the same
//! [`DashboardViewModel`].

use contracts::dashboards::d100_overview::{
    DailySales, OverviewSummaryResponse, PaymentMethodSales, ProductSales, TrialPlanInfo,
};
use std::cmp::Ordering;

/// Summary card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
    /// Icon name from the icon() helper
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickActionId {
    RegisterSale,
    AddProduct,
    OpenCashRegister,
    Customers,
    Reports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: QuickActionId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Shortcut tiles, in display order. Not data-derived.
pub const QUICK_ACTIONS: [QuickAction; 5] = [
    QuickAction {
        id: QuickActionId::RegisterSale,
        label: "Registrar Venda",
        icon: "shopping-cart",
    },
    QuickAction {
        id: QuickActionId::AddProduct,
        label: "Adicionar Produto",
        icon: "plus-circle",
    },
    QuickAction {
        id: QuickActionId::OpenCashRegister,
        label: "Abrir Caixa",
        icon: "dollar-sign",
    },
    QuickAction {
        id: QuickActionId::Customers,
        label: "Clientes",
        icon: "user",
    },
    QuickAction {
        id: QuickActionId::Reports,
        label: "Relatórios",
        icon: "file-text",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
}

/// Labels and values one chart panel draws, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub kind: ChartKind,
    /// Dataset legend for bar charts
    pub series_label: Option<&'static str>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn new(title: &'static str, kind: ChartKind, series_label: Option<&'static str>) -> Self {
        Self {
            title,
            kind,
            series_label,
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, label: &str, value: f64) {
        self.labels.push(label.to_string());
        self.values.push(value);
    }

    /// Empty series render the "no data" placeholder
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub payment_methods: ChartSeries,
    pub products: ChartSeries,
    pub daily_sales: ChartSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub cards: [Card; 4],
    pub alerts: Vec<Alert>,
    pub quick_actions: Vec<QuickAction>,
    pub charts: ChartSet,
}

impl DashboardViewModel {
    pub fn from_sources(
        summary: &OverviewSummaryResponse,
        payment_methods: &[PaymentMethodSales],
        products: &[ProductSales],
        daily_sales: &[DailySales],
    ) -> Self {
        Self {
            cards: build_cards(summary),
            alerts: build_alerts(summary),
            quick_actions: QUICK_ACTIONS.to_vec(),
            charts: ChartSet {
                payment_methods: payment_method_series(payment_methods),
                products: product_series(products),
                daily_sales: daily_sales_series(daily_sales),
            },
        }
    }

    /// What the dashboard shows when nothing could be loaded
    pub fn fallback() -> Self {
        Self::from_sources(&OverviewSummaryResponse::default(), &[], &[], &[])
    }
}

/// Number as the backend sent it: `150.5` -> "150.5", `40` -> "40".
///
/// Magnitudes outside `[1e-6, 1e21)` switch to exponent form the way a
/// browser prints them (`1e+21`, `1.5e-7`).
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // also covers -0.0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if value.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        return exponent_form(value);
    }
    value.to_string()
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Cards in fixed order: sales today, stock, active customers, weekly sales
pub fn build_cards(summary: &OverviewSummaryResponse) -> [Card; 4] {
    [
        Card {
            title: "Total Vendas Hoje",
            value: format!("R$ {}", format_amount(summary.total_vendas_hoje)),
            icon: "credit-card",
        },
        Card {
            title: "Produtos em Estoque",
            value: format_amount(summary.produtos_em_estoque),
            icon: "package",
        },
        Card {
            title: "Clientes Ativos",
            value: format_amount(summary.clientes_ativos),
            icon: "users",
        },
        Card {
            title: "Vendas Semanais",
            value: format_amount(summary.vendas_semana),
            icon: "bar-chart",
        },
    ]
}

/// Backend alerts first, in source order; then one alert per trial plan,
/// soonest expiry first.
///
/// The two groups are never interleaved, however urgent a plan is.
pub fn build_alerts(summary: &OverviewSummaryResponse) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = summary
        .alertas
        .iter()
        .map(|message| Alert {
            message: message.clone(),
        })
        .collect();

    let mut plans: Vec<&TrialPlanInfo> = summary
        .plano_experimental
        .iter()
        .map(|(_, info)| info)
        .collect();
    // stable: equal days keep mapping order
    plans.sort_by(|a, b| {
        a.effective_days()
            .partial_cmp(&b.effective_days())
            .unwrap_or(Ordering::Equal)
    });

    alerts.extend(plans.into_iter().map(|info| Alert {
        message: plan_alert_message(info),
    }));
    alerts
}

pub fn plan_alert_message(info: &TrialPlanInfo) -> String {
    format!(
        "Plano {}: {} dia(s) restante(s)",
        info.tipo_plano,
        format_amount(info.effective_days())
    )
}

pub fn payment_method_series(entries: &[PaymentMethodSales]) -> ChartSeries {
    let mut series = ChartSeries::new("Vendas por método de pagamento", ChartKind::Pie, None);
    for entry in entries {
        series.push(&entry.metodo, entry.total);
    }
    series
}

pub fn product_series(entries: &[ProductSales]) -> ChartSeries {
    let mut series = ChartSeries::new(
        "Vendas por produto",
        ChartKind::Bar,
        Some("Quantidade Vendida"),
    );
    for entry in entries {
        series.push(&entry.nome, entry.total);
    }
    series
}

pub fn daily_sales_series(entries: &[DailySales]) -> ChartSeries {
    let mut series = ChartSeries::new("Vendas diárias da semana", ChartKind::Bar, Some("Vendas R$"));
    for entry in entries {
        series.push(&entry.dia, entry.total);
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_overview::TrialPlans;

    fn plans(entries: &[(&str, &str, Option<f64>)]) -> TrialPlans {
        entries
            .iter()
            .map(|(key, label, days)| (key.to_string(), TrialPlanInfo::new(label, *days)))
            .collect()
    }

    fn messages(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.message.as_str()).collect()
    }

    fn scenario_summary() -> OverviewSummaryResponse {
        OverviewSummaryResponse {
            total_vendas_hoje: 150.5,
            produtos_em_estoque: 40.0,
            produtos_zerados: 0.0,
            clientes_ativos: 12.0,
            vendas_semana: 7.0,
            plano_experimental: plans(&[("a", "Pro", Some(3.0)), ("b", "Basic", Some(1.0))]),
            alertas: vec!["Low stock: SKU123".to_string()],
        }
    }

    #[test]
    fn test_scenario_cards() {
        let cards = build_cards(&scenario_summary());
        let pairs: Vec<(&str, &str)> = cards.iter().map(|c| (c.title, c.value.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("Total Vendas Hoje", "R$ 150.5"),
                ("Produtos em Estoque", "40"),
                ("Clientes Ativos", "12"),
                ("Vendas Semanais", "7"),
            ]
        );
    }

    #[test]
    fn test_card_icons_are_fixed() {
        let icons: Vec<&str> = build_cards(&scenario_summary()).iter().map(|c| c.icon).collect();
        assert_eq!(icons, vec!["credit-card", "package", "users", "bar-chart"]);
    }

    #[test]
    fn test_default_summary_cards_are_zero() {
        let cards = build_cards(&OverviewSummaryResponse::default());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["R$ 0", "0", "0", "0"]);
    }

    #[test]
    fn test_scenario_alerts() {
        let alerts = build_alerts(&scenario_summary());
        assert_eq!(
            messages(&alerts),
            vec![
                "Low stock: SKU123",
                "Plano Basic: 1 dia(s) restante(s)",
                "Plano Pro: 3 dia(s) restante(s)",
            ]
        );
    }

    #[test]
    fn test_raw_alerts_precede_urgent_plans() {
        let summary = OverviewSummaryResponse {
            plano_experimental: plans(&[("x", "Trial", Some(0.0))]),
            alertas: vec!["first".to_string(), "second".to_string()],
            ..Default::default()
        };
        assert_eq!(
            messages(&build_alerts(&summary)),
            vec!["first", "second", "Plano Trial: 0 dia(s) restante(s)"]
        );
    }

    #[test]
    fn test_unusable_days_sort_as_zero_and_ties_keep_order() {
        let summary = OverviewSummaryResponse {
            plano_experimental: plans(&[
                ("p1", "Five", Some(5.0)),
                ("p2", "Missing", None),
                ("p3", "NaN", Some(f64::NAN)),
                ("p4", "Zero", Some(0.0)),
                ("p5", "Two", Some(2.0)),
            ]),
            ..Default::default()
        };
        assert_eq!(
            messages(&build_alerts(&summary)),
            vec![
                "Plano Missing: 0 dia(s) restante(s)",
                "Plano NaN: 0 dia(s) restante(s)",
                "Plano Zero: 0 dia(s) restante(s)",
                "Plano Two: 2 dia(s) restante(s)",
                "Plano Five: 5 dia(s) restante(s)",
            ]
        );
    }

    #[test]
    fn test_no_alerts_for_empty_summary() {
        assert!(build_alerts(&OverviewSummaryResponse::default()).is_empty());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.5), "150.5");
        assert_eq!(format_amount(40.0), "40");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(-3.25), "-3.25");
    }

    #[test]
    fn test_format_amount_extreme_magnitudes() {
        assert_eq!(format_amount(1e21), "1e+21");
        assert_eq!(format_amount(2.5e22), "2.5e+22");
        assert_eq!(format_amount(-1e21), "-1e+21");
        assert_eq!(format_amount(1e-7), "1e-7");
        assert_eq!(format_amount(1.5e-7), "1.5e-7");
        // still plain inside the range
        assert_eq!(format_amount(1e20), "100000000000000000000");
        assert_eq!(format_amount(0.000001), "0.000001");
    }

    #[test]
    fn test_quick_actions_fixed_order() {
        let labels: Vec<&str> = QUICK_ACTIONS.iter().map(|a| a.label).collect();
        assert_eq!(
            labels,
            vec![
                "Registrar Venda",
                "Adicionar Produto",
                "Abrir Caixa",
                "Clientes",
                "Relatórios",
            ]
        );
    }

    #[test]
    fn test_chart_series_keep_source_order() {
        let methods = vec![
            PaymentMethodSales {
                metodo: "PIX".to_string(),
                total: 3.0,
            },
            PaymentMethodSales {
                metodo: "CARTAO".to_string(),
                total: 9.0,
            },
        ];
        let series = payment_method_series(&methods);

        assert_eq!(series.kind, ChartKind::Pie);
        assert_eq!(series.series_label, None);
        assert_eq!(series.labels, vec!["PIX", "CARTAO"]);
        assert_eq!(series.values, vec![3.0, 9.0]);
        assert_eq!(series.points().collect::<Vec<_>>(), vec![("PIX", 3.0), ("CARTAO", 9.0)]);
    }

    #[test]
    fn test_bar_series_labels() {
        let products = product_series(&[ProductSales {
            nome: "Café".to_string(),
            total: 4.0,
        }]);
        assert_eq!(products.kind, ChartKind::Bar);
        assert_eq!(products.series_label, Some("Quantidade Vendida"));

        let days = daily_sales_series(&[DailySales {
            dia: "Segunda".to_string(),
            total: 120.0,
        }]);
        assert_eq!(days.series_label, Some("Vendas R$"));
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn test_empty_sources_give_empty_series() {
        let vm = DashboardViewModel::from_sources(&scenario_summary(), &[], &[], &[]);
        assert!(vm.charts.payment_methods.is_empty());
        assert!(vm.charts.products.is_empty());
        assert!(vm.charts.daily_sales.is_empty());
        // summary slice unaffected
        assert_eq!(vm.cards[0].value, "R$ 150.5");
        assert_eq!(vm.alerts.len(), 3);
    }

    #[test]
    fn test_fallback_view_model() {
        let vm = DashboardViewModel::fallback();
        assert_eq!(vm.cards.len(), 4);
        assert!(vm.alerts.is_empty());
        assert_eq!(vm.quick_actions, QUICK_ACTIONS.to_vec());
        assert!(vm.charts.payment_methods.is_empty());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let products = vec![ProductSales {
            nome: "Pão".to_string(),
            total: 2.0,
        }];
        let first = DashboardViewModel::from_sources(&scenario_summary(), &[], &products, &[]);
        let second = DashboardViewModel::from_sources(&scenario_summary(), &[], &products, &[]);
        assert_eq!(first, second);
    }
}
