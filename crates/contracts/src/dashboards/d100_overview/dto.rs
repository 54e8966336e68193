use crate::shared::lenient;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Response of `GET /api/dashboard/visao-geral`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSummaryResponse {
    /// Sales total for today, in BRL
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub total_vendas_hoje: f64,
    /// Products with stock above zero
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub produtos_em_estoque: f64,
    /// Products with zero stock
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub produtos_zerados: f64,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub clientes_ativos: f64,
    /// Sales registered in the current week (Monday..Sunday)
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub vendas_semana: f64,
    /// Trial plans keyed by plan id, in document order
    #[serde(default)]
    pub plano_experimental: TrialPlans,
    /// Free-text alerts produced by the backend; `null` entries are skipped
    #[serde(default, deserialize_with = "lenient::seq_skip_nulls")]
    pub alertas: Vec<String>,
}

/// One trial plan entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialPlanInfo {
    /// Plan label, e.g. "EXPERIMENTAL"
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub tipo_plano: String,
    /// `None` when the backend sent nothing usable
    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub dias_restantes: Option<f64>,
}

impl TrialPlanInfo {
    pub fn new(tipo_plano: &str, dias_restantes: Option<f64>) -> Self {
        Self {
            tipo_plano: tipo_plano.to_string(),
            dias_restantes,
        }
    }

    /// Days remaining, with missing or non-finite values read as zero
    pub fn effective_days(&self) -> f64 {
        self.dias_restantes
            .filter(|days| days.is_finite())
            .unwrap_or(0.0)
    }
}

/// Ordered `planKey -> TrialPlanInfo` mapping.
///
/// Keeps entries in the order they appear in the JSON object; a repeated key
/// overwrites the earlier value in place. `null` reads as an empty mapping,
/// and a `null` plan value is skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialPlans(Vec<(String, TrialPlanInfo)>);

impl TrialPlans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, info: TrialPlanInfo) {
        match self.0.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = info,
            None => self.0.push((key.to_string(), info)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TrialPlanInfo)> {
        self.0.iter().map(|(key, info)| (key.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, TrialPlanInfo)> for TrialPlans {
    fn from_iter<I: IntoIterator<Item = (String, TrialPlanInfo)>>(iter: I) -> Self {
        let mut plans = Self::new();
        for (key, info) in iter {
            plans.insert(&key, info);
        }
        plans
    }
}

impl Serialize for TrialPlans {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, info) in &self.0 {
            map.serialize_entry(key, info)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TrialPlans {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TrialPlansVisitor;

        impl<'de> Visitor<'de> for TrialPlansVisitor {
            type Value = TrialPlans;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of trial plans or null")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(TrialPlans::new())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(TrialPlans::new())
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut plans = TrialPlans::new();
                while let Some((key, info)) =
                    access.next_entry::<String, Option<TrialPlanInfo>>()?
                {
                    if let Some(info) = info {
                        plans.insert(&key, info);
                    }
                }
                Ok(plans)
            }
        }

        deserializer.deserialize_any(TrialPlansVisitor)
    }
}

// ---------------------------------------------------------------------------
// Chart sources
// ---------------------------------------------------------------------------

/// Item of `GET /api/dashboard/vendas/metodo-pagamento`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodSales {
    /// Payment method label, e.g. "PIX"
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub metodo: String,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub total: f64,
}

/// Item of `GET /api/dashboard/vendas/produto`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub nome: String,
    /// Quantity sold
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub total: f64,
}

/// Item of `GET /api/dashboard/vendas/diarias`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    /// Weekday name, e.g. "Segunda"
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub dia: String,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_summary() {
        let json = r#"{
            "totalVendasHoje": 150.5,
            "produtosEmEstoque": 40,
            "produtosZerados": 2,
            "clientesAtivos": 12,
            "vendasSemana": 7,
            "planoExperimental": {
                "a": {"tipoPlano": "Pro", "diasRestantes": 3},
                "b": {"tipoPlano": "Basic", "diasRestantes": 1}
            },
            "alertas": ["Low stock: SKU123"]
        }"#;

        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        assert_eq!(summary.total_vendas_hoje, 150.5);
        assert_eq!(summary.produtos_em_estoque, 40.0);
        assert_eq!(summary.produtos_zerados, 2.0);
        assert_eq!(summary.clientes_ativos, 12.0);
        assert_eq!(summary.vendas_semana, 7.0);
        assert_eq!(summary.alertas, vec!["Low stock: SKU123".to_string()]);

        let keys: Vec<&str> = summary.plano_experimental.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_plan_keys_keep_document_order() {
        let json = r#"{"planoExperimental": {"z": {"tipoPlano": "Z"}, "a": {"tipoPlano": "A"}, "m": {"tipoPlano": "M"}}}"#;
        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        let labels: Vec<&str> = summary
            .plano_experimental
            .iter()
            .map(|(_, info)| info.tipo_plano.as_str())
            .collect();
        assert_eq!(labels, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_repeated_plan_key_overwrites_in_place() {
        let json = r#"{"planoExperimental": {"a": {"tipoPlano": "Old"}, "b": {"tipoPlano": "B"}, "a": {"tipoPlano": "New"}}}"#;
        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        let entries: Vec<(&str, &str)> = summary
            .plano_experimental
            .iter()
            .map(|(k, info)| (k, info.tipo_plano.as_str()))
            .collect();
        assert_eq!(entries, vec![("a", "New"), ("b", "B")]);
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let json = r#"{"totalVendasHoje": null, "clientesAtivos": 3, "planoExperimental": null, "alertas": null}"#;
        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        assert_eq!(summary.total_vendas_hoje, 0.0);
        assert_eq!(summary.produtos_em_estoque, 0.0);
        assert_eq!(summary.clientes_ativos, 3.0);
        assert!(summary.plano_experimental.is_empty());
        assert!(summary.alertas.is_empty());
    }

    #[test]
    fn test_null_alert_and_plan_entries_keep_the_summary() {
        let json = r#"{
            "totalVendasHoje": 10,
            "planoExperimental": {"a": null, "b": {"tipoPlano": "Basic", "diasRestantes": 2}},
            "alertas": ["a", null]
        }"#;
        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        assert_eq!(summary.total_vendas_hoje, 10.0);
        assert_eq!(summary.alertas, vec!["a".to_string()]);
        let keys: Vec<&str> = summary.plano_experimental.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b"]);
    }

    #[test]
    fn test_empty_object_equals_default() {
        let summary: OverviewSummaryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, OverviewSummaryResponse::default());
    }

    #[test]
    fn test_plan_without_usable_days() {
        let json = r#"{"planoExperimental": {
            "missing": {"tipoPlano": "A"},
            "null": {"tipoPlano": "B", "diasRestantes": null},
            "text": {"tipoPlano": "C", "diasRestantes": "soon"}
        }}"#;
        let summary: OverviewSummaryResponse = serde_json::from_str(json).unwrap();

        for (_, info) in summary.plano_experimental.iter() {
            assert_eq!(info.dias_restantes, None);
            assert_eq!(info.effective_days(), 0.0);
        }
    }

    #[test]
    fn test_effective_days_ignores_non_finite() {
        assert_eq!(TrialPlanInfo::new("X", Some(f64::NAN)).effective_days(), 0.0);
        assert_eq!(TrialPlanInfo::new("X", Some(f64::INFINITY)).effective_days(), 0.0);
        assert_eq!(TrialPlanInfo::new("X", Some(5.0)).effective_days(), 5.0);
        assert_eq!(TrialPlanInfo::new("X", None).effective_days(), 0.0);
    }

    #[test]
    fn test_wrong_shape_summary_is_an_error() {
        assert!(serde_json::from_str::<OverviewSummaryResponse>("42").is_err());
        assert!(serde_json::from_str::<OverviewSummaryResponse>(r#"{"alertas": "x"}"#).is_err());
        assert!(
            serde_json::from_str::<OverviewSummaryResponse>(r#"{"planoExperimental": [1]}"#)
                .is_err()
        );
    }

    #[test]
    fn test_parse_chart_entries() {
        let methods: Vec<PaymentMethodSales> =
            serde_json::from_str(r#"[{"metodo": "PIX", "total": 10}, {"metodo": "DINHEIRO", "total": null}]"#)
                .unwrap();
        assert_eq!(methods[0].metodo, "PIX");
        assert_eq!(methods[0].total, 10.0);
        assert_eq!(methods[1].total, 0.0);

        let products: Vec<ProductSales> =
            serde_json::from_str(r#"[{"nome": "Café", "total": 3}]"#).unwrap();
        assert_eq!(products[0].nome, "Café");

        let days: Vec<DailySales> =
            serde_json::from_str(r#"[{"dia": "Segunda", "total": 99.9}]"#).unwrap();
        assert_eq!(days[0].dia, "Segunda");
        assert_eq!(days[0].total, 99.9);
    }

    #[test]
    fn test_serialize_plans_as_object() {
        let plans: TrialPlans = vec![
            ("b".to_string(), TrialPlanInfo::new("Basic", Some(1.0))),
            ("a".to_string(), TrialPlanInfo::new("Pro", Some(3.0))),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&plans).unwrap();
        assert_eq!(value["b"]["tipoPlano"], "Basic");
        assert_eq!(value["a"]["diasRestantes"], 3.0);
    }
}
