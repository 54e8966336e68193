use serde::{Deserialize, Serialize};

/// Authenticated user handed to the dashboard by the host shell.
///
/// Saved by the login flow as JSON; the session cookie itself is never
/// visible to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    /// "EXPERIMENTAL", "ASSINANTE", ...
    #[serde(default)]
    pub tipo_plano: Option<String>,
}

impl SessionUser {
    /// First word of the user's name, for greetings
    pub fn first_name(&self) -> Option<&str> {
        self.nome.split_whitespace().next()
    }
}
