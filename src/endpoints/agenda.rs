//! Agenda endpoints: eixos, temas and proposicoes
//!
//! Maps to the backend's read-only Power BI router. Records are returned as
//! untyped JSON values, exactly as the server sent them; this layer does not
//! validate or reshape them.

use crate::client::PautaClient;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Relative path for the eixos collection
const EIXOS_PATH: &str = "bi/eixos/";
/// Relative path for the temas collection
const TEMAS_PATH: &str = "bi/temas/";
/// Relative path for the proposicoes collection
const PROPOSICOES_PATH: &str = "bi/proposicoes/";

/// Agenda API interface
#[derive(Clone)]
pub struct AgendaApi {
    client: PautaClient,
}

impl AgendaApi {
    /// Create a new agenda API interface
    pub(crate) fn new(client: PautaClient) -> Self {
        Self { client }
    }

    /// Fetch all eixos
    ///
    /// GET /bi/eixos/
    pub async fn eixos(&self) -> ApiResult<Vec<Value>> {
        self.client.get(EIXOS_PATH).await
    }

    /// Fetch all temas
    ///
    /// GET /bi/temas/
    pub async fn temas(&self) -> ApiResult<Vec<Value>> {
        self.client.get(TEMAS_PATH).await
    }

    /// Fetch all proposicoes
    ///
    /// GET /bi/proposicoes/
    pub async fn proposicoes(&self) -> ApiResult<Vec<Value>> {
        self.client.get(PROPOSICOES_PATH).await
    }

    /// Fetch all three collections concurrently
    ///
    /// The three requests are issued at once and joined all-or-nothing: the
    /// first failure aborts the join, drops the remaining requests and
    /// surfaces that error. A partially populated [`Summary`] is never
    /// returned. Each call issues fresh requests; nothing is cached.
    pub async fn summary(&self) -> ApiResult<Summary> {
        let (eixos, temas, proposicoes) =
            tokio::try_join!(self.eixos(), self.temas(), self.proposicoes())?;

        Ok(Summary {
            eixos,
            temas,
            proposicoes,
        })
    }
}

/// Aggregate of the three agenda collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// All eixos
    pub eixos: Vec<Value>,
    /// All temas
    pub temas: Vec<Value>,
    /// All proposicoes
    pub proposicoes: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths_match_backend_router() {
        assert_eq!(EIXOS_PATH, "bi/eixos/");
        assert_eq!(TEMAS_PATH, "bi/temas/");
        assert_eq!(PROPOSICOES_PATH, "bi/proposicoes/");
    }

    #[test]
    fn test_summary_serialize() {
        let summary = Summary {
            eixos: vec![json!({"id": 1, "nome": "Eixo A"})],
            temas: vec![json!({"id": 7, "nome": "Tema B"})],
            proposicoes: vec![],
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["eixos"][0]["nome"], "Eixo A");
        assert_eq!(value["temas"][0]["id"], 7);
        assert_eq!(value["proposicoes"], json!([]));
    }

    #[test]
    fn test_summary_roundtrip_field_names() {
        let json_text = r#"{"eixos":[],"temas":[],"proposicoes":[]}"#;
        let summary: Summary = serde_json::from_str(json_text).unwrap();
        assert!(summary.eixos.is_empty());
        assert!(summary.temas.is_empty());
        assert!(summary.proposicoes.is_empty());
    }
}
