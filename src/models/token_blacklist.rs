//! Modelo de TokenBlacklist (conjunto de revocación)
//!
//! La presencia de una fila significa "rechazar esta credencial"; su
//! ausencia, "seguir aceptándola si es válida". Las filas son basura lógica
//! una vez pasado `expires_at`: la consulta de membresía compara expiración,
//! así que una fila vencida no bloquea aunque todavía no se haya purgado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RevokedToken {
    pub id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
