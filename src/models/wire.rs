//! JSON payloads of the REST backend. Field names follow the API.

use super::compensation::CompensationPlanItem;
use super::daily_balance::DailySaldo;
use super::monthly_balance::{MonthlyBalance, YearMonth};
use super::punch::PunchEvent;
use crate::utils::date::{format_timestamp, parse_date, parse_timestamp};
use crate::utils::time::{format_minutes, parse_hhmm, parse_signed_hhmm};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Decode a response body. A body that is not the expected JSON is an
/// `AppError::Payload`, distinct from a transport failure.
pub fn decode<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchDto {
    pub id: i64,
    pub id_usuario: i64,
    pub data_batida: String,
    #[serde(default)]
    pub descricao: String,
}

impl From<PunchDto> for PunchEvent {
    fn from(dto: PunchDto) -> Self {
        PunchEvent {
            id: dto.id,
            user_id: dto.id_usuario,
            timestamp: parse_timestamp(&dto.data_batida),
            label: dto.descricao,
            role: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySaldoDto {
    #[serde(default)]
    pub entrada: Option<String>,
    #[serde(default)]
    pub saida: Option<String>,
    #[serde(default)]
    pub saldo_diario: Option<String>,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl From<DailySaldoDto> for DailySaldo {
    fn from(dto: DailySaldoDto) -> Self {
        DailySaldo {
            name: dto.nome,
            // "2025-09-01" or a full timestamp
            date: dto.data.as_deref().and_then(|d| {
                parse_date(d).or_else(|| parse_timestamp(d).map(|ts| ts.date_naive()))
            }),
            entry: dto.entrada.filter(|s| !s.trim().is_empty()),
            exit: dto.saida.filter(|s| !s.trim().is_empty()),
            balance_minutes: dto.saldo_diario.as_deref().map(parse_signed_hhmm).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySaldoDto {
    #[serde(default)]
    pub mes: String,
    #[serde(default)]
    pub total_trabalhado_mes: String,
    #[serde(default)]
    pub carga_horaria_mes: String,
    #[serde(default)]
    pub saldo_mensal: String,
    #[serde(default)]
    pub nome: String,
}

impl MonthlySaldoDto {
    /// `requested` is used when `mes` is missing or unreadable.
    pub fn into_balance(self, user_id: i64, requested: YearMonth) -> MonthlyBalance {
        MonthlyBalance {
            user_id,
            name: self.nome,
            year_month: self.mes.parse().unwrap_or(requested),
            total_worked_minutes: parse_hhmm(&self.total_trabalhado_mes),
            total_expected_minutes: parse_hhmm(&self.carga_horaria_mes),
            balance_minutes: parse_signed_hhmm(&self.saldo_mensal),
        }
    }
}

/// Body of the compensation write: one punch-like record per plan item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationWriteDto {
    pub id_usuario: i64,
    pub data_batida: String,
    pub descricao: String,
}

impl CompensationWriteDto {
    pub fn new(user_id: i64, item: &CompensationPlanItem) -> Self {
        Self {
            id_usuario: user_id,
            data_batida: format_timestamp(&item.slot),
            descricao: format!("compensacao banco de horas ({})", format_minutes(item.minutes)),
        }
    }
}
