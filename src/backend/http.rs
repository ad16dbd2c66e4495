use super::{Backend, PunchQuery};
use crate::errors::AppResult;
use crate::models::daily_balance::DailySaldo;
use crate::models::monthly_balance::{MonthlyBalance, YearMonth};
use crate::models::punch::PunchEvent;
use crate::models::wire::{CompensationWriteDto, DailySaldoDto, MonthlySaldoDto, PunchDto, decode};
use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

const PUNCHES_PATH: &str = "/batidas";
const DAILY_SALDO_PATH: &str = "/saldo-diario";
const MONTHLY_SALDO_PATH: &str = "/saldo-mensal";

/// REST client. No retry: a failed call is reported to the caller as is.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .user_agent(concat!("rtimebank/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ymd(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

impl Backend for HttpBackend {
    fn fetch_punches(&self, query: &PunchQuery) -> AppResult<Vec<PunchEvent>> {
        let mut params = vec![("inicio", ymd(query.from)), ("fim", ymd(query.to))];
        if let Some(uid) = query.user_id {
            params.push(("id_usuario", uid.to_string()));
        }

        let body = self
            .client
            .get(self.url(PUNCHES_PATH))
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;
        let dtos: Vec<PunchDto> = decode(&body)?;

        Ok(dtos.into_iter().map(PunchEvent::from).collect())
    }

    fn fetch_daily_saldo(&self, date: NaiveDate) -> AppResult<Vec<DailySaldo>> {
        let body = self
            .client
            .get(self.url(DAILY_SALDO_PATH))
            .query(&[("data", ymd(date))])
            .send()?
            .error_for_status()?
            .text()?;
        let dtos: Vec<DailySaldoDto> = decode(&body)?;

        Ok(dtos.into_iter().map(DailySaldo::from).collect())
    }

    fn fetch_monthly_saldo(
        &self,
        user_id: i64,
        month: YearMonth,
    ) -> AppResult<Option<MonthlyBalance>> {
        let resp = self
            .client
            .get(self.url(MONTHLY_SALDO_PATH))
            .query(&[
                ("id_usuario", user_id.to_string()),
                ("mes", month.to_string()),
            ])
            .send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: MonthlySaldoDto = decode(&resp.error_for_status()?.text()?)?;
        Ok(Some(dto.into_balance(user_id, month)))
    }

    fn write_compensation(&self, write: &CompensationWriteDto) -> AppResult<()> {
        self.client
            .post(self.url(PUNCHES_PATH))
            .json(write)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
