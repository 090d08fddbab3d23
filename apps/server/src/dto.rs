//! # Data Transfer Objects
//!
//! JSON shapes of the HTTP API that differ from the domain types.
//!
//! Products and movements are served as-is (their serde names already
//! match the wire format). The commission report is flattened to decimal
//! numbers, and the movement request keeps `tipo` as a raw string so an
//! unknown kind becomes a validation error instead of a generic body
//! rejection.
//!
//! These are the shapes exported to TypeScript; the domain report types
//! never cross the wire.

use serde::{Deserialize, Serialize};
use tally_core::commission::{CommissionReport, SaleDetail};
use tally_core::validation::parse_movement_type;
use tally_core::{MovementRequest, ValidationError};
use ts_rs::TS;

/// One sale inside a report row.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleDetailDto {
    pub valor: f64,
    pub comissao: f64,
    pub percentual_str: String,
}

impl From<&SaleDetail> for SaleDetailDto {
    fn from(detail: &SaleDetail) -> Self {
        SaleDetailDto {
            valor: detail.amount.to_major_units(),
            comissao: detail.commission.to_major_units(),
            percentual_str: detail.rate_label(),
        }
    }
}

/// One salesperson row of `GET /api/comissoes`.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommissionReportDto {
    pub vendedor: String,
    pub total_vendas: f64,
    pub total_comissao: f64,
    pub qtd_vendas: usize,
    pub vendas_detalhes: Vec<SaleDetailDto>,
}

impl From<CommissionReport> for CommissionReportDto {
    fn from(report: CommissionReport) -> Self {
        CommissionReportDto {
            vendas_detalhes: report.details.iter().map(SaleDetailDto::from).collect(),
            vendedor: report.salesperson,
            total_vendas: report.total_sales.to_major_units(),
            total_comissao: report.total_commission.to_major_units(),
            qtd_vendas: report.sale_count,
        }
    }
}

/// Body of `POST /api/movimentacoes`.
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateMovementRequest {
    #[ts(type = "number")]
    pub codigo_produto: i64,
    pub tipo: String,
    #[ts(type = "number")]
    pub quantidade: i64,
    #[serde(default)]
    pub descricao: String,
}

impl TryFrom<CreateMovementRequest> for MovementRequest {
    type Error = ValidationError;

    fn try_from(body: CreateMovementRequest) -> Result<Self, Self::Error> {
        Ok(MovementRequest {
            product_code: body.codigo_produto,
            movement_type: parse_movement_type(&body.tipo)?,
            quantity: body.quantidade,
            note: body.descricao,
        })
    }
}
