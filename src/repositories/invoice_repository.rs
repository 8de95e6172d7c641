//! Repositorio de facturas

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::invoice_dto::InvoiceQuery;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::utils::errors::AppError;

/// Valores ya calculados por el Billing Calculator, listos para persistir
pub struct NewInvoice {
    pub reservation_id: Uuid,
    pub customer_name: String,
    pub vehicle_label: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, invoice: NewInvoice) -> Result<Invoice, AppError> {
        let created = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (reservation_id, customer_name, vehicle_label, subtotal, tax, discount, total, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'draft', $8)
            RETURNING *
            "#,
        )
        .bind(invoice.reservation_id)
        .bind(invoice.customer_name)
        .bind(invoice.vehicle_label)
        .bind(invoice.subtotal)
        .bind(invoice.tax)
        .bind(invoice.discount)
        .bind(invoice.total)
        .bind(invoice.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(invoice)
    }

    pub async fn list(&self, query: InvoiceQuery) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT * FROM invoices
            WHERE ($1::invoice_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.status)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn update(
        &self,
        id: Uuid,
        status: InvoiceStatus,
        issued_at: DateTime<Utc>,
        paid_at: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> Result<Invoice, AppError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET status = $2, issued_at = $3, paid_at = $4, notes = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(issued_at)
        .bind(paid_at)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

        Ok(invoice)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invoice not found".to_string()));
        }

        Ok(())
    }
}
