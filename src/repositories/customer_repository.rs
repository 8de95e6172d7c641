//! Repositorio de clientes

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::customer_dto::{CreateCustomerRequest, CustomerQuery, UpdateCustomerRequest};
use crate::models::customer::Customer;
use crate::utils::errors::AppError;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (full_name, email, phone, driver_license, address, notes)
            VALUES ($1, LOWER($2), $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.full_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.driver_license)
        .bind(request.address)
        .bind(request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn list(&self, query: CustomerQuery) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE ($1::text IS NULL
                   OR full_name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%'
                   OR phone ILIKE '%' || $1 || '%'
                   OR driver_license ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.q)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET full_name = $2, email = $3, phone = $4, driver_license = $5,
                address = $6, notes = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.full_name.unwrap_or(current.full_name))
        .bind(request.email.map(|e| e.to_lowercase()).or(current.email))
        .bind(request.phone.or(current.phone))
        .bind(request.driver_license.or(current.driver_license))
        .bind(request.address.or(current.address))
        .bind(request.notes.or(current.notes))
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }
}
