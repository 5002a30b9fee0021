use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const HOSTNAME_MAX_LEN: usize = 255;
pub const IP_ADDRESS_MAX_LEN: usize = 50;

/// Sale state of a service record. Only `Available -> Sold` is ever applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ServiceStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Sold")]
    Sold,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Available => "Available",
            ServiceStatus::Sold => "Sold",
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hostname: String,
    pub ip_address: String,
    pub status: ServiceStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `created_at` as `YYYY-MM-DD HH:MM`, the form shown in listings.
    pub fn time(&self) -> String {
        format_time(&self.created_at)
    }

    pub fn is_available(&self) -> bool {
        self.status == ServiceStatus::Available
    }
}

pub fn format_time(ts: &DateTimeWithTimeZone) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn validate_required(field: &'static str, value: Option<&str>, max_len: usize) -> Result<String, errors::ModelError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(errors::ModelError::MissingField(field));
    }
    if trimmed.chars().count() > max_len {
        return Err(errors::ModelError::FieldTooLong { field, max: max_len });
    }
    Ok(trimmed.to_string())
}

/// Trimmed hostname, or an error if absent, blank or too long.
pub fn validate_hostname(h: Option<&str>) -> Result<String, errors::ModelError> {
    validate_required("Hostname", h, HOSTNAME_MAX_LEN)
}

/// Trimmed IP address. Only presence and length are checked.
pub fn validate_ip_address(ip: Option<&str>) -> Result<String, errors::ModelError> {
    validate_required("IP Address", ip, IP_ADDRESS_MAX_LEN)
}

/// Input for a new record. Only obtainable through [`NewService::parse`], so
/// holders can store it without checking again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewService {
    hostname: String,
    ip_address: String,
}

impl NewService {
    pub fn parse(hostname: Option<&str>, ip_address: Option<&str>) -> Result<Self, errors::ModelError> {
        Ok(Self { hostname: validate_hostname(hostname)?, ip_address: validate_ip_address(ip_address)? })
    }

    pub fn hostname(&self) -> &str { &self.hostname }

    pub fn ip_address(&self) -> &str { &self.ip_address }
}

pub async fn create(db: &DatabaseConnection, new: &NewService) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        hostname: Set(new.hostname.clone()),
        ip_address: Set(new.ip_address.clone()),
        status: Set(ServiceStatus::Available),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Single `UPDATE ... RETURNING`; `None` when no row has this id.
pub async fn mark_sold(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    let rows = Entity::update_many()
        .col_expr(Column::Status, Expr::value(ServiceStatus::Sold.to_value()))
        .filter(Column::Id.eq(id))
        .exec_with_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(rows.into_iter().next())
}
