use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::client;

/// Position of an order in the workshop pipeline.
///
/// Any status may be set from any other; the pipeline order is a convention only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "NEW")]
    New,
    #[sea_orm(string_value = "IN_WORK")]
    InWork,
    #[sea_orm(string_value = "PRODUCTION")]
    Production,
    #[sea_orm(string_value = "DONE")]
    Done,
}

impl OrderStatus {
    /// The label stored in the database and shown to staff.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::InWork => "IN_WORK",
            OrderStatus::Production => "PRODUCTION",
            OrderStatus::Done => "DONE",
        }
    }
}

/// A single furniture fabrication request.
///
/// `price` is fixed when the order is taken and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Width in meters.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub width: Decimal,
    /// Height in meters.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub height: Decimal,
    pub material: String,
    pub furniture_type: String,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub price: Decimal,
    pub status: OrderStatus,
    pub client_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "client::Entity",
        from = "Column::ClientId",
        to = "client::Column::Id"
    )]
    Client,
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
