//! `rent_schedules` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rent_schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// One schedule per tenant
    #[sea_orm(unique)]
    pub tenant_id: Uuid,
    pub amount_minor: i64,
    pub currency: String,
    /// monthly | weekly | fortnightly
    pub frequency: String,
    pub anchor_date: Date,
    pub day_of_month: Option<i32>,
    pub next_payment_date: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
