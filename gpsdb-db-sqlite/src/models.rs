#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = addresses)]
pub struct NewAddress<'a> {
    pub id: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AddressEntity {
    pub id: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: i64,
}
