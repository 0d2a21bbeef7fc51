//! # Address Repository
//!
//! Database operations for logistics addresses.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::filter::FilterQuery;
use crate::query::{fetch_many, fetch_one};
use apex_core::{Address, AddressFilter, AddressParams};

const TABLE: &str = "logistics_addresses";

#[derive(Debug, Clone)]
pub struct AddressRepository {
    pool: SqlitePool,
}

impl AddressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        AddressRepository { pool }
    }

    pub async fn get(&self, id: i64) -> DbResult<Address> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Address>("SELECT * FROM logistics_addresses WHERE id = ?").bind(id),
        )
        .await
    }

    /// Lists addresses matching `filter`, ascending by id. Text fields are
    /// `LIKE` patterns.
    pub async fn list(&self, filter: &AddressFilter) -> DbResult<Vec<Address>> {
        debug!(?filter, "Listing addresses");

        let mut query = FilterQuery::select(TABLE)
            .like("zip", filter.zip.clone())
            .like("city", filter.city.clone())
            .like("street", filter.street.clone())
            .like("country", filter.country.clone())
            .order_by_id();

        fetch_many(&self.pool, query.build_query_as::<Address>()).await
    }

    pub async fn create(&self, params: &AddressParams) -> DbResult<Address> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Address>(
                r#"
                INSERT INTO logistics_addresses
                    (zip, city, street, street_number, country, latitude, longitude)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING *
                "#,
            )
            .bind(&params.zip)
            .bind(&params.city)
            .bind(&params.street)
            .bind(&params.street_number)
            .bind(&params.country)
            .bind(params.latitude)
            .bind(params.longitude),
        )
        .await
    }

    pub async fn update(&self, id: i64, params: &AddressParams) -> DbResult<Address> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Address>(
                r#"
                UPDATE logistics_addresses
                SET zip = ?, city = ?, street = ?, street_number = ?, country = ?,
                    latitude = ?, longitude = ?
                WHERE id = ?
                RETURNING *
                "#,
            )
            .bind(&params.zip)
            .bind(&params.city)
            .bind(&params.street)
            .bind(&params.street_number)
            .bind(&params.country)
            .bind(params.latitude)
            .bind(params.longitude)
            .bind(id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    fn berlin() -> AddressParams {
        AddressParams {
            zip: "10115".to_string(),
            city: "Berlin".to_string(),
            street: "Invalidenstrasse".to_string(),
            street_number: "1".to_string(),
            country: "DE".to_string(),
            latitude: 52.53,
            longitude: 13.38,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().addresses();

        let created = repo.create(&berlin()).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.latitude, 52.53);
    }

    #[tokio::test]
    async fn test_filter_by_city() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().addresses();
        repo.create(&berlin()).await.unwrap();
        repo.create(&AddressParams {
            city: "Hamburg".to_string(),
            zip: "20095".to_string(),
            ..berlin()
        })
        .await
        .unwrap();

        let all = repo.list(&AddressFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let hamburg = repo
            .list(&AddressFilter {
                city: Some("Ham%".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(hamburg.len(), 1);
        assert_eq!(hamburg[0].zip, "20095");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = Database::new(DbConfig::in_memory()).await.unwrap().addresses();
        assert!(matches!(
            repo.update(5, &berlin()).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
