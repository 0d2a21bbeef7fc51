//! # Plant Repository
//!
//! Database operations for logistics plants. Every plant references an
//! address, so an address has to exist first.

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::filter::FilterQuery;
use crate::query::{fetch_many, fetch_one};
use apex_core::{Plant, PlantFilter, PlantParams};

const TABLE: &str = "logistics_plants";

#[derive(Debug, Clone)]
pub struct PlantRepository {
    pool: SqlitePool,
}

impl PlantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        PlantRepository { pool }
    }

    pub async fn get(&self, id: i64) -> DbResult<Plant> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Plant>("SELECT * FROM logistics_plants WHERE id = ?").bind(id),
        )
        .await
    }

    pub async fn list(&self, filter: &PlantFilter) -> DbResult<Vec<Plant>> {
        let mut query = FilterQuery::select(TABLE)
            .like("name", filter.name.clone())
            .matches("address_id", filter.address_id)
            .order_by_id();

        fetch_many(&self.pool, query.build_query_as::<Plant>()).await
    }

    pub async fn create(&self, params: &PlantParams) -> DbResult<Plant> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Plant>(
                "INSERT INTO logistics_plants (name, address_id) VALUES (?, ?) RETURNING *",
            )
            .bind(&params.name)
            .bind(params.address_id),
        )
        .await
    }

    pub async fn update(&self, id: i64, params: &PlantParams) -> DbResult<Plant> {
        fetch_one(
            &self.pool,
            sqlx::query_as::<_, Plant>(
                "UPDATE logistics_plants SET name = ?, address_id = ? WHERE id = ? RETURNING *",
            )
            .bind(&params.name)
            .bind(params.address_id)
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
    use apex_core::AddressParams;

    async fn setup() -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let address = db
            .addresses()
            .create(&AddressParams {
                zip: "80331".to_string(),
                city: "Munich".to_string(),
                street: "Marienplatz".to_string(),
                street_number: "8".to_string(),
                country: "DE".to_string(),
                latitude: 48.13,
                longitude: 11.57,
            })
            .await
            .unwrap();
        (db, address.id)
    }

    #[tokio::test]
    async fn test_create_list_update() {
        let (db, address_id) = setup().await;
        let repo = db.plants();

        let plant = repo
            .create(&PlantParams {
                name: "South".to_string(),
                address_id,
            })
            .await
            .unwrap();
        assert_eq!(repo.get(plant.id).await.unwrap(), plant);

        let by_address = repo
            .list(&PlantFilter {
                address_id: Some(address_id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_address, vec![plant.clone()]);

        let renamed = repo
            .update(
                plant.id,
                &PlantParams {
                    name: "South Works".to_string(),
                    address_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "South Works");
    }

    #[tokio::test]
    async fn test_filter_on_other_address_is_not_found() {
        let (db, address_id) = setup().await;
        let repo = db.plants();
        repo.create(&PlantParams {
            name: "South".to_string(),
            address_id,
        })
        .await
        .unwrap();

        let result = repo
            .list(&PlantFilter {
                address_id: Some(address_id + 1),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }
}
