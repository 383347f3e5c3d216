//! Shared test utilities for lcms-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::IonDb;
    use crate::service::IonService;

    /// Create an in-memory `IonService`.
    pub async fn test_service() -> IonService {
        let db = IonDb::open_local(":memory:").await.unwrap();
        IonService::from_db(db)
    }

    /// Insert a result with a fixed id and no algorithmic pick.
    pub async fn seed_result(svc: &IonService, id: i64, chemical: &str) {
        svc.insert_result(Some(id), chemical, None).await.unwrap();
    }
}
