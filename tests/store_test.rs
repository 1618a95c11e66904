//! Integration tests for the medal store against live PostgreSQL
//!
//! Requires `DATABASE_URL` pointing at a scratch database; without it the
//! test skips. The fixture is three USA golds: two Swimming medals for
//! different athletes in 2000 and one Women's Judo medal in 2004.

use goldmedal::{GoldMedalError, MedalStore};
use sqlx::PgPool;

async fn setup_store() -> Option<MedalStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("skipping store integration test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let store = MedalStore::with_pool(pool);
    store
        .recreate_schema()
        .await
        .expect("Failed to recreate schema");
    seed_fixture(store.pool()).await;

    Some(store)
}

async fn seed_fixture(pool: &PgPool) {
    let rows = [
        (1, 2000, "Sydney", "Summer", "A", "USA", "Men", "Swimming", "Freestyle", "100m freestyle"),
        (2, 2000, "Sydney", "Summer", "B", "USA", "Men", "Swimming", "Freestyle", "200m freestyle"),
        (3, 2004, "Athens", "Summer", "C", "USA", "Women", "Judo", "Lightweight", "57kg"),
    ];

    for (id, year, city, season, name, country, gender, sport, discipline, event) in rows {
        sqlx::query(
            "INSERT INTO GoldMedal \
             (id, year, city, season, name, country, gender, sport, discipline, event) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(id)
        .bind(year)
        .bind(city)
        .bind(season)
        .bind(name)
        .bind(country)
        .bind(gender)
        .bind(sport)
        .bind(discipline)
        .bind(event)
        .execute(pool)
        .await
        .expect("Failed to insert fixture row");
    }
}

// One test driving the whole fixture: the store shares fixed table names, so
// the assertions run in sequence rather than as parallel tests racing on the
// schema.
#[tokio::test]
async fn test_store_end_to_end_fixture() {
    let Some(store) = setup_store().await else {
        return;
    };

    // Counts
    assert_eq!(store.gold_medal_count("USA").await.unwrap(), 3);
    assert_eq!(store.men_medalist_count("USA").await.unwrap(), 2);
    assert_eq!(store.women_medalist_count("USA").await.unwrap(), 1);

    // Top athlete: every athlete has exactly one medal, so the count is 1
    // and the winner is whichever tied row the executor returns first
    let top = store.most_medaled_athlete("USA").await.unwrap().unwrap();
    assert_eq!(top.count, 1);
    assert!(["A", "B", "C"].contains(&top.name.as_str()));

    // Best-X: the grouped maximum, decoded by grouping column
    let best_sport = store.best_sport("USA").await.unwrap().unwrap();
    assert_eq!(best_sport.value, "Swimming");
    assert_eq!(best_sport.count, 2);

    let best_discipline = store.best_discipline("USA").await.unwrap().unwrap();
    assert_eq!(best_discipline.value, "Freestyle");
    assert_eq!(best_discipline.count, 2);

    // Events are all distinct, so only the count is determined
    let best_event = store.best_event("USA").await.unwrap().unwrap();
    assert_eq!(best_event.count, 1);

    let best_year = store.best_year("USA").await.unwrap().unwrap();
    assert_eq!(best_year.year, 2000);
    assert_eq!(best_year.count, 2);

    let summer = store.most_summer_wins("USA").await.unwrap().unwrap();
    assert_eq!(summer.year, 2000);
    assert_eq!(summer.count, 2);

    // No Winter medals in the fixture
    assert!(store.most_winter_wins("USA").await.unwrap().is_none());

    // Medal listing: ordered and unordered
    let by_year = store
        .ordered_medals("USA", Some("year"), true)
        .await
        .unwrap();
    assert_eq!(by_year.len(), 3);
    assert!(by_year.windows(2).all(|w| w[0].year <= w[1].year));
    assert_eq!(by_year[2].name, "C");

    let unordered = store.ordered_medals("USA", None, true).await.unwrap();
    assert_eq!(unordered.len(), 3);

    // Sport breakdown: counts descending, truncated integer percentages
    let sports = store
        .ordered_sports("USA", Some("count"), false)
        .await
        .unwrap();
    assert_eq!(sports.len(), 2);
    assert_eq!(sports[0].sport, "Swimming");
    assert_eq!(sports[0].count, 2);
    assert_eq!(sports[0].percent, 66);
    assert_eq!(sports[1].sport, "Judo");
    assert_eq!(sports[1].count, 1);
    assert_eq!(sports[1].percent, 33);
    assert!(sports.iter().map(|s| s.percent).sum::<i64>() <= 100);

    // Unknown country: zero counts and empty results, never errors
    assert_eq!(store.gold_medal_count("ATL").await.unwrap(), 0);
    assert_eq!(store.women_medalist_count("ATL").await.unwrap(), 0);
    assert!(store.most_medaled_athlete("ATL").await.unwrap().is_none());
    assert!(store.best_sport("ATL").await.unwrap().is_none());
    assert!(store.best_year("ATL").await.unwrap().is_none());
    assert!(store.ordered_medals("ATL", None, true).await.unwrap().is_empty());
    assert!(store.ordered_sports("ATL", None, true).await.unwrap().is_empty());

    // Sort-field validation fails before any SQL is sent
    let err = store
        .ordered_medals("USA", Some("medal_color"), true)
        .await
        .unwrap_err();
    assert!(matches!(err, GoldMedalError::Validation(_)));

    // The DDL has no IF NOT EXISTS: creating over a live schema conflicts
    let err = store.ensure_schema().await.unwrap_err();
    assert!(matches!(err, GoldMedalError::Database(_)));
}
