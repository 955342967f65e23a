//! Integration tests for the PostgreSQL repository layer
//!
//! These tests verify that repository implementations correctly interact
//! with the database, including the foreign key between shirts and teams.
//! They need a running PostgreSQL and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test -- --ignored
//! ```

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use ventacamisetas_api::domain::errors::CatalogError;
use ventacamisetas_api::domain::repositories::{
    NewUser, ShirtRepository, TeamRepository, UserRepository,
};
use ventacamisetas_api::domain::shirt::{ShirtDetails, ShirtInput, ShirtSize};
use ventacamisetas_api::domain::team::{Team, TeamDetails};
use ventacamisetas_api::domain::user::Email;
use ventacamisetas_api::infrastructure::repositories::{
    PostgresShirtRepository, PostgresTeamRepository, PostgresUserRepository,
};

/// Set up test database connection pool and apply migrations
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn shirt_details(team_id: Uuid, size: &str) -> ShirtDetails {
    priced_shirt(team_id, size, Decimal::new(7999, 2), Some(Decimal::from(25)))
}

fn priced_shirt(
    team_id: Uuid,
    size: &str,
    price: Decimal,
    discount: Option<Decimal>,
) -> ShirtDetails {
    ShirtDetails::new(ShirtInput {
        team_id: team_id.to_string(),
        name: "Camiseta visitante 2025".to_string(),
        description: "Segunda equipación".to_string(),
        image: "https://images.com/away2025.jpg".to_string(),
        price,
        discount,
        size: size.to_string(),
    })
    .expect("valid shirt")
}

/// Clean up a team and everything referencing it
async fn cleanup_team(pool: &PgPool, team_id: Uuid) {
    sqlx::query("DELETE FROM shirts WHERE team_id = $1")
        .bind(team_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup shirts");
    sqlx::query("DELETE FROM futbol_teams WHERE id = $1")
        .bind(team_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup team");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_team_repository_crud() {
    let pool = setup_test_db().await;
    let repo = PostgresTeamRepository::new(pool.clone());

    let details = TeamDetails::new("Boca Juniors", "Argentina").unwrap();
    let team = repo.insert(&details).await.expect("Failed to insert team");
    assert_eq!(team.details(), &details);

    let found = repo.find_by_id(team.id()).await.unwrap();
    assert_eq!(found.as_ref(), Some(&team));
    assert!(repo.exists(team.id()).await.unwrap());

    // Unchanged values still count as a matched update
    let same = repo.update(team.id(), &details).await.unwrap();
    assert_eq!(same.as_ref(), Some(&team));

    let renamed = TeamDetails::new("CA Boca Juniors", "Argentina").unwrap();
    let updated = repo.update(team.id(), &renamed).await.unwrap().unwrap();
    assert_eq!(updated.name(), "CA Boca Juniors");

    assert!(repo.list().await.unwrap().iter().any(|t| t.id() == team.id()));

    assert!(repo.delete(team.id()).await.unwrap());
    assert!(!repo.delete(team.id()).await.unwrap());
    assert!(repo.find_by_id(team.id()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_missing_team_returns_none() {
    let pool = setup_test_db().await;
    let repo = PostgresTeamRepository::new(pool);

    let details = TeamDetails::new("Club Desaparecido", "Uruguay").unwrap();
    assert!(repo.update(Uuid::new_v4(), &details).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_shirt_repository_crud_and_count() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let shirts = PostgresShirtRepository::new(pool.clone());

    let team = teams
        .insert(&TeamDetails::new("Juventus", "Italia").unwrap())
        .await
        .unwrap();

    let shirt = shirts
        .insert(&shirt_details(team.id(), "XL"))
        .await
        .expect("Failed to insert shirt");
    assert_eq!(shirt.team_id(), team.id());
    assert_eq!(shirt.details().size(), ShirtSize::Xl);
    assert_eq!(shirt.details().price(), Decimal::new(7999, 2));

    shirts.insert(&shirt_details(team.id(), "S")).await.unwrap();
    assert_eq!(shirts.count_by_team(team.id()).await.unwrap(), 2);

    let resized = shirts
        .update(shirt.id(), &shirt_details(team.id(), "L"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resized.details().size(), ShirtSize::L);

    assert!(shirts.delete(shirt.id()).await.unwrap());
    assert!(!shirts.delete(shirt.id()).await.unwrap());
    assert_eq!(shirts.count_by_team(team.id()).await.unwrap(), 1);

    cleanup_team(&pool, team.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_foreign_key_guards_both_directions() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let shirts = PostgresShirtRepository::new(pool.clone());

    // Dangling reference rejected by the database
    let dangling = shirts.insert(&shirt_details(Uuid::new_v4(), "M")).await;
    assert_eq!(
        dangling.unwrap_err(),
        CatalogError::NotFound("Team does not exist".to_string())
    );

    // Referenced team cannot be deleted, even bypassing the service check
    let team = teams
        .insert(&TeamDetails::new("Flamengo", "Brasil").unwrap())
        .await
        .unwrap();
    shirts.insert(&shirt_details(team.id(), "M")).await.unwrap();

    let blocked = teams.delete(team.id()).await;
    assert!(matches!(blocked, Err(CatalogError::Conflict(_))));
    assert!(teams.exists(team.id()).await.unwrap());

    cleanup_team(&pool, team.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_prices_stored_exactly() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let shirts = PostgresShirtRepository::new(pool.clone());

    let team = teams
        .insert(&TeamDetails::new("Peñarol", "Uruguay").unwrap())
        .await
        .unwrap();

    // Sub-cent, half-cent and very large prices all round-trip unchanged
    for price in [
        Decimal::new(1, 3),
        Decimal::new(90005, 3),
        Decimal::from(10_000_000_000u64),
    ] {
        let shirt = shirts
            .insert(&priced_shirt(team.id(), "M", price, None))
            .await
            .unwrap_or_else(|e| panic!("price {} rejected: {:?}", price, e));
        assert_eq!(shirt.details().price(), price);

        let stored = shirts.find_by_id(shirt.id()).await.unwrap().unwrap();
        assert_eq!(stored.details().price(), price);
    }

    cleanup_team(&pool, team.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_discounts_stored_exactly() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let shirts = PostgresShirtRepository::new(pool.clone());

    let team = teams
        .insert(&TeamDetails::new("Nacional", "Uruguay").unwrap())
        .await
        .unwrap();

    for discount in [Decimal::new(99999, 3), Decimal::ONE_HUNDRED] {
        let shirt = shirts
            .insert(&priced_shirt(team.id(), "S", Decimal::from(80), Some(discount)))
            .await
            .unwrap();
        assert_eq!(shirt.details().discount(), discount);
    }

    cleanup_team(&pool, team.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_check_violation_is_invalid_input() {
    let pool = setup_test_db().await;
    let teams = PostgresTeamRepository::new(pool);

    // Bypasses TeamDetails validation so the column CHECK has to catch it
    let blank = Team::from_persistence(Uuid::new_v4(), "   ".to_string(), "Uruguay".to_string())
        .details()
        .clone();
    let result = teams.insert(&blank).await;

    assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_user_repository_create_and_find_by_email() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());

    let email = Email::new(format!("repo-{}@example.com", Uuid::new_v4())).unwrap();
    let user = repo
        .create(NewUser {
            email: email.clone(),
            password_hash: "hash".to_string(),
            full_name: "Test User".to_string(),
        })
        .await
        .expect("Failed to create user");

    assert!(!user.is_admin);
    assert!(user.is_active);

    let found = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    let duplicate = repo
        .create(NewUser {
            email: email.clone(),
            password_hash: "hash".to_string(),
            full_name: "Duplicate".to_string(),
        })
        .await;
    assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("Failed to cleanup user");
}
