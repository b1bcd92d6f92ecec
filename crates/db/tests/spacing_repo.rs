//! Integration tests for the spacing repository.
//!
//! Exercises the data access layer against a real database:
//! - Create with defaults and immediate read-back
//! - Partial patch leaves untouched sides alone
//! - Unknown component ids
//! - Diagnostic example rows

use sqlx::PgPool;
use spacing_core::spacing::{SpacingField, SpacingPatch, SpacingProperty, SpacingUnit};
use spacing_db::repositories::{ExampleRepo, SpacingRepo};

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_post_creates_defaulted_record(pool: PgPool) {
    let component_id = SpacingRepo::post_spacing(&pool).await.unwrap();

    let record = SpacingRepo::get_spacing(&pool, &component_id)
        .await
        .unwrap()
        .expect("record should exist right after creation");

    assert_eq!(record.component_id, component_id);
    assert!(!record.user_id.is_empty());
    assert!(!record.project_id.is_empty());
    assert_ne!(record.user_id, record.component_id);
    for field in SpacingField::ALL {
        assert_eq!(
            record.property(field),
            &SpacingProperty::new("auto", SpacingUnit::Px),
            "{field} should default to auto/px"
        );
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_generates_distinct_ids(pool: PgPool) {
    let first = SpacingRepo::post_spacing(&pool).await.unwrap();
    let second = SpacingRepo::post_spacing(&pool).await.unwrap();
    assert_ne!(first, second);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_component_returns_none(pool: PgPool) {
    let record = SpacingRepo::get_spacing(&pool, "no-such-component")
        .await
        .unwrap();
    assert!(record.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_rejects_corrupt_unit(pool: PgPool) {
    let component_id = SpacingRepo::post_spacing(&pool).await.unwrap();
    sqlx::query("UPDATE spacing_table SET margin_top_unit = 'parsec' WHERE component_id = $1")
        .bind(&component_id)
        .execute(&pool)
        .await
        .unwrap();

    let result = SpacingRepo::get_spacing(&pool, &component_id).await;
    assert!(matches!(result, Err(sqlx::Error::Decode(_))));
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_single_side_leaves_others_unchanged(pool: PgPool) {
    let component_id = SpacingRepo::post_spacing(&pool).await.unwrap();

    let patch = SpacingPatch::default().with(
        SpacingField::MarginTop,
        SpacingProperty::new("12.5", SpacingUnit::Rem),
    );
    let matched = SpacingRepo::patch_spacing(&pool, &component_id, &patch)
        .await
        .unwrap();
    assert!(matched);

    let record = SpacingRepo::get_spacing(&pool, &component_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.margin_top, SpacingProperty::new("12.5", SpacingUnit::Rem));
    for field in SpacingField::ALL
        .into_iter()
        .filter(|f| *f != SpacingField::MarginTop)
    {
        assert_eq!(record.property(field), &SpacingProperty::default());
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_successive_patches_accumulate(pool: PgPool) {
    let component_id = SpacingRepo::post_spacing(&pool).await.unwrap();

    let first = SpacingPatch::default()
        .with(SpacingField::PaddingLeft, SpacingProperty::new("4", SpacingUnit::Percent));
    let second = SpacingPatch::default()
        .with(SpacingField::MarginRight, SpacingProperty::new("-2", SpacingUnit::Em))
        .with(SpacingField::PaddingLeft, SpacingProperty::new("8", SpacingUnit::Percent));

    assert!(SpacingRepo::patch_spacing(&pool, &component_id, &first).await.unwrap());
    assert!(SpacingRepo::patch_spacing(&pool, &component_id, &second).await.unwrap());

    let record = SpacingRepo::get_spacing(&pool, &component_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.padding_left, SpacingProperty::new("8", SpacingUnit::Percent));
    assert_eq!(record.margin_right, SpacingProperty::new("-2", SpacingUnit::Em));
    assert_eq!(record.margin_left, SpacingProperty::default());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_unknown_component_reports_no_match(pool: PgPool) {
    let patch = SpacingPatch::default()
        .with(SpacingField::MarginTop, SpacingProperty::new("1", SpacingUnit::Px));
    let matched = SpacingRepo::patch_spacing(&pool, "no-such-component", &patch)
        .await
        .unwrap();
    assert!(!matched);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_patch_bumps_updated_at(pool: PgPool) {
    let component_id = SpacingRepo::post_spacing(&pool).await.unwrap();
    let before = SpacingRepo::find_row(&pool, &component_id)
        .await
        .unwrap()
        .unwrap();

    let patch = SpacingPatch::default()
        .with(SpacingField::PaddingTop, SpacingProperty::new("3", SpacingUnit::Mm));
    SpacingRepo::patch_spacing(&pool, &component_id, &patch)
        .await
        .unwrap();

    let after = SpacingRepo::find_row(&pool, &component_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(after.padding_top_value, "3");
    assert_eq!(after.padding_top_unit, "mm");
}

// ---------------------------------------------------------------------------
// Examples / health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_example_rows_are_returned_as_objects(pool: PgPool) {
    let rows = ExampleRepo::list_rows(&pool).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "spacing");
    assert!(rows[0]["id"].is_number());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check_passes(pool: PgPool) {
    spacing_db::health_check(&pool).await.unwrap();
}
