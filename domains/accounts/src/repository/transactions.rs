//! Transactional free functions for the Accounts domain (Zero2Prod pattern)

use sqlx::{Postgres, Transaction};

use crate::domain::entities::{Brand, Influencer, User};

/// Insert a user within an existing transaction.
pub async fn insert_user_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user: &User,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO users (id, external_ref, email, full_name, role, phone,
                           is_active, is_verified, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(user.id)
    .bind(&user.external_ref)
    .bind(&user.email)
    .bind(&user.full_name)
    .bind(user.role)
    .bind(&user.phone)
    .bind(user.is_active)
    .bind(user.is_verified)
    .bind(user.created_at)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

/// Insert a brand profile within an existing transaction.
pub async fn insert_brand_tx(
    transaction: &mut Transaction<'_, Postgres>,
    brand: &Brand,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO brands (id, user_id, brand_name, industry, budget_min, budget_max,
                            categories, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(brand.id)
    .bind(brand.user_id)
    .bind(&brand.brand_name)
    .bind(&brand.industry)
    .bind(brand.budget_min)
    .bind(brand.budget_max)
    .bind(&brand.categories)
    .bind(&brand.description)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}

/// Insert an influencer profile within an existing transaction.
pub async fn insert_influencer_tx(
    transaction: &mut Transaction<'_, Postgres>,
    influencer: &Influencer,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO influencers (id, user_id, bio, categories, price_min, price_max)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(influencer.id)
    .bind(influencer.user_id)
    .bind(&influencer.bio)
    .bind(&influencer.categories)
    .bind(influencer.price_min)
    .bind(influencer.price_max)
    .execute(&mut **transaction)
    .await?;
    Ok(())
}
