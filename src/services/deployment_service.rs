//! Deployment history queries.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::Result;
use crate::models::deployment::Deployment;
use crate::models::status::Environment;
use crate::schema::deployments;

/// List deployments, newest first, optionally filtered by environment.
pub async fn list_deployments(
    conn: &mut AsyncPgConnection,
    environment: Option<Environment>,
    limit: i64,
) -> Result<Vec<Deployment>> {
    let mut query = deployments::table
        .order(deployments::started_at.desc())
        .limit(limit)
        .into_boxed();

    if let Some(environment) = environment {
        query = query.filter(deployments::environment.eq(environment.as_str()));
    }

    let results = query.load::<Deployment>(conn).await?;
    Ok(results)
}
