//! The ordered list of smoke checks and their report.
//!
//! Checks run sequentially against live data. Records created along the way
//! are deleted by the suite itself or, if a check failed midway, during
//! cleanup.

use std::fmt;

use anyhow::{anyhow, bail, ensure, Context};
use mycofind_core::species::MushroomInfo;
use mycofind_core::spot::{MushroomSpot, DEFAULT_CREATED_BY};
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::client::SmokeClient;

const ROOT_MESSAGE: &str = "Mushroom Finder API";

/// Paris, the reference point used by the deployment checks.
const PARIS: (f64, f64) = (48.8566, 2.3522);

/// Result of one named check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "PASS  {}", self.name),
            Some(err) => write!(f, "FAIL  {}: {err}", self.name),
        }
    }
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub checks: Vec<CheckOutcome>,
}

impl SmokeReport {
    fn record<T>(&mut self, name: &'static str, result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                tracing::debug!(check = name, "Check passed");
                self.checks.push(CheckOutcome { name, error: None });
                Some(value)
            }
            Err(err) => {
                tracing::warn!(check = name, error = %format!("{err:#}"), "Check failed");
                self.checks.push(CheckOutcome {
                    name,
                    error: Some(format!("{err:#}")),
                });
                None
            }
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Run every check in order and return the report.
pub async fn run_suite(client: &SmokeClient) -> SmokeReport {
    let mut report = SmokeReport::default();
    tracing::info!(base_url = client.base_url(), "Running smoke suite");

    report.record("api root message", check_root(client).await);

    // --- Spots ---
    let spot = report.record("create spot", create_spot(client).await);
    let spot_id = spot.as_ref().map(|s| s.id.clone());
    if let Some(spot) = &spot {
        report.record("create spot defaults", check_spot_defaults(spot));
    }
    report.record("list spots", check_list_spots(client, spot_id.as_deref()).await);
    report.record("get spot", check_get_spot(client, spot.as_ref()).await);
    report.record("update spot", check_update_spot(client, spot.as_ref()).await);
    report.record(
        "nearby spots",
        check_nearby(client, spot_id.as_deref()).await,
    );
    report.record("unknown spot is 404", check_spot_not_found(client).await);
    report.record("invalid spot is rejected", check_invalid_spot(client).await);

    // --- Species ---
    report.record("list species", check_list_species(client).await);
    let species = report.record("create species", create_species(client).await);
    let species_id = species.as_ref().map(|s| s.id.clone());
    report.record(
        "search species",
        check_search_species(client, species.as_ref()).await,
    );
    report.record(
        "get species",
        check_get_species(client, species.as_ref()).await,
    );
    let species_deleted = report
        .record(
            "delete species",
            check_delete_species(client, species_id.as_deref()).await,
        )
        .is_some();

    let spot_deleted = report
        .record(
            "delete spot",
            check_delete_spot(client, spot_id.as_deref()).await,
        )
        .is_some();

    // --- Cleanup ---
    if !species_deleted {
        if let Some(id) = &species_id {
            cleanup(client, &format!("/mushrooms/{id}")).await;
        }
    }
    if !spot_deleted {
        if let Some(id) = &spot_id {
            cleanup(client, &format!("/mushroom-spots/{id}")).await;
        }
    }

    report
}

async fn cleanup(client: &SmokeClient, path: &str) {
    match client.delete(path).await {
        Ok(response) => tracing::info!(path, status = %response.status, "Cleanup delete"),
        Err(err) => tracing::warn!(path, error = %err, "Cleanup delete failed"),
    }
}

fn require<'a, T: ?Sized>(value: Option<&'a T>, what: &str) -> anyhow::Result<&'a T> {
    value.ok_or_else(|| anyhow!("skipped: no {what} was created"))
}

fn decode<T: serde::de::DeserializeOwned>(body: Value) -> anyhow::Result<T> {
    serde_json::from_value(body).context("unexpected response shape")
}

fn ids(list: &Value) -> anyhow::Result<Vec<&str>> {
    let items = list
        .as_array()
        .ok_or_else(|| anyhow!("expected a JSON array, got {list}"))?;
    Ok(items.iter().filter_map(|item| item["id"].as_str()).collect())
}

async fn check_root(client: &SmokeClient) -> anyhow::Result<()> {
    let body = client.get("/").await?.expect_status(StatusCode::OK)?;
    ensure!(
        body["message"] == ROOT_MESSAGE,
        "unexpected root body {body}"
    );
    Ok(())
}

async fn create_spot(client: &SmokeClient) -> anyhow::Result<MushroomSpot> {
    let body = json!({
        "latitude": PARIS.0,
        "longitude": PARIS.1,
        "mushroom_type": "Chanterelle",
        "notes": "smoke test spot",
    });
    let body = client
        .post("/mushroom-spots", &body)
        .await?
        .expect_status(StatusCode::OK)?;
    decode(body)
}

fn check_spot_defaults(spot: &MushroomSpot) -> anyhow::Result<()> {
    ensure!(!spot.id.is_empty(), "spot id is empty");
    ensure!(
        spot.created_by == DEFAULT_CREATED_BY,
        "created_by is '{}'",
        spot.created_by
    );
    ensure!(spot.photo_base64.is_none(), "photo_base64 should be null");
    Ok(())
}

async fn check_list_spots(client: &SmokeClient, id: Option<&str>) -> anyhow::Result<()> {
    let id = require(id, "spot")?;
    let list = client
        .get("/mushroom-spots")
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(ids(&list)?.contains(&id), "created spot missing from list");
    Ok(())
}

async fn check_get_spot(client: &SmokeClient, spot: Option<&MushroomSpot>) -> anyhow::Result<()> {
    let spot = require(spot, "spot")?;
    let body = client
        .get(&format!("/mushroom-spots/{}", spot.id))
        .await?
        .expect_status(StatusCode::OK)?;
    let fetched: MushroomSpot = decode(body)?;
    ensure!(
        &fetched == spot,
        "fetched spot differs from created: {fetched:?}"
    );
    Ok(())
}

async fn check_update_spot(
    client: &SmokeClient,
    spot: Option<&MushroomSpot>,
) -> anyhow::Result<()> {
    let spot = require(spot, "spot")?;
    let body = client
        .put(
            &format!("/mushroom-spots/{}", spot.id),
            &json!({"notes": "updated by smoke test"}),
        )
        .await?
        .expect_status(StatusCode::OK)?;
    let updated: MushroomSpot = decode(body)?;
    ensure!(
        updated.notes == "updated by smoke test",
        "notes not updated"
    );
    ensure!(
        updated.mushroom_type == spot.mushroom_type,
        "mushroom_type changed by a notes-only update"
    );
    ensure!(
        updated.timestamp == spot.timestamp,
        "timestamp changed by update"
    );
    Ok(())
}

async fn check_nearby(client: &SmokeClient, id: Option<&str>) -> anyhow::Result<()> {
    let id = require(id, "spot")?;
    let near = client
        .get(&format!(
            "/mushroom-spots/nearby/{}/{}?radius_km=10",
            PARIS.0, PARIS.1
        ))
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(ids(&near)?.contains(&id), "spot missing from nearby results");

    // Seattle, far outside a 10 km radius of Paris.
    let far = client
        .get("/mushroom-spots/nearby/47.61/-122.335?radius_km=10")
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(!ids(&far)?.contains(&id), "spot returned for a distant point");
    Ok(())
}

async fn check_spot_not_found(client: &SmokeClient) -> anyhow::Result<()> {
    client
        .get("/mushroom-spots/smoke-missing-id")
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    Ok(())
}

async fn check_invalid_spot(client: &SmokeClient) -> anyhow::Result<()> {
    let response = client
        .post(
            "/mushroom-spots",
            &json!({"latitude": PARIS.0, "longitude": PARIS.1}),
        )
        .await?;
    match response.status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Ok(()),
        other => bail!("expected 400 or 422, got {other}"),
    }
}

async fn check_list_species(client: &SmokeClient) -> anyhow::Result<()> {
    let list = client
        .get("/mushrooms")
        .await?
        .expect_status(StatusCode::OK)?;
    let _: Vec<MushroomInfo> = decode(list)?;
    Ok(())
}

async fn create_species(client: &SmokeClient) -> anyhow::Result<MushroomInfo> {
    let body = json!({
        "common_name": "Pied-de-mouton (smoke)",
        "latin_name": "Hydnum smoketestum",
        "edibility": "comestible",
        "season": "Automne",
        "description": "Created by the smoke runner",
        "characteristics": ["Aiguillons sous le chapeau"],
        "habitat": "Forêts mixtes",
        "lookalikes": [{
            "name": "Hydne sinué",
            "latin_name": "Hydnum rufescens",
            "difference": "Plus petit et plus orangé",
            "danger_level": "non_comestible"
        }]
    });
    let body = client
        .post("/mushrooms", &body)
        .await?
        .expect_status(StatusCode::OK)?;
    decode(body)
}

async fn check_search_species(
    client: &SmokeClient,
    info: Option<&MushroomInfo>,
) -> anyhow::Result<()> {
    let info = require(info, "species record")?;
    let list = client
        .get("/mushrooms?search=SMOKETESTUM")
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(
        ids(&list)?.contains(&info.id.as_str()),
        "search did not find the created record"
    );
    Ok(())
}

async fn check_get_species(
    client: &SmokeClient,
    info: Option<&MushroomInfo>,
) -> anyhow::Result<()> {
    let info = require(info, "species record")?;
    let body = client
        .get(&format!("/mushrooms/{}", info.id))
        .await?
        .expect_status(StatusCode::OK)?;
    let fetched: MushroomInfo = decode(body)?;
    ensure!(&fetched == info, "fetched record differs from created");
    Ok(())
}

async fn check_delete_species(client: &SmokeClient, id: Option<&str>) -> anyhow::Result<()> {
    let id = require(id, "species record")?;
    let body = client
        .delete(&format!("/mushrooms/{id}"))
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(body["id"] == id, "delete did not echo the id: {body}");
    client
        .get(&format!("/mushrooms/{id}"))
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    Ok(())
}

async fn check_delete_spot(client: &SmokeClient, id: Option<&str>) -> anyhow::Result<()> {
    let id = require(id, "spot")?;
    let body = client
        .delete(&format!("/mushroom-spots/{id}"))
        .await?
        .expect_status(StatusCode::OK)?;
    ensure!(body["message"].is_string(), "delete body lacks a message");
    client
        .get(&format!("/mushroom-spots/{id}"))
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_failures() {
        let mut report = SmokeReport::default();
        report.record::<()>("ok", Ok(()));
        report.record::<()>("broken", Err(anyhow!("boom")));

        assert!(!report.all_passed());
        let failed: Vec<_> = report.failures().map(|c| c.name).collect();
        assert_eq!(failed, ["broken"]);
        assert_eq!(report.checks[1].to_string(), "FAIL  broken: boom");
    }

    #[test]
    fn require_reports_missing_dependency() {
        let err = require::<str>(None, "spot").unwrap_err();
        assert_eq!(err.to_string(), "skipped: no spot was created");
    }
}
