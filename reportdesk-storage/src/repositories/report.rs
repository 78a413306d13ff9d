//! In-memory report repository

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::sync::RwLock;

use reportdesk_api_types::{
    NewReport, Report, ReportFilters, ReportPage, ReportQuery, ReportStatus, ReportSummary, ReportUpdate,
};
use reportdesk_interfaces::{CrudRepository, DatabaseError, FilteredRepository, ReportRepository, Repository};

use crate::{mock_data::generate_mock_reports, query, StorageError};

/// Report store holding the full record set in memory.
///
/// Stands in for a real reporting backend. It can simulate network latency
/// and intermittent list failures so that callers exercise their loading and
/// error paths.
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
    latency: Duration,
    failure_rate: f64,
}

impl InMemoryReportRepository {
    /// Create a repository over an existing record set
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
            latency: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    /// Create a repository seeded with generated mock reports
    pub fn with_mock_data(count: usize, seed: Option<u64>) -> Self {
        Self::new(generate_mock_reports(count, seed))
    }

    /// Delay applied to every operation
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability in `[0, 1]` that a listing call fails with a connection error
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    /// Copy of the current record set, in store order
    pub async fn snapshot(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn simulate_failure(&self) -> Result<(), DatabaseError> {
        if self.failure_rate > 0.0 && fastrand::f64() < self.failure_rate {
            tracing::warn!("Simulated network failure while fetching reports");
            return Err(StorageError::ConnectionFailed("Failed to fetch reports".to_string()).into());
        }
        Ok(())
    }
}

impl Default for InMemoryReportRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl Repository for InMemoryReportRepository {
    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[async_trait]
impl CrudRepository<Report, NewReport, ReportUpdate> for InMemoryReportRepository {
    async fn create(&self, new: NewReport) -> Result<Report, DatabaseError> {
        self.simulate_latency().await;
        new.validate().map_err(StorageError::ValidationFailed)?;

        let mut reports = self.reports.write().await;
        let now = Utc::now();
        let report_type = new.report_type.unwrap_or_else(|| "Custom Report".to_string());
        let report = Report {
            id: reports.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            title: new.title.trim().to_string(),
            status: ReportStatus::Pending,
            department: new.department.unwrap_or_default(),
            priority: new.priority.unwrap_or_default(),
            author: new.author.unwrap_or_default(),
            report_type,
            record_count: 0,
            created_at: now,
            updated_at: now,
        };

        // Newest first, matching the listing's default order
        reports.insert(0, report.clone());
        tracing::info!(id = report.id, title = %report.title, "Report created");

        Ok(report)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>, DatabaseError> {
        self.simulate_latency().await;
        let reports = self.reports.read().await;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, id: i64, update: ReportUpdate) -> Result<Report, DatabaseError> {
        self.simulate_latency().await;
        update.validate().map_err(StorageError::ValidationFailed)?;

        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StorageError::NotFound(id))?;
        report.apply(update, Utc::now());
        tracing::info!(id, "Report updated");

        Ok(report.clone())
    }

    async fn delete(&self, id: i64) -> Result<Report, DatabaseError> {
        self.simulate_latency().await;

        let mut reports = self.reports.write().await;
        let index = reports
            .iter()
            .position(|r| r.id == id)
            .ok_or(StorageError::NotFound(id))?;
        let removed = reports.remove(index);
        tracing::info!(id, "Report deleted");

        Ok(removed)
    }

    async fn count(&self) -> Result<u64, DatabaseError> {
        Ok(self.reports.read().await.len() as u64)
    }
}

#[async_trait]
impl FilteredRepository<Report, NewReport, ReportUpdate, ReportQuery, ReportFilters> for InMemoryReportRepository {
    async fn find_with_query(&self, query: ReportQuery) -> Result<ReportPage, DatabaseError> {
        self.simulate_latency().await;
        self.simulate_failure()?;

        let reports = self.reports.read().await;
        Ok(query::query_reports(&reports, &query)?)
    }

    async fn find_all_filtered(&self, search: &str, filters: ReportFilters) -> Result<Vec<Report>, DatabaseError> {
        self.simulate_latency().await;

        let reports = self.reports.read().await;
        Ok(query::filter_reports(&reports, search, &filters)?)
    }

    async fn count_with_filters(&self, search: &str, filters: ReportFilters) -> Result<u64, DatabaseError> {
        let reports = self.reports.read().await;
        Ok(query::filter_reports(&reports, search, &filters)?.len() as u64)
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn summary(&self) -> Result<ReportSummary, DatabaseError> {
        self.simulate_latency().await;
        let reports = self.reports.read().await;
        Ok(ReportSummary::from_reports(reports.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ReportBuilder;

    #[tokio::test]
    async fn test_create_assigns_next_id_and_prepends() {
        let repo = InMemoryReportRepository::new(vec![
            ReportBuilder::new().with_id(3).build(),
            ReportBuilder::new().with_id(8).build(),
        ]);

        let created = repo.create(NewReport::new("  Quarterly Review ")).await.unwrap();
        assert_eq!(created.id, 9);
        assert_eq!(created.title, "Quarterly Review");
        assert_eq!(created.status, ReportStatus::Pending);
        assert_eq!(created.department.as_str(), "Engineering");
        assert_eq!(created.report_type, "Custom Report");

        let snapshot = repo.snapshot().await;
        assert_eq!(snapshot[0].id, 9);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title() {
        let repo = InMemoryReportRepository::default();
        let err = repo.create(NewReport::new(" ")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_report() {
        let repo = InMemoryReportRepository::default();
        let err = repo.update(5, ReportUpdate::default()).await.unwrap_err();
        assert_eq!(err, DatabaseError::not_found("report", 5));

        let err = repo.delete(5).await.unwrap_err();
        assert_eq!(err, DatabaseError::not_found("report", 5));
    }

    #[tokio::test]
    async fn test_failure_rate_one_always_fails_listing() {
        let repo = InMemoryReportRepository::new(vec![ReportBuilder::new().build()]).with_failure_rate(1.0);
        let err = repo.find_with_query(ReportQuery::new()).await.unwrap_err();
        assert!(err.is_retryable());

        // Only listing is affected
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let repo = InMemoryReportRepository::default().with_latency(Duration::from_millis(1200));
        let started = tokio::time::Instant::now();
        repo.find_with_query(ReportQuery::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1200));
    }
}
