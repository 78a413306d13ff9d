//! Report listing service

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use reportdesk_api_types::{ReportFilters, ReportPage, ReportQuery, SortField, SortOrder};
use reportdesk_config::ReportDeskConfig;
use reportdesk_interfaces::ReportRepository;
use reportdesk_output::{
    CsvExporter, DeliveryResult, FilesystemConfig, FilesystemDestination, OutputDestination,
};
use reportdesk_storage::{sort_reports, InMemoryReportRepository};

use crate::{debounce::Debouncer, error::ServiceResult};

/// Page size of a fresh listing
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Column and direction chosen by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorting {
    pub sort_by: String,
    pub order: SortOrder,
}

impl Sorting {
    pub fn new(sort_by: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_by: sort_by.into(),
            order,
        }
    }
}

/// What the listing currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    /// `None` lists newest first
    pub sorting: Option<Sorting>,
    pub filters: ReportFilters,
    pub search: String,
    /// Total pages of the last applied response
    pub page_count: u64,
    pub total_count: u64,
    pub loading: bool,
    /// Message of the last failed refresh
    pub error: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sorting: None,
            filters: ReportFilters::default(),
            search: String::new(),
            page_count: 0,
            total_count: 0,
            loading: false,
            error: None,
        }
    }
}

impl QueryState {
    /// Repository query for the current state
    pub fn to_query(&self) -> ReportQuery {
        let (sort_by, order) = match &self.sorting {
            Some(sorting) => (sorting.sort_by.as_str(), sorting.order),
            None => (SortField::CreatedAt.as_str(), SortOrder::Desc),
        };

        ReportQuery::new()
            .search(self.search.clone())
            .filters(self.filters.clone())
            .sort(sort_by, order)
            .page(self.page)
            .page_size(self.page_size)
    }
}

/// Keeps listing state and talks to the repository on the caller's behalf.
///
/// Every state change triggers a refresh. When refreshes overlap, only the
/// most recently started one is applied; older responses come back as
/// `Ok(None)` and leave the state untouched.
pub struct ReportService<R> {
    repository: Arc<R>,
    state: Mutex<QueryState>,
    refresh_generation: AtomicU64,
    debouncer: Debouncer,
    exporter: CsvExporter,
    destination: Arc<dyn OutputDestination>,
}

impl<R: ReportRepository> ReportService<R> {
    pub fn new(
        repository: Arc<R>,
        debouncer: Debouncer,
        exporter: CsvExporter,
        destination: Arc<dyn OutputDestination>,
    ) -> Self {
        Self::with_state(repository, QueryState::default(), debouncer, exporter, destination)
    }

    pub fn with_state(
        repository: Arc<R>,
        state: QueryState,
        debouncer: Debouncer,
        exporter: CsvExporter,
        destination: Arc<dyn OutputDestination>,
    ) -> Self {
        Self {
            repository,
            state: Mutex::new(state),
            refresh_generation: AtomicU64::new(0),
            debouncer,
            exporter,
            destination,
        }
    }

    /// Copy of the current state
    pub async fn state(&self) -> QueryState {
        self.state.lock().await.clone()
    }

    /// Query the repository with the current state.
    ///
    /// Returns `Ok(None)` when a newer refresh started before this one
    /// finished.
    pub async fn refresh(&self) -> ServiceResult<Option<ReportPage>> {
        let ticket = self.refresh_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.error = None;
            state.to_query()
        };

        let result = self.repository.find_with_query(query).await;

        if self.refresh_generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "Discarding superseded report refresh");
            return Ok(None);
        }

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(page) => {
                state.page_count = page.pagination.total_pages;
                state.total_count = page.pagination.total_count;
                Ok(Some(page))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Report refresh failed");
                state.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Go to a 1-based page
    pub async fn set_page(&self, page: u32) -> ServiceResult<Option<ReportPage>> {
        self.state.lock().await.page = page;
        self.refresh().await
    }

    pub async fn set_page_size(&self, page_size: u32) -> ServiceResult<Option<ReportPage>> {
        self.state.lock().await.page_size = page_size;
        self.refresh().await
    }

    /// `None` restores newest-first ordering
    pub async fn set_sorting(&self, sorting: Option<Sorting>) -> ServiceResult<Option<ReportPage>> {
        self.state.lock().await.sorting = sorting;
        self.refresh().await
    }

    /// Replace the filter set and go back to the first page
    pub async fn apply_filters(&self, filters: ReportFilters) -> ServiceResult<Option<ReportPage>> {
        {
            let mut state = self.state.lock().await;
            state.filters = filters;
            state.page = 1;
        }
        self.refresh().await
    }

    /// Debounced search. Returns `Ok(None)` if a later keystroke superseded
    /// this one; otherwise resets to the first page and refreshes.
    pub async fn search(&self, text: impl Into<String>) -> ServiceResult<Option<ReportPage>> {
        let text = text.into();
        if !self.debouncer.debounce().await {
            return Ok(None);
        }

        {
            let mut state = self.state.lock().await;
            state.search = text;
            state.page = 1;
        }
        self.refresh().await
    }

    /// Export every report matching the current search and filters, in the
    /// current sort order.
    pub async fn export_csv(&self) -> ServiceResult<DeliveryResult> {
        let (search, filters, sorting) = {
            let state = self.state.lock().await;
            (state.search.clone(), state.filters.clone(), state.sorting.clone())
        };

        let mut reports = self.repository.find_all_filtered(&search, filters).await?;
        let (field, order) = match sorting {
            Some(sorting) => (SortField::resolve(&sorting.sort_by), sorting.order),
            None => (SortField::CreatedAt, SortOrder::Desc),
        };
        sort_reports(&mut reports, field, order);

        let delivery = self
            .exporter
            .export_reports(&reports, self.destination.as_ref())
            .await?;
        tracing::info!(
            rows = reports.len(),
            location = delivery.location.as_deref().unwrap_or(""),
            "Reports exported"
        );

        Ok(delivery)
    }
}

impl ReportService<InMemoryReportRepository> {
    /// Wire a service over the mock dataset, exporting to the configured
    /// directory. The configuration is validated first.
    pub fn from_config(config: &ReportDeskConfig) -> ServiceResult<Self> {
        config.validate_all()?;

        let repository = InMemoryReportRepository::with_mock_data(
            config.mock_data.record_count,
            config.mock_data.seed,
        )
        .with_latency(config.mock_data.latency)
        .with_failure_rate(config.mock_data.failure_rate);

        let destination = FilesystemDestination::new(
            FilesystemConfig::new(&config.export.output_dir).with_overwrite(config.export.overwrite),
        );
        destination.validate_config()?;

        let exporter = CsvExporter::new(config.export.base_filename.clone())
            .with_date_format(config.export.date_format.clone());

        let state = QueryState {
            page_size: config.query.default_page_size,
            sorting: Some(Sorting::new(
                config.query.default_sort_by.clone(),
                config.query.default_sort_order.parse().unwrap_or_default(),
            )),
            ..QueryState::default()
        };

        tracing::info!(
            records = config.mock_data.record_count,
            page_size = state.page_size,
            "Report service initialized"
        );

        Ok(Self::with_state(
            Arc::new(repository),
            state,
            Debouncer::new(config.search.debounce),
            exporter,
            Arc::new(destination),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportdesk_storage::testing::ReportBuilder;
    use reportdesk_api_types::ReportStatus;
    use std::time::Duration;

    fn service(repository: InMemoryReportRepository) -> ReportService<InMemoryReportRepository> {
        let dir = std::env::temp_dir().join("reportdesk-service-unit");
        ReportService::new(
            Arc::new(repository),
            Debouncer::new(Duration::from_millis(300)),
            CsvExporter::default(),
            Arc::new(FilesystemDestination::new(FilesystemConfig::new(dir))),
        )
    }

    #[test]
    fn test_default_state_query() {
        let query = QueryState::default().to_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert!(query.search.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_updates_page_count() {
        let reports = (1..=25).map(|id| ReportBuilder::new().with_id(id).build()).collect();
        let service = service(InMemoryReportRepository::new(reports));

        let page = service.refresh().await.unwrap().unwrap();
        assert_eq!(page.items.len(), 10);

        let state = service.state().await;
        assert_eq!(state.page_count, 3);
        assert_eq!(state.total_count, 25);
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_refresh_keeps_latest() {
        let reports = (1..=5).map(|id| ReportBuilder::new().with_id(id).build()).collect();
        let repository = InMemoryReportRepository::new(reports).with_latency(Duration::from_millis(100));
        let service = service(repository);

        let (first, second) = tokio::join!(service.refresh(), service.refresh());
        assert!(first.unwrap().is_none());
        assert!(second.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_apply_filters_resets_page() {
        let reports = (1..=30)
            .map(|id| {
                let status = if id % 2 == 0 { ReportStatus::Draft } else { ReportStatus::Pending };
                ReportBuilder::new().with_id(id).with_status(status).build()
            })
            .collect();
        let service = service(InMemoryReportRepository::new(reports));

        service.set_page(3).await.unwrap();
        let page = service
            .apply_filters(ReportFilters::default().status("draft"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.pagination.total_count, 15);
        assert_eq!(service.state().await.page, 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_records_error() {
        let repository = InMemoryReportRepository::new(vec![ReportBuilder::new().build()]).with_failure_rate(1.0);
        let service = service(repository);

        let err = service.refresh().await.unwrap_err();
        assert!(err.is_retryable());

        let state = service.state().await;
        assert_eq!(state.error.as_deref(), Some("Connection error: Failed to fetch reports"));
        assert!(!state.loading);
    }
}
