//! Integration tests for the in-memory report repository

use reportdesk_api_types::{NewReport, ReportFilters, ReportQuery, ReportStatus, ReportUpdate, SortOrder};
use reportdesk_interfaces::{CrudRepository, DatabaseError, FilteredRepository, ReportRepository, Repository};
use reportdesk_storage::InMemoryReportRepository;

#[tokio::test]
async fn test_mock_repository_lists_pages() {
    let repo = InMemoryReportRepository::with_mock_data(250, Some(5));
    assert!(repo.health_check().await.is_ok());

    let page = repo
        .find_with_query(ReportQuery::new().page(2).page_size(25))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 25);
    assert_eq!(page.pagination.total_count, 250);
    assert_eq!(page.pagination.total_pages, 10);
    assert!(page.pagination.has_previous_page);
}

#[tokio::test]
async fn test_crud_round_trip() {
    let repo = InMemoryReportRepository::with_mock_data(10, Some(1));

    let created = repo.create(NewReport::new("Churn Deep Dive")).await.unwrap();
    assert_eq!(created.id, 11);
    assert_eq!(repo.find_by_id(11).await.unwrap(), Some(created.clone()));

    let updated = repo
        .update(
            11,
            ReportUpdate {
                status: Some(ReportStatus::Approved),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ReportStatus::Approved);
    assert!(updated.updated_at >= created.updated_at);

    let removed = repo.delete(11).await.unwrap();
    assert_eq!(removed.id, 11);
    assert_eq!(repo.find_by_id(11).await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 10);
}

#[tokio::test]
async fn test_created_report_is_found_by_title_search() {
    let repo = InMemoryReportRepository::with_mock_data(30, Some(2));
    repo.create(NewReport::new("Churn Deep Dive")).await.unwrap();

    let page = repo
        .find_with_query(ReportQuery::new().search("churn").sort("title", SortOrder::Asc))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Churn Deep Dive");
}

#[tokio::test]
async fn test_filtered_listing_and_count() {
    let repo = InMemoryReportRepository::with_mock_data(60, Some(9));
    let filters = ReportFilters::default().status("published");

    let all = repo.find_all_filtered("", filters.clone()).await.unwrap();
    assert_eq!(all.len(), 12);
    assert_eq!(repo.count_with_filters("", filters).await.unwrap(), 12);
}

#[tokio::test]
async fn test_invalid_query_surfaces_invalid_argument() {
    let repo = InMemoryReportRepository::with_mock_data(5, None);
    let err = repo
        .find_with_query(ReportQuery::new().page_size(0))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_summary_counts() {
    let repo = InMemoryReportRepository::with_mock_data(30, Some(4));
    let summary = repo.summary().await.unwrap();

    assert_eq!(summary.total, 30);
    assert_eq!(summary.by_status.get("draft"), Some(&6));
    assert_eq!(summary.by_department.get("IT"), Some(&5));
    assert_eq!(summary.by_status.values().sum::<u64>(), 30);
}
