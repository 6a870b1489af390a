use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

mod support;

use bookshelf_core::application::{
    ApplicationError,
    dto::{BookDto, Page},
    queries::{
        books::{BookQueryService, GetBookByIdQuery, GetBookBySlugQuery, ListBooksQuery},
        reviews::{MostReviewedQuery, ReviewReportService},
    },
};
use bookshelf_core::domain::{
    book::BookCondition,
    review::{ReportPeriod, ReviewActivity},
};
use support::{BookBuilder, FixedReviewReports, InMemoryBookRepo, book};

fn catalog() -> BookQueryService {
    let repo = Arc::new(InMemoryBookRepo::with_books([
        book("Hyperion", "hyperion"),
        book("The Fall of Hyperion", "the-fall-of-hyperion"),
        BookBuilder::new("Dune", "dune")
            .author(Some("Frank Herbert"))
            .condition(BookCondition::UsedCondition)
            .build(),
        BookBuilder::new("Anonymous Poems", "anonymous-poems")
            .author(None)
            .build(),
    ]));
    BookQueryService::new(repo, Arc::new(FixedReviewReports::default()))
}

fn titles(page: &Page<BookDto>) -> Vec<&str> {
    page.items.iter().map(|b| b.title.as_str()).collect()
}

#[tokio::test]
async fn book_lookup_carries_truncated_rating() {
    let hyperion = book("Hyperion", "hyperion");
    let unrated = book("Endymion", "endymion");
    let reports = FixedReviewReports {
        averages: HashMap::from([(hyperion.id, 3.75)]),
        ..FixedReviewReports::default()
    };
    let repo = Arc::new(InMemoryBookRepo::with_books([hyperion.clone(), unrated.clone()]));
    let service = BookQueryService::new(repo, Arc::new(reports));

    let dto = service
        .get_book_by_slug(GetBookBySlugQuery {
            slug: "hyperion".into(),
        })
        .await
        .unwrap();
    assert_eq!(dto.id, hyperion.id.0);
    assert_eq!(dto.rating, Some(3));

    let dto = service
        .get_book_by_id(GetBookByIdQuery { id: unrated.id.0 })
        .await
        .unwrap();
    assert_eq!(dto.rating, None);
}

#[tokio::test]
async fn malformed_or_unknown_slug_is_not_found() {
    let repo = Arc::new(InMemoryBookRepo::with_books([book("Hyperion", "hyperion")]));
    let service = BookQueryService::new(repo, Arc::new(FixedReviewReports::default()));

    for slug in ["Hyperion", "dune"] {
        let err = service
            .get_book_by_slug(GetBookBySlugQuery { slug: slug.into() })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{slug}: {err:?}");
    }
}

#[tokio::test]
async fn book_dto_serializes_with_camel_case_keys() {
    let mut promoted = book("Hyperion", "hyperion");
    promoted.is_promoted = true;
    let repo = Arc::new(InMemoryBookRepo::with_books([promoted]));
    let service = BookQueryService::new(repo, Arc::new(FixedReviewReports::default()));

    let dto = service
        .get_book_by_slug(GetBookBySlugQuery {
            slug: "hyperion".into(),
        })
        .await
        .unwrap();
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["isPromoted"], true);
    assert_eq!(json["promotionStatus"], "none");
    assert_eq!(json["condition"], "NewCondition");
    assert!(json.get("rating").is_none());
}

#[tokio::test]
async fn most_reviewed_reports_day_and_month() {
    let reports = FixedReviewReports {
        by_day: Some(ReviewActivity {
            period_start: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            review_count: 7,
        }),
        by_month: Some(ReviewActivity {
            period_start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            review_count: 31,
        }),
        ..FixedReviewReports::default()
    };
    let service = ReviewReportService::new(Arc::new(reports));

    let day = service
        .most_reviewed(MostReviewedQuery {
            period: ReportPeriod::Day,
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(day.review_count, 7);
    assert_eq!(day.label(), "2024-03-14");

    let month = service
        .most_reviewed(MostReviewedQuery {
            period: ReportPeriod::Month,
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(month.review_count, 31);
    assert_eq!(month.label(), "2024-03");
}

#[tokio::test]
async fn most_reviewed_without_reviews_is_none() {
    let service = ReviewReportService::new(Arc::new(FixedReviewReports::default()));

    let report = service
        .most_reviewed(MostReviewedQuery {
            period: ReportPeriod::Day,
        })
        .await
        .unwrap();

    assert!(report.is_none());
}

#[tokio::test]
async fn list_filters_title_case_insensitively() {
    let service = catalog();

    let page = service
        .list_books(ListBooksQuery {
            title: Some("HYPERION".into()),
            order: Some("asc".into()),
            ..ListBooksQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), ["Hyperion", "The Fall of Hyperion"]);
    assert!(!page.has_more);
}

#[tokio::test]
async fn list_filters_author_and_condition() {
    let service = catalog();

    let by_author = service
        .list_books(ListBooksQuery {
            author: Some("herb".into()),
            ..ListBooksQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(&by_author), ["Dune"]);

    let by_condition = service
        .list_books(ListBooksQuery {
            condition: Some("https://schema.org/NewCondition".into()),
            order: Some("desc".into()),
            ..ListBooksQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(
        titles(&by_condition),
        ["The Fall of Hyperion", "Hyperion", "Anonymous Poems"]
    );
}

#[tokio::test]
async fn list_pages_through_results() {
    let service = catalog();
    let query = |page| ListBooksQuery {
        order: Some("asc".into()),
        page,
        per_page: 3,
        ..ListBooksQuery::default()
    };

    let first = service.list_books(query(0)).await.unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(titles(&first), ["Anonymous Poems", "Dune", "Hyperion"]);
    assert!(first.has_more);

    let second = service.list_books(query(2)).await.unwrap();
    assert_eq!(titles(&second), ["The Fall of Hyperion"]);
    assert!(!second.has_more);

    let json = serde_json::to_value(&second).unwrap();
    assert_eq!(json["perPage"], 3);
    assert_eq!(json["hasMore"], false);
}

#[tokio::test]
async fn list_rejects_unknown_order_and_condition() {
    let service = catalog();

    let err = service
        .list_books(ListBooksQuery {
            order: Some("sideways".into()),
            ..ListBooksQuery::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");

    let err = service
        .list_books(ListBooksQuery {
            condition: Some("Mint".into()),
            ..ListBooksQuery::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)), "{err:?}");
}
