use async_trait::async_trait;
use paginator_api::{PaginateError, PaginateResult};
use tracing::{debug, warn};

use crate::repository::count_records::count_records;
use crate::repository::pagination::{Page, PageRequest};
use crate::repository::query_source::QuerySource;

/// Fetch one page of `source` together with its pagination metadata.
///
/// The count runs on a spawned task over a clone of the filter state taken
/// before any ordering is applied, while the page itself is fetched on the
/// calling task. Both are always awaited before returning. The count and the
/// fetch read the store independently, so under concurrent writes `total`
/// may not agree with `data`.
///
/// # Errors
/// * [`PaginateError::FetchFailed`] - the page query failed; takes precedence
///   when both queries fail
/// * [`PaginateError::CountFailed`] - the count query failed
/// * [`PaginateError::CountTaskFailed`] - the count task panicked
pub async fn paginate<Q: QuerySource>(
    mut source: Q,
    request: PageRequest,
) -> PaginateResult<Page<Q::Container>> {
    let request = request.normalized();
    let offset = request.offset();

    if request.show_sql {
        source.show_sql();
    }

    debug!(
        page = request.page,
        limit = request.limit,
        offset,
        order_terms = request.order_by.len(),
        "Paginating query"
    );

    let count_task = tokio::spawn(count_records(source.clone()));

    for clause in &request.order_by {
        source.order_by(clause);
    }
    let fetched = source.fetch(request.limit, offset).await;

    let counted = count_task.await;

    let data = match fetched {
        Ok(data) => data,
        Err(err) => {
            match &counted {
                Ok(Err(count_err)) => {
                    warn!(error = %count_err, "Count query also failed")
                }
                Err(join_err) => warn!(error = %join_err, "Count task also failed"),
                Ok(Ok(_)) => {}
            }
            return Err(PaginateError::FetchFailed(err));
        }
    };

    let total = match counted {
        Ok(Ok(total)) => total,
        Ok(Err(err)) => return Err(PaginateError::CountFailed(err)),
        Err(join_err) => return Err(PaginateError::CountTaskFailed(Box::new(join_err))),
    };

    let page = Page::from_parts(data, total, request.page, request.limit, offset);
    debug!(
        total = page.total,
        from = page.from,
        to = page.to,
        last_page = page.last_page,
        "Assembled page"
    );
    Ok(page)
}

/// Method form of [`paginate`] for any query source
///
/// # Example
/// ```ignore
/// let page = users_query.paginate(PageRequest::new(2, 50).order_by("name ASC")).await?;
/// ```
#[async_trait]
pub trait Paginate: QuerySource {
    async fn paginate(self, request: PageRequest) -> PaginateResult<Page<Self::Container>>;
}

#[async_trait]
impl<Q: QuerySource> Paginate for Q {
    async fn paginate(self, request: PageRequest) -> PaginateResult<Page<Self::Container>> {
        paginate(self, request).await
    }
}
