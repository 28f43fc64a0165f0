use lambda_http::{tracing, Body, Error, Request, RequestExt, Response};
use thiserror::Error;

use crate::record::{Record, UNIVERSITY};
use crate::render::Template;
use crate::store::RecordStore;

#[derive(Debug, Error)]
pub(crate) enum HandlerError {
    #[error("query result has no items")]
    MissingItems,
}

/// Stores the submitted student, then renders every student into the page.
///
/// A request without query string parameters only renders. The response is
/// always `200 text/html`; failures surface as `Err` and are left to the
/// runtime.
pub(crate) async fn function_handler<S>(
    store: &S,
    template: &Template,
    event: Request,
) -> Result<Response<Body>, Error>
where
    S: RecordStore + ?Sized,
{
    let params = event.query_string_parameters();
    if !params.is_empty() {
        let record = Record::from_params(|name| params.first(name));
        write_submission(store, &record).await?;
    }

    let items = query_all(store).await;

    // A failed query leaves `items` empty and this is where the invocation
    // fails. The query error itself was only logged.
    let records = items.ok_or(HandlerError::MissingItems)?;
    let body = template.render(&records);

    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .body(Body::Text(body))?)
}

async fn write_submission<S>(store: &S, record: &Record) -> Result<(), Error>
where
    S: RecordStore + ?Sized,
{
    store.put(record).await?;
    tracing::info!(student_id = ?record.student_id, "stored submission");
    Ok(())
}

/// Reads every record under the fixed partition.
///
/// Query failures are logged and swallowed; the caller gets `None`.
/// Continuation pages are not followed.
async fn query_all<S>(store: &S) -> Option<Vec<Record>>
where
    S: RecordStore + ?Sized,
{
    match store.query(UNIVERSITY).await {
        Ok(page) => {
            if page.truncated {
                tracing::warn!("query result truncated, rendering first page only");
            }
            match &page.items {
                Some(items) => {
                    tracing::info!(count = items.len(), "queried students");
                    if let Ok(json) = serde_json::to_string(items) {
                        tracing::debug!(items = %json, "query result");
                    }
                }
                None => tracing::warn!("query response carried no items"),
            }
            page.items
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to query students");
            None
        }
    }
}
