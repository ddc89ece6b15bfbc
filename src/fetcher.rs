//! Paginated and batched object reads.
//!
//! Owned-object listings follow the fullnode's cursor until it reports no
//! further pages. Lookups by id are split into chunks that fit the multi-get
//! limit and issued concurrently.

use anyhow::{anyhow, Result};
use flowx_transport::{
    ObjectDataFilter, ObjectDataOptions, ObjectResponseQuery, SuiObjectData, SuiObjectResponse,
    SuiRpc,
};
use futures::future::try_join_all;
use tracing::debug;

/// Page size requested from `suix_getOwnedObjects`.
pub const MAX_LIMIT_PER_RPC_CALL: usize = 50;

/// Ids per `sui_multiGetObjects` request unless configured otherwise.
pub const DEFAULT_OBJECT_BATCH_SIZE: usize = 49;

/// Largest id list the fullnode accepts in one multi-get.
pub const MAX_OBJECT_BATCH_SIZE: usize = 50;

/// Every object of type `object_type` owned by `owner`, in page order.
///
/// Content, owner and type are included. A failed page fails the whole call.
pub async fn fetch_owned_objects(
    rpc: &dyn SuiRpc,
    owner: &str,
    object_type: &str,
) -> Result<Vec<SuiObjectData>> {
    let query = ObjectResponseQuery::new(
        Some(ObjectDataFilter::StructType(object_type.to_string())),
        ObjectDataOptions::new()
            .with_content()
            .with_owner()
            .with_type(),
    );

    let responses = paginate(rpc, owner, &query, Some(MAX_LIMIT_PER_RPC_CALL)).await?;
    responses
        .into_iter()
        .map(|response| {
            response.data.ok_or_else(|| {
                anyhow!(
                    "owned object entry for {} has no data: {}",
                    owner,
                    response.error.unwrap_or_default()
                )
            })
        })
        .collect()
}

/// Every object owned by `account` matching `filter`, as raw responses.
///
/// Uses the fullnode's default page size.
pub async fn get_fully_owned_objects(
    rpc: &dyn SuiRpc,
    account: &str,
    options: ObjectDataOptions,
    filter: Option<ObjectDataFilter>,
) -> Result<Vec<SuiObjectResponse>> {
    let query = ObjectResponseQuery::new(filter, options);
    paginate(rpc, account, &query, None).await
}

async fn paginate(
    rpc: &dyn SuiRpc,
    owner: &str,
    query: &ObjectResponseQuery,
    limit: Option<usize>,
) -> Result<Vec<SuiObjectResponse>> {
    let mut objects = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = rpc
            .get_owned_objects(owner, query, cursor.as_deref(), limit)
            .await?;
        debug!(
            owner,
            count = page.data.len(),
            has_next = page.has_next_page,
            "fetched owned objects page"
        );
        objects.extend(page.data);

        if !page.has_next_page {
            break;
        }
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(anyhow!(
                    "owned objects page for {} has next page but no cursor",
                    owner
                ))
            }
        }
    }

    Ok(objects)
}

/// Split `ids` into consecutive chunks of at most `chunk_size`.
pub fn chunk_ids(ids: &[String], chunk_size: usize) -> Result<Vec<&[String]>> {
    if chunk_size == 0 {
        return Err(anyhow!("chunk size must be at least 1"));
    }
    Ok(ids.chunks(chunk_size).collect())
}

/// Fetch objects by id with one concurrent multi-get per chunk.
///
/// Results keep the order of `ids`.
pub async fn multi_get_objects_chunked(
    rpc: &dyn SuiRpc,
    ids: &[String],
    options: &ObjectDataOptions,
    chunk_size: usize,
) -> Result<Vec<SuiObjectResponse>> {
    let chunks = chunk_ids(ids, chunk_size)?;
    debug!(
        ids = ids.len(),
        chunks = chunks.len(),
        chunk_size,
        "multi-get objects"
    );

    let results = try_join_all(
        chunks
            .into_iter()
            .map(|chunk| rpc.multi_get_objects(chunk, options)),
    )
    .await?;

    Ok(results.into_iter().flatten().collect())
}
