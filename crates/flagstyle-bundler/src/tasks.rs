//! Concurrent fan-out of independent file operations.

use std::future::Future;

use tokio::task::{JoinError, JoinSet};

/// Run every task concurrently and collect their outputs.
///
/// Results arrive in completion order. The first failure is returned
/// immediately; tasks still in flight are aborted when the set is dropped,
/// while work that already finished stays done.
///
/// ```
/// use flagstyle_bundler::{join_all_fallible, Error};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Error> {
/// let mut doubled = join_all_fallible((1..=3).map(|n| async move { Ok::<_, Error>(n * 2) })).await?;
/// doubled.sort();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # Ok(()) }
/// ```
pub async fn join_all_fallible<T, E, F, I>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let mut join_set = JoinSet::new();
    for task in tasks {
        join_set.spawn(task);
    }

    let mut results = Vec::with_capacity(join_set.len());
    while let Some(joined) = join_set.join_next().await {
        results.push(joined??);
    }

    Ok(results)
}
