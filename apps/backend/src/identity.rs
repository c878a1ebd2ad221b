//! Task-scoped view of the authenticated caller.
//!
//! The gate wraps exactly one request's downstream future in
//! [`with_identity`]. The value is dropped when that future completes or is
//! cancelled, so it can never be observed by another request or outlive the
//! one it belongs to.

use std::future::Future;
use std::rc::Rc;

use tokio::task_local;

use crate::auth::principal::{Identity, Principal};

task_local! {
    static IDENTITY: Rc<Identity>;
}

/// Run `future` with `identity` visible to [`scoped_identity`].
pub async fn with_identity<F, R>(identity: Rc<Identity>, future: F) -> R
where
    F: Future<Output = R>,
{
    IDENTITY.scope(identity, future).await
}

/// Identity of the request currently being served, if the gate installed one.
pub fn scoped_identity() -> Option<Rc<Identity>> {
    IDENTITY.try_with(Rc::clone).ok()
}

/// Principal of the request currently being served, if any.
pub fn scoped_principal() -> Option<Principal> {
    IDENTITY.try_with(|identity| identity.principal.clone()).ok()
}
