use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;

/// Integer id taken from the single path parameter of a route.
///
/// Only plain non-negative decimal ids that fit in `i32` match; anything else
/// is rejected with an empty 404 as if the route did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i32);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|_| StatusCode::NOT_FOUND)?;
            parse_resource_id(&raw)
                .map(Self)
                .ok_or(StatusCode::NOT_FOUND)
        }
    }
}

fn parse_resource_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
