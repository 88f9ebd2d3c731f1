//! URI query string utilities.
use iref::{
	UriBuf,
	uri::{Query, QueryBuf},
};
use serde::Serialize;

use crate::client::ClientError;

/// Extends the query parameters of a URI by serializing `value` as
/// `application/x-www-form-urlencoded` and appending the result.
///
/// Existing query parameters on the URI are preserved.
pub fn extend_uri_query<T: Serialize>(uri: &mut UriBuf, value: T) -> Result<(), ClientError> {
	let query = serialize_concat_query(
		uri.query().map(ToOwned::to_owned).unwrap_or_default(),
		value,
	)?;

	if !query.is_empty() {
		uri.set_query(Some(&query));
	}

	Ok(())
}

/// Serializes `value` as form-urlencoded data and concatenates it with the
/// existing query string.
pub fn serialize_concat_query<T>(query: QueryBuf, value: T) -> Result<QueryBuf, ClientError>
where
	T: Serialize,
{
	let other = serde_html_form::to_string(value).map_err(ClientError::encode)?;
	let other =
		QueryBuf::new(other.into_bytes()).map_err(|_| ClientError::encode("invalid query"))?;
	concat_query(query, &other)
}

/// Concatenates two query strings with `&` as separator.
///
/// If either query is empty, the other is returned as-is without a
/// separator.
pub fn concat_query(query: QueryBuf, other: &Query) -> Result<QueryBuf, ClientError> {
	let mut query = query.into_string();

	if !query.is_empty() && !other.is_empty() {
		query.push('&')
	}

	query.push_str(other.as_str());

	QueryBuf::new(query.into_bytes()).map_err(|_| ClientError::encode("invalid query"))
}
