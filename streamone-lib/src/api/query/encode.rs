//! Wire encoding for v1 list queries.

use super::FilterSpec;
use super::RelationList;
use super::SortSpec;
use crate::error::ValidationError;

/// Default `limit` when none is given.
pub const DEFAULT_LIMIT: u32 = 100;

/// Default `offset` when none is given.
pub const DEFAULT_OFFSET: u32 = 0;

/// Encodes a v1 list query into ordered wire parameters.
///
/// Produces `limit`/`offset` (with documented defaults), one
/// `filter[field]` or `filter[field:modifier]` pair per filter entry, one
/// `sort[field]=direction` pair per sort entry in precedence order, and a
/// comma-joined `relations` parameter. Values are emitted verbatim;
/// percent-encoding is the transport's responsibility.
///
/// `min`/`max` modifiers are normalized to `gte`/`lte` here, so the two
/// spellings encode byte-identically.
///
/// # Errors
///
/// Returns [`ValidationError`] for empty field or relation names. Unknown
/// modifier strings are rejected earlier, when parsed into
/// [`Modifier`](super::Modifier).
pub fn encode_v1(
    filters: Option<&FilterSpec>,
    sort: Option<&SortSpec>,
    relations: Option<&RelationList>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = vec![
        (
            "limit".to_string(),
            limit.unwrap_or(DEFAULT_LIMIT).to_string(),
        ),
        (
            "offset".to_string(),
            offset.unwrap_or(DEFAULT_OFFSET).to_string(),
        ),
    ];

    if let Some(filters) = filters {
        for (field, clause) in filters.entries() {
            if field.is_empty() {
                return Err(ValidationError::new("filter", "empty filter field name"));
            }
            let key = match clause.modifier.wire_name() {
                Some(modifier) => format!("filter[{field}:{modifier}]"),
                None => format!("filter[{field}]"),
            };
            params.push((key, clause.value.to_string()));
        }
    }

    if let Some(sort) = sort {
        for (field, direction) in sort.fields() {
            if field.is_empty() {
                return Err(ValidationError::new("sort", "empty sort field name"));
            }
            params.push((format!("sort[{field}]"), direction.as_str().to_string()));
        }
    }

    if let Some(relations) = relations
        && !relations.is_empty()
    {
        if relations.names().iter().any(String::is_empty) {
            return Err(ValidationError::new("relations", "empty relation name"));
        }
        params.push(("relations".to_string(), relations.names().join(",")));
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::Modifier;
    use crate::api::query::SortSpec;

    #[test]
    fn test_defaults_when_unset() {
        let params = encode_v1(None, None, None, None, None).unwrap();
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_exact_filter_has_no_modifier_suffix() {
        let filters = FilterSpec::new().exact("status", "open");
        let params = encode_v1(Some(&filters), None, None, None, None).unwrap();
        assert!(params.contains(&("filter[status]".to_string(), "open".to_string())));
    }

    #[test]
    fn test_partial_filter_passes_value_verbatim() {
        let filters = FilterSpec::new().partial("name", "Jo%");
        let params = encode_v1(Some(&filters), None, None, None, None).unwrap();
        assert!(params.contains(&("filter[name:partial]".to_string(), "Jo%".to_string())));
    }

    #[test]
    fn test_min_max_alias_gte_lte() {
        let with_aliases = FilterSpec::new()
            .field("total", 10, Modifier::Min)
            .field("total", 99, Modifier::Max);
        let with_canonical = FilterSpec::new().gte("total", 10).lte("total", 99);

        let a = encode_v1(Some(&with_aliases), None, None, None, None).unwrap();
        let b = encode_v1(Some(&with_canonical), None, None, None, None).unwrap();
        assert_eq!(a, b);
        assert!(a.contains(&("filter[total:gte]".to_string(), "10".to_string())));
        assert!(a.contains(&("filter[total:lte]".to_string(), "99".to_string())));
    }

    #[test]
    fn test_sort_preserves_input_order() {
        let sort = SortSpec::desc("total")
            .then_asc("customerName")
            .then_desc("createdAt");
        let params = encode_v1(None, Some(&sort), None, None, None).unwrap();
        let sorts: Vec<_> = params
            .iter()
            .filter(|(k, _)| k.starts_with("sort["))
            .collect();
        assert_eq!(
            sorts,
            vec![
                &("sort[total]".to_string(), "desc".to_string()),
                &("sort[customerName]".to_string(), "asc".to_string()),
                &("sort[createdAt]".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_relations_joined_in_order() {
        let relations: RelationList = ["customer", "reseller"].into_iter().collect();
        let params = encode_v1(None, None, Some(&relations), None, None).unwrap();
        assert!(params.contains(&("relations".to_string(), "customer,reseller".to_string())));
    }

    #[test]
    fn test_explicit_limit_offset() {
        let params = encode_v1(None, None, None, Some(25), Some(50)).unwrap();
        assert_eq!(params[0], ("limit".to_string(), "25".to_string()));
        assert_eq!(params[1], ("offset".to_string(), "50".to_string()));
    }

    #[test]
    fn test_empty_filter_field_rejected() {
        let filters = FilterSpec::new().exact("", "x");
        assert!(encode_v1(Some(&filters), None, None, None, None).is_err());
    }

    #[test]
    fn test_unknown_modifier_string_rejected() {
        assert!("bogus".parse::<Modifier>().is_err());
        assert!("min".parse::<Modifier>().is_ok());
    }
}
