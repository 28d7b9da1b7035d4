use garde::Validate;
use kernel::model::list::{ListOptions, PaginatedList};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 20;

pub(crate) const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
pub struct ListQuery {
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl From<ListQuery> for ListOptions {
    fn from(value: ListQuery) -> Self {
        let ListQuery { limit, offset } = value;
        Self { limit, offset }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

impl<T, U> From<PaginatedList<T>> for PaginatedResponse<U>
where
    U: From<T>,
{
    fn from(value: PaginatedList<T>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(U::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(20, 0, true)]
    #[case(1, 10, true)]
    #[case(0, 0, false)]
    #[case(101, 0, false)]
    #[case(20, -1, false)]
    fn test_list_query_range(#[case] limit: i64, #[case] offset: i64, #[case] valid: bool) {
        let query = ListQuery { limit, offset };
        assert_eq!(query.validate(&()).is_ok(), valid);
    }

    #[test]
    fn test_paginated_response_converts_items() {
        let page = PaginatedList {
            total: 3,
            limit: 2,
            offset: 0,
            items: vec![1_i32, 2],
        };
        let res: PaginatedResponse<i64> = page.into();
        assert_eq!(res.total, 3);
        assert_eq!(res.items, vec![1_i64, 2]);
    }
}
