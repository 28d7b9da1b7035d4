// ページネーションの範囲指定
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug)]
pub struct PaginatedList<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

impl<T> PaginatedList<T> {
    // items だけを別の型に詰め替える
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedList<U> {
        PaginatedList {
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
