// 予約枠は 1 時間単位
pub const UNIT_SECONDS: i64 = 3600;
// 予約可能なのは今日から 30 日以内
pub const MAX_RESERVE_PERIOD_DAYS: i64 = 30;
pub const MIN_VISITOR_COUNT: i32 = 2;
pub const MAX_VISITOR_COUNT: i32 = 8;
pub const MAX_MEMO_LENGTH: usize = 300;
