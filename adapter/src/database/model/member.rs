use std::str::FromStr;

use kernel::model::{
    id::MemberId,
    member::{Member, MemberType},
};
use shared::error::AppError;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct MemberRow {
    pub member_id: MemberId,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub member_type: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = AppError;

    fn try_from(value: MemberRow) -> Result<Self, Self::Error> {
        let MemberRow {
            member_id,
            nickname,
            email,
            phone,
            member_type,
        } = value;
        Ok(Member {
            member_id,
            nickname,
            email,
            phone,
            member_type: parse_member_type(&member_type)?,
        })
    }
}

pub(crate) fn parse_member_type(value: &str) -> Result<MemberType, AppError> {
    MemberType::from_str(value)
        .map_err(|e| AppError::ConversionEntityError(format!("member_type {value}: {e}")))
}
