use crate::model::id::MemberId;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberType {
    Owner,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub member_id: MemberId,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub member_type: MemberType,
}

impl Member {
    pub fn is_owner(&self) -> bool {
        self.member_type == MemberType::Owner
    }
}
