use super::MemberType;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateMember {
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub member_type: MemberType,
}
