use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        id::MemberId,
        member::{Member, MemberType},
    },
    repository::member::MemberRepository,
};

#[derive(new)]
pub struct MemberService {
    member_repository: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub async fn find_by_id(&self, member_id: MemberId) -> AppResult<Member> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("member ({member_id}) was not found")))
    }

    pub async fn find_customer_by_id(&self, customer_id: MemberId) -> AppResult<Member> {
        self.find_by_id_and_type(customer_id, MemberType::Customer)
            .await
    }

    pub async fn find_owner_by_id(&self, owner_id: MemberId) -> AppResult<Member> {
        self.find_by_id_and_type(owner_id, MemberType::Owner).await
    }

    // 種別が合わない会員は存在しないものとして扱う
    async fn find_by_id_and_type(
        &self,
        member_id: MemberId,
        member_type: MemberType,
    ) -> AppResult<Member> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .filter(|m| m.member_type == member_type)
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "{} ({member_id}) was not found",
                    member_type.as_ref().to_lowercase()
                ))
            })
    }
}
