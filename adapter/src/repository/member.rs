use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::MemberId,
    member::{event::CreateMember, Member},
};
use kernel::repository::member::MemberRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::member::MemberRow, ConnectionPool};

#[derive(new)]
pub struct MemberRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let member_id = MemberId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO members (member_id, nickname, email, phone, member_type)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member_id)
        .bind(&event.nickname)
        .bind(&event.email)
        .bind(&event.phone)
        .bind(event.member_type.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No member record has been created".into(),
            ));
        }

        Ok(Member {
            member_id,
            nickname: event.nickname,
            email: event.email,
            phone: event.phone,
            member_type: event.member_type,
        })
    }

    async fn find_by_id(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, MemberRow>(
            r#"
                SELECT member_id, nickname, email, phone, member_type
                FROM members
                WHERE member_id = $1
            "#,
        )
        .bind(member_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Member::try_from)
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::member::MemberType;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_register_member(pool: sqlx::PgPool) {
        let repo = MemberRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateMember::new(
                "allen".into(),
                "allen@example.com".into(),
                "01012345678".into(),
                MemberType::Customer,
            ))
            .await
            .unwrap();

        let found = repo.find_by_id(created.member_id).await.unwrap();
        assert_eq!(found, Some(created));

        assert!(repo.find_by_id(MemberId::new()).await.unwrap().is_none());
    }
}
