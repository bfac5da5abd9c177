use sea_orm::DatabaseConnection;

use crate::{
    model::member::{CurrentUserDto, MemberDetailDto, MemberSummaryDto},
    server::{
        data::{member::MemberRepository, team::TeamRepository},
        error::AppError,
        model::member::{Member, PurchaseRecord, UpdateMemberParam},
        service::ticket::TicketService,
    },
};

/// Maximum number of admin search results.
const SEARCH_LIMIT: u64 = 20;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the profile of the logged-in member with team name and event tickets.
    pub async fn current_user(&self, member: Member) -> Result<CurrentUserDto, AppError> {
        let team_name = self.team_name(member.team_id).await?.unwrap_or_default();
        let tickets = TicketService::new(self.db)
            .tickets_for(&member)
            .await?
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(CurrentUserDto {
            id: member.slack_id,
            name: member.name,
            email: member.email,
            xp: member.experience_points,
            team_id: member.team_id,
            team_name,
            invite_id: member.invite_id,
            pending: member.pending,
            purchased_items: member
                .purchases
                .into_iter()
                .map(PurchaseRecord::into_dto)
                .collect(),
            tickets,
        })
    }

    pub async fn get_all(&self) -> Result<Vec<MemberSummaryDto>, AppError> {
        let members = MemberRepository::new(self.db).get_all().await?;

        Ok(members.into_iter().map(Member::into_summary_dto).collect())
    }

    /// Case-insensitive substring search over name, email, slack name and slack id.
    ///
    /// A blank query returns no results.
    pub async fn search(&self, query: &str) -> Result<Vec<MemberSummaryDto>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let members = MemberRepository::new(self.db)
            .search(query, SEARCH_LIMIT)
            .await?;

        Ok(members.into_iter().map(Member::into_summary_dto).collect())
    }

    pub async fn get_detail(&self, invite_id: &str) -> Result<Option<MemberDetailDto>, AppError> {
        let Some(member) = MemberRepository::new(self.db)
            .find_by_invite_id(invite_id)
            .await?
        else {
            return Ok(None);
        };

        let team_name = self.team_name(member.team_id).await?;
        Ok(Some(member.into_detail_dto(team_name)))
    }

    /// Applies admin edits (ban state, XP) to a member.
    ///
    /// # Returns
    /// - `Ok(Some(MemberDetailDto))` - The updated member
    /// - `Ok(None)` - No member with that invite id
    /// - `Err(AppError::BadRequest)` - Negative XP
    pub async fn update(
        &self,
        invite_id: &str,
        param: UpdateMemberParam,
    ) -> Result<Option<MemberDetailDto>, AppError> {
        if param.experience_points.is_some_and(|xp| xp < 0) {
            return Err(AppError::BadRequest(
                "Experience points cannot be negative".to_string(),
            ));
        }

        let Some(member) = MemberRepository::new(self.db)
            .update_admin(invite_id, param)
            .await?
        else {
            return Ok(None);
        };

        tracing::info!(
            slack_id = %member.slack_id,
            banned = member.banned,
            xp = member.experience_points,
            "Admin updated member"
        );

        let team_name = self.team_name(member.team_id).await?;
        Ok(Some(member.into_detail_dto(team_name)))
    }

    async fn team_name(&self, team_id: Option<i32>) -> Result<Option<String>, AppError> {
        let Some(team_id) = team_id else {
            return Ok(None);
        };
        let team = TeamRepository::new(self.db).find_by_id(team_id).await?;
        Ok(team.map(|team| team.name))
    }
}
