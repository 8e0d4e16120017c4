use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        invitation::InvitationRepository, member::MemberRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::AppError,
    model::invitation::Invitation,
    util::validate::normalize_email,
};

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Invites the account registered under `email` and notifies it.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - Pending invitation
    /// - `Err(AppError::NotFound)` - No account uses this email
    /// - `Err(AppError::Conflict)` - Already a member, or already invited
    pub async fn send(&self, workspace_id: i32, email: String) -> Result<Invitation, AppError> {
        let email = normalize_email(email)?;
        let invitation_repo = InvitationRepository::new(self.db);

        let invitee = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user registered with {}", email)))?;

        if MemberRepository::new(self.db)
            .is_member(workspace_id, invitee.id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "User {} is already a member of workspace {}",
                invitee.id, workspace_id
            )));
        }

        if invitation_repo.exists(workspace_id, invitee.id).await? {
            return Err(AppError::Conflict(format!(
                "User {} is already invited to workspace {}",
                invitee.id, workspace_id
            )));
        }

        let invitation = invitation_repo.create(workspace_id, invitee.id).await?;

        NotificationRepository::new(self.db)
            .create(
                invitee.id,
                format!(
                    "You have been invited to join the workspace {}",
                    invitation.workspace_name
                ),
            )
            .await?;

        tracing::debug!(
            "User {} invited to workspace {}",
            invitee.id,
            workspace_id
        );

        Ok(invitation)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Invitation>, AppError> {
        Ok(InvitationRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Invitation>, AppError> {
        Ok(InvitationRepository::new(self.db)
            .get_by_workspace(workspace_id)
            .await?)
    }

    /// Accepts an invitation addressed to `user_id`.
    pub async fn accept(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_for_user(id, user_id).await?;

        if !InvitationRepository::new(self.db).accept(id).await? {
            return Err(invitation_not_found(id));
        }

        Ok(())
    }

    /// Declines an invitation addressed to `user_id`.
    pub async fn decline(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.find_for_user(id, user_id).await?;

        InvitationRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Withdraws an invitation of the workspace.
    pub async fn cancel(&self, workspace_id: i32, id: i32) -> Result<(), AppError> {
        let invitation_repo = InvitationRepository::new(self.db);

        let invitation = invitation_repo
            .find_by_id(id)
            .await?
            .filter(|i| i.workspace_id == workspace_id)
            .ok_or_else(|| invitation_not_found(id))?;

        invitation_repo.delete(invitation.id).await?;

        Ok(())
    }

    /// Invitations addressed to someone else are reported as missing.
    async fn find_for_user(&self, id: i32, user_id: i32) -> Result<Invitation, AppError> {
        InvitationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|i| i.user_id == user_id)
            .ok_or_else(|| invitation_not_found(id))
    }
}

fn invitation_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Invitation {} not found", id))
}
