use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            activity, assignee, auth, board, board_list, card, invitation, label, member,
            notification, password_reset, user, workspace,
        },
        state::AppState,
        storage::MAX_IMAGE_BYTES,
    },
};

/// Body limit of image uploads, leaving room for the multipart framing.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskboard API", description = "Workspaces, boards, lists and cards"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::oauth_login,
        auth::oauth_callback,
        password_reset::send_email_verification,
        password_reset::reset_password,
        password_reset::delete_reset_code,
        user::get_current_user,
        user::get_user,
        user::update_user,
        user::patch_user,
        user::delete_user,
        user::update_profile_photo,
        workspace::get_workspace,
        workspace::get_my_workspaces,
        workspace::create_workspace,
        workspace::update_workspace,
        workspace::patch_workspace,
        workspace::delete_workspace,
        workspace::update_favicon,
        member::get_members,
        member::get_member,
        member::toggle_admin,
        member::toggle_board_creation,
        member::toggle_board_deletion,
        member::toggle_invitation,
        member::delete_member,
        invitation::send_invitation,
        invitation::get_my_invitations,
        invitation::get_workspace_invitations,
        invitation::accept_invitation,
        invitation::decline_invitation,
        invitation::cancel_invitation,
        board::get_boards,
        board::get_board,
        board::create_board,
        board::update_board,
        board::patch_board,
        board::delete_board,
        board_list::get_lists,
        board_list::get_list,
        board_list::create_list,
        board_list::rename_list,
        board_list::move_list,
        board_list::delete_list,
        card::get_cards,
        card::get_card,
        card::create_card,
        card::update_card,
        card::patch_card,
        card::move_card,
        card::delete_card,
        label::get_labels,
        label::create_label,
        label::update_label,
        label::patch_label,
        label::delete_label,
        assignee::get_assignees,
        assignee::assign_user,
        assignee::unassign_user,
        notification::get_my_notifications,
        notification::send_notification,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::delete_notification,
        notification::delete_my_notifications,
        activity::get_activities,
        activity::create_activity,
        activity::delete_activity,
        activity::clear_activities,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::ImageUploadForm,
        model::auth::RegisterDto,
        model::auth::LoginDto,
        model::auth::SendVerificationDto,
        model::auth::ResetPasswordDto,
        model::user::UserDto,
        model::user::PublicUserDto,
        model::user::UpdateUserDto,
        model::user::PatchUserDto,
        model::workspace::WorkspaceDto,
        model::workspace::CreateWorkspaceDto,
        model::workspace::UpdateWorkspaceDto,
        model::workspace::PatchWorkspaceDto,
        model::member::MemberDto,
        model::invitation::InvitationDto,
        model::board::BoardDto,
        model::board::CreateBoardDto,
        model::board::UpdateBoardDto,
        model::board::PatchBoardDto,
        model::list::ListDto,
        model::list::CreateListDto,
        model::list::RenameListDto,
        model::list::MoveListDto,
        model::card::CardDto,
        model::card::CreateCardDto,
        model::card::UpdateCardDto,
        model::card::PatchCardDto,
        model::card::MoveCardDto,
        model::label::LabelDto,
        model::label::CreateLabelDto,
        model::label::PatchLabelDto,
        model::assignee::AssigneeDto,
        model::assignee::CreateAssigneeDto,
        model::notification::NotificationDto,
        model::notification::CreateNotificationDto,
        model::activity::ActivityDto,
        model::activity::CreateActivityDto,
    )),
    tags(
        (name = "auth", description = "Registration, login and OAuth"),
        (name = "password_reset", description = "Password reset by mailed code"),
        (name = "user", description = "Account management"),
        (name = "workspace", description = "Workspaces"),
        (name = "member", description = "Workspace members and their rights"),
        (name = "invitation", description = "Workspace invitations"),
        (name = "board", description = "Boards of a workspace"),
        (name = "list", description = "Ordered lists of a board"),
        (name = "card", description = "Ordered cards of a list"),
        (name = "label", description = "Card labels"),
        (name = "assignee", description = "Card assignees"),
        (name = "notification", description = "User notifications"),
        (name = "activity", description = "Board history"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", delete(auth::logout))
        .route("/oauth/login", get(auth::oauth_login))
        .route("/oauth/callback", get(auth::oauth_callback))
        // password reset
        .route(
            "/send_email_verification",
            post(password_reset::send_email_verification),
        )
        .route("/reset_password", patch(password_reset::reset_password))
        .route(
            "/reset_code/{email}",
            delete(password_reset::delete_reset_code),
        )
        // user
        .route(
            "/user",
            get(user::get_current_user)
                .put(user::update_user)
                .patch(user::patch_user)
                .delete(user::delete_user),
        )
        .route("/user/{user_id}", get(user::get_user))
        .route(
            "/update_profile_photo",
            post(user::update_profile_photo).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/user/{user_id}/notification",
            post(notification::send_notification),
        )
        // workspace
        .route("/workspace", post(workspace::create_workspace))
        .route("/my_workspaces", get(workspace::get_my_workspaces))
        .route(
            "/workspace/{workspace_id}",
            get(workspace::get_workspace)
                .put(workspace::update_workspace)
                .patch(workspace::patch_workspace)
                .delete(workspace::delete_workspace),
        )
        .route(
            "/workspace/{workspace_id}/favicon",
            post(workspace::update_favicon).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        // member
        .route("/workspace/{workspace_id}/members", get(member::get_members))
        .route(
            "/workspace/{workspace_id}/member/{user_id}",
            get(member::get_member),
        )
        .route(
            "/workspace/{workspace_id}/member_admin/{user_id}",
            patch(member::toggle_admin),
        )
        .route(
            "/workspace/{workspace_id}/member_board_creation/{user_id}",
            patch(member::toggle_board_creation),
        )
        .route(
            "/workspace/{workspace_id}/member_board_deletion/{user_id}",
            patch(member::toggle_board_deletion),
        )
        .route(
            "/workspace/{workspace_id}/member_invitation/{user_id}",
            patch(member::toggle_invitation),
        )
        .route(
            "/workspace/{workspace_id}/delete_member/{user_id}",
            delete(member::delete_member),
        )
        // invitation
        .route(
            "/workspace/{workspace_id}/send_invitation/{email}",
            post(invitation::send_invitation),
        )
        .route("/my_invitations", get(invitation::get_my_invitations))
        .route(
            "/workspace/{workspace_id}/invitations",
            get(invitation::get_workspace_invitations),
        )
        .route(
            "/accept_invitation/{invitation_id}",
            post(invitation::accept_invitation),
        )
        .route(
            "/delete_invitation/{invitation_id}",
            delete(invitation::decline_invitation),
        )
        .route(
            "/workspace/{workspace_id}/delete_invitation/{invitation_id}",
            delete(invitation::cancel_invitation),
        )
        // board
        .route("/workspace/{workspace_id}/boards", get(board::get_boards))
        .route("/workspace/{workspace_id}/board", post(board::create_board))
        .route(
            "/workspace/{workspace_id}/board/{board_id}",
            put(board::update_board)
                .patch(board::patch_board)
                .delete(board::delete_board),
        )
        .route("/board/{board_id}", get(board::get_board))
        // list
        .route("/board/{board_id}/lists", get(board_list::get_lists))
        .route("/board/{board_id}/list", post(board_list::create_list))
        .route(
            "/board/{board_id}/list/{list_id}",
            get(board_list::get_list),
        )
        .route("/list/{list_id}/name", patch(board_list::rename_list))
        .route("/list/{list_id}/position", patch(board_list::move_list))
        .route("/list/{list_id}", delete(board_list::delete_list))
        // card
        .route("/list/{list_id}/cards", get(card::get_cards))
        .route("/list/{list_id}/card", post(card::create_card))
        .route(
            "/list/{list_id}/card/{card_id}",
            get(card::get_card)
                .put(card::update_card)
                .patch(card::patch_card)
                .delete(card::delete_card),
        )
        .route(
            "/list/{list_id}/card/{card_id}/position",
            patch(card::move_card),
        )
        // label
        .route("/card/{card_id}/labels", get(label::get_labels))
        .route("/card/{card_id}/label", post(label::create_label))
        .route(
            "/card/{card_id}/label/{label_id}",
            put(label::update_label)
                .patch(label::patch_label)
                .delete(label::delete_label),
        )
        // assignee
        .route("/card/{card_id}/assignees", get(assignee::get_assignees))
        .route("/card/{card_id}/assignee", post(assignee::assign_user))
        .route(
            "/card/{card_id}/assignee/{user_id}",
            delete(assignee::unassign_user),
        )
        // notification
        .route(
            "/my_notifications",
            get(notification::get_my_notifications)
                .patch(notification::mark_all_notifications_read)
                .delete(notification::delete_my_notifications),
        )
        .route(
            "/notification/{notification_id}",
            patch(notification::mark_notification_read).delete(notification::delete_notification),
        )
        // activity
        .route(
            "/board/{board_id}/activities_history",
            get(activity::get_activities).delete(activity::clear_activities),
        )
        .route("/board/{board_id}/activity", post(activity::create_activity))
        .route(
            "/board/{board_id}/activity/{activity_id}",
            delete(activity::delete_activity),
        )
}
