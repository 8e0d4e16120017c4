use super::*;

/// Tests listing the members of a workspace.
///
/// Expected: Ok with the creator and the added member only
#[tokio::test]
async fn returns_members_of_workspace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    let other = factory::workspace::create_workspace(db, user.id).await?;
    factory::member::create_member(db, workspace.id, user.id).await?;

    let members = MemberRepository::new(db).get_by_workspace(workspace.id).await?;
    let mut user_ids: Vec<i32> = members.iter().map(|m| m.user_id).collect();
    user_ids.sort();

    assert_eq!(user_ids, vec![owner.id, user.id]);
    assert!(members.iter().all(|m| m.workspace_id == workspace.id));
    assert_eq!(
        MemberRepository::new(db).get_by_workspace(other.id).await?.len(),
        1
    );

    Ok(())
}
