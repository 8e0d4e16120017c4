use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Tests random sequences of card creates, moves and deletes across several lists.
///
/// Verifies after every step that each list holds exactly positions 1..=card_nb, and
/// that rejected moves leave the board untouched.
///
/// Expected: positions stay dense for every seed
#[tokio::test]
async fn random_operations_keep_cards_dense() -> Result<(), AppError> {
    const LISTS: usize = 3;
    const STEPS: usize = 60;

    for seed in 0..4u64 {
        let test = TestBuilder::new()
            .with_board_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
        let lists = factory::helpers::create_lists(db, board.id, LISTS).await?;
        let list_ids: Vec<i32> = lists.iter().map(|l| l.id).collect();
        let repo = CardRepository::new(db);

        for step in 0..STEPS {
            let list_id = list_ids[rng.random_range(0..LISTS)];
            let cards = repo.get_by_list(list_id).await?;

            match rng.random_range(0..4) {
                0 => {
                    repo.create(card_params(list_id, &format!("card {}", step)))
                        .await?;
                }
                1 if !cards.is_empty() => {
                    let card = &cards[rng.random_range(0..cards.len())];
                    assert!(repo.delete(card.id).await?);
                }
                _ if !cards.is_empty() => {
                    let card = &cards[rng.random_range(0..cards.len())];
                    let target_list = list_ids[rng.random_range(0..LISTS)];
                    let target_len = repo.get_by_list(target_list).await?.len() as i32;
                    let max = if target_list == list_id {
                        target_len
                    } else {
                        target_len + 1
                    };
                    let position = rng.random_range(0..=max + 1);

                    let result = repo.move_to(card.id, target_list, position).await;
                    if position >= 1 && position <= max {
                        let (moved, _) = result?.unwrap();
                        assert_eq!(moved.list_id, target_list);
                        assert_eq!(moved.position, position);
                    } else {
                        assert!(matches!(
                            result,
                            Err(AppError::PositionErr(PositionError::OutOfRange { .. }))
                        ));
                    }
                }
                _ => {}
            }

            for id in &list_ids {
                ordered_ids(db, *id).await?;
            }
        }
    }

    Ok(())
}
