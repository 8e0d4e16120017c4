//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Counters are kept
//! consistent with the rows created: `create_list` bumps `board.list_nb`, `create_card`
//! bumps `board_list.card_nb`, so positions stay dense without going through the server.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let workspace = factory::workspace::create_workspace(&db, user.id).await?;
//! let board = factory::board::create_board(&db, workspace.id).await?;
//! let list = factory::board_list::create_list(&db, board.id).await?;
//! let card = factory::card::create_card(&db, list.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db, workspace.id, user.id)
//!     .can_invite(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `workspace` - Create workspaces together with the creator's membership
//! - `member` - Create workspace member entities
//! - `board` - Create board entities
//! - `board_list` - Create lists appended at the end of a board
//! - `card` - Create cards appended at the end of a list
//! - `helpers` - ID generation and multi-entity setups

pub mod board;
pub mod board_list;
pub mod card;
pub mod helpers;
pub mod member;
pub mod user;
pub mod workspace;

pub use board::create_board;
pub use board_list::create_list;
pub use card::create_card;
pub use member::create_member;
pub use user::create_user;
pub use workspace::create_workspace;
