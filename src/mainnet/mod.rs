//! Main Chain Contract Wrappers
//!
//! Typed wrappers for the IMA contracts deployed on the main chain:
//!
//! - `deposit_box_eth` - native coin escrow
//! - `deposit_box_erc20` / `deposit_box_erc721` / `deposit_box_erc1155` - token escrows
//! - `community_pool` - prepaid exit-gas balances
//! - `linker` - schain connection management
//! - `message_proxy` - outgoing message queries

pub mod community_pool;
pub mod deposit_box_erc1155;
pub mod deposit_box_erc20;
pub mod deposit_box_erc721;
pub mod deposit_box_eth;
pub mod linker;
pub mod message_proxy;

pub use community_pool::CommunityPool;
pub use deposit_box_erc1155::DepositBoxErc1155;
pub use deposit_box_erc20::DepositBoxErc20;
pub use deposit_box_erc721::DepositBoxErc721;
pub use deposit_box_eth::DepositBoxEth;
pub use linker::Linker;
pub use message_proxy::MessageProxyForMainnet;
