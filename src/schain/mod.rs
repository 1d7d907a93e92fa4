//! Schain Contract Wrappers
//!
//! Typed wrappers for the IMA contracts deployed on each schain:
//!
//! - `token_manager_eth` - wrapped-coin exits
//! - `token_manager_erc20` / `token_manager_erc721` / `token_manager_erc1155` - clone managers
//! - `token_manager_linker` - schain-to-schain connection management
//! - `community_locker` - exit-message rate limiting

pub mod community_locker;
pub mod token_manager_erc1155;
pub mod token_manager_erc20;
pub mod token_manager_erc721;
pub mod token_manager_eth;
pub mod token_manager_linker;

pub use community_locker::CommunityLocker;
pub use token_manager_erc1155::TokenManagerErc1155;
pub use token_manager_erc20::TokenManagerErc20;
pub use token_manager_erc721::TokenManagerErc721;
pub use token_manager_eth::TokenManagerEth;
pub use token_manager_linker::TokenManagerLinker;
