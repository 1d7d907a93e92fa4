//! IMA contract ABI definitions
//!
//! Uses alloy's sol! macro to generate type-safe bindings for the Interchain
//! Messaging Agreement contracts: deposit boxes, community pool, linker and
//! message proxy on the main chain; token managers, token manager linker and
//! community locker on each schain; plus the token standards the bridge
//! moves.
//!
//! Write methods are encoded with `SolCall::abi_encode` and submitted through
//! the transaction submitter; view methods are read through the `#[sol(rpc)]`
//! instances.

#![allow(clippy::too_many_arguments)]

use alloy::sol;

sol! {
    // ========================================================================
    // Main chain: deposit boxes
    // ========================================================================

    /// Escrows native coin deposited towards a schain.
    #[sol(rpc)]
    contract DepositBoxEth {
        /// Deposit native coin for bridging to a schain
        function deposit(string memory schainName) external payable;

        /// Retrieve escrowed coin released by an exit from the schain
        function getMyEth() external;

        /// Total amount locked towards a schain
        function transferredAmount(bytes32 schainHash) external view returns (uint256);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Escrows ERC20 tokens deposited towards a schain.
    #[sol(rpc)]
    contract DepositBoxERC20 {
        /// Deposit ERC20 tokens for bridging (requires prior approval)
        function depositERC20(string memory schainName, address erc20OnMainnet, uint256 amount) external;

        /// Whitelist a main-chain token for a schain (owner only)
        function addERC20TokenByOwner(string memory schainName, address erc20OnMainnet) external;

        /// Whether a token is whitelisted for a schain
        function getSchainToERC20(string memory schainName, address erc20OnMainnet) external view returns (bool);

        /// Number of whitelisted tokens for a schain
        function getSchainToAllERC20Length(string memory schainName) external view returns (uint256);

        /// Page through whitelisted tokens for a schain
        function getSchainToAllERC20(string memory schainName, uint256 from, uint256 to) external view returns (address[] memory);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Escrows ERC721 tokens deposited towards a schain.
    #[sol(rpc)]
    contract DepositBoxERC721 {
        function depositERC721(string memory schainName, address erc721OnMainnet, uint256 tokenId) external;
        function addERC721TokenByOwner(string memory schainName, address erc721OnMainnet) external;
        function getSchainToERC721(string memory schainName, address erc721OnMainnet) external view returns (bool);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Escrows ERC1155 tokens deposited towards a schain.
    #[sol(rpc)]
    contract DepositBoxERC1155 {
        function depositERC1155(string memory schainName, address erc1155OnMainnet, uint256 id, uint256 amount) external;
        function depositERC1155Batch(string memory schainName, address erc1155OnMainnet, uint256[] memory ids, uint256[] memory amounts) external;
        function addERC1155TokenByOwner(string memory schainName, address erc1155OnMainnet) external;
        function getSchainToERC1155(string memory schainName, address erc1155OnMainnet) external view returns (bool);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    // ========================================================================
    // Main chain: community pool, linker, message proxy
    // ========================================================================

    /// Per-user prepaid gas reimbursement balances, per schain.
    #[sol(rpc)]
    contract CommunityPool {
        /// Prepay exit gas for a user on a schain
        function rechargeUserWallet(string memory schainName, address user) external payable;

        /// Withdraw unspent prepaid gas
        function withdrawFunds(string memory schainName, uint256 amount) external;

        /// Current prepaid balance for a user on a schain
        function getBalance(address user, string memory schainName) external view returns (uint256);

        /// Minimum gas the pool reimburses per exit message
        function minTransactionGas() external view returns (uint256);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Connects schains to the main-chain deposit boxes.
    #[sol(rpc)]
    contract Linker {
        /// Connect a schain, registering its token manager addresses
        function connectSchain(string memory schainName, address[] memory tokenManagerAddresses) external;

        /// Whether a schain is connected
        function hasSchain(string memory schainName) external view returns (bool);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Main-chain side of the message proxy pair.
    #[sol(rpc)]
    contract MessageProxyForMainnet {
        /// Whether a chain connection is registered on the proxy
        function isConnectedChain(string memory schainName) external view returns (bool);

        /// Messages sent towards a chain so far
        function getOutgoingMessagesCounter(string memory targetSchainName) external view returns (uint256);
    }

    // ========================================================================
    // Schain: token managers
    // ========================================================================

    /// Burns wrapped coin on the schain to release escrowed coin on mainnet.
    #[sol(rpc)]
    contract TokenManagerEth {
        /// Exit wrapped coin back to the main chain
        function exitToMain(uint256 amount) external;

        /// Address of the wrapped-coin ERC20 clone on this schain
        function ethErc20() external view returns (address);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Manages ERC20 clones and their exits on a schain.
    #[sol(rpc)]
    contract TokenManagerERC20 {
        /// Burn clone tokens to release the originals on the main chain
        function exitToMainERC20(address contractOnMainnet, uint256 amount) external;

        /// Move clone tokens to another schain
        function transferToSchainERC20(string memory targetSchainName, address contractOnMainnet, uint256 amount) external;

        /// Register an origin-token to clone mapping (owner only)
        function addERC20TokenByOwner(string memory originChainName, address erc20OnMainChain, address erc20OnSchain) external;

        /// Resolve the clone deployed for an origin token (zero if none)
        function clonesErc20(bytes32 originChainHash, address originTokenAddress) external view returns (address);

        /// Whether clones deploy automatically on first transfer
        function automaticDeploy() external view returns (bool);
        function enableAutomaticDeploy() external;
        function disableAutomaticDeploy() external;

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Manages ERC721 clones and their exits on a schain.
    #[sol(rpc)]
    contract TokenManagerERC721 {
        function exitToMainERC721(address contractOnMainnet, uint256 tokenId) external;
        function transferToSchainERC721(string memory targetSchainName, address contractOnMainnet, uint256 tokenId) external;
        function addERC721TokenByOwner(string memory originChainName, address erc721OnMainChain, address erc721OnSchain) external;
        function clonesErc721(bytes32 originChainHash, address originTokenAddress) external view returns (address);

        function automaticDeploy() external view returns (bool);
        function enableAutomaticDeploy() external;
        function disableAutomaticDeploy() external;

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Manages ERC1155 clones and their exits on a schain.
    #[sol(rpc)]
    contract TokenManagerERC1155 {
        function exitToMainERC1155(address contractOnMainnet, uint256 id, uint256 amount) external;
        function exitToMainERC1155Batch(address contractOnMainnet, uint256[] memory ids, uint256[] memory amounts) external;
        function transferToSchainERC1155(string memory targetSchainName, address contractOnMainnet, uint256 id, uint256 amount) external;
        function transferToSchainERC1155Batch(string memory targetSchainName, address contractOnMainnet, uint256[] memory ids, uint256[] memory amounts) external;
        function addERC1155TokenByOwner(string memory originChainName, address erc1155OnMainChain, address erc1155OnSchain) external;
        function clonesErc1155(bytes32 originChainHash, address originTokenAddress) external view returns (address);

        function automaticDeploy() external view returns (bool);
        function enableAutomaticDeploy() external;
        function disableAutomaticDeploy() external;

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Connects this schain's token managers to other schains.
    #[sol(rpc)]
    contract TokenManagerLinker {
        /// Connect another schain for schain-to-schain transfers
        function connectSchain(string memory schainName) external;

        /// Disconnect a schain
        function disconnectSchain(string memory schainName) external;

        /// Whether another schain is connected
        function hasSchain(string memory schainName) external view returns (bool);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    /// Rate limiting for exit messages on a schain.
    #[sol(rpc)]
    contract CommunityLocker {
        /// Set the minimum delay between exit messages per user (constant-setter role)
        function setTimeLimitPerMessage(string memory chainName, uint256 newTimeLimit) external;

        /// Current delay between exit messages for a chain
        function timeLimitPerMessage(bytes32 chainHash) external view returns (uint256);

        function grantRole(bytes32 role, address account) external;
        function hasRole(bytes32 role, address account) external view returns (bool);
    }

    // ========================================================================
    // Token standards
    // ========================================================================

    /// Standard ERC20 interface (also covers the wrapped-coin clone)
    #[sol(rpc)]
    contract ERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);

        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }

    /// Standard ERC721 interface
    #[sol(rpc)]
    contract ERC721 {
        function ownerOf(uint256 tokenId) external view returns (address);
        function getApproved(uint256 tokenId) external view returns (address);
        function approve(address to, uint256 tokenId) external;

        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
    }

    /// Standard ERC1155 interface
    #[sol(rpc)]
    contract ERC1155 {
        function balanceOf(address account, uint256 id) external view returns (uint256);
        function balanceOfBatch(address[] memory accounts, uint256[] memory ids) external view returns (uint256[] memory);
        function setApprovalForAll(address operator, bool approved) external;
        function isApprovedForAll(address account, address operator) external view returns (bool);

        event TransferSingle(address indexed operator, address indexed from, address indexed to, uint256 id, uint256 value);
    }
}
