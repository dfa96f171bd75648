//! Definitions of the Solidity interfaces the deploy steps bind to

use alloy::{network::Ethereum, providers::DynProvider, sol};

sol! {
    /// The staking surface of the `StakedTokenV2Rev3` implementation
    /// sitting behind the StakedAave proxy
    #[sol(rpc)]
    interface IStakedTokenV2Rev3 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);

        function REVISION() external view returns (uint256);
        function STAKED_TOKEN() external view returns (address);
        function REWARD_TOKEN() external view returns (address);
        function COOLDOWN_SECONDS() external view returns (uint256);
        function UNSTAKE_WINDOW() external view returns (uint256);

        function stake(address onBehalfOf, uint256 amount) external;
        function redeem(address to, uint256 amount) external;
        function cooldown() external;
        function claimRewards(address to, uint256 amount) external;
        function stakersCooldowns(address staker) external view returns (uint256);
        function getTotalRewardsBalance(address staker) external view returns (uint256);
    }
}

pub use IStakedTokenV2Rev3::IStakedTokenV2Rev3Instance;

/// A `StakedTokenV2Rev3` handle over a signing provider
pub type StakedTokenV2Rev3 = IStakedTokenV2Rev3Instance<DynProvider, Ethereum>;
