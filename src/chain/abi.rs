// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Contract interfaces read through multicall

use alloy_sol_types::sol;

sol! {
    /// ERC-20 metadata getters
    interface IERC20Metadata {
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }

    /// The Uniswap V3 pool immutables naming its two tokens
    interface IUniswapV3PoolTokens {
        function token0() external view returns (address);
        function token1() external view returns (address);
    }

    /// Multicall3 batching contract
    interface IMulticall3 {
        struct Call3 {
            address target;
            bool allowFailure;
            bytes callData;
        }

        struct Result {
            bool success;
            bytes returnData;
        }

        function aggregate3(Call3[] calldata calls) external payable returns (Result[] memory returnData);
    }
}
