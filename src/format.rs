//! Agent-facing summaries
//!
//! Output is plain text meant to be pasted into an agent's context. Values
//! that could not be resolved render as `unknown`.

use std::fmt::Write;

use crate::pipeline::erc20::EnrichedTransfer;
use crate::pipeline::uniswap_v3::{EnrichedSwap, SwapLeg};
use crate::pipeline::RenderContext;

/// Summary template for transfers.
///
/// Placeholders are `{{name}}`; substitution is a single pass, so values that
/// themselves contain `{{...}}` are left as they are.
pub const TRANSFERS_TEMPLATE: &str =
    "{{agentName}} knows the following onchain transfers for block on {{chain}} {{blockNumber}}: {{transfers}}";

/// Separator between transfer lines.
pub const TRANSFER_SEPARATOR: &str = " | ";

const UNKNOWN: &str = "unknown";

/// Substitute `{{name}}` placeholders in `template`.
///
/// Unknown placeholders and unterminated `{{` are copied through unchanged.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after_open[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

/// One transfer as `<amount> <symbol> transferred from <from> to <to> for a total amount USD of <usd>`.
pub fn transfer_line(transfer: &EnrichedTransfer) -> String {
    format!(
        "{} {} transferred from {} to {} for a total amount USD of {}",
        transfer.parsed_amount, transfer.token.symbol, transfer.from, transfer.to, transfer.amount_usd
    )
}

/// Render the transfer summary.
pub fn format_transfers(context: &RenderContext<'_>, transfers: &[EnrichedTransfer]) -> String {
    let lines = transfers
        .iter()
        .map(transfer_line)
        .collect::<Vec<_>>()
        .join(TRANSFER_SEPARATOR);

    let chain = context.chain.to_string();
    let block_number = context.block_number.to_string();

    render_template(
        TRANSFERS_TEMPLATE,
        &[
            ("agentName", context.agent_name),
            ("chain", &chain),
            ("blockNumber", &block_number),
            ("transfers", &lines),
        ],
    )
}

fn symbol_or_unknown(leg: &SwapLeg) -> &str {
    leg.symbol().unwrap_or(UNKNOWN)
}

/// One swap as a five-line block.
pub fn swap_block(swap: &EnrichedSwap) -> String {
    let amount = |leg: &SwapLeg| leg.parsed_amount.clone().unwrap_or_else(|| UNKNOWN.to_string());
    let usd = |leg: &SwapLeg| {
        leg.amount_usd
            .map(|value| value.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    };

    let mut block = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        block,
        "- {} -> {}",
        symbol_or_unknown(swap.input_leg()),
        symbol_or_unknown(swap.output_leg())
    );
    for leg in [&swap.leg0, &swap.leg1] {
        let _ = writeln!(block, "- Amount: {} {}", amount(leg), symbol_or_unknown(leg));
    }
    let _ = writeln!(block, "- Price: {} USD", usd(&swap.leg0));
    let _ = write!(block, "- Price: {} USD", usd(&swap.leg1));
    block
}

/// Render the swap summary.
pub fn format_swaps(context: &RenderContext<'_>, swaps: &[EnrichedSwap]) -> String {
    let blocks = swaps.iter().map(swap_block).collect::<Vec<_>>().join("\n\n");

    format!(
        "{} is aware of {} swaps in the block {} on chain {}. Here are the details:\n{}",
        context.agent_name,
        swaps.len(),
        context.block_number,
        context.chain,
        blocks
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_chains::NamedChain;
    use alloy_primitives::aliases::{I24, U160};
    use alloy_primitives::{address, Address, I256, U256};

    use crate::pipeline::uniswap_v3::SwapSide;
    use crate::types::tokens::{TokenDecimals, TokenMetadata, TokenPrice, UsdValue};

    fn context() -> RenderContext<'static> {
        RenderContext {
            agent_name: "BlockJuic3",
            chain: NamedChain::Base,
            block_number: 23_758_531,
        }
    }

    #[test]
    fn test_render_template_single_pass() {
        let rendered = render_template(
            "{{a}} and {{b}} and {{missing}} and {{",
            &[("a", "{{b}}"), ("b", "2")],
        );
        assert_eq!(rendered, "{{b}} and 2 and {{missing}} and {{");
    }

    #[test]
    fn test_format_transfers() {
        let transfer = EnrichedTransfer {
            from: address!("4752ba5DBc23f44D87826276BF6Fd6b1C372aD24"),
            to: address!("566e8b2606CF26335Bf476E4476e5F634adD829C"),
            amount: U256::from(50_000_000_000_000_000u64),
            token: TokenMetadata {
                address: address!("4200000000000000000000000000000000000006"),
                symbol: "WETH".to_string(),
                decimals: TokenDecimals::STANDARD,
                price: TokenPrice::new(1800.0),
            },
            parsed_amount: "0.05".to_string(),
            amount_usd: UsdValue::new(90.0),
        };

        let summary = format_transfers(&context(), &[transfer.clone(), transfer]);
        assert_eq!(
            summary,
            "BlockJuic3 knows the following onchain transfers for block on base 23758531: \
             0.05 WETH transferred from 0x4752ba5DBc23f44D87826276BF6Fd6b1C372aD24 to \
             0x566e8b2606CF26335Bf476E4476e5F634adD829C for a total amount USD of 90 | \
             0.05 WETH transferred from 0x4752ba5DBc23f44D87826276BF6Fd6b1C372aD24 to \
             0x566e8b2606CF26335Bf476E4476e5F634adD829C for a total amount USD of 90"
        );
    }

    #[test]
    fn test_format_transfers_empty() {
        assert_eq!(
            format_transfers(&context(), &[]),
            "BlockJuic3 knows the following onchain transfers for block on base 23758531: "
        );
    }

    #[test]
    fn test_swap_block_with_unknown_tokens() {
        let leg = |amount: i64| SwapLeg {
            token: None,
            amount: I256::try_from(amount).unwrap(),
            parsed_amount: None,
            amount_usd: None,
        };
        let swap = EnrichedSwap {
            pool: Address::ZERO,
            sender: Address::ZERO,
            recipient: Address::ZERO,
            sqrt_price_x96: U160::ZERO,
            liquidity: 0,
            tick: I24::ZERO,
            leg0: leg(-1),
            leg1: leg(1),
            input: SwapSide::Token0,
        };

        assert_eq!(
            swap_block(&swap),
            "- unknown -> unknown\n\
             - Amount: unknown unknown\n\
             - Amount: unknown unknown\n\
             - Price: unknown USD\n\
             - Price: unknown USD"
        );
    }

    #[test]
    fn test_format_swaps_header() {
        let summary = format_swaps(&context(), &[]);
        assert_eq!(
            summary,
            "BlockJuic3 is aware of 0 swaps in the block 23758531 on chain base. Here are the details:\n"
        );
    }
}
