//! `cinder simulate`: scripted burns against in-memory collaborators.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use cinder_burn::{BurnController, BurnableToken, FixedRewards};
use cinder_metadata::{token_uri, MetadataRenderer, SvgMetadataRenderer};
use cinder_nullables::{NullChain, NullToken};
use cinder_types::AccountId;
use cinder_utils::format_duration;
use tracing::info;

use super::describe_flags;
use crate::config::CinderConfig;

/// Controller spender account used by simulations.
const CONTROLLER_ACCOUNT: u64 = 0xC1DE;

#[derive(Clone, Debug)]
pub struct SimulateOptions {
    pub burns: u64,
    /// Whole tokens per burn.
    pub amount: u64,
    /// Blocks between consecutive burns.
    pub block_gap: u64,
    /// Print each certificate's metadata document.
    pub metadata: bool,
    /// Print each certificate's `data:` token URI.
    pub token_uri: bool,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            burns: 5,
            amount: 1,
            block_gap: 1,
            metadata: false,
            token_uri: false,
        }
    }
}

pub fn run(config: &CinderConfig, options: &SimulateOptions) -> Result<String> {
    let burner = config.burner()?;
    let controller_account = AccountId::from_low_u64(CONTROLLER_ACCOUNT);
    let params = &config.params;
    let per_burn = params.raw_of(u128::from(options.amount));
    let funded = params.raw_of(u128::from(config.initial_balance));

    let mut token = NullToken::new();
    token.mint(&burner, funded);
    token.approve(&burner, &controller_account, funded);

    let rewards = FixedRewards::new(params.apy, params.term);
    let mut controller = BurnController::new(controller_account, token, rewards);
    let chain = NullChain::new(
        config.genesis_height,
        config.genesis_timestamp,
        config.block_time_secs,
    );
    let renderer = SvgMetadataRenderer::new(params.clone());

    info!(
        burns = options.burns,
        amount = options.amount,
        %burner,
        "starting simulation"
    );

    let mut out = String::new();
    writeln!(
        out,
        "{} ({}): burner {burner}, balance {} whole",
        params.name, params.symbol, config.initial_balance
    )?;

    let start = chain.current();
    for i in 0..options.burns {
        if i > 0 {
            chain.advance(options.block_gap);
        }
        let block = chain.current();
        let ordinal = match controller.burn(burner, per_burn, block) {
            Ok(ordinal) => ordinal,
            Err(err) => {
                writeln!(out, "burn {} at block {} rejected: {err}", i + 1, block.height)?;
                break;
            }
        };
        let word = controller.record_of(ordinal)?;
        let record = word.decode();
        writeln!(
            out,
            "{ordinal} block {} score {:>5} [{}] {word}",
            block.height,
            record.rarity_score,
            describe_flags(record.flags()),
        )?;
        if options.metadata {
            let metadata = renderer.render(ordinal, &record);
            let json = serde_json::to_string_pretty(&metadata)
                .context("cannot encode metadata as JSON")?;
            writeln!(out, "{json}")?;
        }
        if options.token_uri {
            writeln!(out, "{}", token_uri(&renderer, ordinal, &record)?)?;
        }
    }

    let elapsed = start.timestamp.elapsed_since(chain.current().timestamp);
    writeln!(
        out,
        "minted {} certificates, burned {} whole, {} left, over {}",
        controller.total_supply(),
        params.whole_of(controller.total_burned()),
        params.whole_of(controller.token().balance_of(&burner)),
        format_duration(elapsed),
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_simulation_mints_five() {
        let out = run(&CinderConfig::default(), &SimulateOptions::default()).unwrap();
        assert!(out.contains("#1 block 1 score"));
        assert!(out.contains("#5 block 5"));
        assert!(out.contains("minted 5 certificates, burned 5 whole, 995 left, over 48s"));
    }

    #[test]
    fn running_out_of_balance_stops_the_run() {
        let config = CinderConfig {
            initial_balance: 2,
            ..CinderConfig::default()
        };
        let options = SimulateOptions {
            burns: 4,
            ..SimulateOptions::default()
        };
        let out = run(&config, &options).unwrap();
        assert!(out.contains("burn 3 at block 3 rejected: insufficient allowance"));
        assert!(out.contains("minted 2 certificates"));
    }

    #[test]
    fn amounts_follow_configured_decimals() {
        let mut config = CinderConfig::default();
        config.params.decimals = 6;
        let options = SimulateOptions {
            burns: 1,
            metadata: true,
            ..SimulateOptions::default()
        };
        let out = run(&config, &options).unwrap();
        assert!(out.contains("\"value\": \"1\""));
        assert!(out.contains("\"value\": \"1000000\""));
        assert!(out.contains("minted 1 certificates, burned 1 whole, 999 left"));
    }

    #[test]
    fn metadata_and_uri_are_printed_on_request() {
        let options = SimulateOptions {
            burns: 1,
            metadata: true,
            token_uri: true,
            ..SimulateOptions::default()
        };
        let out = run(&CinderConfig::default(), &options).unwrap();
        assert!(out.contains("\"trait_type\": \"Burned\""));
        assert!(out.contains("data:application/json;base64,"));
    }
}
